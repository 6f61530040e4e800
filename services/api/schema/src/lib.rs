pub mod user_internal;
pub mod work_order;
