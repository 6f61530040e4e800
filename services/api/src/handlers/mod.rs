pub mod health;
pub mod user;
pub mod work_order;
