mod helpers;
mod user_test;
mod work_order_test;
