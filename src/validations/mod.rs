pub mod coupon;
pub mod email;
pub mod name;
pub mod password;
pub mod terms;
