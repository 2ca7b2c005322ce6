use std::env;
use std::sync::LazyLock;

macro_rules! lazy_env_var {
    ($name:ident, $default:expr) => {
        pub static $name: LazyLock<String> = LazyLock::new(|| {
            let var_name = stringify!($name);
            env::var(var_name).unwrap_or_else(|_| $default.to_string())
        });
    };
}

lazy_env_var!(MARATHON_LANG, "en");
lazy_env_var!(MARATHON_LOCALES_DIR, "locales");
lazy_env_var!(RUST_LOG, "info");

pub const EVENT_NAME: &str = "CMU Marathon";

pub const COUPON_CODE: &str = "CMU2025";
pub const COUPON_DISCOUNT_PERCENT: u32 = 30;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 12;
