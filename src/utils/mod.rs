pub mod locale_utils;
pub mod pricing_utils;
pub mod validation_utils;
