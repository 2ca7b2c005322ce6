use validator::ValidationError;

use crate::utils::{locale_utils::Messages, validation_utils::add_error};

/// The code is only required while the coupon box is checked. A code that
/// does not match is not an error, it just earns no discount.
pub fn validate_coupon_code(
    have_coupon: bool,
    coupon_code: &str,
    messages: &Messages,
) -> Result<(), ValidationError> {
    if have_coupon && coupon_code.trim().is_empty() {
        return Err(add_error(
            "couponCode.invalid",
            messages.get_validation_message("couponCode.required", "Coupon code is required"),
            coupon_code,
        ));
    }
    Ok(())
}
