use crate::{
    constants::{COUPON_CODE, COUPON_DISCOUNT_PERCENT},
    models::registration_model::Plan,
};

pub fn is_coupon_match(coupon_code: &str) -> bool {
    coupon_code.trim() == COUPON_CODE
}

pub fn apply_discount(amount: u32) -> u32 {
    amount * (100 - COUPON_DISCOUNT_PERCENT) / 100
}

/// Total payment in THB for a plan, discounted only when the coupon box is
/// checked and the code matches.
pub fn calculate_total(plan: Plan, have_coupon: bool, coupon_code: &str) -> u32 {
    let base = plan.base_price();
    if have_coupon && is_coupon_match(coupon_code) {
        apply_discount(base)
    } else {
        base
    }
}

/// Thousands-separated amount, `1500` -> `1,500`.
pub fn format_thb(amount: u32) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}
