use std::time::Duration;

/// `setTimeout` delay in milliseconds, saturating at the largest value the
/// browser accepts instead of wrapping.
#[inline]
pub fn timeout_ms(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}
