//! Linear range mapping
//!
//! Integer re-map with the same rounding as the host `pins.map` primitive
//! followed by a PWM write: the exact quotient truncated toward zero.

/// Re-map `value` from `[from_low, from_high]` onto `[to_low, to_high]`
///
/// The input is not clamped, so values outside the source range extrapolate.
/// Inverted ranges (`from_low > from_high` or `to_low > to_high`) are allowed.
/// A degenerate source range returns `to_low`.
///
/// # Examples
///
/// ```
/// use gigo_future::libraries::mapping::map_range;
///
/// assert_eq!(map_range(255, 0, 255, 0, 1023), 1023);
/// assert_eq!(map_range(100, 0, 255, 0, 1023), 401);
/// ```
#[inline]
pub fn map_range(value: i32, from_low: i32, from_high: i32, to_low: i32, to_high: i32) -> i32 {
    let span_in = i64::from(from_high) - i64::from(from_low);
    if span_in == 0 {
        return to_low;
    }
    let span_out = i64::from(to_high) - i64::from(to_low);
    let offset = (i64::from(value) - i64::from(from_low)) * span_out / span_in;
    (offset + i64::from(to_low)).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
