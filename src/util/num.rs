/// Checks two floating-point numbers for equality within machine epsilon.
///
/// Exact `==` comparison of `f64` values is unreliable after arithmetic, so
/// stored values and divisors are compared with this function instead. The
/// undefined sentinel (`f64::NAN`) never compares equal to anything, including
/// itself.
///
/// # Parameters
/// - `a`: First value.
/// - `b`: Second value.
///
/// # Returns
/// `true` if the values differ by less than `f64::EPSILON`.
///
/// # Example
/// ```
/// use varith::util::num::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(!approx_eq(f64::NAN, f64::NAN));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::EPSILON
}
