//! Binary (Stein) GCD reduction.
//!
//! Stein's algorithm replaces division with shifts and subtraction: factors
//! of two are stripped or carried explicitly, and the odd-odd case reduces
//! by the halved difference. It computes the same values as [`crate::euclid`]
//! for every accepted argument set.

use std::time::Duration;

use crate::GcdError;

fn validate(a: i32, b: i32) -> Result<(), GcdError> {
    if a == i32::MIN || b == i32::MIN {
        return Err(GcdError::OutOfRange {
            description: "one or two numbers are the minimum representable value".to_string(),
        });
    }
    if a == 0 && b == 0 {
        return Err(GcdError::InvalidArgument {
            description: "numbers cannot all be zero".to_string(),
        });
    }
    Ok(())
}

/// Recursive binary reduction. Depth is bounded by `log2(max(|a|, |b|))`,
/// so 32-bit inputs stay far from any stack limit.
fn binary_gcd(a: i32, b: i32) -> i32 {
    let a = a.abs();
    let b = b.abs();

    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }
    if a == b {
        return a;
    }

    match (a & 1 == 0, b & 1 == 0) {
        // both even: 2 is a common factor, strip it and carry it out
        (true, true) => binary_gcd(a >> 1, b >> 1) << 1,
        // exactly one even: 2 cannot divide the odd value, drop it
        (true, false) => binary_gcd(a >> 1, b),
        (false, true) => binary_gcd(a, b >> 1),
        // both odd: the difference is even, halve it and keep the smaller
        (false, false) => {
            if a > b {
                binary_gcd((a - b) >> 1, b)
            } else {
                binary_gcd((b - a) >> 1, a)
            }
        }
    }
}

/// Computes the greatest common divisor (GCD) of two signed integers using
/// Stein's binary algorithm.
///
/// The accepted inputs and the result are identical to [`crate::euclid::gcd`];
/// only the rejection messages differ.
///
/// # Errors
/// Returns [`GcdError::OutOfRange`] if either number is `i32::MIN` (one
/// combined message for both positions) and [`GcdError::InvalidArgument`]
/// if both numbers are zero.
pub fn gcd(a: i32, b: i32) -> Result<i32, GcdError> {
    validate(a, b)?;
    Ok(binary_gcd(a, b))
}

/// Computes the GCD of three signed integers by folding [`gcd`] across them.
pub fn gcd_three(a: i32, b: i32, c: i32) -> Result<i32, GcdError> {
    gcd_many(a, b, &[c])
}

/// Computes the GCD of two leading values and any number of extras, using
/// the binary pairwise reduction as the fold combinator.
///
/// Fold strategy and rejections match [`crate::euclid::gcd_many`].
pub fn gcd_many(a: i32, b: i32, extras: &[i32]) -> Result<i32, GcdError> {
    match crate::fold_pairwise(a, b, extras, gcd)? {
        Some(value) => Ok(value),
        None => Err(GcdError::InvalidArgument {
            description: "numbers cannot all be zero".to_string(),
        }),
    }
}

/// Computes [`gcd`] and reports how long the reduction took.
///
/// Inputs are validated before the timer starts; the measured window covers
/// only the recursive reduction.
pub fn gcd_timed(a: i32, b: i32) -> Result<(i32, Duration), GcdError> {
    validate(a, b)?;
    let (value, elapsed) = crate::measure(|| binary_gcd(a, b));
    log::trace!("binary gcd of 2 values took {elapsed:?}");
    Ok((value, elapsed))
}

/// Computes [`gcd_three`] and reports how long the computation took.
pub fn gcd_three_timed(a: i32, b: i32, c: i32) -> Result<(i32, Duration), GcdError> {
    gcd_many_timed(a, b, &[c])
}

/// Computes [`gcd_many`] and reports how long the computation took.
pub fn gcd_many_timed(a: i32, b: i32, extras: &[i32]) -> Result<(i32, Duration), GcdError> {
    let (folded, elapsed) = crate::measure(|| gcd_many(a, b, extras));
    let value = folded?;
    log::trace!("binary gcd of {} values took {elapsed:?}", 2 + extras.len());
    Ok((value, elapsed))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn computes_known_pairs() {
        assert_eq!(gcd(48, 18), Ok(6));
        assert_eq!(gcd(17, 13), Ok(1));
        assert_eq!(gcd(40, 48), Ok(8));
    }

    #[test]
    fn covers_every_parity_branch() {
        // both even
        assert_eq!(gcd(12, 20), Ok(4));
        // one even, one odd
        assert_eq!(gcd(12, 15), Ok(3));
        assert_eq!(gcd(15, 12), Ok(3));
        // both odd
        assert_eq!(gcd(21, 9), Ok(3));
        // equal values short-circuit
        assert_eq!(gcd(35, 35), Ok(35));
    }

    #[test]
    fn zero_is_identity() {
        assert_eq!(gcd(0, 5), Ok(5));
        assert_eq!(gcd(-9, 0), Ok(9));
    }

    #[test]
    fn result_ignores_signs() {
        assert_eq!(gcd(-48, 18), Ok(6));
        assert_eq!(gcd(48, -18), Ok(6));
    }

    #[test]
    fn rejects_minimum_with_combined_message() {
        for (a, b) in [(i32::MIN, 7), (7, i32::MIN), (i32::MIN, i32::MIN)] {
            assert!(matches!(gcd(a, b), Err(GcdError::OutOfRange { .. })));
        }
    }

    #[test]
    fn rejects_all_zero_pair() {
        assert!(matches!(gcd(0, 0), Err(GcdError::InvalidArgument { .. })));
    }

    #[test]
    fn variadic_matches_euclidean_fold() {
        assert_eq!(gcd_many(48, 36, &[24, 12]), Ok(12));
        assert_eq!(gcd_three(12, 18, 24), Ok(6));
        assert!(matches!(
            gcd_many(0, 0, &[0]),
            Err(GcdError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn timed_form_matches_untimed_value() {
        let (value, _elapsed) = gcd_timed(123_456, 789_012).unwrap();
        assert_eq!(Ok(value), gcd(123_456, 789_012));
    }

    #[test]
    fn timed_form_propagates_validation_errors() {
        assert!(matches!(
            gcd_timed(0, 0),
            Err(GcdError::InvalidArgument { .. })
        ));
        assert!(matches!(
            gcd_three_timed(1, 2, i32::MIN),
            Err(GcdError::OutOfRange { .. })
        ));
    }
}
