//! Remainder-based Euclidean GCD reduction.
//!
//! The classic algorithm: repeatedly replace `(a, b)` with `(b, a % b)`
//! until the second value reaches zero. Rust's `%` truncates toward zero
//! (the remainder keeps the dividend's sign), so negative inputs reduce
//! correctly and only the final absolute value is taken.

use std::time::Duration;

use crate::GcdError;

fn validate(a: i32, b: i32) -> Result<(), GcdError> {
    if a == i32::MIN {
        return Err(GcdError::OutOfRange {
            description: "the first number is the minimum representable value".to_string(),
        });
    }
    if b == i32::MIN {
        return Err(GcdError::OutOfRange {
            description: "the second number is the minimum representable value".to_string(),
        });
    }
    if a == 0 && b == 0 {
        return Err(GcdError::InvalidArgument {
            description: "all values cannot be zero".to_string(),
        });
    }
    Ok(())
}

fn remainder_gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a.abs()
}

/// Computes the greatest common divisor (GCD) of two signed integers.
///
/// This function implements the classic Euclidean algorithm. The result is
/// always positive for accepted inputs; signs are ignored.
///
/// # Errors
/// Returns [`GcdError::OutOfRange`] if either number is `i32::MIN`, naming
/// the offending argument, and [`GcdError::InvalidArgument`] if both numbers
/// are zero.
pub fn gcd(a: i32, b: i32) -> Result<i32, GcdError> {
    validate(a, b)?;
    Ok(remainder_gcd(a, b))
}

/// Computes the GCD of three signed integers by folding [`gcd`] across them.
pub fn gcd_three(a: i32, b: i32, c: i32) -> Result<i32, GcdError> {
    gcd_many(a, b, &[c])
}

/// Computes the GCD of two leading values and any number of extras.
///
/// The pairwise [`gcd`] is folded left to right across the whole sequence,
/// skipping zero-valued elements; the range check on each element happens
/// inside the pairwise calls. GCD is associative and commutative, so the
/// fold order does not affect the result.
///
/// # Errors
/// Returns [`GcdError::OutOfRange`] if any element is `i32::MIN` and
/// [`GcdError::InvalidArgument`] if every element is zero.
pub fn gcd_many(a: i32, b: i32, extras: &[i32]) -> Result<i32, GcdError> {
    match crate::fold_pairwise(a, b, extras, gcd)? {
        Some(value) => Ok(value),
        None => Err(GcdError::InvalidArgument {
            description: "all values cannot be zero".to_string(),
        }),
    }
}

/// Computes [`gcd`] and reports how long the reduction took.
///
/// Inputs are validated before the timer starts, so a rejected argument set
/// never produces a duration. The measured window covers only the remainder
/// loop itself.
pub fn gcd_timed(a: i32, b: i32) -> Result<(i32, Duration), GcdError> {
    validate(a, b)?;
    let (value, elapsed) = crate::measure(|| remainder_gcd(a, b));
    log::trace!("euclidean gcd of 2 values took {elapsed:?}");
    Ok((value, elapsed))
}

/// Computes [`gcd_three`] and reports how long the computation took.
pub fn gcd_three_timed(a: i32, b: i32, c: i32) -> Result<(i32, Duration), GcdError> {
    gcd_many_timed(a, b, &[c])
}

/// Computes [`gcd_many`] and reports how long the computation took.
///
/// Validation of the variadic form is interleaved with the fold, so the
/// timer wraps the fold as a whole; on a validation failure the error
/// propagates and no duration is returned.
pub fn gcd_many_timed(a: i32, b: i32, extras: &[i32]) -> Result<(i32, Duration), GcdError> {
    let (folded, elapsed) = crate::measure(|| gcd_many(a, b, extras));
    let value = folded?;
    log::trace!(
        "euclidean gcd of {} values took {elapsed:?}",
        2 + extras.len()
    );
    Ok((value, elapsed))
}
