//! Greatest common divisor routines for 32-bit signed integers.
//!
//! This crate computes the GCD of two or more `i32` values under two
//! interchangeable reductions:
//! - Remainder-based Euclidean reduction in [`euclid`].
//! - Binary shift-and-subtract (Stein) reduction in [`stein`].
//!
//! Both modules expose the same surface: a two-value form, a three-value
//! convenience form, a variadic form taking two leading values plus a slice
//! of extras, and a timed variant of each that reports the elapsed
//! computation time alongside the result.
//!
//! # Input domain
//! Inputs are signed, and the sign never affects the result. Two argument
//! sets are rejected up front:
//! - `i32::MIN`, whose magnitude cannot be represented after sign removal.
//! - An all-zero argument set, for which the GCD is undefined.

pub mod euclid;
pub mod stein;

use std::time::{Duration, Instant};

/// Errors that can occur while validating the inputs of a GCD computation.
///
/// Validation always runs before any arithmetic (and before the timer of a
/// timed variant starts), so a returned error means no computation took
/// place. Callers should match on the variant; the contained description is
/// informational only and differs between the Euclidean and binary entry
/// points for the same rejection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GcdError {
    /// An input equals `i32::MIN`. Its absolute value overflows a 32-bit
    /// integer, so the reduction cannot run on it.
    #[error("value out of range: {description}")]
    OutOfRange { description: String },
    /// Every input in the operation's full argument set is zero. The
    /// greatest common divisor of an all-zero set is undefined.
    #[error("invalid argument: {description}")]
    InvalidArgument { description: String },
}

/// Folds a pairwise GCD across the two leading values and the extras,
/// left to right.
///
/// Zero-valued elements are skipped since folding a GCD with zero is an
/// identity no-op. The accumulator is seeded at 0; `Ok(None)` means every
/// element was zero and the caller must reject the argument set.
pub(crate) fn fold_pairwise<F>(
    first: i32,
    second: i32,
    extras: &[i32],
    mut pair: F,
) -> Result<Option<i32>, GcdError>
where
    F: FnMut(i32, i32) -> Result<i32, GcdError>,
{
    let mut accumulator = 0;
    for &value in [first, second].iter().chain(extras.iter()) {
        if value == 0 {
            continue;
        }
        accumulator = pair(accumulator, value)?;
    }

    if accumulator == 0 {
        return Ok(None);
    }
    Ok(Some(accumulator))
}

/// Runs `computation` and returns its result together with the elapsed
/// wall-clock time, measured with the platform's monotonic clock.
///
/// The window covers only the closure itself; callers validate inputs
/// before calling this so rejected arguments never produce a duration.
pub(crate) fn measure<T>(computation: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = computation();
    (value, started.elapsed())
}
