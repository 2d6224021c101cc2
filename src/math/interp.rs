//! Scalar interpolation helpers.
//!
//! `lerp` is unclamped, so ratios outside `[0, 1]` extrapolate. `ilerp` is
//! its inverse and returns `0` when `start == end`; callers that need to tell
//! that case apart from a genuine `0` must check the range themselves.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use crate::types::TraceError;

/// Floating point scalars the interpolation helpers operate on.
pub trait Real:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const HALF: Self;

    fn min_of(self, other: Self) -> Self;
    fn max_of(self, other: Self) -> Self;
}

macro_rules! impl_real {
    ($($t:ty),*) => {
        $(
            impl Real for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const HALF: Self = 0.5;

                #[inline]
                fn min_of(self, other: Self) -> Self {
                    self.min(other)
                }

                #[inline]
                fn max_of(self, other: Self) -> Self {
                    self.max(other)
                }
            }
        )*
    };
}

impl_real!(f32, f64);

/// Clamp `value` into `[min, max]`.
#[inline]
pub fn clamp<T: Real>(min: T, max: T, value: T) -> T {
    value.min_of(max).max_of(min)
}

/// Linear interpolation, `ratio = 0` gives `start` and `ratio = 1` gives `end`.
#[inline]
pub fn lerp<T: Real>(start: T, end: T, ratio: T) -> T {
    ratio * (end - start) + start
}

/// [`lerp`] with the result clamped between `start` and `end`.
pub fn lerp_clamped<T: Real>(start: T, end: T, ratio: T) -> T {
    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    clamp(low, high, lerp(start, end, ratio))
}

/// Inverse of [`lerp`]: the ratio `value` sits at between `start` and `end`.
///
/// Returns `0` when `start == end`.
pub fn ilerp<T: Real>(start: T, end: T, value: T) -> T {
    if start == end {
        log::debug!(
            "ilerp: start equals end ({:?}), returning 0 for value {:?}",
            start,
            value
        );
        return T::ZERO;
    }
    (value - start) / (end - start)
}

/// [`ilerp`] clamped to `[0, 1]`.
pub fn ilerp_clamped<T: Real>(start: T, end: T, value: T) -> T {
    clamp(T::ZERO, T::ONE, ilerp(start, end, value))
}

/// Map `value` from the `from` range onto the `to` range.
pub fn remap<T: Real>(from_min: T, from_max: T, value: T, to_min: T, to_max: T) -> T {
    lerp(to_min, to_max, ilerp(from_min, from_max, value))
}

/// Value halfway between `min` and `max`.
#[inline]
pub fn mid<T: Real>(min: T, max: T) -> T {
    lerp(min, max, T::HALF)
}

/// Round to a number of digits after the decimal point.
pub fn round(value: f64, significant_digits: i32) -> Result<f64, TraceError> {
    if significant_digits < 0 {
        return Err(TraceError::InvalidArgument(format!(
            "significant digits must be >= 0, got {significant_digits}"
        )));
    }
    if significant_digits == 0 {
        return Ok(value.round());
    }
    let pow = 10f64.powi(significant_digits);
    Ok((value * pow).round() / pow)
}

/// Round to the nearest `1 / fraction`.
pub fn round_to_fraction(value: f64, fraction: i64) -> Result<f64, TraceError> {
    if fraction == 0 {
        return Err(TraceError::InvalidArgument(
            "fraction must not be 0".to_string(),
        ));
    }
    let fraction = fraction as f64;
    Ok((value * fraction).round() / fraction)
}

/// Shortest signed angle in degrees from `a` to `b`, in `(-180, 180]`.
pub fn delta_angle(a: f64, b: f64) -> f64 {
    let delta = (b - a) % 360.0;
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}
