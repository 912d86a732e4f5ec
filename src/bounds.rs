//! Inclusive-range draws.
//!
//! Integers use rand's inclusive sampler directly, so `max == T::MAX` needs no
//! `max + 1`. Floats are drawn from the half-open `[min, next_up(max))`, which
//! keeps `max` reachable.

use std::ops::{Add, Mul, Sub};

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard};
use rand::{Rng, RngCore};

use crate::error::{Error, Result};

/// Integer types accepted by [`Sampler::integer`](crate::Sampler::integer).
pub trait Integer: SampleUniform + PartialOrd + Copy {}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(impl Integer for $ty {})*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Floating-point types with a successor function.
pub trait NextUp:
    SampleUniform + PartialOrd + Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The smallest value strictly greater than `self`.
    ///
    /// NaN and positive infinity map to themselves. Both zeros map to the
    /// smallest positive subnormal.
    fn next_up(self) -> Self;

    fn is_finite(self) -> bool;
}

macro_rules! impl_next_up {
    ($ty:ty) => {
        impl NextUp for $ty {
            fn next_up(self) -> Self {
                if self.is_nan() || self == <$ty>::INFINITY {
                    return self;
                }
                if self == 0.0 {
                    return <$ty>::from_bits(1);
                }
                let bits = self.to_bits();
                // sign-magnitude: moving up means growing a positive magnitude
                // or shrinking a negative one
                <$ty>::from_bits(if self > 0.0 { bits + 1 } else { bits - 1 })
            }

            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
        }
    };
}

impl_next_up!(f32);
impl_next_up!(f64);

pub(crate) fn inclusive_integer<R, T>(rng: &mut R, min: T, max: T) -> Result<T>
where
    R: RngCore + ?Sized,
    T: Integer,
{
    if min > max {
        return Err(Error::InvertedBounds);
    }
    if min == max {
        return Ok(min);
    }
    Ok(rng.gen_range(min..=max))
}

pub(crate) fn inclusive_float<R, T>(rng: &mut R, min: T, max: T) -> Result<T>
where
    R: RngCore + ?Sized,
    T: NextUp,
    Standard: Distribution<T>,
{
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::NonFiniteBound);
    }
    if min > max {
        return Err(Error::InvertedBounds);
    }
    if min == max {
        return Ok(min);
    }

    let high = max.next_up();
    if high.is_finite() && (high - min).is_finite() {
        return Ok(rng.gen_range(min..high));
    }

    // the span does not fit the type; interpolate so no intermediate overflows
    let t: T = rng.gen();
    Ok(min - min * t + max * t)
}
