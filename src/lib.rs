//! Bounded random draws, uniform picks and weighted picks.
//!
//! Every operation comes in two forms: a method on [`Sampler`], which draws
//! from a generator you supply, and a free function here, which draws from the
//! process-wide [`DefaultRng`]. Ranges are inclusive on both ends. Invalid
//! arguments are reported as [`Error`] before anything is drawn.
//!
//! ```
//! use randoms::Weighted;
//!
//! let die = randoms::random_int(1, 6)?;
//! assert!((1..=6).contains(&die));
//!
//! let colour = randoms::random_element(&["red", "green", "blue"])?;
//! assert!(["red", "green", "blue"].contains(colour));
//!
//! let table = [Weighted::new('a', 1.0), Weighted::new('b', 3.0)];
//! assert_eq!(randoms::total_weight(&table)?, 4.0);
//! let pick = randoms::random_weighted_choice(&table)?;
//! assert!(pick.item == 'a' || pick.item == 'b');
//! # Ok::<(), randoms::Error>(())
//! ```
//!
//! The default generator is a fast non-cryptographic xoshiro256++ split into
//! one stream per thread. It is seeded from OS entropy, or from the
//! `RANDOMS_SEED` environment variable when that holds a `u64`.

#![warn(
    rust_2018_idioms,
    // missing_debug_implementations,
    // missing_docs,
)]

pub mod bounds;
mod consts;
pub mod error;
pub mod rng;
pub mod sampler;
pub mod weighted;

use rand::distributions::{Distribution, Standard};

pub use bounds::{Integer, NextUp};
pub use consts::DEFAULT_SEED_ENV;
pub use error::{Error, Result};
pub use rng::DefaultRng;
pub use sampler::Sampler;
pub use weighted::{total_weight, Weighted, WeightedChoice};

fn default_sampler() -> Sampler<DefaultRng> {
    Sampler::new(DefaultRng)
}

pub fn random_bool() -> bool {
    default_sampler().boolean()
}

pub fn random_int(min: i32, max: i32) -> Result<i32> {
    default_sampler().int(min, max)
}

pub fn random_long(min: i64, max: i64) -> Result<i64> {
    default_sampler().long(min, max)
}

pub fn random_integer<T: Integer>(min: T, max: T) -> Result<T> {
    default_sampler().integer(min, max)
}

pub fn random_float(min: f32, max: f32) -> Result<f32> {
    default_sampler().float(min, max)
}

pub fn random_double(min: f64, max: f64) -> Result<f64> {
    default_sampler().double(min, max)
}

pub fn random_real<T>(min: T, max: T) -> Result<T>
where
    T: NextUp,
    Standard: Distribution<T>,
{
    default_sampler().real(min, max)
}

/// See [`Sampler::element`].
pub fn random_element<T>(items: &[T]) -> Result<&T> {
    default_sampler().element(items)
}

/// See [`Sampler::item`].
pub fn random_item<I>(items: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    default_sampler().item(items)
}

/// See [`Sampler::weighted_choice`].
pub fn random_weighted_choice<I>(choices: I) -> Result<I::Item>
where
    I: IntoIterator + Clone,
    I::Item: WeightedChoice,
{
    default_sampler().weighted_choice(choices)
}
