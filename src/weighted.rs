//! Weighted choices and the linear-scan weighted pick.

use std::rc::Rc;
use std::sync::Arc;

use rand::{Rng, RngCore};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::CHOICES;
use crate::error::{Error, Result};

/// Anything that can take part in a weighted pick.
///
/// Implementors supply a non-negative weight. A value that stands for a
/// missing entry (see the `Option` impl) reports itself through
/// [`is_absent`](WeightedChoice::is_absent), which makes the weighted
/// operations fail with [`Error::AbsentChoice`].
pub trait WeightedChoice {
    fn weight(&self) -> f64;

    fn is_absent(&self) -> bool {
        false
    }
}

/// An item paired with its weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weighted<T> {
    pub item: T,
    pub weight: f64,
}

impl<T> Weighted<T> {
    pub fn new(item: T, weight: f64) -> Self {
        Weighted { item, weight }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T> WeightedChoice for Weighted<T> {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<T> WeightedChoice for (T, f64) {
    fn weight(&self) -> f64 {
        self.1
    }
}

impl<T: WeightedChoice> WeightedChoice for Option<T> {
    fn weight(&self) -> f64 {
        self.as_ref().map_or(0.0, WeightedChoice::weight)
    }

    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, WeightedChoice::is_absent)
    }
}

macro_rules! forward_weighted_choice {
    ($($ptr:ty),*) => {
        $(
            impl<T: WeightedChoice + ?Sized> WeightedChoice for $ptr {
                fn weight(&self) -> f64 {
                    (**self).weight()
                }

                fn is_absent(&self) -> bool {
                    (**self).is_absent()
                }
            }
        )*
    };
}

forward_weighted_choice!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

/// Sums the weights of `choices` in iteration order.
///
/// An empty collection sums to `0.0`. Fails with [`Error::AbsentChoice`] on
/// the first missing entry.
pub fn total_weight<I>(choices: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: WeightedChoice,
{
    sum(choices, false)
}

fn sum<I>(choices: I, check_weights: bool) -> Result<f64>
where
    I: IntoIterator,
    I::Item: WeightedChoice,
{
    choices
        .into_iter()
        .enumerate()
        .try_fold(0.0, |total, (index, choice)| {
            if choice.is_absent() {
                return Err(Error::AbsentChoice { index });
            }
            let weight = choice.weight();
            if check_weights && (weight.is_nan() || weight < 0.0) {
                return Err(Error::InvalidWeight { index, weight });
            }
            Ok(total + weight)
        })
}

/// Picks one choice with probability proportional to its weight.
///
/// The total is summed in one pass, `r` is drawn from `[0, total)`, and a
/// second pass in the same order returns the first choice whose running
/// prefix sum reaches `r`, i.e. the first point where `r - prefix <= 0`.
/// Because both passes add the same weights in the same order, the final
/// prefix equals the total exactly and the scan cannot run past the end for a
/// collection that iterates the same way twice.
pub(crate) fn choose<R, I>(rng: &mut R, choices: I) -> Result<I::Item>
where
    R: RngCore + ?Sized,
    I: IntoIterator + Clone,
    I::Item: WeightedChoice,
{
    if choices.clone().into_iter().next().is_none() {
        return Err(Error::Empty(CHOICES));
    }

    let total = sum(choices.clone(), true)?;
    if !total.is_finite() {
        return Err(Error::NonFiniteTotalWeight(total));
    }
    if total <= 0.0 {
        return Err(Error::NonPositiveTotalWeight(total));
    }

    let target = rng.gen_range(0.0..total);
    let mut prefix = 0.0;
    for choice in choices {
        prefix += choice.weight();
        if target <= prefix {
            return Ok(choice);
        }
    }

    log::error!(
        "weighted scan exhausted: target {} not reached by total {}, collection changed between passes",
        target,
        prefix
    );
    Err(Error::WeightedScanExhausted)
}
