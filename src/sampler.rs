use rand::distributions::{Distribution, Standard};
use rand::{Rng, RngCore};

use crate::bounds::{self, Integer, NextUp};
use crate::consts::{ARRAY, COLLECTION};
use crate::error::{Error, Result};
use crate::rng::DefaultRng;
use crate::weighted::{self, WeightedChoice};

/// Bounded draws and picks over a random source.
///
/// The source is any [`RngCore`]. Pass `&mut rng` to borrow a generator you
/// keep using afterwards, or use [`Sampler::default`] for the process-wide
/// [`DefaultRng`]. Every range is inclusive on both ends, and every failing
/// call returns before the source is queried.
///
/// ```
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
/// use randoms::{Sampler, Weighted};
///
/// let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
/// let mut sampler = Sampler::new(&mut rng);
///
/// let roll = sampler.int(1, 6)?;
/// assert!((1..=6).contains(&roll));
///
/// let loot = [Weighted::new("common", 9.0), Weighted::new("rare", 1.0)];
/// let reward = sampler.weighted_choice(&loot)?;
/// assert!(reward.item == "common" || reward.item == "rare");
/// # Ok::<(), randoms::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sampler<R> {
    rng: R,
}

impl Default for Sampler<DefaultRng> {
    fn default() -> Self {
        Sampler::new(DefaultRng)
    }
}

impl<R: RngCore> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Sampler { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    pub fn boolean(&mut self) -> bool {
        self.rng.gen()
    }

    pub fn int(&mut self, min: i32, max: i32) -> Result<i32> {
        self.integer(min, max)
    }

    pub fn long(&mut self, min: i64, max: i64) -> Result<i64> {
        self.integer(min, max)
    }

    /// A uniform integer in `[min, max]`, for any primitive integer type.
    ///
    /// `min == max` returns `min` without a draw. `max` may be the type's
    /// largest value.
    pub fn integer<T: Integer>(&mut self, min: T, max: T) -> Result<T> {
        bounds::inclusive_integer(&mut self.rng, min, max)
    }

    pub fn float(&mut self, min: f32, max: f32) -> Result<f32> {
        self.real(min, max)
    }

    pub fn double(&mut self, min: f64, max: f64) -> Result<f64> {
        self.real(min, max)
    }

    /// A uniform float in `[min, max]`. Both bounds must be finite.
    pub fn real<T>(&mut self, min: T, max: T) -> Result<T>
    where
        T: NextUp,
        Standard: Distribution<T>,
    {
        bounds::inclusive_float(&mut self.rng, min, max)
    }

    /// A uniformly chosen element of a slice, array or `Vec`.
    pub fn element<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        match items {
            [] => Err(Error::Empty(ARRAY)),
            [only] => Ok(only),
            _ => Ok(&items[self.rng.gen_range(0..items.len())]),
        }
    }

    /// A uniformly chosen item of any collection that knows its length.
    ///
    /// The chosen position is reached with [`Iterator::nth`], which jumps
    /// straight to it for indexable storage (`Vec`, `VecDeque`, slices) and
    /// walks forward once for everything else (sets, maps).
    pub fn item<I>(&mut self, items: I) -> Result<I::Item>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = items.into_iter();
        let index = match iter.len() {
            0 => return Err(Error::Empty(COLLECTION)),
            1 => 0,
            len => self.rng.gen_range(0..len),
        };
        iter.nth(index).ok_or(Error::Empty(COLLECTION))
    }

    /// A choice picked with probability proportional to its weight.
    ///
    /// `choices` is walked twice, once for the total and once for the scan,
    /// so it has to be `Clone` (any `&collection` is). Zero-weight choices can
    /// only win on an exact zero draw. A collection whose weights are all zero
    /// is rejected with [`Error::NonPositiveTotalWeight`].
    pub fn weighted_choice<I>(&mut self, choices: I) -> Result<I::Item>
    where
        I: IntoIterator + Clone,
        I::Item: WeightedChoice,
    {
        weighted::choose(&mut self.rng, choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weighted;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::{BTreeSet, HashMap, VecDeque};

    /// A source that fails the test the moment it is queried.
    struct NoDraw;

    impl RngCore for NoDraw {
        fn next_u32(&mut self) -> u32 {
            panic!("random source was queried")
        }
        fn next_u64(&mut self) -> u64 {
            panic!("random source was queried")
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("random source was queried")
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            panic!("random source was queried")
        }
    }

    fn seeded(seed: u64) -> Sampler<Xoshiro256PlusPlus> {
        Sampler::new(Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    #[test]
    fn test_int_bounds() {
        let mut sampler = seeded(1);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let v = sampler.int(-2, 2).unwrap();
            assert!((-2..=2).contains(&v));
            seen[(v + 2) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));

        for _ in 0..1000 {
            let v = sampler.long(i64::MAX - 3, i64::MAX).unwrap();
            assert!(v >= i64::MAX - 3);
        }
    }

    #[test]
    fn test_degenerate_and_inverted_ranges() {
        let mut sampler = Sampler::new(NoDraw);
        for _ in 0..10 {
            assert_eq!(sampler.int(5, 5), Ok(5));
        }
        assert_eq!(sampler.long(-9, -9), Ok(-9));
        assert_eq!(sampler.float(0.5, 0.5), Ok(0.5));
        assert_eq!(sampler.double(3.0, 3.0), Ok(3.0));
        assert_eq!(sampler.integer(7u16, 7), Ok(7));

        assert_eq!(sampler.int(3, 1), Err(Error::InvertedBounds));
        assert_eq!(sampler.long(0, -1), Err(Error::InvertedBounds));
        assert_eq!(sampler.float(1.0, 0.0), Err(Error::InvertedBounds));
        assert_eq!(sampler.double(1.0, -1.0), Err(Error::InvertedBounds));
        assert_eq!(sampler.double(f64::NAN, 1.0), Err(Error::NonFiniteBound));
    }

    #[test]
    fn test_double_bounds() {
        let mut sampler = seeded(2);
        for _ in 0..1000 {
            let v = sampler.double(-1.5, 2.5).unwrap();
            assert!((-1.5..=2.5).contains(&v));

            let v = sampler.float(0.0, 1.0).unwrap();
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_boolean() {
        let mut sampler = seeded(3);
        let heads = (0..10_000).filter(|_| sampler.boolean()).count();
        assert!(heads > 4_500 && heads < 5_500, "got {} heads", heads);
    }

    #[test]
    fn test_element() {
        let mut sampler = seeded(4);
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            assert!(items.contains(sampler.element(&items).unwrap()));
        }

        let empty: Vec<u8> = Vec::new();
        assert_eq!(Sampler::new(NoDraw).element(&empty), Err(Error::Empty(ARRAY)));
        assert_eq!(Sampler::new(NoDraw).element(&[42]), Ok(&42));
    }

    #[test]
    fn test_item_collections() {
        let mut sampler = seeded(5);

        let deque: VecDeque<_> = (0..10).collect();
        for _ in 0..100 {
            assert!(*sampler.item(&deque).unwrap() < 10);
        }

        let set: BTreeSet<_> = ["x", "y", "z"].into_iter().collect();
        let mut seen = BTreeSet::new();
        for _ in 0..300 {
            seen.insert(*sampler.item(&set).unwrap());
        }
        assert_eq!(seen, set);

        let map: HashMap<_, _> = [(1, "one"), (2, "two")].into_iter().collect();
        let (k, v) = sampler.item(&map).unwrap();
        assert_eq!(map[k], *v);

        // by value works too
        assert!(sampler.item(vec![1, 2, 3]).unwrap() <= 3);
    }

    #[test]
    fn test_item_edge_cases() {
        let mut sampler = Sampler::new(NoDraw);
        let empty: BTreeSet<u8> = BTreeSet::new();
        assert_eq!(sampler.item(&empty), Err(Error::Empty(COLLECTION)));

        let single: BTreeSet<u8> = [9].into_iter().collect();
        assert_eq!(sampler.item(&single), Ok(&9));
    }

    #[test]
    fn test_borrowed_source_keeps_advancing() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(6);
        let first = Sampler::new(&mut rng).long(0, i64::MAX).unwrap();
        let second = Sampler::new(&mut rng).long(0, i64::MAX).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_weighted_choice() {
        let mut sampler = seeded(7);
        let choices = vec![Weighted::new("a", 1.0), Weighted::new("b", 3.0)];

        let trials = 40_000;
        let b = (0..trials)
            .filter(|_| sampler.weighted_choice(&choices).unwrap().item == "b")
            .count();
        let ratio = b as f64 / trials as f64;
        assert!((ratio - 0.75).abs() < 0.015, "got {} for b", ratio);

        let zero = [Weighted::new("a", 0.0)];
        assert_eq!(
            Sampler::new(NoDraw).weighted_choice(&zero),
            Err(Error::NonPositiveTotalWeight(0.0))
        );
    }

    #[test]
    fn test_default_sampler() {
        let mut sampler = Sampler::<DefaultRng>::default();
        let v = sampler.int(10, 20).unwrap();
        assert!((10..=20).contains(&v));
    }
}
