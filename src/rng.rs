//! The process-wide default random source.
//!
//! One `Xoshiro256PlusPlus` seeder lives behind a lazy static. Every thread
//! that draws from [`DefaultRng`] takes a copy of the seeder and jumps the
//! seeder forward by 2^128 steps, so each thread owns a private stream that
//! never overlaps another thread's. After that first split, draws touch only
//! thread-local state and never lock.

use std::cell::RefCell;
use std::env;

use once_cell::sync::Lazy;
use rand_xoshiro::rand_core::{Error, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use spin::Mutex;

use crate::consts::DEFAULT_SEED_ENV;

static SEEDER: Lazy<Mutex<Xoshiro256PlusPlus>> = Lazy::new(|| Mutex::new(init_seeder()));

thread_local! {
    static STREAM: RefCell<Xoshiro256PlusPlus> = RefCell::new(split_stream());
}

fn init_seeder() -> Xoshiro256PlusPlus {
    let raw = env::var(DEFAULT_SEED_ENV).ok();
    match parse_seed(raw.as_deref()) {
        Some(seed) => {
            log::debug!("seeding default generator from {}={}", DEFAULT_SEED_ENV, seed);
            Xoshiro256PlusPlus::seed_from_u64(seed)
        }
        None => {
            if let Some(raw) = raw {
                log::warn!("ignoring {}={:?}: not a u64", DEFAULT_SEED_ENV, raw);
            }
            log::debug!("seeding default generator from OS entropy");
            Xoshiro256PlusPlus::from_entropy()
        }
    }
}

fn parse_seed(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse().ok()
}

fn split_stream() -> Xoshiro256PlusPlus {
    let mut seeder = SEEDER.lock();
    let stream = seeder.clone();
    seeder.jump();
    log::trace!("split default generator stream for {:?}", std::thread::current().id());
    stream
}

/// Handle to the process-wide default generator.
///
/// `DefaultRng` is zero-sized and `Copy`; every copy draws from the calling
/// thread's stream. It is what the crate-level convenience functions use when
/// no source is given. Callers that need determinism or test isolation should
/// pass their own generator to [`Sampler`](crate::Sampler) instead.
///
/// Not suitable for cryptographic use.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRng;

impl DefaultRng {
    pub fn new() -> Self {
        DefaultRng
    }
}

impl RngCore for DefaultRng {
    fn next_u32(&mut self) -> u32 {
        STREAM.with(|rng| rng.borrow_mut().next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        STREAM.with(|rng| rng.borrow_mut().next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        STREAM.with(|rng| rng.borrow_mut().fill_bytes(dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        STREAM.with(|rng| rng.borrow_mut().try_fill_bytes(dest))
    }
}
