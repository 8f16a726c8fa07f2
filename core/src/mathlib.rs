//! Freestanding statistical math library.
//!
//! RULE: There is exactly one generator in this module and it is
//! process-global. Every function here reads and advances that one
//! stream; no caller owns it.
//!
//! The mutex makes single draws race-free. It does NOT give concurrent
//! callers independent or reproducible streams: two users interleave.
//! Run at most one sampler against this module at a time.

use crate::seed::{SeedPair, DEFAULT_SEED_PAIR};
use rand::distributions::Open01;
use rand_distr::{ChiSquared, Distribution, Exp1, StandardNormal};
use rand_pcg::Pcg32;
use std::sync::{Mutex, PoisonError};

static GENERATOR: Mutex<Option<Pcg32>> = Mutex::new(None);

fn with_generator<T>(f: impl FnOnce(&mut Pcg32) -> T) -> T {
    let mut guard = GENERATOR.lock().unwrap_or_else(PoisonError::into_inner);
    let gen = guard.get_or_insert_with(|| {
        log::debug!("mathlib: global generator initialised from default seed pair");
        DEFAULT_SEED_PAIR.to_generator()
    });
    f(gen)
}

/// Overwrite the global generator state with the raw words of `seed`.
pub fn set_seed(seed: SeedPair) {
    let seed = seed.normalized();
    *GENERATOR.lock().unwrap_or_else(PoisonError::into_inner) = Some(seed.to_generator());
    log::debug!("mathlib: set_seed state={} increment={}", seed.state, seed.increment);
}

/// Current global generator state, for save/restore.
pub fn get_seed() -> SeedPair {
    with_generator(|gen| SeedPair::of_generator(gen))
}

pub fn norm_rand() -> f64 {
    with_generator(sample_norm)
}

pub fn unif_rand() -> f64 {
    with_generator(sample_unif)
}

pub fn exp_rand() -> f64 {
    with_generator(sample_exp)
}

/// Chi-square deviate. Returns NaN for a non-positive or non-finite `df`.
pub fn rchisq(df: f64) -> f64 {
    with_generator(|gen| sample_chisq(gen, df))
}

// ── Samplers shared with hosts that keep their own generator ───────

pub(crate) fn sample_norm(gen: &mut Pcg32) -> f64 {
    StandardNormal.sample(gen)
}

pub(crate) fn sample_unif(gen: &mut Pcg32) -> f64 {
    Open01.sample(gen)
}

pub(crate) fn sample_exp(gen: &mut Pcg32) -> f64 {
    Exp1.sample(gen)
}

pub(crate) fn sample_chisq(gen: &mut Pcg32, df: f64) -> f64 {
    if !(df.is_finite() && df > 0.0) {
        log::warn!("mathlib: rchisq called with df={df}, returning NaN");
        return f64::NAN;
    }
    match ChiSquared::new(df) {
        Ok(chi) => chi.sample(gen),
        Err(_) => f64::NAN,
    }
}
