//! Host statistical environment.
//!
//! A host is an embedding runtime that owns its own RNG. Its generator
//! state lives in the host (persisted between calls into this process)
//! and must be pulled in before drawing and pushed back afterwards.
//! `get_rng_state` / `put_rng_state` are that pull and push; HostRn
//! pairs them through an RngScope so the push can't be skipped.
//!
//! RULE: The process has ONE host session, `EmbeddedHost::global()`.
//! Every HostRn opened against it draws from the same stream, exactly
//! like the math-library backend's global generator. Run at most one
//! sampler against it at a time.

use crate::{
    mathlib::{sample_chisq, sample_exp, sample_norm, sample_unif},
    seed::{SeedPair, DEFAULT_SEED_PAIR},
};
use rand_pcg::Pcg32;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static SESSION: OnceLock<EmbeddedHost> = OnceLock::new();

/// RNG entry points a host environment exposes.
///
/// One host value is one stream: every caller holding a reference to it,
/// however many adapters they wrap it in, advances the same generator.
pub trait HostEnvironment {
    /// Load the host's persisted RNG state into the working generator.
    fn get_rng_state(&self);

    /// Write the working generator back to the host's persisted state.
    fn put_rng_state(&self);

    fn norm_rand(&self) -> f64;
    fn unif_rand(&self) -> f64;
    fn exp_rand(&self) -> f64;
    fn rchisq(&self, df: f64) -> f64;
}

/// In-process host environment.
///
/// Keeps a `saved` generator (the host-side persisted state) and a
/// `working` generator that only exists while a scope is open. Scopes
/// nest: only the outermost get/put pair moves state.
#[derive(Debug)]
pub struct EmbeddedHost {
    state: Mutex<HostState>,
}

#[derive(Debug)]
struct HostState {
    saved:   Pcg32,
    working: Option<Pcg32>,
    depth:   usize,
}

impl HostState {
    /// The generator draws should come from right now.
    fn active(&mut self) -> &mut Pcg32 {
        match self.working {
            Some(ref mut gen) => gen,
            None => {
                log::warn!("host: deviate drawn outside an RNG scope; using persisted state");
                &mut self.saved
            }
        }
    }
}

impl EmbeddedHost {
    /// The process-wide host session, started from `DEFAULT_SEED_PAIR`.
    pub fn global() -> &'static EmbeddedHost {
        SESSION.get_or_init(|| {
            log::debug!("host: process session started from default seed pair");
            Self::from_seed_pair(DEFAULT_SEED_PAIR)
        })
    }

    /// A separate host session with its own stream, e.g. a second
    /// embedded runtime. Equivalent to `from_seed_pair(SeedPair::from_seed(seed))`.
    pub fn new(seed: u64) -> Self {
        Self::from_seed_pair(SeedPair::from_seed(seed))
    }

    /// Start a separate host session from raw generator words.
    pub fn from_seed_pair(seed: SeedPair) -> Self {
        Self {
            state: Mutex::new(HostState {
                saved:   seed.to_generator(),
                working: None,
                depth:   0,
            }),
        }
    }

    /// Reseed on the default stream. Same as `set_seed_pair(SeedPair::from_seed(seed))`.
    pub fn set_seed(&self, seed: u64) {
        self.set_seed_pair(SeedPair::from_seed(seed));
    }

    /// Overwrite the host stream with raw words. An open scope picks the
    /// new stream up immediately.
    pub fn set_seed_pair(&self, seed: SeedPair) {
        let seed = seed.normalized();
        let mut state = self.lock();
        if state.working.is_some() {
            state.working = Some(seed.to_generator());
        }
        state.saved = seed.to_generator();
        log::debug!("host: reseeded state={} increment={}", seed.state, seed.increment);
    }

    /// The persisted state, as the host would see it between calls.
    pub fn saved_seed(&self) -> SeedPair {
        SeedPair::of_generator(&self.lock().saved)
    }

    /// Number of RNG scopes currently open against this host.
    pub fn scope_depth(&self) -> usize {
        self.lock().depth
    }

    fn lock(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HostEnvironment for EmbeddedHost {
    fn get_rng_state(&self) {
        let mut state = self.lock();
        state.depth += 1;
        if state.depth == 1 {
            state.working = Some(state.saved.clone());
            log::debug!("host: RNG state loaded");
        }
    }

    fn put_rng_state(&self) {
        let mut state = self.lock();
        match state.depth {
            0 => log::warn!("host: put_rng_state without a matching get_rng_state"),
            1 => {
                state.depth = 0;
                if let Some(gen) = state.working.take() {
                    state.saved = gen;
                }
                log::debug!("host: RNG state written back");
            }
            _ => state.depth -= 1,
        }
    }

    fn norm_rand(&self) -> f64 {
        sample_norm(self.lock().active())
    }

    fn unif_rand(&self) -> f64 {
        sample_unif(self.lock().active())
    }

    fn exp_rand(&self) -> f64 {
        sample_exp(self.lock().active())
    }

    fn rchisq(&self, df: f64) -> f64 {
        sample_chisq(self.lock().active(), df)
    }
}
