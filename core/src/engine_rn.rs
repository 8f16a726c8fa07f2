//! Standalone engine backend.
//!
//! RULE: The engine and its three distribution objects belong to one
//! EngineRn and are never handed out. One EngineRn per thread needs no
//! coordination.
//!
//! `exp()` is derived as -ln(uniform()), so it consumes exactly one
//! uniform draw from the owned engine.

use crate::{
    error::{RnError, RnResult},
    rn::{check_df, RandomSource, DEFAULT_DF},
};
use rand::distributions::Open01;
use rand::SeedableRng;
use rand_distr::{ChiSquared, Distribution, StandardNormal};
use rand_pcg::Pcg64Mcg;

/// Seed used when an engine is constructed without one.
pub const DEFAULT_ENGINE_SEED: u64 = 5489;

/// Random source backed by an owned `Pcg64Mcg` engine.
#[derive(Debug, Clone)]
pub struct EngineRn {
    seed: u64,
    df:   i32,
    gen:  Pcg64Mcg,
    nor:  StandardNormal,
    uni:  Open01,
    chi:  ChiSquared<f64>,
}

impl EngineRn {
    pub fn new() -> Self {
        Self::from_seed(DEFAULT_ENGINE_SEED)
    }

    /// Same seed, same call sequence, same deviates.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            df:  DEFAULT_DF,
            gen: Pcg64Mcg::seed_from_u64(seed),
            nor: StandardNormal,
            uni: Open01,
            chi: unit_chi_square(),
        }
    }

    /// Re-seed the owned engine. The configured df is left alone.
    pub fn set_seed(&mut self, seed: u64) {
        log::debug!("engine: reseeded with {seed}");
        self.seed = seed;
        self.gen = Pcg64Mcg::seed_from_u64(seed);
    }

    /// The seed the engine was last seeded with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for EngineRn {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EngineRn {
    fn normal(&mut self) -> f64 {
        self.nor.sample(&mut self.gen)
    }

    fn uniform(&mut self) -> f64 {
        self.uni.sample(&mut self.gen)
    }

    fn chi_square(&mut self) -> f64 {
        self.chi.sample(&mut self.gen)
    }

    fn exp(&mut self) -> f64 {
        -self.uniform().ln()
    }

    /// Rebuilds the bound chi-square distribution; df is a distribution
    /// parameter, not a field read per draw.
    fn set_df(&mut self, df: i32) -> RnResult<()> {
        check_df(df)?;
        self.chi = ChiSquared::new(f64::from(df))
            .map_err(|_| RnError::InvalidDegreesOfFreedom { df })?;
        self.df = df;
        log::debug!("engine: df={df}");
        Ok(())
    }

    fn get_df(&self) -> i32 {
        self.df
    }
}

fn unit_chi_square() -> ChiSquared<f64> {
    // k = 1 is always a valid shape, so this never falls through.
    ChiSquared::new(f64::from(DEFAULT_DF))
        .unwrap_or_else(|_| unreachable!("chi-square with k = 1"))
}
