//! Standalone math-library backend.
//!
//! MathlibRn holds nothing but df. Every deviate and both seed calls go
//! straight to the process-global generator in `mathlib`, so two
//! MathlibRn values are two handles on ONE stream, not two streams.

use crate::{
    error::RnResult,
    mathlib,
    rn::{check_df, RandomSource, DEFAULT_DF},
    seed::SeedPair,
};

#[derive(Debug, Clone)]
pub struct MathlibRn {
    df: i32,
}

impl MathlibRn {
    /// Leaves the global generator where it is.
    pub fn new() -> Self {
        Self { df: DEFAULT_DF }
    }

    /// Seed the global generator with `(n1, n2)` and return a handle on it.
    pub fn with_seed(n1: u64, n2: u64) -> Self {
        let rn = Self::new();
        rn.set_seed(SeedPair::new(n1, n2));
        rn
    }

    pub fn set_seed(&self, seed: SeedPair) {
        mathlib::set_seed(seed);
    }

    pub fn get_seed(&self) -> SeedPair {
        mathlib::get_seed()
    }
}

impl Default for MathlibRn {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for MathlibRn {
    fn normal(&mut self) -> f64 {
        mathlib::norm_rand()
    }

    fn uniform(&mut self) -> f64 {
        mathlib::unif_rand()
    }

    fn chi_square(&mut self) -> f64 {
        mathlib::rchisq(f64::from(self.df))
    }

    fn exp(&mut self) -> f64 {
        mathlib::exp_rand()
    }

    fn set_df(&mut self, df: i32) -> RnResult<()> {
        check_df(df)?;
        self.df = df;
        Ok(())
    }

    fn get_df(&self) -> i32 {
        self.df
    }
}
