//! The random-number-source contract.
//!
//! RULE: Sampler code is written once against RandomSource and never
//! learns which backend it was handed. Exactly one backend is selected
//! per build (see backend.rs).

use crate::error::{RnError, RnResult};

/// Degrees of freedom every backend starts with.
pub const DEFAULT_DF: i32 = 1;

/// A source of the four deviates a tree sampler draws each iteration.
///
/// Deviate calls never fail. `uniform()` lies in (0,1) for every backend
/// shipped here, but callers must not rely on either endpoint being
/// excluded.
pub trait RandomSource {
    /// Standard normal deviate (mean 0, variance 1).
    fn normal(&mut self) -> f64;

    /// Uniform deviate on the unit interval.
    fn uniform(&mut self) -> f64;

    /// Chi-square deviate with the currently configured degrees of freedom.
    fn chi_square(&mut self) -> f64;

    /// Standard exponential deviate (rate 1).
    fn exp(&mut self) -> f64;

    /// Set the degrees of freedom used by subsequent `chi_square()` calls.
    ///
    /// Non-positive values are rejected and the previous value is kept.
    fn set_df(&mut self, df: i32) -> RnResult<()>;

    fn get_df(&self) -> i32;
}

/// Shared df check for every backend.
pub(crate) fn check_df(df: i32) -> RnResult<()> {
    if df <= 0 {
        log::warn!("rn: rejected degrees of freedom {df}");
        return Err(RnError::InvalidDegreesOfFreedom { df });
    }
    Ok(())
}
