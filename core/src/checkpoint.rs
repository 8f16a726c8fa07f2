//! Checkpoint serialization: global stream state to/from JSON.
//!
//! A checkpoint captures the math-library generator words plus the
//! adapter's df, so a long-running sampler can stop and later resume
//! the exact same stream.

use crate::{
    backend::Backend,
    error::RnResult,
    mathlib_rn::MathlibRn,
    rn::{check_df, RandomSource},
    seed::SeedPair,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub backend:  Backend,
    pub df:       i32,
    pub seed:     SeedPair,
    pub saved_at: DateTime<Utc>,
}

impl Checkpoint {
    pub fn capture(rn: &MathlibRn) -> Self {
        let checkpoint = Self {
            backend:  Backend::Mathlib,
            df:       rn.get_df(),
            seed:     rn.get_seed(),
            saved_at: Utc::now(),
        };
        log::debug!(
            "checkpoint: captured state={} increment={} df={}",
            checkpoint.seed.state, checkpoint.seed.increment, checkpoint.df
        );
        checkpoint
    }

    /// Put the global stream and `rn`'s df back where they were.
    ///
    /// A checkpoint carrying a bad df is rejected before anything moves,
    /// so neither the stream nor `rn` is left half-restored.
    pub fn restore(&self, rn: &mut MathlibRn) -> RnResult<()> {
        check_df(self.df)?;
        rn.set_seed(self.seed);
        rn.set_df(self.df)?;
        log::debug!("checkpoint: restored from {}", self.saved_at);
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> RnResult<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> RnResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
