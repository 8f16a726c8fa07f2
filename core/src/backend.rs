//! Compile-time backend selection.
//!
//! RULE: The backend is fixed when the crate is built, through Cargo
//! features. Nothing here branches on a runtime value to pick one.
//!
//!   feature `host`    → HostRn over the process host session
//!   feature `mathlib` → MathlibRn over the global generator
//!   default (`engine`)→ EngineRn
//!
//! If more than one backend feature is on, host wins over mathlib and
//! mathlib wins over engine, so turning on a non-default backend does
//! not require `--no-default-features`.

use crate::{config::RnConfig, error::RnResult, rn::RandomSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    Engine,
    Mathlib,
    Host,
}

impl Backend {
    /// The backend this build was compiled with.
    pub const fn selected() -> Self {
        if cfg!(feature = "host") {
            Self::Host
        } else if cfg!(feature = "mathlib") {
            Self::Mathlib
        } else {
            Self::Engine
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Engine  => "engine",
            Self::Mathlib => "mathlib",
            Self::Host    => "host",
        }
    }
}

/// Build the compiled-in backend from `config`, hand it to `f`, then
/// drop it. Any host scope is released before this returns, even if
/// `f` panics.
pub fn with_selected<R>(
    config: &RnConfig,
    f: impl FnOnce(&mut dyn RandomSource) -> R,
) -> RnResult<R> {
    config.validate()?;
    log::info!(
        "backend: using {} (seed={}, df={})",
        Backend::selected().name(), config.seed, config.df
    );
    run_selected(config, f)
}

#[cfg(feature = "host")]
fn run_selected<R>(config: &RnConfig, f: impl FnOnce(&mut dyn RandomSource) -> R) -> RnResult<R> {
    use crate::{host::EmbeddedHost, host_rn::HostRn};

    let host = EmbeddedHost::global();
    host.set_seed_pair(config.effective_seed_pair());
    let mut rn = HostRn::new(host);
    rn.set_df(config.df)?;
    Ok(f(&mut rn))
}

#[cfg(all(feature = "mathlib", not(feature = "host")))]
fn run_selected<R>(config: &RnConfig, f: impl FnOnce(&mut dyn RandomSource) -> R) -> RnResult<R> {
    use crate::mathlib_rn::MathlibRn;

    let pair = config.effective_seed_pair();
    let mut rn = MathlibRn::with_seed(pair.state, pair.increment);
    rn.set_df(config.df)?;
    Ok(f(&mut rn))
}

#[cfg(not(any(feature = "mathlib", feature = "host")))]
fn run_selected<R>(config: &RnConfig, f: impl FnOnce(&mut dyn RandomSource) -> R) -> RnResult<R> {
    use crate::engine_rn::EngineRn;

    let mut rn = EngineRn::from_seed(config.seed);
    rn.set_df(config.df)?;
    Ok(f(&mut rn))
}
