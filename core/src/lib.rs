//! bart-rn: the random-number source behind a BART tree sampler.
//!
//! The sampler asks for normal, uniform, chi-square and exponential
//! deviates through [`RandomSource`] and never sees which generator
//! answers. Three backends exist; one is compiled in as the selected
//! backend (see [`backend`]).

pub mod backend;
pub mod checkpoint;
pub mod config;
pub mod engine_rn;
pub mod error;
pub mod host;
pub mod host_rn;
pub mod mathlib;
pub mod mathlib_rn;
pub mod rn;
pub mod seed;

pub use backend::{with_selected, Backend};
pub use engine_rn::EngineRn;
pub use error::{RnError, RnResult};
pub use host::{EmbeddedHost, HostEnvironment};
pub use host_rn::{HostRn, RngScope};
pub use mathlib_rn::MathlibRn;
pub use rn::RandomSource;
pub use seed::SeedPair;
