//! Host environment backend.
//!
//! RULE: A HostRn holds an RngScope for its whole life. The scope pulls
//! the host's RNG state in when the adapter is built and pushes it back
//! in Drop, so the push runs on every exit path: normal return, `?`,
//! early return and unwinding.

use crate::{
    error::RnResult,
    host::HostEnvironment,
    rn::{check_df, RandomSource, DEFAULT_DF},
};

/// Scoped synchronisation token with a host's RNG.
///
/// Borrowing the host for `'h` means the token can't outlive the host
/// session it synchronises with.
#[must_use = "the host RNG state is written back as soon as the scope is dropped"]
pub struct RngScope<'h, H: HostEnvironment + ?Sized> {
    host: &'h H,
}

impl<'h, H: HostEnvironment + ?Sized> RngScope<'h, H> {
    pub fn new(host: &'h H) -> Self {
        host.get_rng_state();
        Self { host }
    }

    pub fn host(&self) -> &'h H {
        self.host
    }
}

impl<H: HostEnvironment + ?Sized> Drop for RngScope<'_, H> {
    fn drop(&mut self) {
        self.host.put_rng_state();
    }
}

/// Random source that draws from a host environment's own RNG.
pub struct HostRn<'h, H: HostEnvironment + ?Sized> {
    df:    i32,
    scope: RngScope<'h, H>,
}

impl<'h, H: HostEnvironment + ?Sized> HostRn<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self { df: DEFAULT_DF, scope: RngScope::new(host) }
    }
}

impl<H: HostEnvironment + ?Sized> RandomSource for HostRn<'_, H> {
    fn normal(&mut self) -> f64 {
        self.scope.host().norm_rand()
    }

    fn uniform(&mut self) -> f64 {
        self.scope.host().unif_rand()
    }

    fn chi_square(&mut self) -> f64 {
        self.scope.host().rchisq(f64::from(self.df))
    }

    fn exp(&mut self) -> f64 {
        self.scope.host().exp_rand()
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
