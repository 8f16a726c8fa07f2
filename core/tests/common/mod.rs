#![allow(dead_code)]

use bart_rn::RandomSource;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Tests that touch the process-global math-library stream take this
/// first so their draws don't interleave.
static GLOBAL_STREAM: Mutex<()> = Mutex::new(());

pub fn lock_global_stream() -> MutexGuard<'static, ()> {
    GLOBAL_STREAM.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn draw(n: usize, mut f: impl FnMut() -> f64) -> Vec<f64> {
    (0..n).map(|_| f()).collect()
}

pub fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Unbiased sample variance.
pub fn variance(xs: &[f64]) -> f64 {
    let m = mean(xs);
    xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (xs.len() - 1) as f64
}

/// The checks every backend must pass, run through the trait object the
/// sampler would hold.
pub fn assert_distributions(rn: &mut dyn RandomSource) {
    const N: usize = 10_000;

    let u = draw(N, || rn.uniform());
    assert!(u.iter().all(|&x| x > 0.0 && x < 1.0), "uniform draw outside (0,1)");
    approx::assert_abs_diff_eq!(mean(&u), 0.5, epsilon = 0.02);

    let z = draw(N, || rn.normal());
    assert!(z.iter().all(|x| x.is_finite()));
    approx::assert_abs_diff_eq!(mean(&z), 0.0, epsilon = 0.05);
    approx::assert_abs_diff_eq!(variance(&z), 1.0, epsilon = 0.08);

    let e = draw(N, || rn.exp());
    assert!(e.iter().all(|&x| x.is_finite() && x >= 0.0));
    approx::assert_abs_diff_eq!(mean(&e), 1.0, epsilon = 0.05);

    rn.set_df(5).expect("df 5 is valid");
    let c = draw(N, || rn.chi_square());
    let (m, v) = (mean(&c), variance(&c));
    assert!((4.5..=5.5).contains(&m), "chi-square(5) mean {m} outside [4.5, 5.5]");
    assert!((8.0..=12.0).contains(&v), "chi-square(5) variance {v} outside [8, 12]");
}

/// Default df must be 1 and usable without a set_df call.
pub fn assert_default_df(rn: &mut dyn RandomSource) {
    assert_eq!(rn.get_df(), 1, "backend should default to df = 1");
    let x = rn.chi_square();
    assert!(x.is_finite() && x >= 0.0, "default chi-square draw {x} not finite");
}
