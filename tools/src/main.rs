//! rn-runner: headless driver for the compiled-in random source.
//!
//! Draws deviates the way a tree sampler would and prints summary
//! statistics, so a build's backend can be sanity-checked from a shell.
//!
//! Usage:
//!   rn-runner --seed 12345 --df 5 --draws 10000
//!   rn-runner --config rn.json --draws 10000 --checkpoint stream.json
//!
//! `--seed` beats the config file: it also replaces any `seed_pair` the
//! file sets, so the mathlib and host backends follow it too.

use anyhow::{Context, Result};
use bart_rn::{
    checkpoint::Checkpoint, config::RnConfig, with_selected, Backend, MathlibRn, RandomSource,
};
use std::env;

#[derive(Debug, Default)]
struct Summary {
    n:      usize,
    sum:    f64,
    sum_sq: f64,
    min:    f64,
    max:    f64,
}

impl Summary {
    fn push(&mut self, x: f64) {
        if self.n == 0 {
            self.min = x;
            self.max = x;
        }
        self.n += 1;
        self.sum += x;
        self.sum_sq += x * x;
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    fn mean(&self) -> f64 {
        self.sum / self.n as f64
    }

    fn variance(&self) -> f64 {
        if self.n < 2 {
            return 0.0;
        }
        let n = self.n as f64;
        (self.sum_sq - self.sum * self.sum / n) / (n - 1.0)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match arg_value(&args, "--config") {
        Some(path) => RnConfig::load(path)?,
        None => RnConfig::default(),
    };
    if let Some(seed) = arg_value(&args, "--seed").and_then(|s| s.parse().ok()) {
        config.override_seed(seed);
    }
    config.df = parse_arg(&args, "--df", config.df);
    let draws = parse_arg(&args, "--draws", 10_000usize);
    let checkpoint = arg_value(&args, "--checkpoint");

    println!("bart-rn — rn-runner");
    println!("  backend:   {}", Backend::selected().name());
    println!("  seed:      {}", config.seed);
    println!("  df:        {}", config.df);
    println!("  draws:     {draws}");
    println!();

    let summaries = with_selected(&config, |rn| sample(rn, draws))?;
    print_summary(&summaries, config.df);

    if let Some(path) = checkpoint {
        write_checkpoint(path, &config)?;
    }

    Ok(())
}

/// One draw of every deviate per iteration, like a sampler sweep.
fn sample(rn: &mut dyn RandomSource, draws: usize) -> [(&'static str, Summary); 4] {
    let mut normal = Summary::default();
    let mut uniform = Summary::default();
    let mut chi_square = Summary::default();
    let mut exp = Summary::default();

    for _ in 0..draws {
        normal.push(rn.normal());
        uniform.push(rn.uniform());
        chi_square.push(rn.chi_square());
        exp.push(rn.exp());
    }
    log::debug!("runner: drew {} deviates", draws * 4);

    [("normal", normal), ("uniform", uniform), ("chi_square", chi_square), ("exp", exp)]
}

fn print_summary(summaries: &[(&'static str, Summary)], df: i32) {
    let expected = |name: &str| -> (f64, f64) {
        match name {
            "normal" => (0.0, 1.0),
            "uniform" => (0.5, 1.0 / 12.0),
            "chi_square" => (f64::from(df), 2.0 * f64::from(df)),
            _ => (1.0, 1.0),
        }
    };

    println!("{:<11} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "deviate", "mean", "expected", "variance", "expected", "min", "max");
    for (name, s) in summaries {
        if s.n == 0 {
            println!("{name:<11} (no draws)");
            continue;
        }
        let (mean, var) = expected(name);
        println!("{:<11} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            name, s.mean(), mean, s.variance(), var, s.min, s.max);
    }
}

fn write_checkpoint(path: &str, config: &RnConfig) -> Result<()> {
    if Backend::selected() != Backend::Mathlib {
        log::warn!(
            "runner: --checkpoint ignored, backend {} has no global stream to save",
            Backend::selected().name()
        );
        return Ok(());
    }
    let mut rn = MathlibRn::new();
    rn.set_df(config.df)?;
    Checkpoint::capture(&rn)
        .save(path)
        .with_context(|| format!("writing checkpoint {path}"))?;
    println!();
    println!("  checkpoint written to {path}");
    Ok(())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
