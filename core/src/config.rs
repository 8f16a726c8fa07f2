use crate::{
    error::RnResult,
    rn::{check_df, DEFAULT_DF},
    seed::SeedPair,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to build the selected random source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RnConfig {
    /// Engine seed. Also the first seed word for the global backends
    /// unless `seed_pair` is given.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Raw two-word state for the math-library and host backends.
    #[serde(default)]
    pub seed_pair: Option<SeedPair>,
    #[serde(default = "default_df")]
    pub df: i32,
}

fn default_seed() -> u64 {
    42
}

fn default_df() -> i32 {
    DEFAULT_DF
}

impl Default for RnConfig {
    fn default() -> Self {
        Self { seed: default_seed(), seed_pair: None, df: default_df() }
    }
}

impl RnConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading rn config {}", path.display()))?;
        let config: RnConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing rn config {}", path.display()))?;
        config.validate()?;
        log::info!("config: loaded {} (seed={}, df={})", path.display(), config.seed, config.df);
        Ok(config)
    }

    pub fn validate(&self) -> RnResult<()> {
        check_df(self.df)
    }

    /// Replace the seed from outside the config file. A `seed_pair` from
    /// the file would otherwise shadow it on the global backends, so it
    /// is dropped.
    pub fn override_seed(&mut self, seed: u64) {
        if let Some(pair) = self.seed_pair.take() {
            log::warn!(
                "config: seed {seed} replaces seed_pair state={} increment={}",
                pair.state, pair.increment
            );
        }
        self.seed = seed;
    }

    /// Seed words for the backends that keep two-word global state.
    pub fn effective_seed_pair(&self) -> SeedPair {
        self.seed_pair
            .map(|p| SeedPair::new(p.state, p.increment))
            .unwrap_or_else(|| SeedPair::from_seed(self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RnError;

    #[test]
    fn empty_object_takes_defaults() {
        let config: RnConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RnConfig::default());
        assert_eq!(config.df, 1);
    }

    #[test]
    fn explicit_pair_wins_over_seed() {
        let json = r#"{"seed": 9, "seed_pair": {"state": 3, "increment": 8}, "df": 4}"#;
        let config: RnConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.effective_seed_pair(), SeedPair::new(3, 9));
        assert_eq!(config.df, 4);
    }

    #[test]
    fn seed_alone_uses_default_stream() {
        let config = RnConfig { seed: 77, ..RnConfig::default() };
        assert_eq!(config.effective_seed_pair(), SeedPair::from_seed(77));
    }

    #[test]
    fn overriding_seed_drops_file_seed_pair() {
        let mut config = RnConfig {
            seed: 1,
            seed_pair: Some(SeedPair::new(3, 9)),
            ..RnConfig::default()
        };
        config.override_seed(500);

        assert_eq!(config.seed, 500);
        assert!(config.seed_pair.is_none());
        assert_eq!(config.effective_seed_pair(), SeedPair::from_seed(500));
    }

    #[test]
    fn non_positive_df_fails_validation() {
        let config = RnConfig { df: 0, ..RnConfig::default() };
        assert!(matches!(config.validate(), Err(RnError::InvalidDegreesOfFreedom { df: 0 })));
    }

    #[test]
    fn load_reads_json_file() {
        let path = std::env::temp_dir().join(format!("bart-rn-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"seed": 123, "df": 5}"#).unwrap();

        let config = RnConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.seed, 123);
        assert_eq!(config.df, 5);
        assert!(config.seed_pair.is_none());
    }

    #[test]
    fn load_rejects_bad_df() {
        let path = std::env::temp_dir().join(format!("bart-rn-bad-df-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"df": -3}"#).unwrap();

        let result = RnConfig::load(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }
}
