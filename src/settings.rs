use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

/// Process-wide configuration, built once at startup and passed explicitly
/// into the components that need it. Defaults are overridable through the
/// environment: `ETL_DB_PATH`, `ETL_REFERRAL_TAG`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub referral_tag: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .set_default("db_path", "data/products.sqlite")?
            .set_default("referral_tag", "YOUR_TAG-20")?
            .add_source(Environment::with_prefix("ETL"))
            .build()
            .context("failed to build configuration")?;
        config
            .try_deserialize()
            .context("invalid configuration values")
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Settings {
            db_path: ":memory:".to_string(),
            referral_tag: "YOUR_TAG-20".to_string(),
        }
    }
}
