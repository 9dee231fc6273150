use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::GroupId;

/// How big integers are printed by the command line tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Lowercase hex of the big-endian bytes.
    #[default]
    Hex,
    /// Base 10.
    Decimal,
}

impl Encoding {
    /// Renders a wire encoding (already padded to the group width) in this format.
    pub fn render(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Hex => hex::encode(bytes),
            Encoding::Decimal => BigUint::from_bytes_be(bytes).to_str_radix(10),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Hex => f.write_str("hex"),
            Encoding::Decimal => f.write_str("decimal"),
        }
    }
}

/// Settings for the `dhkx` command line tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Group id; `0` selects the default group.
    pub group: i32,
    /// Output format for keys and secrets.
    pub encoding: Encoding,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            group: GroupId::DEFAULT.0,
            encoding: Encoding::Hex,
        }
    }
}

impl ExchangeConfig {
    /// Loads configuration from `.env`, a TOML file and the environment.
    ///
    /// Priority (highest first):
    /// 1. `DHKX_`-prefixed environment variables (`DHKX_GROUP=15`)
    /// 2. TOML file at `DHKX_CONFIG_PATH`, default `config/dhkx.toml`
    /// 3. Built-in defaults
    ///
    /// A `.env` file, if present, is loaded into the environment first. Missing
    /// files are skipped.
    ///
    /// # Errors
    /// Returns an error if a source is malformed.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> figment::error::Result<Self> {
        use figment::providers::{Env, Format, Serialized, Toml};
        use figment::Figment;

        let _ = dotenvy::dotenv();

        let config_path =
            std::env::var("DHKX_CONFIG_PATH").unwrap_or_else(|_| "config/dhkx.toml".to_string());

        Figment::from(Serialized::defaults(ExchangeConfig::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("DHKX_").ignore(&["config_path"]))
            .extract()
    }

    /// Checks that the configured group exists in the registry.
    ///
    /// # Errors
    /// Returns a message naming the rejected id.
    pub fn validate(&self) -> Result<(), String> {
        if !GroupId(self.group).is_known() {
            return Err(format!("unknown DH group id {}", self.group));
        }
        Ok(())
    }
}
