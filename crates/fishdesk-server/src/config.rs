//! Application configuration.
//!
//! Read from an optional `fishdesk.toml` in the working directory, then
//! from `FISHDESK__SECTION__KEY` environment variables. Every field has a
//! default, so an empty environment yields the in-memory development
//! setup.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use fishdesk_auth::CodecConfig;
use fishdesk_db::{BackendConfig, SeedConfig};
use fishdesk_service::ServiceConfig;
use serde::Deserialize;

const CONFIG_FILE: &str = "fishdesk";
const ENV_PREFIX: &str = "FISHDESK";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub seed: SeedConfig,
    pub service: ServiceConfig,
    pub auth: CodecConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(environment()),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}
