//! Layered settings for the planetary API and the logging bootstrap that
//! consumes them.

use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    ApiSettings, Config, DatabaseSettings, InvalidInputPolicy, LoggingSettings, ServerSettings,
};

/// The settings file the binary reads unless `--config` names another.
pub const DEFAULT_CONFIG_FILE: &str = "planetary.toml";

/// Loads the application configuration with `path` as the settings file.
///
/// Sources, lowest precedence first: built-in defaults, the file (skipped if
/// absent), `PLANETARY__SECTION__KEY` environment variables, and finally
/// `DATABASE_URL`. The result is validated before it is returned.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("PLANETARY")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
        .build()?;

    // Missing sections fall back to `Default` through `#[serde(default)]`.
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
