// src/config/numutil_config.rs

use serde::{Deserialize, Serialize};
use ::config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// Configuration for the demonstration binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumUtilConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Use the overflow-checked variants in the demo report
    pub strict: bool,

    /// How the demo report is printed
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for NumUtilConfig {
    fn default() -> Self {
        NumUtilConfig {
            log_level: "info".to_string(),
            strict: false,
            output: OutputFormat::Text,
        }
    }
}

impl NumUtilConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("numutil.toml").exists() {
            builder = builder.add_source(File::with_name("numutil.toml"));
        } else if Path::new("numutil.yaml").exists() {
            builder = builder.add_source(File::with_name("numutil.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    /// Applies command line flags on top of the loaded values.
    pub fn apply_args(&mut self, args: &[String]) {
        for arg in args {
            match arg.as_str() {
                "--json" => self.output = OutputFormat::Json,
                "--strict" => self.strict = true,
                _ => {}
            }
        }
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("strict", false)?
            .set_default("output", "text")
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (prefix: NUMUTIL_), keys stay flat
        // so NUMUTIL_LOG_LEVEL maps to log_level
        let config = builder
            .add_source(Environment::with_prefix("NUMUTIL").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}
