mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Loads the YAML file at `CONFIG_PATH` (if any), applies environment
/// overrides and validates the result.
///
/// A missing file at the default path is not an error; every setting except
/// the API key has a default.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    debug!("Loading configuration from: {}", config_path);

    let contents = match tokio::fs::read_to_string(&config_path).await {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == ErrorKind::NotFound && explicit_path.is_none() => None,
        Err(e) => {
            return Err(Error::config(format!(
                "cannot read config file '{}': {}",
                config_path, e
            )));
        }
    };

    Config::from_sources(contents.as_deref(), |key| env::var(key).ok())
}

impl Config {
    /// Builds a validated configuration from optional YAML text and an
    /// environment lookup.
    pub fn from_sources<F>(yaml: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match yaml {
            Some(text) if !text.trim().is_empty() => serde_yaml::from_str(text)?,
            _ => Config::default(),
        };

        config.apply_env(lookup)?;
        config.validate()?;

        Ok(config)
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(API_KEY_VAR) {
            self.provider.api_key = api_key;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.provider.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.provider.base_url = base_url;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                Error::config(format!("PORT must be a valid port number, got '{}'", port))
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.provider.api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "{} is not set; provide the Gemini API key through the environment or provider.api_key",
                API_KEY_VAR
            )));
        }
        if self.provider.model.trim().is_empty() {
            return Err(Error::config("provider.model must not be empty"));
        }

        let generation = &self.provider.generation;
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(Error::config(format!(
                "temperature must be between 0 and 2, got {}",
                generation.temperature
            )));
        }
        if !(0.0..=1.0).contains(&generation.top_p) {
            return Err(Error::config(format!(
                "top_p must be between 0 and 1, got {}",
                generation.top_p
            )));
        }
        if generation.top_k == 0 {
            return Err(Error::config("top_k must be at least 1"));
        }
        if generation.max_output_tokens == 0 {
            return Err(Error::config("max_output_tokens must be at least 1"));
        }

        Ok(())
    }
}
