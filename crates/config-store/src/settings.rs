//! Server Settings

use serde::Deserialize;
use std::path::PathBuf;

/// Runtime settings for the store server
///
/// Layered: built-in defaults, then an optional `config-store.toml`, then
/// `DMCS_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Directory holding the persisted config documents
    pub data_dir: PathBuf,
}

impl StoreSettings {
    /// Load settings from the layered sources
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("listen_addr", "0.0.0.0:8080")?
            .set_default("data_dir", "config")?
            .add_source(config::File::with_name("config-store").required(false))
            .add_source(config::Environment::with_prefix("DMCS"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let settings = StoreSettings::load().unwrap();
        assert_eq!(settings.listen_addr, "0.0.0.0:8080");
        assert_eq!(settings.data_dir, PathBuf::from("config"));
    }
}
