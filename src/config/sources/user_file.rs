//! User config file source: `<config_dir>/fingerprint/config.toml`

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to the per-user config file, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fingerprint").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the user config file to the builder if it exists.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    match user_config_path() {
        Some(path) if path.is_file() => {
            debug!(config_path = %path.display(), "Loading user configuration");
            builder.add_source(File::from(path).required(false))
        }
        _ => builder,
    }
}
