use crate::error::ExportError;
use folio_render_core::RenderConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable prefix; nested keys use `__`, as in
/// `FOLIO_RENDER__TEACHER_NAME`.
pub const ENV_PREFIX: &str = "FOLIO";

/// Default settings file, looked up in the working directory without an
/// extension so any format the `config` crate knows is accepted.
pub const DEFAULT_SETTINGS_NAME: &str = "folio";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub render: RenderConfig,
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub output_dir: PathBuf,
    /// Pause between consecutive deliveries in a multi-item export.
    pub pacing_ms: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            pacing_ms: 0,
        }
    }
}

impl Settings {
    /// Loads settings from `explicit` (which must exist) or an optional
    /// `folio.toml`, then layers `FOLIO_*` environment variables on top.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ExportError> {
        let mut builder = config::Config::builder();

        builder = match explicit {
            Some(path) => {
                log::debug!("Loading settings from {}", path.display());
                builder.add_source(config::File::from(path).required(true))
            }
            None => builder
                .add_source(config::File::with_name(DEFAULT_SETTINGS_NAME).required(false)),
        };

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
