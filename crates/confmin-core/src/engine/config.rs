use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_FORCE_FIELD: &str = "openff_unconstrained-1.0.0.offxml";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Directory receiving minimized structures and CSV reports.
    pub output_dir: PathBuf,
    /// Name of the force field handed to the simulation factory.
    pub force_field: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            force_field: DEFAULT_FORCE_FIELD.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileRunConfig {
    output_dir: Option<PathBuf>,
    force_field: Option<String>,
}

impl RunConfig {
    /// Parses a run configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<inline>")
    }

    /// Loads a run configuration from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading run configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: FileRunConfig = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let mut builder = RunConfigBuilder::new();
        if let Some(dir) = file.output_dir {
            builder = builder.output_dir(dir);
        }
        if let Some(force_field) = file.force_field {
            builder = builder.force_field(&force_field);
        }
        builder.build()
    }
}

#[derive(Default)]
pub struct RunConfigBuilder {
    output_dir: Option<PathBuf>,
    force_field: Option<String>,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
    pub fn force_field(mut self, name: &str) -> Self {
        self.force_field = Some(name.to_string());
        self
    }

    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let defaults = RunConfig::default();

        let force_field = self.force_field.unwrap_or(defaults.force_field);
        if force_field.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "force_field",
                reason: "force field name must not be empty".to_string(),
            });
        }

        let output_dir = self.output_dir.unwrap_or(defaults.output_dir);
        if output_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output_dir",
                reason: "output directory must not be empty".to_string(),
            });
        }

        Ok(RunConfig {
            output_dir,
            force_field: force_field.trim().to_string(),
        })
    }
}
