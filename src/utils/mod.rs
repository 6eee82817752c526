pub mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    use crate::errors::ConfigError;

    /// Output selection: each present path enables that output.
    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct OutputConfig {
        pub order: Option<PathBuf>,
        pub puml: Option<PathBuf>,
        pub svg: Option<PathBuf>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct RegistryConfig {
        pub url: Option<String>,
    }

    /// One pipeline run, as described by a TOML config file.
    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Config {
        pub package: Option<String>,
        pub version: Option<String>,
        pub max_depth: Option<usize>,
        pub exclude: Option<String>,
        /// Prebuilt adjacency JSON; when set the registry is never contacted.
        pub graph: Option<PathBuf>,
        pub output: Option<OutputConfig>,
        pub registry: Option<RegistryConfig>,
    }

    impl Config {
        /// The root package name, required for every run.
        ///
        /// # Errors
        /// Returns `ConfigError::MissingPackage` when absent or blank.
        pub fn package_name(&self, file: &Path) -> Result<&str, ConfigError> {
            match self.package.as_deref().map(str::trim) {
                Some(p) if !p.is_empty() => Ok(p),
                _ => Err(ConfigError::MissingPackage { file: file.to_path_buf() }),
            }
        }
    }

    /// Load and parse a config file.
    ///
    /// # Errors
    /// Returns `ConfigError::Io` when the file cannot be read and
    /// `ConfigError::Parse` when it is not valid TOML for `Config`.
    pub fn load_config_at(path: &Path) -> Result<Config, ConfigError> {
        let data = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { file: path.to_path_buf(), source })?;
        toml::from_str::<Config>(&data)
            .map_err(|e| ConfigError::Parse { file: path.to_path_buf(), message: e.to_string() })
    }

}

pub mod paths {
    use std::path::Path;

    /// Create the parent directory of `path` when it has one.
    ///
    /// # Errors
    /// Propagates the underlying `std::io::Error` on failure.
    pub fn ensure_parent_dir(path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

}
