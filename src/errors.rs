use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {file}: {source}")]
    Io { file: PathBuf, source: std::io::Error },
    #[error("Invalid config {file}: {message}")]
    Parse { file: PathBuf, message: String },
    #[error("Missing package name in {file}")]
    MissingPackage { file: PathBuf },
}

#[derive(Debug, Error)]
pub enum DepVizError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error for {package}@{version}: {message}")]
    Registry { package: String, version: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid graph file {file}: {message}")]
    GraphFile { file: PathBuf, message: String },

    #[error("Render failed: {0}")]
    Render(String),
}
