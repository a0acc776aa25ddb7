use thiserror::Error;

/// Errors raised while reading files and handling config.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Not overwriting config file {0} because it failed to load")]
    ConfigUnreadable(std::path::PathBuf),

    #[error("File is too large to preview ({size} bytes, limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
