use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a missing config (EINVAL)
pub const EXIT_NOT_FOUND: u8 = 22;
/// Exit status for an unreadable config (ENOENT)
pub const EXIT_UNREADABLE: u8 = 2;

/// Errors that can occur while locating or reading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// None of the search paths is a readable file.
    #[error("Couldn't find or read the i3 configuration file (searched: {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },
    /// A specific path exists but cannot be opened or read.
    #[error("Failed to read config {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::NotFound { .. } => EXIT_NOT_FOUND,
            ConfigError::Unreadable { .. } => EXIT_UNREADABLE,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
