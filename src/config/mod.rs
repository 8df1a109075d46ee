//! Configuration file discovery
//!
//! i3 looks for its config in several places. When the user doesn't give
//! an explicit path we search the same list, in order:
//!
//! 1. `~/.i3/config`
//! 2. `$XDG_CONFIG_HOME/i3/config` (or `~/.config/i3/config`)
//! 3. `/etc/i3/config`
//! 4. `$XDG_CONFIG_DIRS/i3/config` for each entry (or `/etc/xdg/i3/config`)
//!
//! The first readable regular file wins.
//!
//! # Example
//!
//! ```no_run
//! use i3av::config::ConfigLocator;
//!
//! let path = ConfigLocator::from_env().locate(None)?;
//! println!("Reading from {}", path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::{debug, info};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

mod error;

pub use error::{ConfigError, EXIT_NOT_FOUND, EXIT_UNREADABLE};

/// Finds the config file to read.
#[derive(Clone, Debug)]
pub struct ConfigLocator {
    search_paths: Vec<PathBuf>,
    home: Option<String>,
}

impl ConfigLocator {
    /// Creates a locator with an explicit search list.
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            home: None,
        }
    }

    /// Creates a locator from the process environment.
    pub fn from_env() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a locator using `lookup` for environment variables.
    ///
    /// `HOME`, `XDG_CONFIG_HOME` and `XDG_CONFIG_DIRS` are read through it.
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            search_paths: search_paths_with(&lookup),
            home: lookup("HOME"),
        }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Resolves the config path.
    ///
    /// An explicit path must be a readable file. Otherwise the search list
    /// is tried in order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Unreadable` if the explicit path can't be
    /// opened, or `ConfigError::NotFound` if nothing in the search list is
    /// readable.
    pub fn locate(&self, explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = explicit {
            let path = expand_with(path, self.home.as_deref());
            check_readable(&path).map_err(|source| ConfigError::Unreadable {
                path: path.clone(),
                source,
            })?;
            info!("Using config {}", path.display());
            return Ok(path);
        }

        for candidate in &self.search_paths {
            match check_readable(candidate) {
                Ok(()) => {
                    info!("Using config {}", candidate.display());
                    return Ok(candidate.clone());
                }
                Err(e) => debug!("Skipping {}: {}", candidate.display(), e),
            }
        }

        Err(ConfigError::NotFound {
            searched: self.search_paths.clone(),
        })
    }
}

impl Default for ConfigLocator {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Builds the default search list from `lookup`.
///
/// Empty variables are treated as unset.
pub fn search_paths_with<F>(lookup: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
    let home = var("HOME");
    let expand = |path: &str| expand_str(path, home.as_deref());

    let mut paths = vec![expand("~/.i3/config")];

    match var("XDG_CONFIG_HOME") {
        Some(dir) => paths.push(expand(&format!("{}/i3/config", dir))),
        None => paths.push(expand("~/.config/i3/config")),
    }

    paths.push(PathBuf::from("/etc/i3/config"));

    match var("XDG_CONFIG_DIRS") {
        Some(dirs) => paths.extend(
            dirs.split(':')
                .filter(|dir| !dir.is_empty())
                .map(|dir| expand(&format!("{}/i3/config", dir))),
        ),
        None => paths.push(PathBuf::from("/etc/xdg/i3/config")),
    }

    paths
}

/// Expands a leading `~` using `home`, leaving the path alone if unknown.
fn expand_str(path: &str, home: Option<&str>) -> PathBuf {
    PathBuf::from(shellexpand::tilde_with_context(path, || home).into_owned())
}

fn expand_with(path: &Path, home: Option<&str>) -> PathBuf {
    match path.to_str() {
        Some(s) if home.is_some() => expand_str(s, home),
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Checks that `path` is a regular file we can open.
fn check_readable(path: &Path) -> io::Result<()> {
    // Opening a directory succeeds on Linux, so check the type first
    let metadata = path.metadata()?;
    if !metadata.is_file() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"));
    }
    File::open(path).map(|_| ())
}

#[cfg(test)]
mod tests;
