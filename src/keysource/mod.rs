// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Keycode tables from the running X session
//!
//! `bindcode` lines can only be compared with keysyms if we know the
//! keyboard layout. The parser takes a [`KeycodeTable`] and never asks
//! where it came from; this module provides the sources:
//!
//! - **XmodmapSource**: runs `xmodmap -pke` once and parses its output
//! - **StaticSource**: a fixed table (tests, `--no-keycodes`)
//!
//! A missing `xmodmap` is not fatal. [`load_or_empty`] logs a warning and
//! hands back an empty table, so keycode bindings simply resolve to no
//! keysym.
//!
//! # Example
//! ```
//! use i3av::keysource::{load_or_empty, StaticSource};
//! use i3av::core::KeycodeTable;
//!
//! let table = load_or_empty(&StaticSource::new(KeycodeTable::new()));
//! assert!(table.is_empty());
//! ```

use log::{debug, warn};
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

use crate::core::keycodes::{parse_xmodmap, KeycodeTable};

/// Errors from loading a keycode table
#[derive(Debug, Error)]
pub enum KeycodeError {
    /// The external utility is not installed or not on PATH
    #[error("Couldn't call {0}. Keycodes will not be mapped to keysyms")]
    Missing(String),

    /// The utility ran but reported failure (e.g. no X display)
    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },

    #[error("IO error running keycode source: {0}")]
    Io(#[from] io::Error),
}

/// Anything that can produce a keycode table
pub trait KeycodeSource {
    fn load(&self) -> Result<KeycodeTable, KeycodeError>;
}

/// Reads the layout from `xmodmap -pke`.
#[derive(Clone, Debug)]
pub struct XmodmapSource {
    program: String,
    args: Vec<String>,
}

impl XmodmapSource {
    pub fn new() -> Self {
        Self {
            program: "xmodmap".to_string(),
            args: vec!["-pke".to_string()],
        }
    }

    /// Runs a different program that prints xmodmap-style output.
    pub fn with_command(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Default for XmodmapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl KeycodeSource for XmodmapSource {
    fn load(&self) -> Result<KeycodeTable, KeycodeError> {
        debug!("Running {} {}", self.program, self.args.join(" "));

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => KeycodeError::Missing(self.program.clone()),
                _ => KeycodeError::Io(e),
            })?;

        if !output.status.success() {
            return Err(KeycodeError::Failed {
                program: self.program.clone(),
                status: output.status,
            });
        }

        let table = parse_xmodmap(&String::from_utf8_lossy(&output.stdout));
        debug!("Loaded {} keycodes", table.len());

        Ok(table)
    }
}

/// A fixed, pre-built table.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    table: KeycodeTable,
}

impl StaticSource {
    pub fn new(table: KeycodeTable) -> Self {
        Self { table }
    }
}

impl KeycodeSource for StaticSource {
    fn load(&self) -> Result<KeycodeTable, KeycodeError> {
        Ok(self.table.clone())
    }
}

/// Loads a table, degrading to an empty one on any failure.
pub fn load_or_empty(source: &dyn KeycodeSource) -> KeycodeTable {
    match source.load() {
        Ok(table) => table,
        Err(e) => {
            warn!("{}", e);
            KeycodeTable::new()
        }
    }
}

#[cfg(test)]
mod tests;
