// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! src/core/parser.rs
//!
//! i3 configuration file parser
//!
//! This module extracts `bindsym` and `bindcode` statements from an i3
//! config. It handles:
//! - Comments and blank lines
//! - Modifier tokens in any casing (`shift`, `SHIFT`, `Shift`)
//! - A configurable modifier variable (`$mod` by default)
//! - Keycode resolution through a [`KeycodeTable`]
//! - Line numbers for diagnostics
//!
//! # Architecture
//! Each line is matched against a single regex that captures the bind kind
//! and the key specification. Everything else on the line (the command, any
//! other directive) is ignored. Lines that don't match are skipped without
//! error: the parser is not a config validator.

use log::debug;
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

use crate::config::ConfigError;
use crate::core::keycodes::KeycodeTable;
use crate::core::types::{BindKind, Binding, Modifier, ModifierSet};

/// Modifier variable used when none is configured
pub const DEFAULT_PRIMARY: &str = "$mod";

/// `bind(sym|code)`, one whitespace character, then the key spec up to the
/// next whitespace character.
static BIND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*bind(sym|code)\s(.+?)\s").expect("binding pattern should be valid regex")
});

/// Parses binding lines against a keycode table and modifier variable.
///
/// # Example
/// ```
/// use i3av::core::{BindingParser, KeycodeTable, Modifier};
///
/// let keycodes = KeycodeTable::new();
/// let parser = BindingParser::new(&keycodes);
/// let bindings = parser.parse_str("bindsym $mod+Shift+q kill\n");
///
/// assert_eq!(bindings.len(), 1);
/// assert_eq!(bindings[0].keysym.as_deref(), Some("q"));
/// assert!(bindings[0].modifiers.contains(Modifier::Shift));
/// ```
#[derive(Clone, Debug)]
pub struct BindingParser<'a> {
    keycodes: &'a KeycodeTable,
    primary: String,
}

impl<'a> BindingParser<'a> {
    /// Creates a parser using `$mod` as the modifier variable.
    pub fn new(keycodes: &'a KeycodeTable) -> Self {
        Self {
            keycodes,
            primary: DEFAULT_PRIMARY.to_string(),
        }
    }

    /// Overrides the modifier variable name (e.g. `$super`).
    pub fn with_primary(mut self, primary: impl Into<String>) -> Self {
        self.primary = primary.into();
        self
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Unreadable` if the file cannot be opened or
    /// read. Malformed lines are never an error.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Binding>, ConfigError> {
        let bytes = fs::read(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        // Only binding lines matter, so stray non-UTF-8 bytes elsewhere are replaced
        let bindings = self.parse_str(&String::from_utf8_lossy(&bytes));
        debug!("Parsed {} bindings from {}", bindings.len(), path.display());

        Ok(bindings)
    }

    /// Parses config content already in memory.
    pub fn parse_str(&self, content: &str) -> Vec<Binding> {
        content
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| self.parse_line(line, idx + 1))
            .collect()
    }

    /// Parses a single line, returning `None` if it isn't a binding.
    pub fn parse_line(&self, line: &str, line_num: usize) -> Option<Binding> {
        // Skip empty lines and comments
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            return None;
        }

        let captures = BIND_PATTERN.captures(line_trimmed)?;
        let kind = match &captures[1] {
            "sym" => BindKind::Sym,
            _ => BindKind::Code,
        };

        let tokens = split_keys(&captures[2]);
        let (terminal, modifier_tokens) = tokens.split_last()?;
        let modifiers = parse_modifiers(modifier_tokens, &self.primary);

        let binding = match kind {
            BindKind::Sym => Binding {
                kind,
                modifiers,
                keysym: Some(terminal.to_string()),
                keycode: None,
                line: line_num,
            },
            BindKind::Code => Binding {
                kind,
                modifiers,
                keysym: self.keycodes.get(terminal).map(str::to_string),
                keycode: Some(terminal.to_string()),
                line: line_num,
            },
        };

        debug!("line {}: {} {}", line_num, binding.kind, binding);
        Some(binding)
    }
}

/// Parses a config file with the default `$mod` variable.
pub fn parse_config_file(path: &Path, keycodes: &KeycodeTable) -> Result<Vec<Binding>, ConfigError> {
    BindingParser::new(keycodes).parse_file(path)
}

/// Splits a key specification on `+`
///
/// `"$mod+Shift+a"` → `["$mod", "Shift", "a"]`. The last token is always
/// the terminal key or keycode.
pub fn split_keys(spec: &str) -> Vec<&str> {
    spec.split('+').collect()
}

/// Builds the modifier set from the non-terminal tokens.
///
/// Tokens that aren't modifiers are ignored.
pub fn parse_modifiers<S: AsRef<str>>(tokens: &[S], primary: &str) -> ModifierSet {
    tokens
        .iter()
        .filter_map(|token| Modifier::from_token(token.as_ref(), primary))
        .collect()
}
