//! Named modifier combinations to report on
//!
//! The four everyday combinations (`$mod`, `$mod+Shift`, `$mod+Ctrl`,
//! `$mod+Ctrl+Shift`) are predefined. Users can also ask for arbitrary
//! combinations such as `Mod1+Shift`, parsed with the same token rules as
//! binding lines.

use std::fmt;
use thiserror::Error;

use crate::core::types::{Modifier, ModifierSet};

/// Errors from parsing a user-supplied combination
#[derive(Debug, Error, PartialEq)]
pub enum CombinationError {
    #[error("Empty modifier combination")]
    Empty,

    #[error("Unknown modifier '{token}' in combination '{spec}'")]
    UnknownModifier { token: String, spec: String },
}

/// The predefined combinations
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Preset {
    /// `$mod`
    Mod,
    /// `$mod+Shift`
    Shift,
    /// `$mod+Ctrl`
    Ctrl,
    /// `$mod+Ctrl+Shift`
    Triplet,
}

impl Preset {
    /// Presets in report order.
    pub const ALL: [Preset; 4] = [Preset::Mod, Preset::Shift, Preset::Ctrl, Preset::Triplet];

    pub fn modifiers(self) -> ModifierSet {
        let base = ModifierSet::new().with(Modifier::Primary);
        match self {
            Preset::Mod => base,
            Preset::Shift => base.with(Modifier::Shift),
            Preset::Ctrl => base.with(Modifier::Ctrl),
            Preset::Triplet => base.with(Modifier::Ctrl).with(Modifier::Shift),
        }
    }

    /// Label as written in a config, e.g. `$mod+Ctrl+Shift`.
    ///
    /// Built by hand rather than from the set so Ctrl precedes Shift the
    /// way i3 users write it.
    pub fn label(self, primary: &str) -> String {
        match self {
            Preset::Mod => primary.to_string(),
            Preset::Shift => format!("{}+Shift", primary),
            Preset::Ctrl => format!("{}+Ctrl", primary),
            Preset::Triplet => format!("{}+Ctrl+Shift", primary),
        }
    }
}

/// A modifier combination with the label used in reports.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Combination {
    pub label: String,
    pub modifiers: ModifierSet,
}

impl Combination {
    pub fn preset(preset: Preset, primary: &str) -> Self {
        Self {
            label: preset.label(primary),
            modifiers: preset.modifiers(),
        }
    }

    /// Parses a user-supplied combination like `$mod+Mod1` or `ctrl+shift`.
    ///
    /// Unlike binding lines, every token must name a modifier: there is no
    /// terminal key here.
    ///
    /// # Errors
    ///
    /// Returns `CombinationError::Empty` for a blank spec and
    /// `CombinationError::UnknownModifier` for any unrecognised token.
    pub fn parse(spec: &str, primary: &str) -> Result<Self, CombinationError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(CombinationError::Empty);
        }

        let mut modifiers = ModifierSet::new();
        for token in spec.split('+') {
            let modifier = Modifier::from_token(token.trim(), primary).ok_or_else(|| {
                CombinationError::UnknownModifier {
                    token: token.to_string(),
                    spec: spec.to_string(),
                }
            })?;
            modifiers.insert(modifier);
        }

        Ok(Self {
            label: spec.to_string(),
            modifiers,
        })
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
