//! src/core/types.rs
//!
//! Core type definitions for binding analysis
//!
//! This module defines the fundamental types used throughout the application:
//! - `Modifier`: The eight modifiers an i3 binding can carry ($mod, Ctrl, Shift, Mod1-Mod5)
//! - `ModifierSet`: An exact combination of those modifiers
//! - `BindKind`: `bindsym` or `bindcode`
//! - `Binding`: One parsed binding line

use std::fmt;

/// Keyboard modifier names recognised in a binding's key specification.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Modifier {
    /// The configured modifier variable, `$mod` unless overridden
    Primary,
    /// Control key
    Ctrl,
    /// Shift key
    Shift,
    /// Usually Alt
    Mod1,
    /// Usually Num Lock
    Mod2,
    Mod3,
    /// Usually Super/Windows
    Mod4,
    Mod5,
}

impl Modifier {
    /// All modifiers in display order.
    pub const ALL: [Modifier; 8] = [
        Modifier::Primary,
        Modifier::Ctrl,
        Modifier::Shift,
        Modifier::Mod1,
        Modifier::Mod2,
        Modifier::Mod3,
        Modifier::Mod4,
        Modifier::Mod5,
    ];

    /// Canonical token as written in an i3 config.
    ///
    /// `Primary` has no fixed token of its own; it renders as `$mod`.
    /// Use [`ModifierSet::display_with`] to render a different variable name.
    pub fn token(self) -> &'static str {
        match self {
            Modifier::Primary => "$mod",
            Modifier::Ctrl => "Ctrl",
            Modifier::Shift => "Shift",
            Modifier::Mod1 => "Mod1",
            Modifier::Mod2 => "Mod2",
            Modifier::Mod3 => "Mod3",
            Modifier::Mod4 => "Mod4",
            Modifier::Mod5 => "Mod5",
        }
    }

    /// Resolves a key token to a modifier.
    ///
    /// The `primary` variable must match exactly: `$MOD` is not `$mod`.
    /// Other tokens are normalised with [`normalize_token`] and compared
    /// against the fixed modifier names. Anything else is not a modifier.
    pub fn from_token(token: &str, primary: &str) -> Option<Modifier> {
        if token == primary {
            return Some(Modifier::Primary);
        }

        let normalized = normalize_token(token);
        Modifier::ALL[1..]
            .iter()
            .copied()
            .find(|m| m.token() == normalized)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Lower-cases a token and upper-cases its first character.
///
/// `"shift"` and `"SHIFT"` both become `"Shift"`. A leading `$` has no upper
/// case form, so `"$MOD"` becomes `"$mod"`.
pub fn normalize_token(token: &str) -> String {
    let lower = token.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// An exact combination of modifiers.
///
/// Stored as a bitmask, one bit per [`Modifier`]. Two sets are equal only
/// when every flag matches, so `{$mod, Ctrl}` is a different combination
/// from `{$mod}`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ModifierSet(u8);

impl ModifierSet {
    /// The combination with no modifiers held.
    pub const EMPTY: ModifierSet = ModifierSet(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Builder-style insert.
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.insert(modifier);
        self
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.0 |= modifier.bit();
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Modifiers in the set, in [`Modifier::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        Modifier::ALL.into_iter().filter(move |m| self.contains(*m))
    }

    /// Renders the set as `+`-joined tokens using `primary` for the
    /// primary modifier.
    pub fn display_with(&self, primary: &str) -> String {
        self.iter()
            .map(|m| match m {
                Modifier::Primary => primary,
                other => other.token(),
            })
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter().fold(ModifierSet::EMPTY, ModifierSet::with)
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(Modifier::Primary.token()))
    }
}

/// Binding statement kind
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BindKind {
    /// `bindsym`: the terminal token is a keysym
    Sym,
    /// `bindcode`: the terminal token is a hardware keycode
    Code,
}

impl fmt::Display for BindKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindKind::Sym => write!(f, "bindsym"),
            BindKind::Code => write!(f, "bindcode"),
        }
    }
}

/// A single parsed binding line
///
/// # Example
/// ```ignore
/// // bindsym $mod+Shift+q kill
/// let binding = Binding {
///     kind: BindKind::Sym,
///     modifiers: ModifierSet::new().with(Modifier::Primary).with(Modifier::Shift),
///     keysym: Some("q".to_string()),
///     keycode: None,
///     line: 12,
/// };
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    /// Which statement declared it
    pub kind: BindKind,

    /// Modifiers named in the key specification
    pub modifiers: ModifierSet,

    /// Resolved keysym
    /// - `bindsym`: always present, the terminal token verbatim
    /// - `bindcode`: present only if the keycode table knows the code
    pub keysym: Option<String>,

    /// Raw keycode, only for `bindcode`
    pub keycode: Option<String>,

    /// 1-based line number in the source file
    pub line: usize,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match (&self.keysym, &self.keycode) {
            (Some(sym), _) => sym.clone(),
            (None, Some(code)) => format!("(code {})", code),
            (None, None) => "(unknown)".to_string(),
        };

        if self.modifiers.is_empty() {
            write!(f, "{}", key)
        } else {
            write!(f, "{}+{}", self.modifiers, key)
        }
    }
}
