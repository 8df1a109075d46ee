//! Keycode to keysym lookup table
//!
//! `bindcode` lines name a hardware keycode instead of a keysym. To compare
//! them with candidate keysyms the parser needs the keyboard layout's
//! mapping, which `xmodmap -pke` prints as:
//!
//! ```text
//! keycode  38 = a A a A
//! keycode 108 = NoSymbol Alt_R Meta_R
//! ```
//!
//! This module only holds the table and parses that text; running the
//! process lives in `crate::keysource`.

use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1, space0},
    combinator::rest,
    sequence::{preceded, separated_pair},
    IResult, Parser,
};
use std::collections::HashMap;

/// Placeholder xmodmap prints for an unmapped column
const NO_SYMBOL: &str = "NoSymbol";

/// Maps keycodes (decimal strings like `"38"`) to keysyms.
///
/// May be empty when no keycode source is available. Lookups on an empty
/// table simply miss.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KeycodeTable {
    entries: HashMap<String, String>,
}

impl KeycodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, keycode: impl Into<String>, keysym: impl Into<String>) {
        self.entries.insert(keycode.into(), keysym.into());
    }

    /// Keysym for `keycode`, if the layout maps it.
    pub fn get(&self, keycode: &str) -> Option<&str> {
        self.entries.get(keycode).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeycodeTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = KeycodeTable::new();
        for (code, sym) in iter {
            table.insert(code, sym);
        }
        table
    }
}

/// Parses the full output of `xmodmap -pke`.
///
/// Lines that aren't keycode mappings, or map a keycode to nothing but
/// `NoSymbol`, are skipped. For each keycode the first real keysym wins.
pub fn parse_xmodmap(output: &str) -> KeycodeTable {
    output
        .lines()
        .filter_map(|line| parse_keycode_line(line.trim()))
        .collect()
}

/// Parses one `keycode <N> = [NoSymbol ]*<keysym> ...` line.
///
/// Returns `(keycode, keysym)` or `None` if the line has no usable keysym.
pub fn parse_keycode_line(line: &str) -> Option<(&str, &str)> {
    let (_, (code, symbols)) = keycode_mapping(line).ok()?;

    let keysym = symbols
        .split_whitespace()
        .find(|sym| *sym != NO_SYMBOL)?;

    Some((code, keysym))
}

/// `keycode` <digits> `=` <rest of line>
fn keycode_mapping(input: &str) -> IResult<&str, (&str, &str)> {
    preceded(
        (tag("keycode"), space0),
        separated_pair(digit1, (space0, char('='), space0), rest),
    )
    .parse(input)
}
