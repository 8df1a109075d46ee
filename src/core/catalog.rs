//! src/core/catalog.rs
//!
//! Static registry of candidate keysyms
//!
//! Keys are organised in named groups ("0-9", "a-z", "function", ...) so the
//! user can choose which keysyms are worth checking. The table is a
//! process-wide constant; nothing mutates it.

/// Groups checked when the user doesn't name any.
pub const DEFAULT_GROUPS: &[&str] = &["0-9", "a-z", "arrow", "function", "common"];

/// Named key groups in catalog order.
const KEY_GROUPS: &[(&str, &[&str])] = &[
    ("0-9", &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]),
    (
        "a-z",
        &[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q",
            "r", "s", "t", "u", "v", "w", "x", "y", "z",
        ],
    ),
    ("nordic", &["aring", "adiaeresis", "odiaeresis", "oslash", "ae"]),
    ("arrow", &["Left", "Up", "Right", "Down"]),
    (
        "common",
        &[
            "BackSpace", "Tab", "Return", "Pause", "Scroll_Lock", "Escape", "Delete", "Prior",
            "Next", "End", "Insert", "Menu", "Break", "space", "comma", "period", "slash",
            "semicolon", "backslash", "bracketleft", "bracketright", "plus", "minus", "equal",
            "less", "greater", "apostrophe", "asterisk", "grave", "section",
        ],
    ),
    (
        "uncommon",
        &[
            "Clear", "Sys_Req", "Select", "Print", "Begin", "Find", "Cancel", "Help", "Execute",
            "Undo", "Redo",
        ],
    ),
    (
        "function",
        &["F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12"],
    ),
    (
        "numpad",
        &["KP_0", "KP_1", "KP_2", "KP_3", "KP_4", "KP_5", "KP_6", "KP_7", "KP_8", "KP_9"],
    ),
    (
        "numpad_other",
        &[
            "KP_Space", "KP_Tab", "KP_Enter", "KP_F1", "KP_F2", "KP_F3", "KP_F4", "KP_Home",
            "KP_Left", "KP_Up", "KP_Right", "KP_Down", "KP_Prior", "KP_Next", "KP_End",
            "KP_Begin", "KP_Insert", "KP_Delete", "KP_Equal", "KP_Multiply", "KP_Add",
            "KP_Separator", "KP_Subtract", "KP_Decimal", "KP_Divide",
        ],
    ),
];

/// Looks up a single group by name.
pub fn group(name: &str) -> Option<&'static [&'static str]> {
    KEY_GROUPS
        .iter()
        .find(|(group_name, _)| *group_name == name)
        .map(|(_, keys)| *keys)
}

/// All group names in catalog order.
pub fn group_names() -> impl Iterator<Item = &'static str> {
    KEY_GROUPS.iter().map(|(name, _)| *name)
}

/// Resolves group names into a flat list of candidate keysyms.
///
/// Groups are appended in the order requested. Unknown names are skipped.
/// No deduplication happens across groups, so requesting the same group
/// twice lists its keys twice.
///
/// # Example
/// ```
/// use i3av::core::catalog::resolve;
///
/// let keys = resolve(&["arrow", "nope", "0-9"]);
/// assert_eq!(keys[..4], ["Left", "Up", "Right", "Down"]);
/// assert_eq!(keys.len(), 14);
/// ```
pub fn resolve<S: AsRef<str>>(group_names: &[S]) -> Vec<String> {
    group_names
        .iter()
        .filter_map(|name| group(name.as_ref()))
        .flat_map(|keys| keys.iter().map(|k| k.to_string()))
        .collect()
}
