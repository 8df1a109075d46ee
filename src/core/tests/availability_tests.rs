use crate::core::{
    available, AvailabilityIndex, BindKind, Binding, BindingParser, KeycodeTable, Modifier,
    ModifierSet,
};

/// Helper to create test bindings
fn sym_binding(modifiers: &[Modifier], key: &str) -> Binding {
    Binding {
        kind: BindKind::Sym,
        modifiers: modifiers.iter().copied().collect(),
        keysym: Some(key.to_string()),
        keycode: None,
        line: 1,
    }
}

fn mod_only() -> ModifierSet {
    ModifierSet::new().with(Modifier::Primary)
}

#[test]
fn test_nothing_bound_everything_available() {
    let candidates = ["a", "b"];
    assert_eq!(available(&candidates, mod_only(), &[]), vec!["a", "b"]);
    assert_eq!(available(&candidates, ModifierSet::EMPTY, &[]), vec!["a", "b"]);
}

#[test]
fn test_mod_and_shift_scenario() {
    let table = KeycodeTable::new();
    let bindings = BindingParser::new(&table)
        .parse_str("bindsym $mod+a exec foo\nbindsym $mod+Shift+b exec bar\n");
    let candidates = ["a", "b", "c"];

    assert_eq!(available(&candidates, mod_only(), &bindings), vec!["b", "c"]);
    assert_eq!(
        available(&candidates, mod_only().with(Modifier::Shift), &bindings),
        vec!["a", "c"]
    );
}

#[test]
fn test_exact_combination_match() {
    let bindings = vec![sym_binding(&[Modifier::Primary], "a")];
    let index = AvailabilityIndex::from_bindings(&bindings);

    assert!(index.is_used("a", mod_only()));
    assert!(!index.is_used("a", mod_only().with(Modifier::Ctrl)));
    assert!(!index.is_used("a", ModifierSet::EMPTY));
}

#[test]
fn test_superset_binding_does_not_block_subset() {
    let bindings = vec![sym_binding(&[Modifier::Primary, Modifier::Ctrl], "x")];

    assert_eq!(available(&["x"], mod_only(), &bindings), vec!["x"]);
    assert!(available(&["x"], mod_only().with(Modifier::Ctrl), &bindings).is_empty());
}

#[test]
fn test_case_insensitive_comparison() {
    let bindings = vec![
        sym_binding(&[Modifier::Primary], "a"),
        sym_binding(&[Modifier::Primary], "RETURN"),
    ];

    assert_eq!(
        available(&["A", "Return", "b"], mod_only(), &bindings),
        vec!["b"]
    );
}

#[test]
fn test_unresolved_keycode_is_not_subtracted() {
    let table = KeycodeTable::new();
    let bindings = BindingParser::new(&table).parse_str("bindcode 38 exec foo\n");

    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].keysym, None);
    assert_eq!(available(&["a"], ModifierSet::EMPTY, &bindings), vec!["a"]);
}

#[test]
fn test_resolved_keycode_is_subtracted() {
    let table: KeycodeTable = [("38", "a")].into_iter().collect();
    let bindings = BindingParser::new(&table).parse_str("bindcode $mod+38 exec foo\n");

    assert!(available(&["a"], mod_only(), &bindings).is_empty());
}

#[test]
fn test_order_is_preserved() {
    let bindings = vec![
        sym_binding(&[Modifier::Primary], "c"),
        sym_binding(&[Modifier::Primary], "a"),
    ];
    let candidates = ["e", "d", "c", "b", "a"];

    assert_eq!(
        available(&candidates, mod_only(), &bindings),
        vec!["e", "d", "b"]
    );
}

#[test]
fn test_used_count() {
    let mut index = AvailabilityIndex::new();
    index.add_binding(&sym_binding(&[Modifier::Primary], "a"));
    index.add_binding(&sym_binding(&[Modifier::Primary], "A"));
    index.add_binding(&sym_binding(&[Modifier::Primary, Modifier::Shift], "a"));

    assert_eq!(index.used_count(mod_only()), 1);
    assert_eq!(index.used_count(mod_only().with(Modifier::Shift)), 1);
    assert_eq!(index.used_count(ModifierSet::EMPTY), 0);
}
