//! Keycode source tests
//!
//! External processes are only spawned through `sh` on Unix, so these run
//! without an X display.

use super::*;

#[test]
fn test_static_source_returns_table() {
    let table: KeycodeTable = [("38", "a")].into_iter().collect();
    let source = StaticSource::new(table.clone());

    assert_eq!(source.load().unwrap(), table);
}

#[test]
fn test_missing_program_is_reported() {
    let source = XmodmapSource::with_command("i3av-no-such-program", &[]);

    match source.load() {
        Err(KeycodeError::Missing(program)) => assert_eq!(program, "i3av-no-such-program"),
        other => panic!("Expected Missing error, got: {:?}", other),
    }
}

#[test]
fn test_missing_program_degrades_to_empty_table() {
    let source = XmodmapSource::with_command("i3av-no-such-program", &["-pke"]);
    assert!(load_or_empty(&source).is_empty());
}

#[cfg(unix)]
#[test]
fn test_parses_program_output() {
    let source = XmodmapSource::with_command(
        "sh",
        &["-c", "printf 'keycode  38 = a A a A\\nkeycode   8 =\\nkeycode  24 = q Q\\n'"],
    );

    let table = source.load().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("38"), Some("a"));
    assert_eq!(table.get("24"), Some("q"));
}

#[cfg(unix)]
#[test]
fn test_failing_program_degrades_to_empty_table() {
    let source = XmodmapSource::with_command("sh", &["-c", "echo 'keycode 38 = a'; exit 1"]);

    assert!(matches!(source.load(), Err(KeycodeError::Failed { .. })));
    assert!(load_or_empty(&source).is_empty());
}
