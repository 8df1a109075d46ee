use super::super::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper: Builds an environment lookup from key/value pairs.
fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

/// Helper: Creates a temporary config file for testing.
fn create_test_config(dir: &TempDir, name: &str) -> PathBuf {
    let config_path = dir.path().join(name);
    fs::write(&config_path, "# Test config\nbindsym $mod+Return exec i3-sensible-terminal\n")
        .unwrap();
    config_path
}

#[test]
fn test_default_search_paths() {
    let paths = search_paths_with(env(&[("HOME", "/home/user")]));

    assert_eq!(
        paths,
        vec![
            PathBuf::from("/home/user/.i3/config"),
            PathBuf::from("/home/user/.config/i3/config"),
            PathBuf::from("/etc/i3/config"),
            PathBuf::from("/etc/xdg/i3/config"),
        ]
    );
}

#[test]
fn test_xdg_variables_replace_defaults() {
    let paths = search_paths_with(env(&[
        ("HOME", "/home/user"),
        ("XDG_CONFIG_HOME", "/cfg"),
        ("XDG_CONFIG_DIRS", "/opt/xdg:/usr/etc/xdg"),
    ]));

    assert_eq!(paths[1], PathBuf::from("/cfg/i3/config"));
    assert_eq!(paths[3], PathBuf::from("/opt/xdg/i3/config"));
    assert_eq!(paths[4], PathBuf::from("/usr/etc/xdg/i3/config"));
    assert_eq!(paths.len(), 5);
}

#[test]
fn test_empty_xdg_variable_is_unset() {
    let paths = search_paths_with(env(&[("HOME", "/home/user"), ("XDG_CONFIG_HOME", "")]));
    assert_eq!(paths[1], PathBuf::from("/home/user/.config/i3/config"));
}

#[test]
fn test_locate_first_readable() {
    let temp_dir = TempDir::new().unwrap();
    let second = create_test_config(&temp_dir, "second");
    let third = create_test_config(&temp_dir, "third");

    let locator = ConfigLocator::new(vec![temp_dir.path().join("missing"), second.clone(), third]);

    assert_eq!(locator.locate(None).unwrap(), second);
}

#[test]
fn test_locate_skips_directories() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir, "config");

    let locator = ConfigLocator::new(vec![temp_dir.path().to_path_buf(), config.clone()]);

    assert_eq!(locator.locate(None).unwrap(), config);
}

#[test]
fn test_locate_not_found_lists_searched_paths() {
    let temp_dir = TempDir::new().unwrap();
    let searched = vec![temp_dir.path().join("a"), temp_dir.path().join("b")];

    let result = ConfigLocator::new(searched.clone()).locate(None);

    match result.unwrap_err() {
        ConfigError::NotFound { searched: reported } => assert_eq!(reported, searched),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_locate_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir, "custom.conf");

    // Explicit path wins even if the search list has something readable
    let other = create_test_config(&temp_dir, "other.conf");
    let locator = ConfigLocator::new(vec![other]);

    assert_eq!(locator.locate(Some(&config)).unwrap(), config);
}

#[test]
fn test_locate_explicit_missing_is_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nonexistent.conf");
    let fallback = create_test_config(&temp_dir, "config");

    let err = ConfigLocator::new(vec![fallback]).locate(Some(&missing)).unwrap_err();

    assert_eq!(err.exit_code(), EXIT_UNREADABLE);
    match err {
        ConfigError::Unreadable { path, .. } => assert_eq!(path, missing),
        other => panic!("Expected Unreadable error, got: {:?}", other),
    }
}

#[test]
fn test_locate_expands_tilde_with_lookup_home() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir, "config");
    let home = temp_dir.path().to_str().unwrap().to_string();

    let locator = ConfigLocator::with_lookup(env(&[("HOME", home.as_str())]));

    assert_eq!(locator.locate(Some(Path::new("~/config"))).unwrap(), config);
}

#[test]
fn test_error_messages_and_exit_codes() {
    let err = ConfigError::NotFound {
        searched: vec![PathBuf::from("/etc/i3/config")],
    };
    assert!(err.to_string().contains("/etc/i3/config"));
    assert_eq!(err.exit_code(), EXIT_NOT_FOUND);
}
