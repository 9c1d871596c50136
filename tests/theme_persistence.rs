//! Theme preference stored in the configuration file

use savemate::config::{AppConfig, Theme, ThemeContext, ThemeStore, TomlThemeStore};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_first_run_defaults_to_light() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("savemate").join("savemate.toml");

    let context = ThemeContext::init(TomlThemeStore::with_path(&path));
    assert_eq!(context.theme(), Theme::Light);
    // Reading never creates the file
    assert!(!path.exists());
}

#[test]
fn test_toggle_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("savemate").join("savemate.toml");

    let mut context = ThemeContext::init(TomlThemeStore::with_path(&path));
    assert_eq!(context.toggle().unwrap(), Theme::Dark);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("theme = \"dark\""));

    let restarted = ThemeContext::init(TomlThemeStore::with_path(&path));
    assert_eq!(restarted.theme(), Theme::Dark);
}

#[test]
fn test_set_keeps_tick_rate() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("savemate.toml");
    AppConfig::new().with_tick_rate_ms(40).save_to(&path).unwrap();

    let mut context = ThemeContext::init(TomlThemeStore::with_path(&path));
    context.set(Theme::Dark).unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.tick_rate_ms, 40);
    assert_eq!(config.theme, Some(Theme::Dark));
}

#[test]
fn test_unwritable_store_keeps_active_theme() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the file should be makes every write fail
    let path = temp_dir.path().join("savemate.toml");
    fs::create_dir(&path).unwrap();

    let mut store = TomlThemeStore::with_path(&path);
    assert!(store.set_theme(Theme::Dark).is_err());

    let mut context = ThemeContext::init(store);
    assert_eq!(context.theme(), Theme::Light);
    assert!(context.toggle().is_err());
    assert_eq!(context.theme(), Theme::Light);
}
