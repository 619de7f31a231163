use birdnote::{Config, Result, Settings};
use std::fs;
use tempfile::TempDir;

fn test_config(temp_dir: &TempDir) -> Result<Config> {
    Config::new(Some(temp_dir.path().join("birdnote")))
}

#[test]
fn test_init_lifecycle() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir)?;

    assert!(!config.is_initialized());
    config.init()?;
    assert!(config.is_initialized());
    assert!(config.base_dir.exists());

    Ok(())
}

#[test]
fn test_defaults_when_nothing_persisted() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir)?;

    let settings = Settings::load(&config)?;
    assert_eq!(settings.folder, "eBird Notes");
    assert_eq!(settings.ebird_api_key, "jfekjedvescr");

    Ok(())
}

/// save({folder:"X", ebirdApiKey:"Y"}) then load() returns exactly that
#[test]
fn test_settings_round_trip() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir)?;

    let settings = Settings {
        folder: "X".to_string(),
        ebird_api_key: "Y".to_string(),
    };
    settings.save(&config)?;

    let loaded = Settings::load(&config)?;
    assert_eq!(loaded, settings);

    Ok(())
}

/// Persisted data merges over the defaults: a missing field keeps its default
#[test]
fn test_partial_settings_merge_over_defaults() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir)?;

    config.init()?;
    fs::write(&config.settings_path, r#"{"folder":"Field Notes"}"#)?;

    let settings = Settings::load(&config)?;
    assert_eq!(settings.folder, "Field Notes");
    assert_eq!(settings.ebird_api_key, "jfekjedvescr");

    Ok(())
}

/// The persisted schema uses the ebirdApiKey key casing
#[test]
fn test_persisted_schema_key_casing() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir)?;

    Settings::default().save(&config)?;

    let raw = fs::read_to_string(&config.settings_path)?;
    assert!(raw.contains("\"ebirdApiKey\""));
    assert!(raw.contains("\"folder\""));
    assert!(!raw.contains("ebird_api_key"));

    Ok(())
}
