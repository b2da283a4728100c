use qklist_core::config::{init_app, open_store};
use qklist_core::{AppConfig, ConfigError, ListManager, RecordStore};

#[test]
fn save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("conf").join("config.toml");
    let config = AppConfig::new(dir.path().join("items.json"));

    config.save(&config_path).unwrap();
    assert_eq!(AppConfig::load(&config_path).unwrap(), config);
}

#[test]
fn load_missing_file_reports_file_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = AppConfig::load(&dir.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::File { .. }));
}

#[test]
fn load_invalid_toml_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "database = [").unwrap();

    assert!(matches!(
        AppConfig::load(&path).unwrap_err(),
        ConfigError::Parse { .. }
    ));
}

#[test]
fn init_app_creates_usable_json_store() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let config = AppConfig::new(dir.path().join("data").join("items.json"));

    init_app(&config_path, &config).unwrap();

    assert!(config_path.exists());
    assert_eq!(
        std::fs::read_to_string(&config.database).unwrap().trim(),
        "[]"
    );

    let mut manager = ListManager::new(open_store(&config));
    manager.add(&["first"], 2).unwrap();
    assert_eq!(manager.list().unwrap()[0].description, "first.");
}

#[test]
fn saved_config_names_only_the_item_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let config = AppConfig::new(dir.path().join("items.json"));

    init_app(&config_path, &config).unwrap();

    let raw: toml::Table = std::fs::read_to_string(&config_path)
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(raw.keys().collect::<Vec<_>>(), vec!["database"]);
}

#[test]
fn open_store_on_uninitialized_path_fails_on_read() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::new(dir.path().join("items.json"));

    let err = open_store(&config).read_all().unwrap_err();
    assert!(err.is_read());
}

#[test]
fn init_app_keeps_existing_items() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let config = AppConfig::new(dir.path().join("items.json"));

    init_app(&config_path, &config).unwrap();
    ListManager::new(open_store(&config))
        .add(&["keep", "me"], 2)
        .unwrap();
    init_app(&config_path, &config).unwrap();

    let items = ListManager::new(open_store(&config)).list().unwrap();
    assert_eq!(items.len(), 1);
}
