#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tudo::libs::config::{Config, CONFIG_FILE_NAME};
    use tudo::libs::data_storage::DataStorage;

    #[test]
    fn test_config_defaults_save_and_recovery() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());
        std::env::set_var("LOCALAPPDATA", temp_dir.path());

        // Missing file falls back to defaults.
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.confirm_destructive);
        assert!(config.data_dir.is_none());

        // Save and read back.
        let config = Config {
            confirm_destructive: false,
            data_dir: Some(PathBuf::from("/tmp/tudo-data")),
        };
        config.save().unwrap();
        assert_eq!(Config::read().unwrap(), config);

        // An unparseable file falls back to defaults instead of failing.
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
