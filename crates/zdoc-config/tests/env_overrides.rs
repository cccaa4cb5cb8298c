use figment::Jail;
use pretty_assertions::assert_eq;
use zdoc_config::{ConfigError, ZdocConfig};

#[test]
fn env_vars_fill_registry_values() {
    Jail::expect_with(|jail| {
        jail.set_env("ZDOC_REGISTRY__INITIAL_CAPACITY", "16");
        jail.set_env("ZDOC_REGISTRY__MAX_ARGS_PER_ENTRY", "64");
        jail.set_env("ZDOC_LOGGING__LEVEL", "zdoc_core=trace");

        let config = ZdocConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.registry.initial_capacity, 16);
        assert_eq!(config.registry.max_args_per_entry, Some(64));
        assert_eq!(config.logging.level, "zdoc_core=trace");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".zdoc")?;
        jail.create_file(
            ".zdoc/config.toml",
            r"
[registry]
arg_capacity = 2
",
        )?;
        jail.set_env("ZDOC_REGISTRY__ARG_CAPACITY", "4");

        let config = ZdocConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.registry.arg_capacity, 4);
        Ok(())
    });
}

#[test]
fn env_value_is_validated() {
    Jail::expect_with(|jail| {
        jail.set_env("ZDOC_REGISTRY__MAX_ENTRIES", "0");

        match ZdocConfig::load() {
            Err(ConfigError::InvalidValue { field, .. }) => {
                assert_eq!(field, "registry.max_entries");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
        Ok(())
    });
}
