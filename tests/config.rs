#[cfg(test)]
mod tests {
    use battlog::libs::config::{resolve_api_url, ApiConfig, Config, FormConfig, CONFIG_FILE_NAME};
    use battlog::libs::record::Field;
    use battlog::libs::validator::DEFAULT_NUMERIC_FIELDS;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points every read and write at a fresh temporary config file.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
                api_url: "https://batteries.example.com".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.api.is_none());
        assert!(config.form.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(ApiConfig {
                api_url: ctx.api_url.clone(),
            }),
            form: Some(FormConfig {
                numeric_fields: vec!["chargeCurrent".to_string(), "capacity".to_string()],
                notification_ms: 4000,
            }),
        };

        config.save_to(&ctx.config_path).unwrap();
        let read = Config::read_from(&ctx.config_path).unwrap();

        assert_eq!(read, config);
        assert_eq!(read.form().notification_ttl(), Duration::from_millis(4000));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_sections_are_not_written(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.config_path).unwrap();
        let raw = std::fs::read_to_string(&ctx.config_path).unwrap();
        assert!(!raw.contains("api"));
        assert!(!raw.contains("form"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_form_section_uses_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, r#"{"form":{"numeric_fields":["chargeCurrent","capacity"]}}"#).unwrap();

        let form = Config::read_from(&ctx.config_path).unwrap().form();
        assert_eq!(form.validator().numeric_fields(), &[Field::ChargeCurrent, Field::Capacity]);
        assert_eq!(form.notification_ttl(), Duration::from_millis(2500));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_form_section_uses_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, r#"{"form":{}}"#).unwrap();
        assert_eq!(Config::read_from(&ctx.config_path).unwrap().form(), FormConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    #[test]
    fn test_default_form_config_matches_default_validator() {
        let form = FormConfig::default();
        assert_eq!(form.validator().numeric_fields(), DEFAULT_NUMERIC_FIELDS.as_slice());
        assert_eq!(form.notification_ttl(), Duration::from_millis(2500));
    }

    #[test]
    fn test_unknown_numeric_field_keys_are_skipped() {
        let form = FormConfig {
            numeric_fields: vec!["capacity".to_string(), "voltage".to_string(), " temp ".to_string()],
            notification_ms: 2500,
        };
        assert_eq!(form.validator().numeric_fields(), &[Field::Capacity, Field::Temperature]);
    }

    #[test]
    fn test_api_url_environment_takes_precedence() {
        assert_eq!(
            resolve_api_url(Some("http://env:8080/"), Some("http://config:5000")),
            Some("http://env:8080".to_string())
        );
    }

    #[test]
    fn test_api_url_falls_back_to_config() {
        assert_eq!(resolve_api_url(None, Some("http://config:5000")), Some("http://config:5000".to_string()));
        assert_eq!(resolve_api_url(Some("  "), Some("http://config:5000")), Some("http://config:5000".to_string()));
    }

    #[test]
    fn test_api_url_unset() {
        assert_eq!(resolve_api_url(None, None), None);
        assert_eq!(resolve_api_url(Some(""), Some("")), None);
    }
}
