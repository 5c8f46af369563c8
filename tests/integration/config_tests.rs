//! Configuration loading integration tests
//!
//! Missing store credentials must stop the service at startup.

#[cfg(test)]
mod tests {
    use keygate::KeygateError;
    use keygate::config::{Config, ConfigOverrides, KeygateConfig, StoreBackend};
    use keygate::server::builder::ServerBuilder;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn from_vars(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        Config {
            keygate: KeygateConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_minimal_file_uses_memory_store() {
        let file = write_config("server:\n  port: 8123\n");
        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().port, 8123);
        assert_eq!(config.storage().backend, StoreBackend::Memory);
    }

    #[tokio::test]
    async fn test_redis_file_without_token_is_rejected() {
        let file = write_config(
            "storage:\n  backend: redis\n  redis:\n    url: \"redis://localhost:6379\"\n",
        );
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, KeygateError::Config(ref msg) if msg.contains("REDIS_TOKEN")));
    }

    #[tokio::test]
    async fn test_malformed_file_is_config_error() {
        let file = write_config("server: [not, a, mapping]\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, KeygateError::Config(_)));
    }

    #[test]
    fn test_persistent_environment_requires_all_three_variables() {
        let complete = [
            ("KEYGATE_STORE", "redis"),
            ("REDIS_URL", "rediss://default@example.upstash.io:6379"),
            ("REDIS_TOKEN", "token"),
            ("WEBHOOK_URL", "https://discord.com/api/webhooks/1/abc"),
        ];
        assert!(from_vars(&complete).validate().is_ok());

        for missing in ["REDIS_URL", "REDIS_TOKEN", "WEBHOOK_URL"] {
            let vars: Vec<(&str, &str)> = complete
                .iter()
                .copied()
                .filter(|(name, _)| *name != missing)
                .collect();
            let err = from_vars(&vars).validate().unwrap_err();
            assert!(
                err.to_string().contains(missing),
                "expected {} in {}",
                missing,
                err
            );
        }
    }

    #[test]
    fn test_file_values_survive_empty_environment() {
        let mut config = KeygateConfig {
            server: keygate::config::ServerConfig {
                port: 9100,
                ..Default::default()
            },
            ..Default::default()
        };
        ConfigOverrides::from_lookup(|_| None)
            .unwrap()
            .apply(&mut config);
        assert_eq!(config.server.port, 9100);
    }

    #[tokio::test]
    async fn test_default_valued_override_beats_file() {
        let file = write_config("server:\n  port: 9000\n  host: \"127.0.0.1\"\n");
        let overrides = ConfigOverrides {
            host: Some("0.0.0.0".to_string()),
            port: Some(8000),
            ..Default::default()
        };
        let config = Config::load_with(Some(file.path()), overrides).await.unwrap();
        assert_eq!(config.server().address(), "0.0.0.0:8000");
    }

    #[actix_web::test]
    async fn test_unreachable_redis_fails_at_startup() {
        let mut config = from_vars(&[
            ("KEYGATE_STORE", "redis"),
            ("REDIS_URL", "rediss://127.0.0.1:1"),
            ("REDIS_TOKEN", "token"),
            ("WEBHOOK_URL", "https://discord.com/api/webhooks/1/abc"),
        ]);
        config.keygate.storage.redis.connection_timeout = 1;
        assert!(ServerBuilder::new().with_config(config).build().await.is_err());
    }
}
