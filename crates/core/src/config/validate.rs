use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - PokeAPI base URL is present and timeout/TTL are non-zero
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // PokeAPI validation
    if config.pokeapi.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "pokeapi.base_url cannot be empty".to_string(),
        ));
    }
    if config.pokeapi.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "pokeapi.timeout_secs cannot be 0".to_string(),
        ));
    }
    if config.pokeapi.cache_ttl_secs == 0 {
        return Err(ConfigError::ValidationError(
            "pokeapi.cache_ttl_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use std::net::IpAddr;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".parse::<IpAddr>().unwrap(),
                port: 0,
            },
            ..Config::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_zero_ttl_fails() {
        let mut config = Config::default();
        config.pokeapi.cache_ttl_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_base_url_fails() {
        let mut config = Config::default();
        config.pokeapi.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }
}
