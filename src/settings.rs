use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub debug: bool,
    pub enable_swagger: bool,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Load from environment variables with APP_ prefix
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .set_default("debug", false)?
            .set_default("enable_swagger", true)?
            .set_default("port", 8080)?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        let settings = Settings::from_env().unwrap();
        assert!(!settings.debug);
        assert!(settings.enable_swagger);
        assert_eq!(settings.port, 8080);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: serialized with every other test touching the environment.
        unsafe {
            std::env::set_var("APP_PORT", "9090");
            std::env::set_var("APP_DEBUG", "true");
        }
        let settings = Settings::from_env();
        unsafe {
            std::env::remove_var("APP_PORT");
            std::env::remove_var("APP_DEBUG");
        }

        let settings = settings.unwrap();
        assert_eq!(settings.port, 9090);
        assert!(settings.debug);
        assert!(settings.enable_swagger);
    }
}
