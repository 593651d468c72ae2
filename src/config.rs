use lambda_http::tracing::Level;

use crate::error::ServerError;

/// Runtime settings read from the function's environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: Level,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: Level::TRACE,
            log_json: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|_| invalid("LOG_LEVEL", &value))?,
            None => defaults.log_level,
        };

        let log_json = match lookup("LOG_JSON") {
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|_| invalid("LOG_JSON", &value))?,
            None => defaults.log_json,
        };

        Ok(Config {
            log_level,
            log_json,
        })
    }
}

fn invalid(name: &str, value: &str) -> ServerError {
    ServerError::Configuration(format!("invalid {name}: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ServerError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn level_is_case_insensitive() {
        let config = config_from(&[("LOG_LEVEL", "Warn"), ("LOG_JSON", "false")]).unwrap();
        assert_eq!(config.log_level, Level::WARN);
        assert!(!config.log_json);
    }

    #[test]
    fn invalid_level_is_a_configuration_error() {
        assert_eq!(
            config_from(&[("LOG_LEVEL", "loud")]),
            Err(ServerError::Configuration(
                "invalid LOG_LEVEL: loud".to_string()
            ))
        );
    }

    #[test]
    fn invalid_json_flag_is_a_configuration_error() {
        assert_eq!(
            config_from(&[("LOG_JSON", "yes")]),
            Err(ServerError::Configuration(
                "invalid LOG_JSON: yes".to_string()
            ))
        );
    }
}
