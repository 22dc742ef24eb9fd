use std::{fmt::Display, str::FromStr};

use crate::server::error::config::ConfigError;

/// Reads a required environment variable.
///
/// # Returns
/// - `Ok(String)` - The variable's value
/// - `Err(ConfigError::MissingEnvVar)` - The variable is not set
pub fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional environment variable, treating empty values as unset.
pub fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Parses an optional raw value, falling back to `default` when absent.
///
/// # Arguments
/// - `name` - Variable name, used in the error
/// - `value` - Raw value if the variable was set
/// - `default` - Value used when `value` is `None`
///
/// # Returns
/// - `Ok(T)` - Parsed or default value
/// - `Err(ConfigError::InvalidValue)` - The value is set but does not parse as `T`
pub fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue {
                name: name.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

/// Reads and parses an optional environment variable.
pub fn env_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_or(name, optional_env(name), default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_default_when_unset() {
        let value: u64 = parse_or("READER_TIMEOUT_SECS", None, 60).unwrap();
        assert_eq!(value, 60);
    }

    #[test]
    fn parses_set_value() {
        let value: u64 = parse_or("READER_TIMEOUT_SECS", Some(" 15 ".to_string()), 60).unwrap();
        assert_eq!(value, 15);

        let flag: bool = parse_or("READER_CORRELATE", Some("true".to_string()), false).unwrap();
        assert!(flag);
    }

    #[test]
    fn rejects_unparsable_value() {
        let result: Result<u64, _> = parse_or("READER_TIMEOUT_SECS", Some("soon".to_string()), 60);

        match result {
            Err(ConfigError::InvalidValue { name, value, .. }) => {
                assert_eq!(name, "READER_TIMEOUT_SECS");
                assert_eq!(value, "soon");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }
}
