//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, treating unset and blank values as absent.
pub fn get_env_opt(name: &'static str) -> Option<String> {
    get_env(name).ok().filter(|value| !value.trim().is_empty())
}

/// Get an environment variable or a default.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Parse an optional environment variable; present-but-unparsable is an error.
pub fn get_env_parse_opt<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env_opt(name) {
        Some(_) => get_env_parse(name).map(Some),
        None => Ok(None),
    }
}

/// Split a comma-separated variable into trimmed, non-empty items.
pub fn get_env_list(name: &'static str) -> Option<Vec<String>> {
    get_env_opt(name).map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{} is not set", name),
            Error::WrongFormat(name) => write!(fmt, "{} has an invalid format", name),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable() {
        assert_eq!(
            get_env("SUPERAPP_TEST_ENVS_DEFINITELY_UNSET"),
            Err(Error::MissingEnv("SUPERAPP_TEST_ENVS_DEFINITELY_UNSET"))
        );
        assert_eq!(get_env_or("SUPERAPP_TEST_ENVS_DEFINITELY_UNSET", "x"), "x");
        assert_eq!(
            get_env_parse_opt::<u64>("SUPERAPP_TEST_ENVS_DEFINITELY_UNSET"),
            Ok(None)
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::WrongFormat("SUPERAPP_HTTP_TIMEOUT_SECS").to_string(),
            "SUPERAPP_HTTP_TIMEOUT_SECS has an invalid format"
        );
    }
}
