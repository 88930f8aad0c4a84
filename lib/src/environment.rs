use crate::error::NotificationError;
use std::env;
use std::str::FromStr;

pub struct Environment;

impl Environment {
    pub fn string(
        env_name: &str,
        default: &str,
    ) -> String {
        env::var(env_name).ok().unwrap_or(default.to_string())
    }

    /// Reads a variable the process cannot run without.
    pub fn required(env_name: &str) -> Result<String, NotificationError> {
        env::var(env_name)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| NotificationError::internal(&format!("{env_name} environment variable is required")))
    }

    pub fn u16(
        env_name: &str,
        default: u16,
    ) -> Result<u16, NotificationError> {
        Self::parse(env_name, default)
    }

    pub fn u64(
        env_name: &str,
        default: u64,
    ) -> Result<u64, NotificationError> {
        Self::parse(env_name, default)
    }

    fn parse<T: FromStr>(
        env_name: &str,
        default: T,
    ) -> Result<T, NotificationError> {
        match env::var(env_name) {
            Ok(value) => value
                .parse::<T>()
                .map_err(|_| NotificationError::internal(&format!("Failed to parse {env_name}={value}"))),
            Err(_) => Ok(default),
        }
    }
}
