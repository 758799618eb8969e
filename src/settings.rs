use std::env;

use derive_more::Display;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub seed_data: bool,
}

#[derive(Debug, Display, PartialEq)]
pub enum SettingsError {
    #[display(fmt = "invalid value '{}' for {}", _1, _0)]
    Invalid(&'static str, String),
}

impl std::error::Error for SettingsError {}

impl Settings {
    /// Reads the process environment. Call `dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| SettingsError::Invalid("PORT", raw))?,
            None => DEFAULT_PORT,
        };
        let seed_data = match lookup("SEED_DATA") {
            Some(raw) => parse_flag(&raw).ok_or(SettingsError::Invalid("SEED_DATA", raw))?,
            None => true,
        };
        Ok(Self {
            host,
            port,
            seed_data,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
