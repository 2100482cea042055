use std::env;

/// Translation layer configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Cache attributes declared without an explicit `cache` option (default: true)
    pub cache: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POLYGLOT_CACHE` - Cache translated attributes by default (default: true).
    ///   Accepts `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`.
    pub fn from_env() -> Self {
        Self {
            cache: env::var("POLYGLOT_CACHE")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
