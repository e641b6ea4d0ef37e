//! Environment-based configuration.

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    /// Listener port, bound on `0.0.0.0`.
    pub port: u16,
    /// Directory of static assets (homepage and friends).
    pub static_dir: PathBuf,
    /// Document-store address. Absence disables the external store; the
    /// listener starts either way.
    pub store_url: Option<String>,
    /// Document-store API key.
    pub store_key: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("MENUD_PORT", "3010"),
            static_dir: PathBuf::from(try_load::<String>("MENUD_STATIC_DIR", "static")),
            store_url: optional("MEILI_URL"),
            store_key: optional("MEILI_ADMIN_KEY"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            warn!("{key} not set");
            None
        }
    }
}
