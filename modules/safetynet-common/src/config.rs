use std::env;
use std::str::FromStr;

use anyhow::Result;

use crate::error::SafetyNetError;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@safetynet.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_MAP_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Admin credential for the static authenticator
    pub admin_email: String,
    pub admin_password: String,
    pub session_secret: String,

    // Map tiles. None renders the plain-text coordinate fallback.
    pub map_tile_url: Option<String>,

    // Intake
    pub intake_latency_ms: u64,
    pub rate_limit_per_hour: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_host: "0.0.0.0".to_string(),
            web_port: 3000,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            session_secret: String::new(),
            map_tile_url: Some(DEFAULT_MAP_TILE_URL.to_string()),
            intake_latency_ms: 1500,
            rate_limit_per_hour: 10,
        }
    }
}

impl Config {
    /// Load configuration from the environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let map_tile_url = match lookup("MAP_TILE_URL") {
            None => defaults.map_tile_url,
            Some(v) if v.trim().is_empty() || v.trim().eq_ignore_ascii_case("none") => None,
            Some(v) => Some(v.trim().to_string()),
        };

        let config = Self {
            web_host: lookup("WEB_HOST").unwrap_or(defaults.web_host),
            web_port: parse_or(&lookup, "WEB_PORT", defaults.web_port)?,
            admin_email: lookup("ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_password: lookup("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            session_secret: lookup("SESSION_SECRET").unwrap_or_default(),
            map_tile_url,
            intake_latency_ms: parse_or(&lookup, "INTAKE_LATENCY_MS", defaults.intake_latency_ms)?,
            rate_limit_per_hour: parse_or(
                &lookup,
                "RATE_LIMIT_PER_HOUR",
                defaults.rate_limit_per_hour,
            )?,
        };

        config.log_keys();
        Ok(config)
    }

    /// Session signing secret. Prefers SESSION_SECRET; falls back to the
    /// admin password for local development.
    pub fn session_secret(&self) -> &str {
        if self.session_secret.is_empty() {
            &self.admin_password
        } else {
            &self.session_secret
        }
    }

    fn log_keys(&self) {
        fn preview(val: &str) -> String {
            if val.is_empty() {
                return "<not set>".to_string();
            }
            let head: String = val.chars().take(3).collect();
            format!("{head}...({} chars)", val.chars().count())
        }

        tracing::info!("Config loaded:");
        tracing::info!("  WEB: {}:{}", self.web_host, self.web_port);
        tracing::info!("  ADMIN_EMAIL: {}", self.admin_email);
        tracing::info!("  SESSION_SECRET: {}", preview(&self.session_secret));
        tracing::info!(
            "  MAP_TILE_URL: {}",
            self.map_tile_url.as_deref().unwrap_or("<disabled>")
        );
        tracing::info!("  INTAKE_LATENCY_MS: {}", self.intake_latency_ms);
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            SafetyNetError::Config(format!("{key} must be a number, got {raw:?}")).into()
        }),
    }
}
