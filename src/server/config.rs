use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_WEB_PORT: u16 = 3000;
const DEFAULT_REACTION_PACING_MS: u64 = 1000;
const DEFAULT_ROLE_CONFIRM_DELAY_MS: u64 = 1000;

/// Timing knobs shared by the reaction reconciler and the event bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionRoleSettings {
    /// Pause between successive reaction adds within one reconciliation pass.
    pub reaction_pacing: Duration,
    /// Delay before the event bridge re-reads a member's roles.
    pub role_confirm_delay: Duration,
}

impl Default for ReactionRoleSettings {
    fn default() -> Self {
        Self {
            reaction_pacing: Duration::from_millis(DEFAULT_REACTION_PACING_MS),
            role_confirm_delay: Duration::from_millis(DEFAULT_ROLE_CONFIRM_DELAY_MS),
        }
    }
}

pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    pub web_port: u16,

    pub register_commands: bool,
    pub guild_id: Option<u64>,

    /// `tracing` filter directive derived from `LOG_LEVEL`.
    pub log_filter: &'static str,

    pub reaction_roles: ReactionRoleSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let guild_id = match lookup("GUILD_ID").filter(|value| !value.trim().is_empty()) {
            Some(value) => Some(parse_value("GUILD_ID", &value)?),
            None => None,
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            web_port: parse_or("WEB_PORT", lookup("WEB_PORT"), DEFAULT_WEB_PORT)?,
            register_commands: yes(lookup("REGISTER_COMMANDS").as_deref()),
            guild_id,
            log_filter: log_filter(lookup("LOG_LEVEL").as_deref()),
            reaction_roles: ReactionRoleSettings {
                reaction_pacing: Duration::from_millis(parse_or(
                    "REACTION_PACING_MS",
                    lookup("REACTION_PACING_MS"),
                    DEFAULT_REACTION_PACING_MS,
                )?),
                role_confirm_delay: Duration::from_millis(parse_or(
                    "ROLE_CONFIRM_DELAY_MS",
                    lookup("ROLE_CONFIRM_DELAY_MS"),
                    DEFAULT_ROLE_CONFIRM_DELAY_MS,
                )?),
            },
        })
    }
}

/// Matches the usual ways of saying "true": `y`, `yes` and `true`, case-insensitive.
pub fn yes(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("y" | "yes" | "true")
    )
}

/// Maps a `LOG_LEVEL` name to a `tracing` level filter; unknown names fall back to info.
pub fn log_filter(level: Option<&str>) -> &'static str {
    match level.map(|l| l.trim().to_lowercase()).as_deref() {
        Some("silly" | "trace") => "trace",
        Some("debug") => "debug",
        Some("warn") => "warn",
        Some("error" | "fatal") => "error",
        _ => "info",
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })
}

fn parse_or<T: std::str::FromStr>(
    name: &str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(value) => parse_value(name, &value),
        None => Ok(default),
    }
}
