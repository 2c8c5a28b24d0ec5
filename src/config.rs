//! Client configuration resolved from build-time environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so overrides are
//! baked in with `option_env!` when the crate is compiled. Parsing goes
//! through a lookup closure so tests can feed arbitrary values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_SYSTEM_NAME: &str = "学生选课系统";
pub const DEFAULT_ACCESS_TOKEN_DAYS: u32 = 7;
pub const DEFAULT_REFRESH_TOKEN_DAYS: u32 = 30;
pub const DEFAULT_NOTICE_MS: u32 = 3000;

/// A configuration value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

/// Expiry horizons for the two token cookies, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    pub access_days: u32,
    pub refresh_days: u32,
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self { access_days: DEFAULT_ACCESS_TOKEN_DAYS, refresh_days: DEFAULT_REFRESH_TOKEN_DAYS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every REST path, without a trailing slash.
    pub api_base: String,
    /// Shown in the window title and the layout header.
    pub system_name: String,
    pub tokens: TokenLifetimes,
    /// How long a guard notice stays visible.
    pub notice_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            system_name: DEFAULT_SYSTEM_NAME.to_owned(),
            tokens: TokenLifetimes::default(),
            notice_ms: DEFAULT_NOTICE_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// Optional:
    /// - `COURSE_SELECT_API_BASE`: default `/api`
    /// - `COURSE_SELECT_SYSTEM_NAME`: default `学生选课系统`
    /// - `COURSE_SELECT_ACCESS_TOKEN_DAYS`: default 7
    /// - `COURSE_SELECT_REFRESH_TOKEN_DAYS`: default 30
    /// - `COURSE_SELECT_NOTICE_MS`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric override does not parse or is zero.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "COURSE_SELECT_API_BASE" => option_env!("COURSE_SELECT_API_BASE"),
            "COURSE_SELECT_SYSTEM_NAME" => option_env!("COURSE_SELECT_SYSTEM_NAME"),
            "COURSE_SELECT_ACCESS_TOKEN_DAYS" => option_env!("COURSE_SELECT_ACCESS_TOKEN_DAYS"),
            "COURSE_SELECT_REFRESH_TOKEN_DAYS" => option_env!("COURSE_SELECT_REFRESH_TOKEN_DAYS"),
            "COURSE_SELECT_NOTICE_MS" => option_env!("COURSE_SELECT_NOTICE_MS"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric override does not parse or is zero.
    pub fn from_lookup<'a, F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let api_base = lookup("COURSE_SELECT_API_BASE")
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        let system_name = lookup("COURSE_SELECT_SYSTEM_NAME")
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_SYSTEM_NAME)
            .to_owned();
        let tokens = TokenLifetimes {
            access_days: parse_positive(
                "COURSE_SELECT_ACCESS_TOKEN_DAYS",
                lookup("COURSE_SELECT_ACCESS_TOKEN_DAYS"),
                DEFAULT_ACCESS_TOKEN_DAYS,
            )?,
            refresh_days: parse_positive(
                "COURSE_SELECT_REFRESH_TOKEN_DAYS",
                lookup("COURSE_SELECT_REFRESH_TOKEN_DAYS"),
                DEFAULT_REFRESH_TOKEN_DAYS,
            )?,
        };
        let notice_ms = parse_positive("COURSE_SELECT_NOTICE_MS", lookup("COURSE_SELECT_NOTICE_MS"), DEFAULT_NOTICE_MS)?;

        Ok(Self { api_base, system_name, tokens, notice_ms })
    }
}

fn parse_positive(key: &'static str, raw: Option<&str>, default: u32) -> Result<u32, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    let value = raw
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw.to_owned() })?;
    if value == 0 {
        return Err(ConfigError::Zero { key });
    }
    Ok(value)
}
