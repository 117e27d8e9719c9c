use thiserror::Error;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_SERPER_BASE_URL: &str = "https://google.serper.dev";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not set in the environment")]
    MissingCredential { name: &'static str },

    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: &'static str, message: String },
}

/// Runtime configuration, built once at startup and handed to every component
/// that needs it. Components never read the environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    pub serper_api_key: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub serper_base_url: String,
    pub model: String,
    pub timeout: u64,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Config {
    /// Load configuration from the process environment. Fails before any
    /// network or file I/O when a required credential is missing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            serper_api_key: required(&lookup, "SERPER_API_KEY")?,
            openai_api_key: required(&lookup, "OPENAI_API_KEY")?,
            openai_base_url: optional(&lookup, "OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            serper_base_url: optional(&lookup, "SERPER_BASE_URL", DEFAULT_SERPER_BASE_URL),
            model: optional(&lookup, "OPENAI_MODEL", DEFAULT_MODEL),
            timeout: parsed(&lookup, "OPENAI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            max_tokens: parsed(&lookup, "OPENAI_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            temperature: parsed(&lookup, "OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serper_api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential {
                name: "SERPER_API_KEY",
            });
        }
        if self.openai_api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential {
                name: "OPENAI_API_KEY",
            });
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                name: "OPENAI_MAX_TOKENS",
                message: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue {
                name: "OPENAI_TEMPERATURE",
                message: format!("{} is outside 0.0..=2.0", self.temperature),
            });
        }
        Ok(())
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingCredential { name }),
    }
}

fn optional<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

fn parsed<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    name,
                    message: e.to_string(),
                })
        }
        _ => Ok(default),
    }
}
