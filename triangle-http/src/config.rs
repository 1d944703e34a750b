use std::fmt;
use std::str::FromStr;

use rand::Rng;
use triangle::{Result, TriangleError};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";
const MIN_PRODUCTION_KEY_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = TriangleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(TriangleError::Config(format!(
                "TRIANGLE_ENV must be 'development' or 'production', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKeySource {
    Environment,
    Generated,
}

impl SecretKeySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretKeySource::Environment => "environment",
            SecretKeySource::Generated => "generated",
        }
    }
}

/// Process secret. Never printed; `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    value: String,
    source: SecretKeySource,
}

impl SecretKey {
    pub fn generate() -> Self {
        Self {
            value: generate_hex_key(),
            source: SecretKeySource::Generated,
        }
    }

    pub fn provided(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: SecretKeySource::Environment,
        }
    }

    pub fn source(&self) -> SecretKeySource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// 16 random bytes, hex encoded.
pub fn generate_hex_key() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    hex::encode(bytes)
}

/// Process-wide settings, resolved once at startup and handed to `serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub environment: Environment,
    pub debug: bool,
    pub secret_key: SecretKey,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            environment: Environment::Development,
            debug: false,
            secret_key: SecretKey::generate(),
        }
    }
}

impl ServerConfig {
    /// Reads `TRIANGLE_BIND_ADDR`, `TRIANGLE_ENV`, `TRIANGLE_DEBUG` and
    /// `TRIANGLE_SECRET_KEY`. Production rules are not checked here; callers
    /// apply their overrides and then call [`ServerConfig::validate`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("TRIANGLE_ENV") {
            Some(v) => v.parse()?,
            None => Environment::Development,
        };

        let bind_addr = lookup("TRIANGLE_BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let debug = lookup("TRIANGLE_DEBUG")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let secret_key = match lookup("TRIANGLE_SECRET_KEY").filter(|k| !k.trim().is_empty()) {
            Some(k) => SecretKey::provided(k.trim()),
            None => SecretKey::generate(),
        };

        Ok(Self {
            bind_addr,
            environment,
            debug,
            secret_key,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.environment != Environment::Production {
            return Ok(());
        }
        if self.secret_key.source() == SecretKeySource::Generated {
            return Err(TriangleError::Config(
                "TRIANGLE_SECRET_KEY is required in production mode".to_string(),
            ));
        }
        if self.secret_key.len() < MIN_PRODUCTION_KEY_LEN {
            return Err(TriangleError::Config(format!(
                "TRIANGLE_SECRET_KEY must be at least {} characters in production",
                MIN_PRODUCTION_KEY_LEN
            )));
        }
        if self.debug {
            return Err(TriangleError::Config(
                "debug mode cannot be used in production".to_string(),
            ));
        }
        Ok(())
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
