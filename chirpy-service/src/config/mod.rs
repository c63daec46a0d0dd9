use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ChirpyConfig {
    pub common: core_config::Config,
    pub platform: Platform,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub polka: PolkaConfig,
    pub fileserver: FileServerConfig,
    pub security: SecurityConfig,
}

/// Deployment mode. Only `dev` unlocks destructive admin operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Dev,
    Prod,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_ttl_seconds: i64,
    pub refresh_token_expiry_days: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("refresh_token_expiry_days", &self.refresh_token_expiry_days)
            .finish()
    }
}

#[derive(Clone)]
pub struct PolkaConfig {
    pub api_key: String,
}

impl fmt::Debug for PolkaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolkaConfig")
            .field("api_key", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct FileServerConfig {
    pub root: String,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl ChirpyConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        Self::from_source(common_config, |key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_source<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: Option<&str>| get_env(&lookup, key, default);

        let config = ChirpyConfig {
            common,
            platform: parse_env(&lookup, "PLATFORM", "prod")?,
            service_name: get("SERVICE_NAME", Some("chirpy-service"))?,
            service_version: get("SERVICE_VERSION", Some(env!("CARGO_PKG_VERSION")))?,
            log_level: get("LOG_LEVEL", Some("info"))?,
            database: DatabaseConfig {
                url: get("DB_URL", None)?,
                max_connections: parse_env(&lookup, "DB_MAX_CONNECTIONS", "10")?,
                min_connections: parse_env(&lookup, "DB_MIN_CONNECTIONS", "1")?,
            },
            jwt: JwtConfig {
                secret: get("SECRET", None)?,
                access_token_ttl_seconds: parse_env(&lookup, "ACCESS_TOKEN_TTL_SECONDS", "3600")?,
                refresh_token_expiry_days: parse_env(&lookup, "REFRESH_TOKEN_EXPIRY_DAYS", "60")?,
            },
            polka: PolkaConfig {
                api_key: get("POLKA_KEY", None)?,
            },
            fileserver: FileServerConfig {
                root: get("FILESERVER_ROOT", Some("."))?,
            },
            security: SecurityConfig {
                allowed_origins: get("ALLOWED_ORIGINS", Some("http://localhost:8080"))?
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.common.port == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "PORT must be greater than 0"
            )));
        }

        if self.jwt.secret.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!("SECRET must not be empty")));
        }

        if self.polka.api_key.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "POLKA_KEY must not be empty"
            )));
        }

        if self.jwt.access_token_ttl_seconds <= 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "ACCESS_TOKEN_TTL_SECONDS must be positive"
            )));
        }

        if self.jwt.refresh_token_expiry_days <= 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "REFRESH_TOKEN_EXPIRY_DAYS must be positive"
            )));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS"
            )));
        }

        if self.platform == Platform::Prod
            && self.security.allowed_origins.iter().any(|o| o == "*")
        {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "Wildcard CORS origin not allowed in production"
            )));
        }

        Ok(())
    }

    pub fn is_dev(&self) -> bool {
        self.platform == Platform::Dev
    }
}

fn get_env<F>(lookup: &F, key: &str, default: Option<&str>) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => Ok(val),
        None => default.map(str::to_string).ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!(format!("{} is required but not set", key)))
        }),
    }
}

fn parse_env<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    get_env(lookup, key, Some(default))?
        .parse()
        .map_err(|e: T::Err| AppError::ConfigError(anyhow::anyhow!("Invalid {}: {}", key, e)))
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Platform::Dev),
            "prod" => Ok(Platform::Prod),
            _ => Err(format!("Invalid platform: {}", s)),
        }
    }
}
