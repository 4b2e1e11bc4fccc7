use std::env;
use dotenv::dotenv;
use serde::Deserialize;
use log::{info, warn};
use shared::{Result, SharedError};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, e.g. `http://localhost:8000/api`
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub level: String,
}

impl Config {
    /// Loads `.env` files and builds the configuration from the process environment.
    pub fn load() -> Result<Self> {
        // ENV_FILE_PATH wins over the per-environment files
        match env::var("ENV_FILE_PATH") {
            Ok(env_file_path) if !env_file_path.is_empty() => {
                info!("Loading environment from ENV_FILE_PATH: {}", env_file_path);
                dotenv::from_filename(&env_file_path).ok();
            }
            _ => {
                dotenv().ok();
                let environment_hint = env::var("RUST_ENV")
                    .unwrap_or_else(|_| "development".to_string())
                    .parse()
                    .unwrap_or(Environment::Development);
                let env_file = format!(".env.{:?}", environment_hint).to_lowercase();
                if env_file != ".env.development" {
                    let _ = dotenv::from_filename(&env_file);
                }
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("RUST_ENV")
            .unwrap_or_else(|| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development);

        info!("Loading configuration for environment: {:?}", environment);

        let config = Config {
            api: Self::load_api_config(&environment, &lookup)?,
            logging: Self::load_logging_config(&environment, &lookup),
            environment,
        };

        config.validate()?;
        config.log_configuration();

        Ok(config)
    }

    fn load_api_config<F>(env: &Environment, lookup: &F) -> Result<ApiConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match env {
            Environment::Development => lookup("API_BASE_URL")
                .unwrap_or_else(|| "http://localhost:8000/api".to_string()),
            Environment::Test => lookup("API_BASE_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8000/api".to_string()),
            Environment::Production => lookup("API_BASE_URL").ok_or_else(|| {
                SharedError::Config("API_BASE_URL must be set in production".to_string())
            })?,
        };

        Ok(ApiConfig { base_url })
    }

    fn load_logging_config<F>(env: &Environment, lookup: &F) -> LoggingConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_level = match env {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Production => "info",
        };

        LoggingConfig {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| default_level.to_string()),
        }
    }

    fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api.base_url).map_err(|e| {
            SharedError::Config(format!("Invalid API_BASE_URL '{}': {}", self.api.base_url, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SharedError::Config(format!(
                "API_BASE_URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if self.environment == Environment::Production && parsed.scheme() != "https" {
            return Err(SharedError::Config(
                "Production API_BASE_URL must use https".to_string(),
            ));
        }

        Ok(())
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!("API base URL: {}", self.api.base_url);
        info!("Log level: {}", self.logging.level);

        if self.environment == Environment::Development {
            warn!("Running in development mode");
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
