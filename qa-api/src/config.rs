use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "QA_API";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub pagination: PaginationConfig,
    pub cors: Option<CorsConfig>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct PaginationConfig {
    pub page_size: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            database: DatabaseConfig {
                path: get_default_db_path(),
            },
            pagination: PaginationConfig::default(),
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            logging: LoggingConfig {
                level: "info".to_string(),
                file: None,
            },
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl ApiConfig {
    /// Loads the configuration file (creating it with defaults on first run)
    /// and applies `QA_API__SECTION__KEY` environment overrides.
    pub fn load(config_path: Option<PathBuf>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = config_path.unwrap_or_else(get_config_path);

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
            }
        }

        if !config_path.exists() {
            let default_config = toml::to_string(&ApiConfig::default()).map_err(|e| {
                ConfigError::Message(format!("Failed to serialize default config: {e}"))
            })?;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let config = Self::from_sources(&config_path, Environment::with_prefix(ENV_PREFIX))?;
        Ok((config, config_path))
    }

    pub fn from_sources(config_path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default(
                "database.path",
                defaults.database.path.to_string_lossy().to_string(),
            )?
            .set_default("pagination.page_size", defaults.pagination.page_size as i64)?
            .set_default(
                "cors.allowed_origins",
                defaults
                    .cors
                    .map(|cors| cors.allowed_origins)
                    .unwrap_or_default(),
            )?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .add_source(env.separator("__").try_parsing(true))
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;

        // Expand tilde in database path
        if config.database.path.starts_with("~") {
            if let Some(home) = home::home_dir() {
                let path_str = config.database.path.to_string_lossy();
                let expanded = path_str.replacen("~", &home.to_string_lossy(), 1);
                config.database.path = PathBuf::from(expanded);
            }
        }

        if config.pagination.page_size == 0 {
            return Err(ConfigError::Message(
                "pagination.page_size must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("qa-service/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

fn get_default_db_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("qa-service/qa.db")
    } else {
        PathBuf::from("qa.db")
    }
}
