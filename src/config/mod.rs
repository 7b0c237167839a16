use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "prodtracker";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins; `*` allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join(APP_DIR)
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(format!(".{APP_DIR}"))
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("prodtracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("prodtracker.sqlite")
    }

    /// Load configuration from file (defaults if not found), then apply
    /// environment overrides.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::config_file())?;
        cfg.apply_env(|k| env::var(k).ok())?;
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse configuration file: {e}")))
    }

    /// Overrides: `DATABASE_URL` (SQLite path), `HOST`, `PORT`.
    pub fn apply_env<F>(&mut self, var: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db) = var("DATABASE_URL").filter(|s| !s.is_empty()) {
            self.database = db.trim_start_matches("sqlite://").to_string();
        }
        if let Some(host) = var("HOST").filter(|s| !s.is_empty()) {
            self.host = host;
        }
        if let Some(port) = var("PORT").filter(|s| !s.is_empty()) {
            self.port = port
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a number, got '{port}'")))?;
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize configuration: {e}")))
    }

    /// Resolve a `--db` value: absolute paths are kept, relative ones live
    /// in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Self::default()
            };
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(config.to_yaml()?.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
