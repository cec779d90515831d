use std::env;
use std::num::ParseIntError;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_FILES_PATH: &str = "./dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding the built frontend (`index.html`, wasm bundle, logos).
    pub static_files_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            static_files_path: env::var("STATIC_FILES_PATH")
                .unwrap_or_else(|_| DEFAULT_STATIC_FILES_PATH.to_string()),
        })
    }
}
