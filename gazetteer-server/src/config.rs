//! Server configuration loaded from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_PATH: &str = "data/indian_states_cities.csv";
const DEFAULT_CACHE_DIR: &str = ".cache";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// CSV file with `City` and `State` columns, read once at startup.
    pub data_path: PathBuf,
    /// Where the embedding model's downloaded weights are cached.
    pub cache_dir: PathBuf,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {variable}: '{value}'")]
    InvalidValue {
        variable: &'static str,
        value: String,
    },
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GAZETTEER_HOST`: listen address (default: "0.0.0.0")
    /// - `GAZETTEER_PORT`: listen port (default: 5000)
    /// - `GAZETTEER_DATA_PATH`: city/state CSV (default: "data/indian_states_cities.csv")
    /// - `GAZETTEER_CACHE_DIR`: embedding model weight cache (default: ".cache")
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match env::var("GAZETTEER_HOST") {
            Ok(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                variable: "GAZETTEER_HOST",
                value: raw.clone(),
            })?,
            Err(_) => IpAddr::from(Ipv4Addr::UNSPECIFIED),
        };

        let port = match env::var("GAZETTEER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                variable: "GAZETTEER_PORT",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let data_path = env::var("GAZETTEER_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));

        let cache_dir = env::var("GAZETTEER_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR));

        Ok(Self {
            host,
            port,
            data_path,
            cache_dir,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
