use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const HOST_VAR: &str = "TICTACTOE_HOST";
pub const PORT_VAR: &str = "TICTACTOE_PORT";
pub const STATIC_DIR_VAR: &str = "TICTACTOE_STATIC_DIR";
pub const LOG_DIR_VAR: &str = "TICTACTOE_LOG_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    // Output directory of the frontend build
    pub static_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|var| env::var(var).ok())
    }

    // Every setting has a default, so an empty environment is valid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup(HOST_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: HOST_VAR,
                value,
                expected: "an IP address",
            })?,
            None => IpAddr::from([127, 0, 0, 1]),
        };
        let port = match lookup(PORT_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: PORT_VAR,
                value,
                expected: "a port number",
            })?,
            None => 8000,
        };
        let static_dir = lookup(STATIC_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./frontend/dist"));
        let log_dir = lookup(LOG_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./logs"));

        Ok(Config {
            host,
            port,
            static_dir,
            log_dir,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
