// src/config.rs

use std::{env, net::SocketAddr};

use dotenvy::dotenv;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: String,
    pub cors_origins: Vec<String>,
    /// Default number of leaderboard rows returned when the caller gives no limit.
    pub leaderboard_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 3000))),
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
            leaderboard_limit: None,
        }
    }
}

impl Config {
    /// Reads configuration from the environment (and `.env`).
    /// Unparseable values fall back to their defaults; the effective values are logged at startup.
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw.trim().parse().unwrap_or(defaults.bind_addr),
            Err(_) => defaults.bind_addr,
        };

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let log_dir = env::var("LOG_DIR").unwrap_or(defaults.log_dir);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or(defaults.cors_origins);

        let leaderboard_limit = match env::var("LEADERBOARD_LIMIT") {
            Ok(raw) => raw.trim().parse::<usize>().ok().filter(|limit| *limit > 0),
            Err(_) => None,
        };

        Self {
            bind_addr,
            rust_log,
            log_dir,
            cors_origins,
            leaderboard_limit,
        }
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
