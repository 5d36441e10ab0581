use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path of the delimited ratings file
    #[serde(default = "default_ratings_path")]
    pub ratings_path: String,

    /// Field delimiter used in the ratings file
    #[serde(default = "default_ratings_delimiter")]
    pub ratings_delimiter: String,

    /// Write the sample data set when the ratings file is missing
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// Number of recommendations returned when the request does not say
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_ratings_path() -> String {
    "ratings.csv".to_string()
}

fn default_ratings_delimiter() -> String {
    ",".to_string()
}

fn default_seed_sample_data() -> bool {
    true
}

fn default_top_n() -> usize {
    5
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ratings_path: default_ratings_path(),
            ratings_delimiter: default_ratings_delimiter(),
            seed_sample_data: default_seed_sample_data(),
            default_top_n: default_top_n(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Returns the delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        match self.ratings_delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(AppError::InvalidInput(format!(
                "ratings delimiter must be a single ASCII character, got {:?}",
                self.ratings_delimiter
            ))),
        }
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
