// src/config.rs
use crate::error::CompanySearchError;
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub redis_url: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub collection: String,
    pub seed_csv: String,
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379/".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            database: "PublicCompanies".to_string(),
            collection: "Companies".to_string(),
            seed_csv: "companies.csv".to_string(),
            static_dir: "views".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads settings from the environment, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, CompanySearchError> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| CompanySearchError::Config(format!("invalid PORT '{}': {}", raw, e)))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            host: env::var("BIND_HOST").unwrap_or(defaults.host),
            port,
            database: env::var("STORE_DATABASE").unwrap_or(defaults.database),
            collection: env::var("STORE_COLLECTION").unwrap_or(defaults.collection),
            seed_csv: env::var("SEED_CSV").unwrap_or(defaults.seed_csv),
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Redis key holding the company documents, e.g. `PublicCompanies:Companies`.
    pub fn collection_key(&self) -> String {
        format!("{}:{}", self.database, self.collection)
    }
}
