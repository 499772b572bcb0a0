// src/services/store/redis_store.rs
use async_trait::async_trait;
use log::{debug, info, warn};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};

use super::{CompanyFilter, CompanyStore};
use crate::config::AppConfig;
use crate::error::CompanySearchError;
use crate::types::Company;

/// Company documents kept as JSON strings in one Redis list.
#[derive(Clone)]
pub struct RedisCompanyStore {
    conn: MultiplexedConnection,
    key: String,
}

impl RedisCompanyStore {
    /// Opens the connection and pings it; the store is usable only if this succeeds.
    pub async fn connect(config: &AppConfig) -> Result<Self, CompanySearchError> {
        let client = Client::open(config.redis_url.as_str())?;
        let mut conn = client.get_multiplexed_async_connection().await?;

        let _: String = redis::cmd("PING").query_async(&mut conn).await?;

        let key = config.collection_key();
        info!("✅ Connected to Redis document store (collection: {})", key);

        Ok(Self { conn, key })
    }
}

#[async_trait]
impl CompanyStore for RedisCompanyStore {
    async fn count(&self) -> Result<usize, CompanySearchError> {
        let mut conn = self.conn.clone();
        let len: usize = conn.llen(&self.key).await?;
        Ok(len)
    }

    async fn insert(&self, company: &Company) -> Result<(), CompanySearchError> {
        let json_string = serde_json::to_string(company)?;
        let mut conn = self.conn.clone();
        let _: usize = conn.rpush(&self.key, json_string).await?;
        debug!("💾 Stored {} ({})", company.name, company.ticker);
        Ok(())
    }

    async fn find(&self, filter: &CompanyFilter) -> Result<Vec<Company>, CompanySearchError> {
        let mut conn = self.conn.clone();
        let documents: Vec<String> = conn.lrange(&self.key, 0, -1).await?;

        let results = decode_matches(&self.key, &documents, filter);

        debug!(
            "🔍 {} of {} documents matched on {}",
            results.len(),
            documents.len(),
            filter.field.as_str()
        );

        Ok(results)
    }
}

/// Decodes list entries in order, skipping unreadable ones, and keeps those the filter accepts.
fn decode_matches(key: &str, documents: &[String], filter: &CompanyFilter) -> Vec<Company> {
    documents
        .iter()
        .filter_map(|doc| match serde_json::from_str::<Company>(doc) {
            Ok(company) => Some(company),
            Err(e) => {
                warn!("Skipping unreadable document in {}: {}", key, e);
                None
            }
        })
        .filter(|company| filter.matches(company))
        .collect()
}
