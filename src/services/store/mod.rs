// src/services/store/mod.rs
use async_trait::async_trait;
use regex::{Regex, RegexBuilder};

use crate::error::CompanySearchError;
use crate::types::{Company, SearchField};

pub mod memory_store;
pub mod redis_store;

pub use memory_store::MemoryCompanyStore;
pub use redis_store::RedisCompanyStore;

/// Case-insensitive substring match on one company field.
#[derive(Debug, Clone)]
pub struct CompanyFilter {
    pub field: SearchField,
    pattern: Regex,
}

impl CompanyFilter {
    /// The search text is matched literally; an empty text matches every record.
    pub fn new(field: SearchField, search: &str) -> Result<Self, CompanySearchError> {
        let pattern = RegexBuilder::new(&regex::escape(search))
            .case_insensitive(true)
            .build()?;
        Ok(Self { field, pattern })
    }

    pub fn matches(&self, company: &Company) -> bool {
        self.pattern.is_match(self.field.value_of(company))
    }
}

/// Document store holding the company collection.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn count(&self) -> Result<usize, CompanySearchError>;

    async fn insert(&self, company: &Company) -> Result<(), CompanySearchError>;

    /// Returns every matching record in the store's natural order.
    async fn find(&self, filter: &CompanyFilter) -> Result<Vec<Company>, CompanySearchError>;
}
