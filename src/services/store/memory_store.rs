// src/services/store/memory_store.rs
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CompanyFilter, CompanyStore};
use crate::error::CompanySearchError;
use crate::types::Company;

/// In-process store with the same ordering and matching rules as Redis.
#[derive(Debug, Default)]
pub struct MemoryCompanyStore {
    companies: RwLock<Vec<Company>>,
}

impl MemoryCompanyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_companies(companies: Vec<Company>) -> Self {
        Self {
            companies: RwLock::new(companies),
        }
    }
}

#[async_trait]
impl CompanyStore for MemoryCompanyStore {
    async fn count(&self) -> Result<usize, CompanySearchError> {
        Ok(self.companies.read().await.len())
    }

    async fn insert(&self, company: &Company) -> Result<(), CompanySearchError> {
        self.companies.write().await.push(company.clone());
        Ok(())
    }

    async fn find(&self, filter: &CompanyFilter) -> Result<Vec<Company>, CompanySearchError> {
        let companies = self.companies.read().await;
        Ok(companies.iter().filter(|c| filter.matches(c)).cloned().collect())
    }
}
