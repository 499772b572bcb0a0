// src/lib.rs
pub mod config;
pub mod error;
pub mod render;
pub mod server;
pub mod services;
pub mod types;

pub use config::AppConfig;
pub use error::CompanySearchError;
pub use server::{configure, static_files, AppState};
pub use services::store::{CompanyFilter, CompanyStore, MemoryCompanyStore, RedisCompanyStore};
pub use types::{Company, SearchField};
