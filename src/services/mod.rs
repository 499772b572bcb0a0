pub mod importer;
pub mod store;
