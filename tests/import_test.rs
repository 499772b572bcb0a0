// tests/import_test.rs
use std::io::Write;
use tempfile::NamedTempFile;

use company_search::services::importer::{import_csv, seed_if_empty, ImportOutcome};
use company_search::{CompanyFilter, CompanySearchError, CompanyStore, MemoryCompanyStore, SearchField};

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[tokio::test]
async fn test_seed_imports_every_non_blank_line() {
    let file = csv_file("Acme Corp,ACME,12.5\n\nGlobex,GBX,40\n   \nInitech,INTC,7.25\n");
    let store = MemoryCompanyStore::new();

    let outcome = seed_if_empty(&store, file.path()).await.expect("import");

    assert_eq!(outcome, ImportOutcome::Imported { count: 3 });
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_seed_skips_non_empty_store() {
    let file = csv_file("Acme Corp,ACME,12.5\nGlobex,GBX,40\n");
    let store = MemoryCompanyStore::new();

    seed_if_empty(&store, file.path()).await.expect("first import");
    let outcome = seed_if_empty(&store, file.path()).await.expect("second import");

    assert_eq!(outcome, ImportOutcome::Skipped { existing: 2 });
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_bad_price_is_stored_as_nan() {
    let file = csv_file("Broken Co,BRK,not-a-number\n");
    let store = MemoryCompanyStore::new();

    import_csv(&store, file.path()).await.expect("import");

    let filter = CompanyFilter::new(SearchField::Ticker, "brk").unwrap();
    let found = store.find(&filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].price.is_nan());
}

#[tokio::test]
async fn test_short_row_aborts_and_keeps_earlier_rows() {
    let file = csv_file("Acme Corp,ACME,12.5\nBroken\nGlobex,GBX,40\n");
    let store = MemoryCompanyStore::new();

    let err = import_csv(&store, file.path()).await.unwrap_err();

    assert!(matches!(err, CompanySearchError::Import { line: 2, .. }));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let store = MemoryCompanyStore::new();
    let err = seed_if_empty(&store, "/nonexistent/companies.csv").await.unwrap_err();
    assert!(matches!(err, CompanySearchError::Io(_)));
}
