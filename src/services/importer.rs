// src/services/importer.rs
use log::{info, warn};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::CompanySearchError;
use crate::services::store::CompanyStore;
use crate::types::Company;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The collection already had records; nothing was written.
    Skipped { existing: usize },
    Imported { count: usize },
}

/// Parses one `name,ticker,price` row. Blank rows yield `None`.
///
/// Extra columns are ignored. A price that does not parse, or parses to infinity, is stored as NaN.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Company>, CompanySearchError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(',').map(str::trim);
    let (Some(name), Some(ticker), Some(price)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(CompanySearchError::Import {
            line: line_no,
            message: format!("expected name,ticker,price but got '{}'", line),
        });
    };

    let price = match price.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!("Line {}: price '{}' is not a number", line_no, price);
            f64::NAN
        }
    };

    Ok(Some(Company::new(name, ticker, price)))
}

/// Inserts every row of the CSV file. Stops at the first error; rows already written stay.
pub async fn import_csv(
    store: &dyn CompanyStore,
    path: impl AsRef<Path>,
) -> Result<usize, CompanySearchError> {
    let path = path.as_ref();
    let file = File::open(path).await?;
    let mut lines = BufReader::new(file).lines();

    let mut line_no = 0;
    let mut inserted = 0;
    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if let Some(company) = parse_line(line_no, &line)? {
            store.insert(&company).await?;
            inserted += 1;
        }
    }

    info!("📦 Imported {} companies from {}", inserted, path.display());
    Ok(inserted)
}

/// Seeds the store from the CSV only when it holds no records.
pub async fn seed_if_empty(
    store: &dyn CompanyStore,
    path: impl AsRef<Path>,
) -> Result<ImportOutcome, CompanySearchError> {
    let existing = store.count().await?;
    if existing > 0 {
        info!("Store already holds {} companies, skipping import", existing);
        return Ok(ImportOutcome::Skipped { existing });
    }

    let count = import_csv(store, path).await?;
    Ok(ImportOutcome::Imported { count })
}
