// src/types.rs
use serde::{Deserialize, Serialize};

/// One public company as stored in the `Companies` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub ticker: String,
    #[serde(with = "price_format")]
    pub price: f64,
}

impl Company {
    pub fn new(name: impl Into<String>, ticker: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
            price,
        }
    }
}

/// JSON has no NaN, so a non-finite price is written as `null` and read back as NaN.
mod price_format {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if price.is_finite() {
            serializer.serialize_f64(*price)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// Which company field a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Ticker,
}

impl SearchField {
    /// Only the exact values `name` and `ticker` select a field.
    pub fn from_param(value: Option<&str>) -> Option<Self> {
        match value {
            Some("name") => Some(Self::Name),
            Some("ticker") => Some(Self::Ticker),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Ticker => "ticker",
        }
    }

    pub fn value_of<'a>(&self, company: &'a Company) -> &'a str {
        match self {
            Self::Name => &company.name,
            Self::Ticker => &company.ticker,
        }
    }
}

/// Query string of `GET /process`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub field: Option<String>,
}
