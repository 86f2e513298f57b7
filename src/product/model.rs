use serde::Serialize;
use std::fmt;

/// A marketplace article: the numeric catalog identifier of a product.
///
/// Kept as text because it is only ever embedded in a query string; build it
/// from a `&str`, a `String` or any integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Article(String);

impl Article {
    /// The identifier as sent in the `nm` query parameter.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Article {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Article {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for Article {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

macro_rules! article_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Article {
            fn from(n: $t) -> Self {
                Self(n.to_string())
            }
        })*
    };
}

article_from_int!(u32, u64, i32, i64, usize);

/// Title and price of a product found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    /// Product name as listed. May be empty.
    #[serde(rename = "Title")]
    pub title: String,
    /// Price in whole currency units (rubles by default), floored.
    #[serde(rename = "Price")]
    pub price: i64,
}

/// Why a lookup produced no product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MissingReason {
    /// Connection, DNS or timeout failure.
    Transport,
    /// The API answered with a non-2xx status.
    Status(u16),
    /// The body was not JSON, or not shaped like a product card.
    Decode,
    /// `data.products` was missing or empty.
    NoProducts,
    /// The first product had a null title or no price.
    InvalidData,
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => f.write_str("transport failure"),
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::Decode => f.write_str("undecodable response"),
            Self::NoProducts => f.write_str("product not found"),
            Self::InvalidData => f.write_str("invalid product data"),
        }
    }
}

/// Result of a single product lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The product exists and carries both a title and a price.
    Found(ProductRecord),
    /// No usable product; the reason is kept for diagnostics.
    Missing(MissingReason),
}

impl LookupOutcome {
    /// Returns `true` if a product was found.
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Borrow the record, if any.
    pub const fn record(&self) -> Option<&ProductRecord> {
        match self {
            Self::Found(r) => Some(r),
            Self::Missing(_) => None,
        }
    }

    /// The failure reason, if the lookup produced no product.
    pub const fn missing_reason(&self) -> Option<MissingReason> {
        match self {
            Self::Found(_) => None,
            Self::Missing(reason) => Some(*reason),
        }
    }

    /// Discard the failure reason.
    pub fn into_record(self) -> Option<ProductRecord> {
        match self {
            Self::Found(r) => Some(r),
            Self::Missing(_) => None,
        }
    }
}

impl From<LookupOutcome> for Option<ProductRecord> {
    fn from(outcome: LookupOutcome) -> Self {
        outcome.into_record()
    }
}
