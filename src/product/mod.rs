mod api;
mod model;
mod wire;

pub use model::{Article, LookupOutcome, MissingReason, ProductRecord};

use crate::core::{WbClient, WbError};
use serde_json::Value;

/// Looks up one article in the product-card API.
///
/// Every failure (transport, HTTP status, undecodable body, missing product,
/// null fields) becomes [`LookupOutcome::Missing`]; nothing is returned as an
/// error and a failed article never affects the next one.
///
/// # Example
///
/// ```no_run
/// # use wbinfo_rs::{ProductLookup, WbClient};
/// # #[tokio::main]
/// # async fn main() {
/// let client = WbClient::default();
/// let outcome = ProductLookup::new(&client, 15_163_742u64).fetch().await;
/// if let Some(product) = outcome.record() {
///     println!("{}: {} RUB", product.title, product.price);
/// }
/// # }
/// ```
pub struct ProductLookup {
    client: WbClient,
    article: Article,
}

impl ProductLookup {
    /// Creates a lookup for a given article.
    pub fn new(client: &WbClient, article: impl Into<Article>) -> Self {
        Self {
            client: client.clone(),
            article: article.into(),
        }
    }

    /// The article this lookup targets.
    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Fetches the raw card response, keeping the failure cause.
    ///
    /// # Errors
    ///
    /// Returns `WbError::Http` on transport failures and timeouts,
    /// `WbError::Status` on non-2xx responses and `WbError::Json` when the body
    /// is not JSON.
    pub async fn try_fetch_raw(&self) -> Result<Value, WbError> {
        api::fetch_detail(&self.client, &self.article).await
    }

    /// Fetches the raw card response; `None` on any failure, which is logged.
    pub async fn fetch_raw(&self) -> Option<Value> {
        match self.try_fetch_raw().await {
            Ok(v) => Some(v),
            Err(e) => {
                api::log_fetch_error(&self.article, &e);
                None
            }
        }
    }

    /// Fetches the card and extracts the first product's title and price.
    #[tracing::instrument(skip(self), fields(article = %self.article))]
    pub async fn fetch(&self) -> LookupOutcome {
        api::lookup(&self.client, &self.article).await
    }
}

/// Shorthand for `ProductLookup::new(client, article).fetch()`.
pub async fn lookup(client: &WbClient, article: impl Into<Article>) -> LookupOutcome {
    ProductLookup::new(client, article).fetch().await
}

/// Title and whole-unit price of an article, or `None` if it could not be found.
///
/// Use [`lookup`] to learn why a product is missing.
pub async fn get_product_info(
    client: &WbClient,
    article: impl Into<Article>,
) -> Option<ProductRecord> {
    lookup(client, article).await.into_record()
}
