use serde_json::Value;

use crate::{
    core::{WbClient, WbError, wire::minor_to_whole},
    product::{
        model::{Article, LookupOutcome, MissingReason, ProductRecord},
        wire,
    },
};

/// Characters of the body echoed into debug logs.
const BODY_PREVIEW_CHARS: usize = 100;

pub(super) async fn fetch_detail(client: &WbClient, article: &Article) -> Result<Value, WbError> {
    let url = client.detail_url(article.as_str());
    tracing::debug!(%article, %url, "sending product card request");

    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(WbError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    #[cfg(feature = "test-mode")]
    crate::core::fixtures::record_if_enabled("card_detail", article.as_str(), &body);
    let preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
    tracing::debug!(%article, status = status.as_u16(), %preview, "received product card response");

    Ok(serde_json::from_str(&body)?)
}

pub(super) fn log_fetch_error(article: &Article, err: &WbError) {
    match err {
        WbError::Status { .. } => tracing::warn!(%article, error = %err, "HTTP error for article"),
        WbError::Json(_) => tracing::error!(%article, error = %err, "JSON decode error for article"),
        _ => tracing::error!(%article, error = %err, "request error for article"),
    }
}

impl From<&WbError> for MissingReason {
    fn from(err: &WbError) -> Self {
        match err {
            WbError::Http(_) => Self::Transport,
            WbError::Status { status, .. } => Self::Status(*status),
            WbError::Json(_) | WbError::Url(_) | WbError::Data(_) => Self::Decode,
        }
    }
}

/// Pulls the first product's title and price out of a decoded card response.
pub(super) fn extract_product(value: Value) -> Result<ProductRecord, MissingReason> {
    let product = wire::first_product(&value).ok_or(MissingReason::NoProducts)?;

    let title = wire::title(product).map_err(|e| MissingReason::from(&e))?;
    let price = wire::minor_price(product).map_err(|e| MissingReason::from(&e))?;

    match (title, price) {
        (Some(title), Some(minor)) => Ok(ProductRecord {
            title,
            price: minor_to_whole(minor),
        }),
        _ => Err(MissingReason::InvalidData),
    }
}

pub(super) async fn lookup(client: &WbClient, article: &Article) -> LookupOutcome {
    tracing::info!(%article, "processing article");

    let value = match fetch_detail(client, article).await {
        Ok(v) => v,
        Err(e) => {
            log_fetch_error(article, &e);
            tracing::info!(%article, "no data for article");
            return LookupOutcome::Missing(MissingReason::from(&e));
        }
    };

    match extract_product(value) {
        Ok(record) => {
            tracing::info!(%article, title = %record.title, price = record.price, "found product");
            LookupOutcome::Found(record)
        }
        Err(reason @ MissingReason::InvalidData) => {
            tracing::warn!(%article, "invalid product data for article");
            LookupOutcome::Missing(reason)
        }
        Err(reason @ MissingReason::NoProducts) => {
            tracing::info!(%article, "product not found for article");
            LookupOutcome::Missing(reason)
        }
        Err(reason) => {
            tracing::error!(%article, %reason, "unexpected product card shape");
            LookupOutcome::Missing(reason)
        }
    }
}
