//! Public client surface + builder.
//! Internals are split into `constants` (UA + defaults) and `params` (catalog query).

mod constants;
mod params;

pub use params::CatalogParams;

use crate::core::WbError;
use constants::{
    DEFAULT_ACCEPT, DEFAULT_BASE_DETAIL, DEFAULT_REFERER, DEFAULT_TIMEOUT_SECS, USER_AGENT,
};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER};
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client, the card endpoint and the
/// catalog query parameters.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct WbClient {
    http: Client,
    base_detail: Url,
    params: CatalogParams,
}

impl Default for WbClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl WbClient {
    /// Create a new builder.
    pub fn builder() -> WbClientBuilder {
        WbClientBuilder::default()
    }

    /// Catalog parameters attached to every request.
    pub fn params(&self) -> &CatalogParams {
        &self.params
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Full detail URL for one article.
    pub(crate) fn detail_url(&self, article: &str) -> Url {
        let mut url = self.base_detail.clone();
        self.params.apply(&mut url, article);
        url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct WbClientBuilder {
    user_agent: Option<String>,
    referer: Option<String>,
    accept: Option<String>,
    base_detail: Option<Url>,
    params: Option<CatalogParams>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl WbClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the `referer` header. Default: `https://www.wildberries.ru`.
    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Override the `accept` header. Default: `*/*`.
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Override the card detail endpoint (e.g., `https://card.wb.ru/cards/v2/detail`).
    pub fn base_detail(mut self, url: Url) -> Self {
        self.base_detail = Some(url);
        self
    }

    /// Replace the catalog query parameters (currency, region, language...).
    pub fn params(mut self, params: CatalogParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Set the overall request timeout. Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `WbError` if the default endpoint cannot be parsed, a header
    /// value contains characters not allowed in HTTP headers, or the TLS
    /// backend fails to initialize.
    pub fn build(self) -> Result<WbClient, WbError> {
        let base_detail = match self.base_detail {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_DETAIL)?,
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            header_value(self.accept.as_deref().unwrap_or(DEFAULT_ACCEPT))?,
        );
        headers.insert(
            REFERER,
            header_value(self.referer.as_deref().unwrap_or(DEFAULT_REFERER))?,
        );

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers)
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(WbClient {
            http,
            base_detail,
            params: self.params.unwrap_or_default(),
        })
    }
}

fn header_value(v: &str) -> Result<HeaderValue, WbError> {
    HeaderValue::from_str(v).map_err(|_| WbError::Data(format!("invalid header value: {v:?}")))
}
