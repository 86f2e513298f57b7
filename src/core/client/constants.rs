//! Centralized constants for default endpoints and headers.

/// Default desktop UA; the card API rejects obviously scripted clients.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/136.0.0.0 Safari/537.36"
);

/// Marketplace site sent as `referer`.
pub(crate) const DEFAULT_REFERER: &str = "https://www.wildberries.ru";

/// Sent as `accept`.
pub(crate) const DEFAULT_ACCEPT: &str = "*/*";

/// Product card detail endpoint (query parameters are appended).
pub(crate) const DEFAULT_BASE_DETAIL: &str = "https://card.wb.ru/cards/v2/detail";

/// Overall request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
