#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;
use wbinfo_rs::WbClient;

pub const DETAIL_PATH: &str = "/cards/v2/detail";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, article: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, article, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> WbClient {
    WbClient::builder()
        .base_detail(Url::parse(&format!("{}{}", server.base_url(), DETAIL_PATH)).unwrap())
        .build()
        .unwrap()
}

pub fn mock_card<'a>(server: &'a MockServer, article: &'a str, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(DETAIL_PATH)
            .query_param("nm", article);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_card_fixture<'a>(server: &'a MockServer, article: &'a str) -> Mock<'a> {
    mock_card(server, article, &fixture("card_detail", article, "json"))
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("WB_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("WB_RECORD").ok().as_deref() == Some("1")
}
