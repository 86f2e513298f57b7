use crate::common::{DETAIL_PATH, client_for, setup_server};
use httpmock::Method::GET;
use url::Url;
use wbinfo_rs::{CatalogParams, WbClient, lookup};

const BODY: &str = r#"{"data":{"products":[{"name":"Widget","sizes":[{"price":{"product":19999}}]}]}}"#;

#[tokio::test]
async fn request_carries_catalog_params_and_headers() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(DETAIL_PATH)
            .query_param("appType", "1")
            .query_param("curr", "rub")
            .query_param("dest", "-1257786")
            .query_param("hide_dtype", "13")
            .query_param("spp", "30")
            .query_param("ab_testing", "false")
            .query_param("lang", "ru")
            .query_param("nm", "196139209")
            .header("accept", "*/*")
            .header("referer", "https://www.wildberries.ru")
            .header_exists("user-agent");
        then.status(200)
            .header("content-type", "application/json")
            .body(BODY);
    });
    let client = client_for(&server);

    let outcome = lookup(&client, 196_139_209u64).await;
    mock.assert();
    assert!(outcome.is_found());
}

#[tokio::test]
async fn builder_overrides_reach_the_wire() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(DETAIL_PATH)
            .query_param("curr", "kzt")
            .query_param("dest", "82")
            .query_param("lang", "kk")
            .query_param("nm", "5")
            .header("user-agent", "wb-test/1.0")
            .header("referer", "https://global.wildberries.ru");
        then.status(200).body(BODY);
    });

    let client = WbClient::builder()
        .base_detail(Url::parse(&format!("{}{}", server.base_url(), DETAIL_PATH)).unwrap())
        .user_agent("wb-test/1.0")
        .referer("https://global.wildberries.ru")
        .params(CatalogParams {
            currency: "kzt".into(),
            dest: 82,
            lang: "kk".into(),
            ..CatalogParams::default()
        })
        .build()
        .unwrap();

    let record = lookup(&client, 5u32).await.into_record().unwrap();
    mock.assert();
    assert_eq!(record.price, 199);
}
