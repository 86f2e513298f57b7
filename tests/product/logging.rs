use crate::common::{client_for, mock_card, setup_server};
use std::io;
use std::sync::{Arc, Mutex};
use wbinfo_rs::lookup;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[tokio::test]
async fn decision_points_reach_injected_subscriber() {
    let server = setup_server();
    let _found = mock_card(
        &server,
        "100",
        r#"{"data":{"products":[{"name":"Widget","sizes":[{"price":{"product":19999}}]}]}}"#,
    );
    let _invalid = mock_card(
        &server,
        "200",
        r#"{"data":{"products":[{"name":null,"sizes":[{"price":{"product":500}}]}]}}"#,
    );
    let _not_found = mock_card(&server, "300", r#"{"data":{"products":[]}}"#);
    let client = client_for(&server);

    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    assert!(lookup(&client, "100").await.is_found());
    assert!(!lookup(&client, "200").await.is_found());
    assert!(!lookup(&client, "300").await.is_found());

    let logs = sink.text();
    assert!(logs.contains("sending product card request"), "{logs}");
    assert!(logs.contains("received product card response"), "{logs}");
    assert!(logs.contains("found product"), "{logs}");
    let line_with = |msg: &str| {
        logs.lines()
            .find(|l| l.contains(msg))
            .unwrap_or_else(|| panic!("no {msg:?} line in:\n{logs}"))
            .to_string()
    };
    assert!(line_with("found product").contains("article=100"), "{logs}");
    assert!(line_with("invalid product data for article").contains("article=200"), "{logs}");
    assert!(line_with("product not found for article").contains("article=300"), "{logs}");
}
