//! Looks up the articles given on the command line and logs one line per result.
//!
//! ```sh
//! RUST_LOG=wbinfo_rs=debug cargo run --features tracing-subscriber --bin wb-info -- 15163742 10
//! ```

use futures::future::join_all;
use tracing_subscriber::EnvFilter;
use wbinfo_rs::{LookupOutcome, WbClient, lookup};

const DEMO_ARTICLES: [&str; 3] = ["15163742", "196139209", "10"];

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wbinfo_rs=info,wb_info=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let mut articles: Vec<String> = std::env::args().skip(1).collect();
    if articles.is_empty() {
        articles = DEMO_ARTICLES.iter().map(ToString::to_string).collect();
    }

    let client = WbClient::builder().build()?;
    let outcomes = join_all(articles.iter().map(|a| lookup(&client, a))).await;

    for (article, outcome) in articles.iter().zip(outcomes) {
        match outcome {
            LookupOutcome::Found(product) => {
                tracing::info!(%article, "result: {}", serde_json::to_string(&product)?);
            }
            LookupOutcome::Missing(reason) => {
                tracing::info!(%article, %reason, "result: none");
            }
        }
    }

    Ok(())
}
