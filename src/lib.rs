//! wbinfo-rs: small async client for the Wildberries product-card API.
//!
//! Look up a product by article and get back its title and price in whole
//! currency units:
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() {
//! let client = wbinfo_rs::WbClient::default();
//! match wbinfo_rs::lookup(&client, "15163742").await {
//!     wbinfo_rs::LookupOutcome::Found(p) => println!("{} costs {}", p.title, p.price),
//!     wbinfo_rs::LookupOutcome::Missing(why) => println!("not found: {why}"),
//! }
//! # }
//! ```
//!
//! The library logs through `tracing` and never installs a subscriber itself.

pub mod core;
pub mod product;

pub use crate::core::{CatalogParams, WbClient, WbClientBuilder, WbError};
pub use product::{
    Article, LookupOutcome, MissingReason, ProductLookup, ProductRecord, get_product_info, lookup,
};
