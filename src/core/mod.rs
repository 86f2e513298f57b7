//! Core components of the `wbinfo-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`WbClient`], its builder and the [`CatalogParams`] query configuration.
//! - The primary [`WbError`] type.
//! - Wire-decoding helpers and, under `test-mode`, fixture recording.

/// The main client (`WbClient`), builder, and configuration.
pub mod client;
/// The primary error type (`WbError`) for the crate.
pub mod error;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::WbClient`
pub use client::{CatalogParams, WbClient, WbClientBuilder};
pub use error::WbError;
