//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestClient, TestServer};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_search() {
//!     let server = TestServer::spawn().await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.search("23 Burna Boy").await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

// Each test binary uses a subset of the harness
#![allow(dead_code)]

mod client;
mod constants;
mod providers;
mod server;

// Public API - this is what tests import
pub use client::TestClient;
#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use providers::{GeniusBehavior, LlmBehavior, LyricsBehavior, MockBehavior};
pub use server::TestServer;
