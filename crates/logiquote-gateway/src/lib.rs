//! # LogiQuote Gateway
//!
//! HTTP surface for the quote builder:
//! - `GET /api/v1/rates`: the current rate card
//! - `POST /api/v1/quotes`: price a quote and return the quote document

pub mod config;
pub mod routes;

/// Gateway version
pub const GATEWAY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen port
pub const DEFAULT_PORT: u16 = 8090;
