//! # Hello Library
//!
//! A small HTTP application that answers with a fixed greeting, a fixed
//! `404`, and exposes Prometheus metrics counting the requests it served.
//!
//! Modules:
//! - `config`: bind address and logging settings
//! - `observability`: metrics registry and the scrape route
//! - `server`: content handlers, router and listener bootstrap
//! - `utils`: logging setup and shared constants

pub mod config;
pub mod observability;
pub mod server;
pub mod utils;

#[cfg(test)]
pub mod tests;
