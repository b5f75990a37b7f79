//! String Analyzer - HTTP REST API for string property analysis
//!
//! This crate provides a small HTTP server around a pure string-analysis
//! core. Each submitted string is analyzed once (length, palindrome
//! status, unique-character count, word count, character frequencies,
//! SHA-256 digest) and stored in a process-local map keyed by the digest.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use string_analyzer::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     string_analyzer::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Uptime and store size
//! - `POST /strings` - Analyze and store a string
//! - `GET /strings` - List stored strings with strict property filters
//! - `GET /strings/filter-by-natural-language` - Filter via a plain-English query
//! - `GET /strings/{value}` - Fetch a stored record by exact value
//! - `DELETE /strings/{value}` - Delete a stored record by exact value
//!
//! The analysis core ([`analyzer::analyze`]) is a pure function with no
//! I/O or logging and is safe to call concurrently; all shared state
//! lives in [`state::ServerState`].

pub mod analyzer;
pub mod config;
pub mod error;
pub mod filter;
pub mod middleware;
pub mod nlq;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use analyzer::{analyze, sha256_hex, Analysis};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use filter::Filters;
pub use server::{build_router, start_server};
pub use state::ServerState;
pub use store::{StoredString, StringStore};
