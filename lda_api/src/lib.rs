//! Client library for the U.S. Senate Lobbying Disclosure (LDA) API.
//!
//! Provides an authenticated HTTP client with sequential pagination over the
//! `/filings/`, `/clients/`, and `/lobbyists/` endpoints, plus helpers to
//! flatten nested filing records into tabular rows and export them as JSON or
//! CSV.

mod client;
mod errors;
pub mod export;
pub mod flatten;
mod query;
pub mod types;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{ClientQuery, FilingQuery, LobbyistQuery, Query};
