//! CLI subcommand implementations.

pub mod clients;
pub mod filings;
pub mod lobbyists;
