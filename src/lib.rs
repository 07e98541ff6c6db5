//! # Battlog - Battery Charging Log
//!
//! A command-line client for a battery-maintenance logging service.
//! Operators fill in battery-charging records; administrators search and
//! export them by battery ID.
//!
//! ## Features
//!
//! - **Charging Form**: Field-by-field entry with live validation
//! - **Duration**: Charging time derived from start and end times, overnight aware
//! - **Submission Flow**: Blocked submits focus the first invalid field; failures keep input
//! - **Sessions**: Token and role stored encrypted, passed explicitly to every command
//! - **Admin Tools**: Search as a table, download CSV exports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use battlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
