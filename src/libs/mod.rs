//! Core library modules for the battlog application.
//!
//! ## Features
//!
//! - **Record model**: Charging record fields, schema order, payload shape
//! - **Duration**: Elapsed charging time from two times of day
//! - **Validation**: Per-field required and numeric checks
//! - **Submission**: Form state machine around the record store
//! - **Session**: Explicit, encrypted-at-rest authentication context
//! - **Infrastructure**: Configuration, data storage, messages, tables, export
//!
//! ## Usage
//!
//! ```rust
//! use battlog::libs::record::{ChargingRecord, Field};
//! use battlog::libs::validator::validate;
//!
//! let mut record = ChargingRecord::default();
//! record.set(Field::ChargeCurrent, "abc");
//! let errors = validate(&record);
//! assert_eq!(errors.first(), Some(Field::BatteryId));
//! ```

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod export;
pub mod messages;
pub mod record;
pub mod secret;
pub mod session;
pub mod submission;
pub mod validator;
pub mod view;
