//! Core domain logic for macsep
//!
//! This module contains pure business logic with no I/O dependencies.
//! Every run is a function of its input text; nothing is cached between
//! runs.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (MacAddress, EquipmentRecord, results)
//! - `services/` - Pipeline stages
//! - `error` - Refusals for blank input

mod error;
pub mod models;
pub mod services;

pub use error::ReconcileError;
