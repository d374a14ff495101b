//! macsep - Reconcile MAC address lists against equipment inventory manifests
//!
//! Paste a list of MAC addresses and the free-text export of an inventory
//! system; macsep extracts one equipment record per manifest block, tells
//! which MACs were found and where they are stored, and renders a
//! copy-ready report.
//!
//! ```
//! use macsep::core::services::reconcile_texts;
//!
//! let manifest = "MAC: 00:11:22:33:44:55\nLOCAL ESTOQUE: Prateleira A1";
//! let run = reconcile_texts("001122334455\nAABBCCDDEEFF", manifest).unwrap();
//! assert_eq!(run.result.matched[0].record.location, "Prateleira A1");
//! assert_eq!(run.result.unmatched[0].as_str(), "AABBCCDDEEFF");
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod parser;
pub mod paths;
pub mod shared;
