//! Errors returned by the reconciliation pipeline
//!
//! Malformed lines and blocks are data-quality conditions and are filtered,
//! never reported here. Only blank inputs are rejected.

use thiserror::Error;

/// Reasons a pipeline run is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The target MAC list text is blank
    #[error("the MAC list is empty: paste at least one MAC address to verify")]
    EmptyTargets,

    /// The equipment manifest text is blank
    #[error("the equipment data is empty: paste the equipment manifest to search")]
    EmptyManifest,
}
