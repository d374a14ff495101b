//! Domain models for macsep
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`MacAddress`] - Normalized 12-hex-digit token
//! - [`EquipmentRecord`] - One unit described by a manifest block
//! - [`TargetList`] - MACs to verify
//! - [`ReconciliationResult`] - Found / not-found partition
//! - [`LocationGroup`] - Found MACs grouped by location

mod equipment;
mod location;
pub mod mac;
mod reconciliation;

pub use equipment::{EquipmentRecord, UNASSIGNED_LOCATION};
pub use location::LocationGroup;
pub use mac::{MacAddress, MacError};
pub use reconciliation::{
    Extraction, MatchedEquipment, Reconciliation, ReconciliationResult, TargetList,
};
