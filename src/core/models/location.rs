//! Location grouping view

use serde::{Deserialize, Serialize};

use super::MacAddress;

/// MACs found at one location, deduplicated, in order of first appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationGroup {
    /// Location key, compared by exact string equality
    pub location: String,
    /// MACs at this location
    pub macs: Vec<MacAddress>,
}

impl LocationGroup {
    /// Create an empty group
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            macs: Vec::new(),
        }
    }

    /// Add a MAC unless the group already has it
    pub fn insert(&mut self, mac: &MacAddress) {
        if !self.macs.contains(mac) {
            self.macs.push(mac.clone());
        }
    }

    /// Number of MACs in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.macs.len()
    }

    /// Check if the group is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macs.is_empty()
    }
}
