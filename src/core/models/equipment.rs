//! Equipment record model
//!
//! One record is extracted from one manifest block. Records are built once
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::MacAddress;

/// Location assigned to records whose `LOCAL ESTOQUE:` field is missing or
/// empty after cleaning
pub const UNASSIGNED_LOCATION: &str = "Sem Localização";

/// Equipment described by one manifest block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    /// Normalized MAC address
    pub mac: MacAddress,

    /// Model line (code plus description), empty when absent
    pub model: String,

    /// Serial number, empty when absent
    pub serial_number: String,

    /// Cleaned stock location, never empty
    pub location: String,

    /// Sale value as written in the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_value: Option<String>,

    /// Equipment type (e.g. "Patrimônio")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Refurbished flag as written in the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refurbished: Option<String>,
}

impl EquipmentRecord {
    /// Create a record with only a MAC and a location
    ///
    /// An empty location becomes [`UNASSIGNED_LOCATION`].
    #[must_use]
    pub fn new(mac: MacAddress, location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            mac,
            model: String::new(),
            serial_number: String::new(),
            location: if location.trim().is_empty() {
                UNASSIGNED_LOCATION.to_string()
            } else {
                location
            },
            sale_value: None,
            kind: None,
            refurbished: None,
        }
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the serial number
    #[must_use]
    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = serial.into();
        self
    }

    /// Set the sale value
    #[must_use]
    pub fn with_sale_value(mut self, value: Option<String>) -> Self {
        self.sale_value = value;
        self
    }

    /// Set the type
    #[must_use]
    pub fn with_kind(mut self, kind: Option<String>) -> Self {
        self.kind = kind;
        self
    }

    /// Set the refurbished flag
    #[must_use]
    pub fn with_refurbished(mut self, refurbished: Option<String>) -> Self {
        self.refurbished = refurbished;
        self
    }

    /// Whether the location is the unassigned sentinel
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.location == UNASSIGNED_LOCATION
    }

    /// One-line summary: `<model> - S/N: <serial> - <location>`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} - S/N: {} - {}", self.model, self.serial_number, self.location)
            .trim()
            .to_string()
    }
}
