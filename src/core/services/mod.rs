//! Pipeline stages
//!
//! Pure functions over text and domain models. No I/O: each stage takes
//! data in and returns new data.
//!
//! - [`normalizer`] - Target MAC list parsing
//! - [`extractor`] - Manifest blocks to equipment records
//! - [`reconciler`] - Found / not-found partition
//! - [`grouping`] - Matched MACs grouped by location
//! - [`report`] - Copy-ready plain-text report
//! - [`organizer`] - Simple MAC-by-location listing with block diagnostics
//! - [`sample`] - Example and random input data

pub mod extractor;
pub mod grouping;
pub mod normalizer;
pub mod organizer;
pub mod reconciler;
pub mod report;
pub mod sample;

pub use extractor::{Extractor, extract, split_blocks};
pub use grouping::{group_by_location, group_pairs};
pub use normalizer::{loaded_list, normalize_lines, parse_targets};
pub use organizer::{BlockIssue, IssueKind, MacLocation, Organized, organize};
pub use reconciler::{index_by_mac, reconcile, reconcile_texts};
pub use report::{ReportOptions, is_valid_format, render_report};
