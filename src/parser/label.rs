//! Labeled field segmentation
//!
//! Manifest lines carry one or more `LABEL: value` pairs separated by tabs or
//! spaces, in no fixed order. A value runs from the end of its label to the
//! next tab or the next known label, whichever comes first.
//!
//! Labels are matched case-insensitively and tolerate missing accents
//! (`NUMERO DE SERIE:` is the same label as `NÚMERO DE SÉRIE:`).

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::core::models::UNASSIGNED_LOCATION;

static LABELS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:",
        r"(?P<mac>MAC)",
        r"|(?P<serial>N[ÚU]MERO\s+DE\s+S[ÉE]RIE)",
        r"|(?P<location>LOCAL\s+(?:DE\s+)?ESTOQUE)",
        r"|(?P<sale>VALOR\s+(?:DE\s+)?VENDA)",
        r"|(?P<refurbished>RECONDICIONADO)",
        r"|(?P<kind>TIPO)",
        r"|(?P<epi>EPI\s+CA)",
        r"|(?P<division>REPARTI[ÇC][ÃA]O)",
        r"|(?P<validity>DATA\s+(?:DE\s+)?VALIDADE)",
        r"|(?P<notes>OBSERVA[ÇC][ÕO]ES)",
        r"|(?P<own_id>ID\s+PR[ÓO]PRIO)",
        r")\s*:"
    ))
    .expect("valid regex")
});

/// A known manifest field label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLabel {
    /// `MAC:`
    Mac,
    /// `NÚMERO DE SÉRIE:`
    SerialNumber,
    /// `LOCAL ESTOQUE:`
    Location,
    /// `VALOR VENDA:`
    SaleValue,
    /// `RECONDICIONADO:`
    Refurbished,
    /// `TIPO:`
    Kind,
    /// `EPI CA:`
    EpiCa,
    /// `REPARTIÇÃO:`
    Division,
    /// `DATA VALIDADE:`
    ValidityDate,
    /// `OBSERVAÇÕES:`
    Observations,
    /// `ID Próprio:` (appears on the model line)
    OwnId,
}

impl FieldLabel {
    /// Every known label
    pub const ALL: [Self; 11] = [
        Self::Mac,
        Self::SerialNumber,
        Self::Location,
        Self::SaleValue,
        Self::Refurbished,
        Self::Kind,
        Self::EpiCa,
        Self::Division,
        Self::ValidityDate,
        Self::Observations,
        Self::OwnId,
    ];

    /// Canonical label text as it appears in manifests
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mac => "MAC:",
            Self::SerialNumber => "NÚMERO DE SÉRIE:",
            Self::Location => "LOCAL ESTOQUE:",
            Self::SaleValue => "VALOR VENDA:",
            Self::Refurbished => "RECONDICIONADO:",
            Self::Kind => "TIPO:",
            Self::EpiCa => "EPI CA:",
            Self::Division => "REPARTIÇÃO:",
            Self::ValidityDate => "DATA VALIDADE:",
            Self::Observations => "OBSERVAÇÕES:",
            Self::OwnId => "ID Próprio:",
        }
    }

    const fn group(self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::SerialNumber => "serial",
            Self::Location => "location",
            Self::SaleValue => "sale",
            Self::Refurbished => "refurbished",
            Self::Kind => "kind",
            Self::EpiCa => "epi",
            Self::Division => "division",
            Self::ValidityDate => "validity",
            Self::Observations => "notes",
            Self::OwnId => "own_id",
        }
    }

    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        Self::ALL.into_iter().find(|label| caps.name(label.group()).is_some())
    }
}

impl std::fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labeled values found in a block, in the order they appeared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledFields {
    values: Vec<(FieldLabel, String)>,
}

impl LabeledFields {
    /// Segment every line of a block
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let values = lines.into_iter().flat_map(Self::parse_line).collect();
        Self { values }
    }

    /// Segment a single line into `(label, value)` pairs
    #[must_use]
    pub fn parse_line(line: &str) -> Vec<(FieldLabel, String)> {
        let found: Vec<(FieldLabel, usize, usize)> = LABELS
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let label = FieldLabel::from_captures(&caps)?;
                Some((label, whole.start(), whole.end()))
            })
            .collect();

        found
            .iter()
            .enumerate()
            .map(|(i, &(label, _, value_start))| {
                let value_end = found.get(i + 1).map_or(line.len(), |next| next.1);
                let raw = line[value_start..value_end].trim_start();
                let raw = raw.split('\t').next().unwrap_or_default();
                (label, collapse_whitespace(raw))
            })
            .collect()
    }

    /// First non-empty value for a label
    #[must_use]
    pub fn get(&self, label: FieldLabel) -> Option<&str> {
        self.values
            .iter()
            .find(|(l, v)| *l == label && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// Whether the label appeared at all, even with an empty value
    #[must_use]
    pub fn contains(&self, label: FieldLabel) -> bool {
        self.values.iter().any(|(l, _)| *l == label)
    }

    /// Number of labeled segments
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no labels were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Whether a line carries any field label other than `ID Próprio:`
#[must_use]
pub fn is_field_line(line: &str) -> bool {
    LABELS
        .captures_iter(line)
        .any(|caps| FieldLabel::from_captures(&caps).is_some_and(|l| l != FieldLabel::OwnId))
}

/// Cut a value at the first known label it contains
#[must_use]
pub fn strip_trailing_labels(value: &str) -> &str {
    LABELS.find(value).map_or(value, |m| &value[..m.start()]).trim()
}

/// Clean a raw location value
///
/// Collapses whitespace, drops anything from the first known label onwards,
/// and falls back to [`UNASSIGNED_LOCATION`] when nothing is left.
#[must_use]
pub fn clean_location(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    let cleaned = strip_trailing_labels(&collapsed);
    if cleaned.is_empty() {
        UNASSIGNED_LOCATION.to_string()
    } else {
        cleaned.to_string()
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
