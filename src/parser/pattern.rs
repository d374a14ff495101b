//! Regex-backed MAC matchers

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::MacMatcher;
use crate::core::models::MacAddress;

static LABELED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)MAC:\s*([A-F0-9:]{12,17})").expect("valid regex"));

static LOOSE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)MAC[^A-F0-9]*([A-F0-9:]{12,17})").expect("valid regex"));

static COLON_OCTETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([A-F0-9]{2}(?::[A-F0-9]{2}){5})\b").expect("valid regex")
});

static BARE_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([A-F0-9]{12})\b").expect("valid regex"));

/// Kind of MAC pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// `MAC:` label followed by 12-17 hex digits and colons
    Labeled,
    /// `MAC` token, any non-hex filler, then 12-17 hex digits and colons
    LooseLabel,
    /// Bare six colon-separated octets
    ColonOctets,
    /// Bare run of exactly 12 hex digits
    BareHex,
}

impl PatternKind {
    /// Stable name of this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Labeled => "labeled",
            Self::LooseLabel => "loose-label",
            Self::ColonOctets => "colon-octets",
            Self::BareHex => "bare-hex",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::Labeled => &*LABELED,
            Self::LooseLabel => &*LOOSE_LABEL,
            Self::ColonOctets => &*COLON_OCTETS,
            Self::BareHex => &*BARE_HEX,
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One built-in MAC pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacPattern {
    kind: PatternKind,
}

impl MacPattern {
    /// Create a matcher for a pattern kind
    #[must_use]
    pub const fn new(kind: PatternKind) -> Self {
        Self { kind }
    }

    /// The pattern kind
    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Every raw candidate this pattern captures, before validation
    #[must_use]
    pub fn candidates<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.kind
            .regex()
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

impl MacMatcher for MacPattern {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn find(&self, text: &str) -> Option<MacAddress> {
        self.candidates(text).into_iter().find_map(|raw| match MacAddress::parse(raw) {
            Ok(mac) => Some(mac),
            Err(e) => {
                log::debug!("{} pattern skipped candidate {raw:?}: {e}", self.kind);
                None
            },
        })
    }
}
