//! Text extraction primitives for manifest blocks
//!
//! - MAC matchers: an ordered chain of independent matchers, tried in
//!   priority order until one yields a valid MAC
//! - Labeled fields: splits manifest lines into `LABEL: value` segments
//!
//! The chain is open for extension: callers can register additional
//! matchers after the built-in ones.

mod label;
mod pattern;

pub use label::{FieldLabel, LabeledFields, clean_location, is_field_line, strip_trailing_labels};
pub use pattern::{MacPattern, PatternKind};

use crate::core::models::MacAddress;

/// Something that can find a MAC address in free text
pub trait MacMatcher: Send + Sync {
    /// Name used in logs (e.g. "labeled", "bare-hex")
    fn name(&self) -> &str;

    /// Find the first valid MAC in `text`
    ///
    /// Candidates that fail validation are skipped, not returned.
    fn find(&self, text: &str) -> Option<MacAddress>;
}

/// A MAC found by the chain, with the matcher that found it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacHit<'a> {
    /// The normalized MAC
    pub mac: MacAddress,
    /// Name of the matcher that produced it
    pub matcher: &'a str,
    /// Whether it came from the per-line fallback pass
    pub per_line: bool,
}

/// Ordered list of MAC matchers (highest priority first)
pub struct MatcherChain {
    matchers: Vec<Box<dyn MacMatcher>>,
}

impl std::fmt::Debug for MatcherChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.matchers.iter().map(|m| m.name()).collect();
        f.debug_struct("MatcherChain").field("matchers", &names).finish()
    }
}

impl Default for MatcherChain {
    fn default() -> Self {
        Self::new()
    }
}

impl MatcherChain {
    /// Create a chain with the built-in matchers:
    ///
    /// 1. `MAC:` label followed by hex digits and colons
    /// 2. looser `MAC` token followed eventually by hex digits and colons
    /// 3. bare `XX:XX:XX:XX:XX:XX`
    /// 4. bare run of 12 hex digits
    #[must_use]
    pub fn new() -> Self {
        Self {
            matchers: vec![
                Box::new(MacPattern::new(PatternKind::Labeled)),
                Box::new(MacPattern::new(PatternKind::LooseLabel)),
                Box::new(MacPattern::new(PatternKind::ColonOctets)),
                Box::new(MacPattern::new(PatternKind::BareHex)),
            ],
        }
    }

    /// Create an empty chain
    #[must_use]
    pub fn empty() -> Self {
        Self { matchers: Vec::new() }
    }

    /// Append a matcher at the lowest priority
    pub fn register(&mut self, matcher: Box<dyn MacMatcher>) {
        self.matchers.push(matcher);
    }

    /// Matcher names in priority order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    /// Run every matcher against `text`, first hit wins
    #[must_use]
    pub fn find(&self, text: &str) -> Option<MacHit<'_>> {
        self.matchers.iter().find_map(|m| {
            m.find(text).map(|mac| MacHit {
                mac,
                matcher: m.name(),
                per_line: false,
            })
        })
    }

    /// Find a MAC in a block of lines
    ///
    /// The whole block joined by spaces is tried first; if no matcher
    /// succeeds, each line is tried in turn.
    #[must_use]
    pub fn find_in_lines(&self, lines: &[&str]) -> Option<MacHit<'_>> {
        let joined = lines.join(" ");
        if let Some(hit) = self.find(&joined) {
            return Some(hit);
        }
        lines.iter().find_map(|line| {
            self.find(line).map(|hit| MacHit {
                per_line: true,
                ..hit
            })
        })
    }
}
