//! List formatting helpers
//!
//! Everything here is generic over `AsRef<str>` so the same helpers work on
//! `String`, `&str` and [`MacAddress`](crate::core::models::MacAddress).

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// `A,B,C`
#[must_use]
pub fn comma_joined<S: AsRef<str>>(items: &[S]) -> String {
    join(items, ",")
}

/// `A, B, C`
#[must_use]
pub fn comma_spaced<S: AsRef<str>>(items: &[S]) -> String {
    join(items, ", ")
}

/// Suffix every item with `separator`, the final one with `last`, and join
/// with spaces
///
/// ```
/// use macsep::shared::list::join_with_separator;
///
/// assert_eq!(join_with_separator(&["a", "b", "c"], ",", "."), "a, b, c.");
/// assert_eq!(join_with_separator(&["a"], ",", ";"), "a;");
/// ```
#[must_use]
pub fn join_with_separator<S: AsRef<str>>(items: &[S], separator: &str, last: &str) -> String {
    let final_index = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let suffix = if i == final_index { last } else { separator };
            format!("{}{suffix}", item.as_ref())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One item per line
#[must_use]
pub fn line_list<S: AsRef<str>>(items: &[S]) -> String {
    join(items, "\n")
}

/// `• A` per line
#[must_use]
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `1. A` per line
#[must_use]
pub fn numbered_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop repeats, keeping the first occurrence of each item
#[must_use]
pub fn dedup<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}

/// Sort by plain string order
#[must_use]
pub fn sort_alphabetical<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
    sorted.sort();
    sorted
}

/// Sort by the number formed from all digits in each item
///
/// `"A1B2"` sorts as 12. Items without digits sort as `0`; numbers too
/// large for `u128` sort last. Equal keys keep their input order.
#[must_use]
pub fn sort_numeric<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
    sorted.sort_by_key(|item| numeric_key(item));
    sorted
}

fn numeric_key(item: &str) -> u128 {
    let digits: String = item.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u128::MAX)
}

fn join<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(separator)
}

/// How to lay out a list of MACs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// `A,B,C`
    #[default]
    Comma,
    /// `A, B, C`
    Spaced,
    /// One per line
    Lines,
    /// `• A` per line
    Bullets,
    /// `1. A` per line
    Numbered,
}

impl ListStyle {
    /// Every style, in display order
    pub const ALL: [Self; 5] = [Self::Comma, Self::Spaced, Self::Lines, Self::Bullets, Self::Numbered];

    /// Render `items` in this style
    #[must_use]
    pub fn render<S: AsRef<str>>(self, items: &[S]) -> String {
        match self {
            Self::Comma => comma_joined(items),
            Self::Spaced => comma_spaced(items),
            Self::Lines => line_list(items),
            Self::Bullets => bullet_list(items),
            Self::Numbered => numbered_list(items),
        }
    }

    /// Name as accepted on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Spaced => "spaced",
            Self::Lines => "lines",
            Self::Bullets => "bullets",
            Self::Numbered => "numbered",
        }
    }
}

impl std::fmt::Display for ListStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                format!("unknown list style '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Order applied to a list before it is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep input order
    #[default]
    Input,
    /// [`sort_alphabetical`]
    Alpha,
    /// [`sort_numeric`]
    Numeric,
}

impl SortOrder {
    /// Every order, in display order
    pub const ALL: [Self; 3] = [Self::Input, Self::Alpha, Self::Numeric];

    /// Sort `items` in this order
    #[must_use]
    pub fn apply<S: AsRef<str>>(self, items: &[S]) -> Vec<String> {
        match self {
            Self::Input => items.iter().map(|s| s.as_ref().to_string()).collect(),
            Self::Alpha => sort_alphabetical(items),
            Self::Numeric => sort_numeric(items),
        }
    }

    /// Name as accepted on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Alpha => "alpha",
            Self::Numeric => "numeric",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|o| o.as_str()).collect();
                format!("unknown sort order '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Everything that decides how a MAC list is printed
///
/// Items are deduplicated first (when asked), then sorted, then laid out.
/// Custom separators take the place of the style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFormat {
    /// Layout when no custom separators are set
    pub style: ListStyle,
    /// Order applied before layout
    pub sort: SortOrder,
    /// Drop repeated items
    pub dedup: bool,
    /// `(separator, last)` for [`join_with_separator`]
    pub separators: Option<(String, String)>,
}

impl ListFormat {
    /// Plain layout with no sorting or dedup
    #[must_use]
    pub fn styled(style: ListStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Dedup, sort and lay out `items`
    #[must_use]
    pub fn render<S: AsRef<str>>(&self, items: &[S]) -> String {
        let items = if self.dedup {
            dedup(items)
        } else {
            items.iter().map(|s| s.as_ref().to_string()).collect()
        };
        let items = self.sort.apply(&items);
        match &self.separators {
            Some((separator, last)) => join_with_separator(&items, separator, last),
            None => self.style.render(&items),
        }
    }
}
