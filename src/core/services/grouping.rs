//! Location grouping
//!
//! Groups keep the order in which locations first appear. Keys are compared
//! by exact string equality, so `"Prateleira A1"` and `"prateleira a1"` are
//! two groups.

use std::collections::HashMap;

use crate::core::models::{LocationGroup, MacAddress, MatchedEquipment};

/// Group `(location, mac)` pairs, deduplicating MACs within each group
pub fn group_pairs<'a, I>(pairs: I) -> Vec<LocationGroup>
where
    I: IntoIterator<Item = (&'a str, &'a MacAddress)>,
{
    let mut groups: Vec<LocationGroup> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (location, mac) in pairs {
        let position = *positions.entry(location).or_insert_with(|| {
            groups.push(LocationGroup::new(location));
            groups.len() - 1
        });
        groups[position].insert(mac);
    }

    groups
}

/// Group matched equipment by location
#[must_use]
pub fn group_by_location(matched: &[MatchedEquipment]) -> Vec<LocationGroup> {
    group_pairs(matched.iter().map(|m| (m.record.location.as_str(), &m.mac)))
}
