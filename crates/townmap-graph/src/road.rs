//! Graph edges.

use crate::Town;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Returns the two names in ascending order.
///
/// Roads are undirected; every pair-keyed lookup goes through this ordering.
pub(crate) fn canonical_pair<'a>(v: &'a str, w: &'a str) -> (&'a str, &'a str) {
    if v <= w { (v, w) } else { (w, v) }
}

/// An undirected, weighted, named connection between two towns.
///
/// Two roads are equal iff they connect the same pair of towns, in either order. Name and weight
/// do not take part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Road {
    source: Town,
    destination: Town,
    weight: u32,
    name: String,
}

impl Road {
    pub fn new(source: Town, destination: Town, weight: u32, name: impl Into<String>) -> Self {
        Self {
            source,
            destination,
            weight,
            name: name.into(),
        }
    }

    /// Builds a road with weight `1`.
    pub fn with_default_weight(source: Town, destination: Town, name: impl Into<String>) -> Self {
        Self::new(source, destination, 1, name)
    }

    pub fn source(&self) -> &Town {
        &self.source
    }

    pub fn destination(&self) -> &Town {
        &self.destination
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, town: &Town) -> bool {
        self.source == *town || self.destination == *town
    }

    pub(crate) fn touches(&self, name: &str) -> bool {
        self.source.name() == name || self.destination.name() == name
    }

    /// Returns the endpoint opposite `town`.
    ///
    /// For a self-loop both endpoints are `town`. The caller is expected to pass one of the
    /// road's endpoints; any other town yields `source`.
    pub fn other_end(&self, town: &Town) -> &Town {
        if self.source == *town {
            &self.destination
        } else {
            &self.source
        }
    }

    /// Orders roads by weight only. Not consistent with `Eq`.
    pub fn cmp_by_weight(&self, other: &Road) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        other.contains(&self.source)
            && other.contains(&self.destination)
            && self.contains(&other.source)
            && self.contains(&other.destination)
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = canonical_pair(self.source.name(), self.destination.name());
        a.hash(state);
        b.hash(state);
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::Road;
    use crate::Town;
    use rustc_hash::FxHashSet;
    use std::cmp::Ordering;

    fn road(a: &str, b: &str, weight: u32, name: &str) -> Road {
        Road::new(Town::new(a), Town::new(b), weight, name)
    }

    #[test]
    fn equality_ignores_direction_name_and_weight() {
        assert_eq!(road("A", "B", 3, "Main"), road("B", "A", 9, "Other"));
        assert_ne!(road("A", "B", 3, "Main"), road("A", "C", 3, "Main"));
    }

    #[test]
    fn self_loop_is_not_equal_to_a_road_leaving_the_town() {
        assert_ne!(road("A", "A", 1, "Loop"), road("A", "B", 1, "Loop"));
        assert_ne!(road("A", "B", 1, "Loop"), road("A", "A", 1, "Loop"));
    }

    #[test]
    fn hash_is_consistent_with_equality() {
        let mut set = FxHashSet::default();
        assert!(set.insert(road("A", "B", 3, "Main")));
        assert!(!set.insert(road("B", "A", 4, "Back")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn other_end_normalizes_self_loops() {
        let r = road("A", "B", 2, "R");
        assert_eq!(r.other_end(&Town::new("A")), &Town::new("B"));
        assert_eq!(r.other_end(&Town::new("B")), &Town::new("A"));

        let l = road("A", "A", 2, "L");
        assert_eq!(l.other_end(&Town::new("A")), &Town::new("A"));
    }

    #[test]
    fn display_and_weight_ordering() {
        let r = road("A", "B", 2, "Route 1");
        assert_eq!(r.to_string(), "Route 1 A B");
        assert_eq!(
            Road::with_default_weight(Town::new("A"), Town::new("C"), "x").cmp_by_weight(&r),
            Ordering::Less
        );
    }
}
