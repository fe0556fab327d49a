//! Road index keys.
//!
//! A road is keyed by the names of its two towns in ascending order, so `(a, b)` and `(b, a)`
//! resolve to the same slot.

use crate::road::canonical_pair;

#[derive(Clone, Copy, Hash)]
pub(in crate::graph) struct PairKeyView<'a> {
    a: &'a str,
    b: &'a str,
}

impl<'a> PairKeyView<'a> {
    pub(in crate::graph) fn new(v: &'a str, w: &'a str) -> Self {
        let (a, b) = canonical_pair(v, w);
        Self { a, b }
    }

    pub(in crate::graph) fn to_key(self) -> PairKey {
        PairKey {
            a: self.a.to_string(),
            b: self.b.to_string(),
        }
    }
}

impl hashbrown::Equivalent<PairKey> for PairKeyView<'_> {
    fn equivalent(&self, key: &PairKey) -> bool {
        key.a == self.a && key.b == self.b
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(in crate::graph) struct PairKey {
    a: String,
    b: String,
}
