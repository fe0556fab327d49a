//! Graph vertices.

use std::fmt;

/// A vertex of the road graph, identified solely by its name.
///
/// Equality, hashing and ordering all use the name (case-sensitive, exact match).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Town {
    name: String,
}

impl Town {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the town's name.
    ///
    /// A [`Graph`](crate::Graph) indexes towns and roads by name, so a town must not be renamed
    /// while an equal town is stored in a graph. Rename a detached value, remove and re-add it
    /// instead.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl From<&str> for Town {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Town {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
