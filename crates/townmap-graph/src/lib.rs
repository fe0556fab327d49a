#![forbid(unsafe_code)]

//! Town/road graph container used by `townmap`.
//!
//! Towns are identified by name; roads are undirected, weighted and named, and at most one road
//! may connect a given pair of towns. Shortest paths are computed with Dijkstra's algorithm (see
//! [`alg`]), which returns its predecessor table by value so that no search state lives inside
//! the graph.

pub mod alg;
mod error;
mod graph;
mod road;
mod town;

pub use alg::{Hop, ShortestPaths};
pub use error::{Error, Result};
pub use graph::Graph;
pub use road::Road;
pub use town::Town;
