//! Shortest-path search over a [`Graph`].
//!
//! [`dijkstra`] computes distances and predecessors from one source town and hands them back as
//! a [`ShortestPaths`] value. Paths to any destination are then rebuilt from that table with
//! [`ShortestPaths::path_to`].

use crate::{Error, Graph, Result, Town};
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use std::fmt;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// One leg of a path: travelling from `from` to `to` along road `road`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: String,
    pub road: String,
    pub to: String,
    pub weight: u32,
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} to {} {} mi",
            self.from, self.road, self.to, self.weight
        )
    }
}

/// Sums the weights of a path.
pub fn total_weight(hops: &[Hop]) -> u64 {
    hops.iter().map(|h| u64::from(h.weight)).sum()
}

/// Result of a single-source Dijkstra run.
///
/// Towns missing from the tables were unreachable from the source.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: String,
    distance: HashMap<String, u64>,
    predecessor: HashMap<String, String>,
}

impl ShortestPaths {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn distance_to(&self, town: &str) -> Option<u64> {
        self.distance.get(town).copied()
    }

    pub fn predecessor(&self, town: &str) -> Option<&str> {
        self.predecessor.get(town).map(|s| s.as_str())
    }

    pub fn is_reachable(&self, town: &str) -> bool {
        self.distance.contains_key(town)
    }

    /// Rebuilds the path from the source to `destination`, source first.
    ///
    /// `g` should be the graph this table was computed from. Returns an empty path when the
    /// destination is the source itself, is not in the graph, or cannot be reached. Each hop
    /// must also agree with the recorded distances, so a table gone stale after roads were
    /// removed or re-weighted yields an empty path. The backward walk is capped at one step per
    /// town and never loops.
    pub fn path_to(&self, g: &Graph, destination: &Town) -> Vec<Hop> {
        if !g.contains_vertex(destination) {
            return Vec::new();
        }

        let mut hops: Vec<Hop> = Vec::new();
        let mut current = destination.name();
        while current != self.source {
            if hops.len() >= g.vertex_count() {
                return Vec::new();
            }
            let Some(parent) = self.predecessor(current) else {
                return Vec::new();
            };
            let Some(road) = g.road_between(parent, current) else {
                return Vec::new();
            };
            let consistent = match (self.distance_to(parent), self.distance_to(current)) {
                (Some(before), Some(after)) => before + u64::from(road.weight()) == after,
                _ => false,
            };
            if !consistent {
                return Vec::new();
            }
            hops.push(Hop {
                from: parent.to_string(),
                road: road.name().to_string(),
                to: current.to_string(),
                weight: road.weight(),
            });
            current = parent;
        }

        hops.reverse();
        hops
    }
}

fn is_closer(candidate: Option<u64>, best: Option<u64>) -> bool {
    match (candidate, best) {
        (Some(c), Some(b)) => c < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Single-source Dijkstra over every town in `g`.
///
/// Each round takes the first unvisited town (in insertion order) with the smallest known
/// distance and relaxes all roads touching it. Distance ties therefore resolve towards earlier
/// towns; only the total weight of a path is guaranteed.
pub fn dijkstra(g: &Graph, source: &Town) -> Result<ShortestPaths> {
    if source.name().is_empty() {
        return Err(Error::empty_town_name());
    }
    let Some(source_ix) = g.town_ix(source.name()) else {
        return Err(Error::missing_town(source.name()));
    };

    let n = g.vertex_count();
    let mut distance: Vec<Option<u64>> = vec![None; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    distance[source_ix] = Some(0);

    let mut unvisited: Vec<usize> = (0..n).collect();
    while !unvisited.is_empty() {
        let mut closest = 0;
        for i in 1..unvisited.len() {
            if is_closer(distance[unvisited[i]], distance[unvisited[closest]]) {
                closest = i;
            }
        }
        let current = unvisited.remove(closest);

        // Everything left is unreachable.
        let Some(current_distance) = distance[current] else {
            break;
        };

        let current_town = g.town_at(current);
        for road in g.roads_touching(current_town.name()) {
            let neighbor = road.other_end(current_town);
            let Some(neighbor_ix) = g.town_ix(neighbor.name()) else {
                debug_assert!(false, "road endpoint missing from town index");
                continue;
            };
            let candidate = current_distance + u64::from(road.weight());
            if is_closer(Some(candidate), distance[neighbor_ix]) {
                distance[neighbor_ix] = Some(candidate);
                predecessor[neighbor_ix] = Some(current);
            }
        }
    }

    let mut out = ShortestPaths {
        source: source.name().to_string(),
        distance: HashMap::default(),
        predecessor: HashMap::default(),
    };
    for ix in 0..n {
        let name = g.town_at(ix).name();
        if let Some(d) = distance[ix] {
            out.distance.insert(name.to_string(), d);
        }
        if let Some(p) = predecessor[ix] {
            out.predecessor
                .insert(name.to_string(), g.town_at(p).name().to_string());
        }
    }

    tracing::trace!(
        source = %source,
        towns = n,
        reachable = out.distance.len(),
        "dijkstra finished"
    );
    Ok(out)
}

/// Runs [`dijkstra`] and formats the path to `destination` as
/// `"<from> via <road> to <to> <weight> mi"` lines.
pub fn build_path(g: &Graph, source: &Town, destination: &Town) -> Result<Vec<String>> {
    let paths = dijkstra(g, source)?;
    Ok(paths
        .path_to(g, destination)
        .iter()
        .map(ToString::to_string)
        .collect())
}
