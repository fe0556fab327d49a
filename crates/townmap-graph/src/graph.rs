//! The town/road graph container.
//!
//! Towns and roads are stored in insertion order with name-keyed indexes alongside. Removal
//! shifts the backing vectors and rebuilds the affected index, which is fine for the small
//! regional maps this crate is aimed at.

mod pair_key;

use crate::alg::{self, Hop};
use crate::{Error, Result, Road, Town};
use pair_key::{PairKey, PairKeyView};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    towns: Vec<Town>,
    town_index: HashMap<String, usize>,

    roads: Vec<Road>,
    road_index: HashMap<PairKey, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    fn reindex_towns(&mut self) {
        self.town_index.clear();
        for (ix, t) in self.towns.iter().enumerate() {
            self.town_index.insert(t.name().to_string(), ix);
        }
    }

    fn reindex_roads(&mut self) {
        self.road_index.clear();
        for (ix, r) in self.roads.iter().enumerate() {
            let key = PairKeyView::new(r.source().name(), r.destination().name()).to_key();
            self.road_index.insert(key, ix);
        }
    }

    fn require_town(&self, town: &Town) -> Result<()> {
        if town.name().is_empty() {
            return Err(Error::empty_town_name());
        }
        if !self.town_index.contains_key(town.name()) {
            return Err(Error::missing_town(town.name()));
        }
        Ok(())
    }

    pub(crate) fn town_ix(&self, name: &str) -> Option<usize> {
        self.town_index.get(name).copied()
    }

    pub(crate) fn town_at(&self, ix: usize) -> &Town {
        &self.towns[ix]
    }

    pub(crate) fn road_between(&self, v: &str, w: &str) -> Option<&Road> {
        self.road_index
            .get(&PairKeyView::new(v, w))
            .map(|&ix| &self.roads[ix])
    }

    pub(crate) fn roads_touching<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Road> {
        self.roads.iter().filter(move |r| r.touches(name))
    }

    /// Adds `town` unless a town with the same name is already present.
    ///
    /// Returns `Ok(false)` for a duplicate and [`Error::InvalidInput`] for an empty name.
    pub fn add_vertex(&mut self, town: Town) -> Result<bool> {
        if town.name().is_empty() {
            return Err(Error::empty_town_name());
        }
        if self.town_index.contains_key(town.name()) {
            return Ok(false);
        }
        let ix = self.towns.len();
        self.town_index.insert(town.name().to_string(), ix);
        self.towns.push(town);
        Ok(true)
    }

    /// Removes `town` together with every road touching it.
    pub fn remove_vertex(&mut self, town: &Town) -> bool {
        let Some(ix) = self.town_index.remove(town.name()) else {
            return false;
        };
        self.towns.remove(ix);
        self.reindex_towns();

        let before = self.roads.len();
        self.roads.retain(|r| !r.contains(town));
        if self.roads.len() != before {
            self.reindex_roads();
        }
        true
    }

    /// Connects two towns that are already in the graph.
    ///
    /// Returns the new road, or `None` if a road already joins the pair; an existing road is
    /// never overwritten. Fails if either endpoint has an empty name or is not in the graph.
    pub fn add_edge(
        &mut self,
        source: &Town,
        destination: &Town,
        weight: u32,
        name: impl Into<String>,
    ) -> Result<Option<Road>> {
        self.require_town(source)?;
        self.require_town(destination)?;

        let view = PairKeyView::new(source.name(), destination.name());
        if self.road_index.contains_key(&view) {
            return Ok(None);
        }

        let road = Road::new(source.clone(), destination.clone(), weight, name);
        let ix = self.roads.len();
        self.road_index.insert(view.to_key(), ix);
        self.roads.push(road.clone());
        Ok(Some(road))
    }

    /// Removes the road joining `source` and `destination`.
    ///
    /// `weight` and `name` narrow the match when given: `None` matches any value. Returns the
    /// removed road, or `None` if nothing matched.
    pub fn remove_edge(
        &mut self,
        source: &Town,
        destination: &Town,
        weight: Option<u32>,
        name: Option<&str>,
    ) -> Option<Road> {
        let view = PairKeyView::new(source.name(), destination.name());
        let ix = self.road_index.get(&view).copied()?;

        let candidate = &self.roads[ix];
        if weight.is_some_and(|w| w != candidate.weight())
            || name.is_some_and(|n| n != candidate.name())
        {
            return None;
        }

        let road = self.roads.remove(ix);
        self.reindex_roads();
        Some(road)
    }

    /// Returns the road joining the two towns, in whichever endpoint order it was stored.
    pub fn edge(&self, source: &Town, destination: &Town) -> Option<&Road> {
        if source.name().is_empty() || destination.name().is_empty() {
            return None;
        }
        self.road_between(source.name(), destination.name())
    }

    pub fn contains_vertex(&self, town: &Town) -> bool {
        self.town_index.contains_key(town.name())
    }

    pub fn contains_edge(&self, source: &Town, destination: &Town) -> bool {
        self.edge(source, destination).is_some()
    }

    /// Returns the stored town with the given name.
    pub fn town(&self, name: &str) -> Option<&Town> {
        self.town_ix(name).map(|ix| &self.towns[ix])
    }

    /// Returns every road touching `town`.
    pub fn edges_of(&self, town: &Town) -> Result<Vec<&Road>> {
        self.require_town(town)?;
        Ok(self.roads.iter().filter(|r| r.contains(town)).collect())
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Town> {
        self.towns.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Road> {
        self.roads.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.towns.len()
    }

    pub fn edge_count(&self) -> usize {
        self.roads.len()
    }

    /// Runs Dijkstra from `source` and returns the hops leading to `destination`.
    ///
    /// An unreachable destination yields an empty path.
    pub fn shortest_path(&self, source: &Town, destination: &Town) -> Result<Vec<Hop>> {
        Ok(alg::dijkstra(self, source)?.path_to(self, destination))
    }
}
