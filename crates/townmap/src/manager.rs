use crate::import::{self, ImportOptions, ImportSummary, RoadRecord};
use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use townmap_graph::{Graph, Hop, Road, Town};

/// String-keyed front end over a [`Graph`].
///
/// Every operation builds [`Town`] values from raw names and delegates to the graph.
#[derive(Debug, Clone, Default)]
pub struct TownGraphManager {
    graph: Graph,
}

impl TownGraphManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn add_town(&mut self, name: &str) -> Result<bool> {
        let added = self.graph.add_vertex(Town::new(name))?;
        if added {
            tracing::debug!(town = name, "town added");
        }
        Ok(added)
    }

    pub fn town(&self, name: &str) -> Option<&Town> {
        self.graph.town(name)
    }

    pub fn contains_town(&self, name: &str) -> bool {
        self.graph.contains_vertex(&Town::new(name))
    }

    pub fn delete_town(&mut self, name: &str) -> bool {
        let removed = self.graph.remove_vertex(&Town::new(name));
        if removed {
            tracing::debug!(town = name, "town deleted");
        }
        removed
    }

    /// Adds a road, creating either town if it does not exist yet.
    ///
    /// Returns `false` when a road already connects the two towns.
    pub fn add_road(
        &mut self,
        town1: &str,
        town2: &str,
        weight: u32,
        road_name: &str,
    ) -> Result<bool> {
        let source = Town::new(town1);
        let destination = Town::new(town2);
        self.graph.add_vertex(source.clone())?;
        self.graph.add_vertex(destination.clone())?;

        let added = self
            .graph
            .add_edge(&source, &destination, weight, road_name)?
            .is_some();
        if added {
            tracing::debug!(road = road_name, from = town1, to = town2, weight, "road added");
        }
        Ok(added)
    }

    /// Returns the name of the road joining the two towns.
    pub fn get_road(&self, town1: &str, town2: &str) -> Option<&str> {
        self.graph
            .edge(&Town::new(town1), &Town::new(town2))
            .map(Road::name)
    }

    pub fn contains_road_connection(&self, town1: &str, town2: &str) -> bool {
        self.graph
            .contains_edge(&Town::new(town1), &Town::new(town2))
    }

    /// Removes the road called `road_name` between the two towns.
    ///
    /// Returns `false` if no road joins them or the joining road has another name.
    pub fn delete_road_connection(&mut self, town1: &str, town2: &str, road_name: &str) -> bool {
        let removed = self
            .graph
            .remove_edge(&Town::new(town1), &Town::new(town2), None, Some(road_name))
            .is_some();
        if removed {
            tracing::debug!(road = road_name, from = town1, to = town2, "road deleted");
        }
        removed
    }

    /// Town names in ascending order.
    pub fn all_towns(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .graph
            .vertices()
            .map(|t| t.name().to_string())
            .collect();
        out.sort_unstable();
        out
    }

    /// Road names in ascending order.
    pub fn all_roads(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .graph
            .edges()
            .map(|r| r.name().to_string())
            .collect();
        out.sort_unstable();
        out
    }

    fn has_roads(&self, town: &Town) -> bool {
        self.graph
            .edges_of(town)
            .is_ok_and(|roads| !roads.is_empty())
    }

    /// Shortest path between two towns as typed hops.
    ///
    /// Empty when either town is unknown, has no roads, or cannot reach the other.
    pub fn shortest_path(&self, town1: &str, town2: &str) -> Vec<Hop> {
        let source = Town::new(town1);
        let destination = Town::new(town2);
        if !self.has_roads(&source) || !self.has_roads(&destination) {
            return Vec::new();
        }
        self.graph
            .shortest_path(&source, &destination)
            .unwrap_or_default()
    }

    /// Shortest path formatted as `"<from> via <road> to <to> <weight> mi"` lines.
    pub fn get_path(&self, town1: &str, town2: &str) -> Vec<String> {
        self.shortest_path(town1, town2)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Applies parsed records: missing towns are added, then the road unless the pair is
    /// already connected.
    pub fn apply_records(
        &mut self,
        records: impl IntoIterator<Item = RoadRecord>,
    ) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();
        for record in records {
            summary.records += 1;
            let source = Town::new(record.source);
            let destination = Town::new(record.destination);
            summary.towns_added += usize::from(self.graph.add_vertex(source.clone())?);
            summary.towns_added += usize::from(self.graph.add_vertex(destination.clone())?);

            if self.graph.contains_edge(&source, &destination) {
                tracing::debug!(
                    road = %record.name,
                    from = %source,
                    to = %destination,
                    "towns already connected; keeping the first road"
                );
                summary.duplicate_roads += 1;
                continue;
            }
            self.graph
                .add_edge(&source, &destination, record.weight, record.name)?;
            summary.roads_added += 1;
        }
        Ok(summary)
    }

    pub fn populate_from_str(
        &mut self,
        text: &str,
        options: ImportOptions,
    ) -> Result<ImportSummary> {
        let parsed = import::parse_records(text, options)?;
        let mut summary = self.apply_records(parsed.records)?;
        summary.skipped_lines = parsed.skipped_lines;
        tracing::info!(
            records = summary.records,
            towns_added = summary.towns_added,
            roads_added = summary.roads_added,
            duplicate_roads = summary.duplicate_roads,
            skipped_lines = summary.skipped_lines,
            "road records imported"
        );
        Ok(summary)
    }

    pub fn populate_from_reader(
        &mut self,
        mut reader: impl Read,
        options: ImportOptions,
    ) -> Result<ImportSummary> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.populate_from_str(&text, options)
    }

    pub fn populate_from_path(
        &mut self,
        path: impl AsRef<Path>,
        options: ImportOptions,
    ) -> Result<ImportSummary> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.populate_from_str(&text, options)
    }
}
