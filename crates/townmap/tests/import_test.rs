use std::path::{Path, PathBuf};
use townmap::{Error, ImportOptions, ImportSummary, RoadRecord, TownGraphManager};

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("towns")
}

fn load(name: &str, options: ImportOptions) -> (TownGraphManager, townmap::Result<ImportSummary>) {
    let mut map = TownGraphManager::new();
    let summary = map.populate_from_path(fixtures_root().join(name), options);
    (map, summary)
}

#[test]
fn imports_a_road_file() {
    let (map, summary) = load("maryland.txt", ImportOptions::default());
    let summary = summary.unwrap();

    assert_eq!(
        summary,
        ImportSummary {
            records: 8,
            towns_added: 8,
            roads_added: 8,
            duplicate_roads: 0,
            skipped_lines: 0,
        }
    );
    assert_eq!(map.all_towns().len(), 8);
    assert_eq!(map.get_road("Town_5", "Town_3"), Some("Main Street"));
    assert_eq!(
        map.get_path("Town_1", "Town_6"),
        vec![
            "Town_1 via I-70 to Town_3 15 mi",
            "Town_3 via Main Street to Town_5 7 mi",
            "Town_5 via Route 1 to Town_6 8 mi",
        ]
    );
    assert!(map.get_path("Town_1", "Town_8").is_empty());
}

#[test]
fn first_definition_of_a_road_wins() {
    let (map, summary) = load("duplicates.txt", ImportOptions::default());
    let summary = summary.unwrap();

    assert_eq!(summary.records, 4);
    assert_eq!(summary.towns_added, 4);
    assert_eq!(summary.roads_added, 3);
    assert_eq!(summary.duplicate_roads, 1);
    assert_eq!(map.get_road("Ashby", "Brook"), Some("Old Post Road"));
    assert_eq!(
        map.all_roads(),
        vec!["Canal Path", "Canal Path", "Old Post Road"]
    );
}

#[test]
fn applying_records_directly_skips_duplicates() {
    let mut map = TownGraphManager::new();
    let summary = map
        .apply_records([
            RoadRecord::new("Route 9", 4, "Ashby", "Brook"),
            RoadRecord::new("Route 9 Bypass", 1, "Brook", "Ashby"),
        ])
        .unwrap();
    assert_eq!(summary.roads_added, 1);
    assert_eq!(summary.duplicate_roads, 1);
    assert_eq!(map.graph().edge_count(), 1);
    assert_eq!(
        map.get_path("Brook", "Ashby"),
        vec!["Brook via Route 9 to Ashby 4 mi"]
    );
}

#[test]
fn strict_import_reports_the_line_and_applies_nothing() {
    let (map, summary) = load("malformed.txt", ImportOptions::default());
    let err = summary.unwrap_err();
    assert!(
        matches!(err, Error::MalformedRecord { line: 2, .. }),
        "unexpected error: {err}"
    );
    assert!(map.all_towns().is_empty());
}

#[test]
fn lenient_import_skips_malformed_lines() {
    let (map, summary) = load("malformed.txt", ImportOptions { lenient: true });
    let summary = summary.unwrap();
    assert_eq!(summary.skipped_lines, 2);
    assert_eq!(summary.roads_added, 2);
    assert_eq!(map.all_towns(), vec!["Ashby", "Brook", "Dunmore"]);
}

#[test]
fn missing_file_names_the_path() {
    let (_, summary) = load("does-not-exist.txt", ImportOptions::default());
    let err = summary.unwrap_err();
    assert!(matches!(err, Error::ReadFile { .. }));
    assert!(err.to_string().contains("does-not-exist.txt"));
}

#[test]
fn imports_from_a_reader() {
    let mut map = TownGraphManager::new();
    let text = "Ridge Way,4;Ashby;Brook\nQuarry Road,9;Brook;Dunmore\n";
    let summary = map
        .populate_from_reader(text.as_bytes(), ImportOptions::default())
        .unwrap();
    assert_eq!(summary.roads_added, 2);
    assert!(map.contains_road_connection("Dunmore", "Brook"));
}

#[test]
fn imports_a_temporary_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roads.txt");
    std::fs::write(&path, "Coast Road,11;Port;Cliffs\r\n").expect("write roads");

    let mut map = TownGraphManager::new();
    map.populate_from_path(&path, ImportOptions::default())
        .unwrap();
    assert_eq!(map.get_road("Port", "Cliffs"), Some("Coast Road"));
}
