use townmap::{Error, TownGraphManager};

fn sample() -> TownGraphManager {
    let mut map = TownGraphManager::new();
    map.add_road("A", "B", 5, "AB").unwrap();
    map.add_road("B", "C", 3, "BC").unwrap();
    map.add_road("A", "C", 10, "AC").unwrap();
    map.add_road("C", "D", 1, "CD").unwrap();
    map.add_town("E").unwrap();
    map
}

#[test]
fn add_road_creates_missing_towns() {
    let mut map = TownGraphManager::new();
    assert!(map.add_road("Ashby", "Brook", 4, "Mill Lane").unwrap());
    assert!(map.contains_town("Ashby"));
    assert!(map.contains_town("Brook"));
    assert!(map.contains_road_connection("Brook", "Ashby"));
    assert_eq!(map.get_road("Brook", "Ashby"), Some("Mill Lane"));
}

#[test]
fn second_road_between_the_same_towns_is_rejected() {
    let mut map = TownGraphManager::new();
    assert!(map.add_road("A", "B", 4, "First").unwrap());
    assert!(!map.add_road("B", "A", 1, "Second").unwrap());
    assert_eq!(map.all_roads(), vec!["First"]);
    assert_eq!(map.graph().edge_count(), 1);
}

#[test]
fn empty_town_names_are_invalid_input() {
    let mut map = TownGraphManager::new();
    assert!(matches!(
        map.add_town(""),
        Err(Error::Graph(townmap_graph::Error::InvalidInput { .. }))
    ));
    assert!(map.add_road("A", "", 1, "R").is_err());
}

#[test]
fn listings_are_sorted_regardless_of_insertion_order() {
    let mut map = TownGraphManager::new();
    map.add_road("Zeta", "Alpha", 1, "Yew Road").unwrap();
    map.add_road("Mid", "Alpha", 1, "Birch Road").unwrap();
    map.add_town("Beta").unwrap();

    assert_eq!(map.all_towns(), vec!["Alpha", "Beta", "Mid", "Zeta"]);
    assert_eq!(map.all_roads(), vec!["Birch Road", "Yew Road"]);
}

#[test]
fn town_lookup_returns_the_stored_town() {
    let map = sample();
    assert_eq!(map.town("E").map(|t| t.name()), Some("E"));
    assert!(map.town("Z").is_none());
}

#[test]
fn get_path_follows_the_cheapest_route() {
    let map = sample();
    assert_eq!(
        map.get_path("A", "D"),
        vec![
            "A via AB to B 5 mi",
            "B via BC to C 3 mi",
            "C via CD to D 1 mi",
        ]
    );
}

#[test]
fn get_path_is_empty_for_isolated_or_unknown_towns() {
    let map = sample();
    assert!(map.get_path("A", "E").is_empty());
    assert!(map.get_path("E", "A").is_empty());
    assert!(map.get_path("A", "Nowhere").is_empty());
}

#[test]
fn get_path_is_empty_between_disconnected_components() {
    let mut map = sample();
    map.add_road("X", "Y", 2, "XY").unwrap();
    assert!(map.get_path("A", "Y").is_empty());
    assert_eq!(map.get_path("Y", "X"), vec!["Y via XY to X 2 mi"]);
}

#[test]
fn delete_road_connection_checks_the_road_name() {
    let mut map = sample();
    assert!(!map.delete_road_connection("A", "B", "Wrong Name"));
    assert!(map.contains_road_connection("A", "B"));

    assert!(map.delete_road_connection("B", "A", "AB"));
    assert!(!map.contains_road_connection("A", "B"));
    assert!(!map.delete_road_connection("A", "B", "AB"));

    // With AB gone the direct road wins.
    assert_eq!(
        map.get_path("A", "D"),
        vec!["A via AC to C 10 mi", "C via CD to D 1 mi"]
    );
}

#[test]
fn delete_town_removes_its_roads() {
    let mut map = sample();
    assert!(map.delete_town("C"));
    assert!(!map.delete_town("C"));
    assert!(!map.contains_road_connection("B", "C"));
    assert_eq!(map.all_roads(), vec!["AB"]);
    assert!(map.get_path("A", "D").is_empty());
}

#[test]
fn typed_path_serializes_hops() {
    let map = sample();
    let hops = map.shortest_path("C", "A");
    let value = serde_json::to_value(&hops).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "from": "C", "road": "BC", "to": "B", "weight": 3 },
            { "from": "B", "road": "AB", "to": "A", "weight": 5 },
        ])
    );
}
