use fleury_core::{WalkKind, WalkProvenance};
use fleury_graph::{canonical_hash, AdjacencyTable, Multigraph};
use fleury_walk::{find_euler_walk, WalkConfig, WalkReport, REPORT_SCHEMA};

#[test]
fn report_carries_labels_and_provenance() {
    let table = AdjacencyTable::new()
        .with_vertex("A", &["B", "C", "D"])
        .with_vertex("B", &["A", "C"])
        .with_vertex("C", &["B", "A", "D"])
        .with_vertex("D", &["A", "C"]);
    let mut graph = Multigraph::from_adjacency(&table).unwrap();
    let provenance = WalkProvenance {
        graph_hash: canonical_hash(&graph),
        seed: None,
        tool_version: "test".into(),
    };
    let walk = find_euler_walk(&mut graph, &WalkConfig::default()).unwrap();
    let report = WalkReport::new(&graph, &walk, provenance);

    assert_eq!(report.schema_version, REPORT_SCHEMA);
    assert_eq!(report.kind, WalkKind::Open);
    assert_eq!(report.start, "A");
    assert_eq!(report.end, "C");
    assert_eq!(report.edge_count, 5);
    assert_eq!(report.rendered(), "A -> B -> C -> A -> D -> C");

    let json = report.to_json().unwrap();
    assert!(json.contains("\"kind\": \"open\""));
    assert!(!json.contains("\"seed\""));
    assert_eq!(WalkReport::from_json(&json).unwrap(), report);
}

#[test]
fn config_loads_from_yaml_with_defaults() {
    let config = WalkConfig::from_yaml_str("verify: true\n").unwrap();
    assert!(config.verify);
    assert!(!config.connectivity_precheck);
    assert_eq!(config.seed(), None);

    let seeded =
        WalkConfig::from_yaml_str("candidate_order:\n  type: seeded\n  seed: 42\n").unwrap();
    assert_eq!(seeded.seed(), Some(42));

    let err = WalkConfig::from_yaml_str("candidate_order: sideways\n").unwrap_err();
    assert_eq!(err.code(), "config-yaml");
}
