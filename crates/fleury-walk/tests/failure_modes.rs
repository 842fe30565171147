use fleury_core::{FleuryError, VertexId};
use fleury_graph::{AdjacencyTable, Multigraph};
use fleury_walk::{build_walk, find_euler_walk, validate, verify_walk, WalkConfig};

fn two_triangles() -> Multigraph {
    let table = AdjacencyTable::new()
        .with_vertex("A", &["B", "C"])
        .with_vertex("B", &["A", "C"])
        .with_vertex("C", &["A", "B"])
        .with_vertex("D", &["E", "F"])
        .with_vertex("E", &["D", "F"])
        .with_vertex("F", &["D", "E"]);
    Multigraph::from_adjacency(&table).unwrap()
}

fn path() -> Multigraph {
    let table = AdjacencyTable::new()
        .with_vertex("A", &["B"])
        .with_vertex("B", &["A", "C"])
        .with_vertex("C", &["B"]);
    Multigraph::from_adjacency(&table).unwrap()
}

#[test]
fn disconnected_graph_is_an_invariant_violation_when_walking() {
    let err = find_euler_walk(&mut two_triangles(), &WalkConfig::default()).unwrap_err();
    assert!(matches!(err, FleuryError::InvariantViolation(_)));
    assert_eq!(err.code(), "no-committable-edge");
    assert_eq!(err.info().context.get("vertex"), Some(&"A".to_string()));
}

#[test]
fn precheck_reports_disconnected_graph_up_front() {
    let config = WalkConfig {
        connectivity_precheck: true,
        ..WalkConfig::default()
    };
    let err = find_euler_walk(&mut two_triangles(), &config).unwrap_err();
    assert!(matches!(err, FleuryError::NoEulerWalk(_)));
    assert_eq!(err.code(), "disconnected");
}

#[test]
fn starting_from_a_stranded_vertex_is_reported() {
    let mut graph = path();
    let mut endpoints = validate(&graph).unwrap();
    let a = graph.vertex_id("A").unwrap();
    let b = graph.vertex_id("B").unwrap();
    graph.remove_edge(a, b).unwrap();
    endpoints.start = a;
    let err = build_walk(&mut graph, &endpoints, &WalkConfig::default()).unwrap_err();
    assert_eq!(err.code(), "stranded-edges");
}

#[test]
fn wrong_end_breaks_postcondition() {
    let mut graph = path();
    let mut endpoints = validate(&graph).unwrap();
    endpoints.end = graph.vertex_id("B").unwrap();
    let err = build_walk(&mut graph, &endpoints, &WalkConfig::default()).unwrap_err();
    assert!(matches!(err, FleuryError::InvariantViolation(_)));
    assert_eq!(err.code(), "postcondition");
    assert_eq!(err.info().context.get("last"), Some(&"C".to_string()));
}

#[test]
fn verifier_rejects_reused_and_missing_edges() {
    let graph = path();
    let id = |label: &str| graph.vertex_id(label).unwrap();

    verify_walk(&graph, &[id("A"), id("B"), id("C")]).unwrap();

    let reused = verify_walk(&graph, &[id("A"), id("B"), id("A")]).unwrap_err();
    assert_eq!(reused.code(), "walk-mismatch");
    assert_eq!(reused.info().context.get("step"), Some(&"2".to_string()));

    let short = verify_walk(&graph, &[id("A"), id("B")]).unwrap_err();
    assert_eq!(short.info().context.get("unused"), Some(&"1".to_string()));

    let nonsense = verify_walk(&graph, &[id("A"), id("C")]).unwrap_err();
    assert_eq!(nonsense.code(), "walk-mismatch");

    let empty: [VertexId; 0] = [];
    assert!(verify_walk(&graph, &empty).is_err());
}
