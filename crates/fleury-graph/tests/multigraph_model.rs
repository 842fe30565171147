use fleury_core::FleuryError;
use fleury_graph::{AdjacencyTable, Multigraph};

fn triangle_multigraph() -> AdjacencyTable {
    AdjacencyTable::new()
        .with_vertex("A", &["B", "B", "C", "C"])
        .with_vertex("B", &["A", "A", "C", "C"])
        .with_vertex("C", &["B", "B", "A", "A"])
}

#[test]
fn builds_parallel_edges_with_degrees() {
    let graph = Multigraph::from_adjacency(&triangle_multigraph()).unwrap();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 6);
    for vertex in graph.vertex_ids() {
        assert_eq!(graph.degree(vertex), 4);
    }
    let a = graph.vertex_id("A").unwrap();
    assert_eq!(graph.incident_edges(a).len(), 4);
    assert_eq!(graph.label(a), Some("A"));
}

#[test]
fn remove_edge_drops_one_instance_per_side() {
    let mut graph = Multigraph::from_adjacency(&triangle_multigraph()).unwrap();
    let a = graph.vertex_id("A").unwrap();
    let b = graph.vertex_id("B").unwrap();

    graph.remove_edge(a, b).unwrap();
    assert_eq!(graph.degree(a), 3);
    assert_eq!(graph.degree(b), 3);
    assert_eq!(graph.edge_count(), 5);

    graph.remove_edge(b, a).unwrap();
    assert_eq!(graph.degree(a), 2);
    let err = graph.remove_edge(a, b).unwrap_err();
    match err {
        FleuryError::InvalidEdge(info) => {
            assert_eq!(info.code, "missing-edge");
            assert_eq!(info.context.get("from"), Some(&"A".to_string()));
            assert_eq!(info.context.get("to"), Some(&"B".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn emptied_vertices_leave_the_active_set() {
    let table = AdjacencyTable::new()
        .with_vertex("A", &["B"])
        .with_vertex("B", &["A", "C"])
        .with_vertex("C", &["B"]);
    let mut graph = Multigraph::from_adjacency(&table).unwrap();
    let a = graph.vertex_id("A").unwrap();
    let b = graph.vertex_id("B").unwrap();

    graph.remove_edge(a, b).unwrap();
    assert_eq!(graph.degree(a), 0);
    assert_eq!(graph.active_vertices().len(), 2);

    let remaining = graph.to_adjacency();
    let labels: Vec<_> = remaining.vertices.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, vec!["B", "C"]);
}

#[test]
fn detach_and_restore_are_inverse() {
    let mut graph = Multigraph::from_adjacency(&triangle_multigraph()).unwrap();
    let a = graph.vertex_id("A").unwrap();
    let edge = graph.incident_edges(a)[0];

    graph.detach_edge(edge).unwrap();
    assert!(!graph.is_alive(edge));
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(
        graph.detach_edge(edge).unwrap_err().code(),
        "edge-consumed"
    );

    graph.restore_edge(edge).unwrap();
    assert!(graph.is_alive(edge));
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.restore_edge(edge).unwrap_err().code(), "edge-alive");
}

#[test]
fn self_loops_count_twice() {
    let table = AdjacencyTable::new()
        .with_vertex("A", &["A", "A", "B"])
        .with_vertex("B", &["A"]);
    let mut graph = Multigraph::from_adjacency(&table).unwrap();
    let a = graph.vertex_id("A").unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.degree(a), 3);
    assert_eq!(graph.incident_edges(a).len(), 2);

    graph.remove_edge(a, a).unwrap();
    assert_eq!(graph.degree(a), 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn malformed_tables_are_rejected() {
    let cases = [
        (AdjacencyTable::new(), "empty-graph"),
        (
            AdjacencyTable::new()
                .with_vertex("A", &["B"])
                .with_vertex("A", &["B"]),
            "duplicate-vertex",
        ),
        (AdjacencyTable::new().with_vertex("", &[] as &[&str]), "empty-label"),
        (AdjacencyTable::new().with_vertex("A", &["Z"]), "unknown-neighbour"),
        (
            AdjacencyTable::new()
                .with_vertex("A", &["B", "B"])
                .with_vertex("B", &["A"]),
            "asymmetric-adjacency",
        ),
        (AdjacencyTable::new().with_vertex("A", &["A"]), "odd-self-loop"),
    ];
    for (table, code) in cases {
        let err = Multigraph::from_adjacency(&table).unwrap_err();
        assert!(matches!(err, FleuryError::InvalidInput(_)), "{code}: {err}");
        assert_eq!(err.code(), code);
    }
}

#[test]
fn unknown_vertices_are_invalid_edges() {
    let mut graph = Multigraph::from_adjacency(&triangle_multigraph()).unwrap();
    let a = graph.vertex_id("A").unwrap();
    let ghost = fleury_core::VertexId::from_raw(42);
    assert_eq!(graph.degree(ghost), 0);
    assert_eq!(
        graph.remove_edge(a, ghost).unwrap_err().code(),
        "unknown-vertex"
    );
}
