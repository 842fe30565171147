use fleury_core::errors::input_error;
use fleury_core::{FleuryError, RngHandle};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::adjacency::AdjacencyTable;
use crate::multigraph::Multigraph;

/// Generates a connected multigraph whose vertices all have even degree.
///
/// The edges are the steps of a random closed walk that visits every vertex,
/// so the graph always admits an Euler circuit. Repeated steps between the same
/// pair produce parallel edges and steps that stay put produce loops. With more
/// than one vertex the walk needs at least `n_vertices` edges.
pub fn gen_eulerian_circuit(
    n_vertices: usize,
    n_edges: usize,
    rng: &mut RngHandle,
) -> Result<Multigraph, FleuryError> {
    if n_vertices == 0 {
        return Err(invalid_generator("generator requires at least one vertex"));
    }
    if n_vertices > 1 && n_edges < n_vertices {
        return Err(
            invalid_generator("a closed walk through every vertex needs more edges")
                .with_context("vertices", n_vertices)
                .with_context("edges", n_edges),
        );
    }
    if n_vertices == 1 {
        let steps = vec![(0, 0); n_edges];
        return build(1, &steps);
    }

    let order = visiting_order(n_vertices, rng);
    let mut steps = tour_steps(&order);
    let mut current = order[n_vertices - 1];
    for _ in 0..(n_edges - n_vertices) {
        let next = rng.gen_range(0..n_vertices);
        steps.push((current, next));
        current = next;
    }
    steps.push((current, order[0]));
    log::debug!(
        "generated circuit graph with {} vertices and {} edges",
        n_vertices,
        steps.len()
    );
    build(n_vertices, &steps)
}

/// Generates a connected multigraph with exactly two odd-degree vertices.
///
/// The edges are the steps of a random open walk that visits every vertex and
/// ends away from where it started. Needs at least two vertices and
/// `n_vertices - 1` edges.
pub fn gen_eulerian_trail(
    n_vertices: usize,
    n_edges: usize,
    rng: &mut RngHandle,
) -> Result<Multigraph, FleuryError> {
    if n_vertices < 2 {
        return Err(invalid_generator("an open walk needs two distinct endpoints")
            .with_context("vertices", n_vertices));
    }
    if n_edges + 1 < n_vertices {
        return Err(
            invalid_generator("an open walk through every vertex needs more edges")
                .with_context("vertices", n_vertices)
                .with_context("edges", n_edges),
        );
    }

    let order = visiting_order(n_vertices, rng);
    let start = order[0];
    let mut steps = tour_steps(&order);
    let mut current = order[n_vertices - 1];
    let extra = n_edges + 1 - n_vertices;
    for step in 0..extra {
        let next = if step + 1 == extra {
            // Final step must not return to the start.
            let pick = rng.gen_range(0..n_vertices - 1);
            if pick >= start {
                pick + 1
            } else {
                pick
            }
        } else {
            rng.gen_range(0..n_vertices)
        };
        steps.push((current, next));
        current = next;
    }
    log::debug!(
        "generated trail graph with {} vertices and {} edges",
        n_vertices,
        steps.len()
    );
    build(n_vertices, &steps)
}

fn visiting_order(n_vertices: usize, rng: &mut RngHandle) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n_vertices).collect();
    order.shuffle(rng);
    order
}

fn tour_steps(order: &[usize]) -> Vec<(usize, usize)> {
    order.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

fn build(n_vertices: usize, steps: &[(usize, usize)]) -> Result<Multigraph, FleuryError> {
    let mut adjacency: Vec<Vec<String>> = vec![Vec::new(); n_vertices];
    for &(a, b) in steps {
        adjacency[a].push(label(b));
        adjacency[b].push(label(a));
    }
    let mut table = AdjacencyTable::new();
    for (index, adjacent) in adjacency.iter().enumerate() {
        table.push(&label(index), adjacent);
    }
    Multigraph::from_adjacency(&table)
}

fn label(index: usize) -> String {
    format!("v{index}")
}

fn invalid_generator(message: &str) -> FleuryError {
    input_error("invalid-generator", message)
}
