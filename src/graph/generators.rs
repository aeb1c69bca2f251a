use rand::Rng;

use crate::graph::store::{EdgeRecord, GraphStore};
use crate::Result;

/// Name of the grid node at column `x`, row `y`, as understood by the
/// coordinate heuristics
pub fn grid_node(x: usize, y: usize) -> String {
    format!("{},{}", x, y)
}

/// Generates a 4-connected grid of `width * height` cells
///
/// Every pair of horizontally or vertically adjacent cells is joined in both
/// directions with the weight returned by `weight_fn(a, b)`. Nodes are named
/// `"x,y"`. A 1x1 grid has no edges and therefore no nodes.
pub fn grid<F>(width: usize, height: usize, mut weight_fn: F) -> Result<GraphStore>
where
    F: FnMut((usize, usize), (usize, usize)) -> f64,
{
    let mut edges = Vec::with_capacity(2 * width * height);

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                let weight = weight_fn((x, y), (x + 1, y));
                edges.push(EdgeRecord::new(grid_node(x, y), grid_node(x + 1, y), weight));
            }
            if y + 1 < height {
                let weight = weight_fn((x, y), (x, y + 1));
                edges.push(EdgeRecord::new(grid_node(x, y), grid_node(x, y + 1), weight));
            }
        }
    }

    GraphStore::build(edges, true)
}

/// Generates a grid with random integer weights in `[1, max_weight]`
///
/// Weights of at least 1 keep the manhattan heuristic admissible and
/// consistent on these grids.
pub fn random_grid<R: Rng>(
    width: usize,
    height: usize,
    max_weight: u32,
    rng: &mut R,
) -> Result<GraphStore> {
    let max_weight = max_weight.max(1);
    grid(width, height, |_, _| f64::from(rng.gen_range(1..=max_weight)))
}

/// Generates a random directed graph over nodes `n0 .. n{nodes-1}`
///
/// Self-loops are skipped, so the result may hold slightly fewer than `edges`
/// edges. Weights are integers in `[0, max_weight]`; zero-weight edges are
/// included on purpose.
pub fn random_graph<R: Rng>(
    nodes: usize,
    edges: usize,
    max_weight: u32,
    rng: &mut R,
) -> Result<GraphStore> {
    let mut records = Vec::with_capacity(edges);
    if nodes > 1 {
        for _ in 0..edges {
            let u = rng.gen_range(0..nodes);
            let v = rng.gen_range(0..nodes);
            if u != v {
                let weight = f64::from(rng.gen_range(0..=max_weight));
                records.push(EdgeRecord::new(format!("n{}", u), format!("n{}", v), weight));
            }
        }
    }
    GraphStore::build(records, false)
}
