//! Longest-edge triangle subdivision.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::geometry::{Edge, Triangle};

/// Two edge lengths closer than this are treated as equal when picking the
/// longest edge. Ties resolve in `AB, BC, CA` order.
pub const EDGE_TIE_EPSILON: f64 = 1e-9;

/// Mean of the split ratio along the chosen edge.
pub const SPLIT_MEAN: f64 = 0.5;

/// Standard deviation of the split ratio along the chosen edge.
pub const SPLIT_STD_DEV: f64 = 0.08;

/// Returns the edge `subdivide` splits: the first edge, in `AB, BC, CA`
/// order, whose length is within [`EDGE_TIE_EPSILON`] of the longest.
/// A triangle with a non-finite edge length splits along `AB`.
pub fn longest_edge(tri: &Triangle) -> Edge {
    let lengths = Edge::ALL.map(|e| tri.edge_length(e));
    if lengths.iter().any(|l| !l.is_finite()) {
        return Edge::AB;
    }

    let longest = lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Edge::ALL
        .into_iter()
        .zip(lengths)
        .find(|&(_, l)| longest - l <= EDGE_TIE_EPSILON)
        .map_or(Edge::AB, |(e, _)| e)
}

/// Draws a split ratio from `N(SPLIT_MEAN, SPLIT_STD_DEV)`.
///
/// The result is not clamped; a ratio outside `[0, 1]` places the new vertex
/// beyond the end of the edge.
pub fn split_ratio<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    SPLIT_MEAN + SPLIT_STD_DEV * z
}

/// Splits `tri` along its longest edge at `ratio`.
///
/// With `(p, q)` the longest edge and `o` the opposite vertex, the new vertex is
/// `m = lerp(p, q, ratio)` and the children are `(m, p, o)` and `(m, q, o)`.
pub fn split_at(tri: &Triangle, ratio: f64) -> [Triangle; 2] {
    let (p, q, opposite) = tri.edge(longest_edge(tri));
    let m = p.lerp(q, ratio);
    [Triangle::new(m, p, opposite), Triangle::new(m, q, opposite)]
}

/// Splits `tri` in two along its longest edge at a Gaussian-distributed ratio.
///
/// Total over any input: degenerate triangles yield degenerate children.
pub fn subdivide<R: Rng + ?Sized>(tri: &Triangle, rng: &mut R) -> [Triangle; 2] {
    split_at(tri, split_ratio(rng))
}

/// Subdivides every triangle of `set` in order; the result has `2 * set.len()`
/// triangles, each parent's children adjacent.
pub fn subdivide_all<R: Rng + ?Sized>(set: &[Triangle], rng: &mut R) -> Vec<Triangle> {
    let mut out = Vec::with_capacity(set.len() * 2);
    for tri in set {
        out.extend(subdivide(tri, rng));
    }
    out
}
