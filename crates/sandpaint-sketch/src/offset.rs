//! Centroid-relative inset/outset of triangles.

use crate::geometry::Triangle;

/// Moves every vertex of `tri` toward its centroid (`amount > 0`) or away from
/// it (`amount < 0`).
///
/// Each vertex travels `amount * (d / d_max)` along the vertex→centroid
/// direction, where `d` is its distance to the centroid and `d_max` the largest
/// such distance, so the farthest vertex moves exactly `amount`. That is
/// `v' = v + (c - v) * amount / d_max`. The centroid is invariant. Nothing is
/// clamped: large amounts collapse or invert the triangle.
///
/// A triangle whose vertices all sit on the centroid has no direction to move
/// in and is returned unchanged.
pub fn offset(tri: &Triangle, amount: f64) -> Triangle {
    let c = tri.centroid();
    let d_max = tri
        .vertices()
        .iter()
        .map(|v| v.distance(c))
        .fold(0.0, f64::max);

    if d_max == 0.0 || !d_max.is_finite() {
        return *tri;
    }

    let k = amount / d_max;
    tri.map(|v| v + (c - v) * k)
}

/// Applies [`offset`] to every triangle, preserving order.
pub fn offset_all(set: &[Triangle], amount: f64) -> Vec<Triangle> {
    set.iter().map(|t| offset(t, amount)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn tri() -> Triangle {
        Triangle::from([[0.1, 0.1], [0.1, 0.9], [0.9, 0.1]])
    }

    fn skewed() -> Triangle {
        Triangle::from([[0.2, 0.3], [0.95, 0.4], [0.4, 0.85]])
    }

    #[test]
    fn zero_amount_is_identity() {
        for t in [tri(), skewed()] {
            assert!(offset(&t, 0.0).approx_eq(&t, 1e-15));
        }
    }

    #[test]
    fn centroid_is_preserved() {
        let t = skewed();
        let moved = offset(&t, 0.05);
        assert!(moved.centroid().approx_eq(t.centroid(), 1e-12));
    }

    #[test]
    fn farthest_vertex_moves_by_amount() {
        let t = skewed();
        let c = t.centroid();
        let moved = offset(&t, 0.01);

        let (far_before, far_after) = t
            .vertices()
            .into_iter()
            .zip(moved.vertices())
            .max_by(|(a, _), (b, _)| a.distance(c).total_cmp(&b.distance(c)))
            .unwrap();
        assert!((far_before.distance(far_after) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn positive_moves_inward_negative_outward() {
        let t = skewed();
        let c = t.centroid();
        let inward = offset(&t, 0.01);
        let outward = offset(&t, -0.01);

        for i in 0..3 {
            let d = t.0[i].distance(c);
            assert!(inward.0[i].distance(c) < d);
            assert!(outward.0[i].distance(c) > d);
        }
    }

    #[test]
    fn closer_vertices_move_proportionally_less() {
        let t = skewed();
        let c = t.centroid();
        let moved = offset(&t, 0.02);

        let ratios: Vec<f64> = (0..3)
            .map(|i| t.0[i].distance(moved.0[i]) / t.0[i].distance(c))
            .collect();
        assert!((ratios[0] - ratios[1]).abs() < 1e-12);
        assert!((ratios[1] - ratios[2]).abs() < 1e-12);
    }

    #[test]
    fn inset_then_outset_returns_to_start() {
        let t = skewed();
        let back = offset(&offset(&t, 0.03), -0.03);
        assert!(back.approx_eq(&t, 1e-12));
    }

    #[test]
    fn repeated_inset_can_invert() {
        let t = tri();
        let c = t.centroid();
        let d_max = t.vertices().iter().map(|v| v.distance(c)).fold(0.0, f64::max);

        // Exactly d_max collapses to the centroid, beyond it flips through.
        let collapsed = offset(&t, d_max);
        for v in collapsed.vertices() {
            assert!(v.approx_eq(c, 1e-12));
        }
        let inverted = offset(&t, 2.0 * d_max);
        assert!(inverted.signed_area() * t.signed_area() > 0.0);
        assert!(inverted.a().approx_eq(c + (c - t.a()), 1e-12));
    }

    #[test]
    fn point_triangle_is_unchanged() {
        let p = Point::new(0.5, 0.5);
        let t = Triangle::new(p, p, p);
        assert_eq!(offset(&t, 0.1), t);
    }

    #[test]
    fn offset_all_keeps_order_and_len() {
        let set = vec![tri(), skewed()];
        let out = offset_all(&set, 0.001);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], offset(&set[0], 0.001));
        assert_eq!(out[1], offset(&set[1], 0.001));
    }
}
