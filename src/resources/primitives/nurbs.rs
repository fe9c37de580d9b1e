//! Rational Bézier-form NURBS surfaces.
//!
//! Scene documents only ever use clamped uniform knot vectors with no
//! interior knots, so a surface of degree `(p, q)` with `(p + 1) × (q + 1)`
//! control points reduces to a rational tensor-product Bézier patch:
//!
//! ```text
//!          Σ Σ B(p,i,u) B(q,j,v) w_ij P_ij
//! S(u,v) = -------------------------------
//!          Σ Σ B(p,i,u) B(q,j,v) w_ij
//! ```

use glam::{Vec2, Vec3, Vec4};

use crate::resources::geometry::Geometry;
use crate::resources::primitives::MAX_DIVISIONS;

/// Control net indexed `[u][v]`; each point is `(x, y, z, weight)`.
#[derive(Debug, Clone, PartialEq)]
pub struct NurbsSurface {
    pub(super) control_points: Vec<Vec<Vec4>>,
}

impl NurbsSurface {
    /// Returns `None` for an empty net or rows of unequal length.
    #[must_use]
    pub fn new(control_points: Vec<Vec<Vec4>>) -> Option<Self> {
        let columns = control_points.first()?.len();
        if columns == 0 || control_points.iter().any(|row| row.len() != columns) {
            return None;
        }
        Some(Self { control_points })
    }

    #[must_use]
    pub fn degree_u(&self) -> usize {
        self.control_points.len() - 1
    }

    #[must_use]
    pub fn degree_v(&self) -> usize {
        self.control_points[0].len() - 1
    }

    #[must_use]
    pub fn control_points(&self) -> &[Vec<Vec4>] {
        &self.control_points
    }

    /// Surface point at `(u, v)` in `[0, 1]²`.
    #[must_use]
    pub fn evaluate(&self, u: f32, v: f32) -> Vec3 {
        let (p, q) = (self.degree_u(), self.degree_v());
        let mut numerator = Vec3::ZERO;
        let mut denominator = 0.0;

        for (i, row) in self.control_points.iter().enumerate() {
            let bu = bernstein(p, i, u);
            for (j, cp) in row.iter().enumerate() {
                let weight = bu * bernstein(q, j, v) * cp.w;
                numerator += cp.truncate() * weight;
                denominator += weight;
            }
        }

        if denominator.abs() > f32::EPSILON {
            numerator / denominator
        } else {
            numerator
        }
    }

    /// Samples a `(parts_u + 1) × (parts_v + 1)` grid into a mesh.
    #[must_use]
    pub fn tessellate(&self, parts_u: u32, parts_v: u32) -> Geometry {
        let parts_u = parts_u.clamp(1, MAX_DIVISIONS);
        let parts_v = parts_v.clamp(1, MAX_DIVISIONS);
        let stride = parts_v + 1;

        let mut geo = Geometry::with_capacity(
            ((parts_u + 1) * stride) as usize,
            (parts_u * parts_v * 6) as usize,
        );

        for i in 0..=parts_u {
            let u = i as f32 / parts_u as f32;
            for j in 0..=parts_v {
                let v = j as f32 / parts_v as f32;
                geo.push_vertex(self.evaluate(u, v), Vec3::ZERO, Vec2::new(u, v));

                if i < parts_u && j < parts_v {
                    let a = i * stride + j;
                    let b = a + stride;
                    geo.push_triangle(a, b, a + 1);
                    geo.push_triangle(b, b + 1, a + 1);
                }
            }
        }

        geo.compute_vertex_normals();
        geo
    }
}

fn bernstein(n: usize, i: usize, t: f32) -> f32 {
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

fn binomial(n: usize, k: usize) -> f32 {
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f32 / (i + 1) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bilinear() -> NurbsSurface {
        NurbsSurface::new(vec![
            vec![Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(0.0, 1.0, 0.0, 1.0)],
            vec![Vec4::new(1.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 1.0, 0.0, 1.0)],
        ])
        .unwrap()
    }

    #[test]
    fn corners_interpolate_control_points() {
        let s = bilinear();
        assert_eq!(s.evaluate(0.0, 0.0), Vec3::ZERO);
        assert_eq!(s.evaluate(1.0, 1.0), Vec3::new(1.0, 1.0, 0.0));
        assert!((s.evaluate(0.5, 0.5) - Vec3::new(0.5, 0.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn ragged_nets_are_rejected() {
        assert!(NurbsSurface::new(vec![]).is_none());
        assert!(NurbsSurface::new(vec![vec![Vec4::W], vec![]]).is_none());
    }

    #[test]
    fn binomial_matches_pascal() {
        assert_eq!(binomial(3, 0), 1.0);
        assert_eq!(binomial(3, 1), 3.0);
        assert_eq!(binomial(4, 2), 6.0);
    }
}
