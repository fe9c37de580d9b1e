use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

use crate::resources::geometry::Geometry;
use crate::resources::primitives::MAX_DIVISIONS;

/// Torus around the Z axis.
///
/// `inner` is the tube radius, `outer` the distance from the origin to the
/// tube center; `slices` divide the tube and `loops` the ring.
#[derive(Debug, Clone)]
pub struct Torus {
    pub inner: f32,
    pub outer: f32,
    pub slices: u32,
    pub loops: u32,
    pub geometry: Geometry,
}

impl Torus {
    #[must_use]
    pub fn new(inner: f32, outer: f32, slices: u32, loops: u32) -> Self {
        Self {
            inner,
            outer,
            slices,
            loops,
            geometry: create_torus(inner, outer, slices, loops),
        }
    }
}

fn create_torus(inner: f32, outer: f32, slices: u32, loops: u32) -> Geometry {
    let slices = slices.clamp(3, MAX_DIVISIONS);
    let loops = loops.clamp(3, MAX_DIVISIONS);

    let stride = slices + 1;
    let mut geo = Geometry::with_capacity(
        (stride * (loops + 1)) as usize,
        (slices * loops * 6) as usize,
    );

    for i in 0..=loops {
        let (sin_l, cos_l) = (TAU * i as f32 / loops as f32).sin_cos();
        for j in 0..=slices {
            let (sin_s, cos_s) = (TAU * j as f32 / slices as f32).sin_cos();
            let ring = outer + inner * cos_s;

            geo.push_vertex(
                Vec3::new(ring * cos_l, ring * sin_l, inner * sin_s),
                Vec3::new(cos_l * cos_s, sin_l * cos_s, sin_s),
                Vec2::new(j as f32 / slices as f32, i as f32 / loops as f32),
            );

            if i < loops && j < slices {
                let current = i * stride + j;
                let next = current + stride;
                geo.push_triangle(current + 1, current, next);
                geo.push_triangle(current + 1, next, next + 1);
            }
        }
    }

    geo
}
