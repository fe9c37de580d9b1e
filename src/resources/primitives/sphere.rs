use glam::{Vec2, Vec3};
use std::f32::consts::PI;

use crate::resources::geometry::Geometry;
use crate::resources::primitives::MAX_DIVISIONS;

/// Sphere centered at the origin with poles on ±Y.
///
/// `stacks` counts the divisions of one hemisphere, so the mesh has
/// `stacks * 2` latitude bands and `slices` longitude bands.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub radius: f32,
    pub slices: u32,
    pub stacks: u32,
    pub geometry: Geometry,
}

impl Sphere {
    #[must_use]
    pub fn new(radius: f32, slices: u32, stacks: u32) -> Self {
        Self {
            radius,
            slices,
            stacks,
            geometry: create_sphere(radius, slices, stacks),
        }
    }
}

fn create_sphere(radius: f32, slices: u32, stacks: u32) -> Geometry {
    let long_divs = slices.clamp(3, MAX_DIVISIONS);
    let lat_divs = stacks.clamp(1, MAX_DIVISIONS) * 2;

    let ring = long_divs + 1;
    let mut geo = Geometry::with_capacity(
        (ring * (lat_divs + 1)) as usize,
        (long_divs * lat_divs * 6) as usize,
    );

    // North pole first, one ring of longitudes per latitude.
    for latitude in 0..=lat_divs {
        let phi = PI * latitude as f32 / lat_divs as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for longitude in 0..=long_divs {
            let theta = 2.0 * PI * longitude as f32 / long_divs as f32;
            let normal = Vec3::new(theta.cos() * sin_phi, cos_phi, -theta.sin() * sin_phi);

            geo.push_vertex(
                normal * radius,
                normal,
                Vec2::new(
                    longitude as f32 / long_divs as f32,
                    latitude as f32 / lat_divs as f32,
                ),
            );

            if latitude < lat_divs && longitude < long_divs {
                let current = latitude * ring + longitude;
                let next = current + ring;
                geo.push_triangle(current + 1, current, next);
                geo.push_triangle(current + 1, next, next + 1);
            }
        }
    }

    geo
}
