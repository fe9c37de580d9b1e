use glam::{Vec3, Vec4};
use std::f32::consts::PI;

use crate::renderer::RenderContext;
use crate::resources::geometry::Geometry;
use crate::resources::primitives::nurbs::NurbsSurface;

/// Unit square in the y = 0 plane, facing +Y, as a degree-1 surface.
#[derive(Debug, Clone)]
pub struct Plane {
    pub parts_u: u32,
    pub parts_v: u32,
    pub geometry: Geometry,
}

impl Plane {
    #[must_use]
    pub fn new(parts_u: u32, parts_v: u32) -> Self {
        let surface = NurbsSurface {
            control_points: vec![
                vec![Vec4::new(-0.5, 0.0, 0.5, 1.0), Vec4::new(-0.5, 0.0, -0.5, 1.0)],
                vec![Vec4::new(0.5, 0.0, 0.5, 1.0), Vec4::new(0.5, 0.0, -0.5, 1.0)],
            ],
        };
        Self {
            parts_u,
            parts_v,
            geometry: surface.tessellate(parts_u, parts_v),
        }
    }
}

/// Free-form surface from a `npoints_u × npoints_v` control net.
#[derive(Debug, Clone)]
pub struct Patch {
    pub parts_u: u32,
    pub parts_v: u32,
    pub surface: NurbsSurface,
    pub geometry: Geometry,
}

impl Patch {
    #[must_use]
    pub fn new(parts_u: u32, parts_v: u32, surface: NurbsSurface) -> Self {
        let geometry = surface.tessellate(parts_u, parts_v);
        Self {
            parts_u,
            parts_v,
            surface,
            geometry,
        }
    }
}

/// Barrel along +Z bulging from `base` radius at both ends to `middle`
/// radius halfway up.
///
/// One cubic patch covers the y ≥ 0 half; the other half is the same mesh
/// rotated π about Z.
#[derive(Debug, Clone)]
pub struct DefBarrel {
    pub base: f32,
    pub middle: f32,
    pub height: f32,
    pub slices: u32,
    pub stacks: u32,
    pub half: Geometry,
}

impl DefBarrel {
    #[must_use]
    pub fn new(base: f32, middle: f32, height: f32, slices: u32, stacks: u32) -> Self {
        let surface = NurbsSurface {
            control_points: barrel_control_points(base, middle, height),
        };
        Self {
            base,
            middle,
            height,
            slices,
            stacks,
            half: surface.tessellate(stacks, slices),
        }
    }

    pub fn display(&self, ctx: &mut dyn RenderContext) {
        ctx.draw_mesh(&self.half);
        ctx.push_matrix();
        ctx.rotate(PI, Vec3::Z);
        ctx.draw_mesh(&self.half);
        ctx.pop_matrix();
    }
}

fn barrel_control_points(base: f32, middle: f32, height: f32) -> Vec<Vec<Vec4>> {
    let bulge = 4.0 / 3.0 * (middle - base);
    let h = 4.0 / 3.0 * base;
    let rim = base + bulge;
    let arc = 4.0 / 3.0 * rim;
    let (z1, z2) = (height / 3.0, 2.0 / 3.0 * height);

    let column = |x_end: f32, y_end: f32, x_mid: f32, y_mid: f32| {
        vec![
            Vec4::new(x_end, y_end, 0.0, 1.0),
            Vec4::new(x_mid, y_mid, z1, 1.0),
            Vec4::new(x_mid, y_mid, z2, 1.0),
            Vec4::new(x_end, y_end, height, 1.0),
        ]
    };

    vec![
        column(base, 0.0, rim, 0.0),
        column(base, h, rim, arc),
        column(-base, h, -rim, arc),
        column(-base, 0.0, -rim, 0.0),
    ]
}
