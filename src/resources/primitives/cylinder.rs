use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

use crate::renderer::RenderContext;
use crate::resources::geometry::Geometry;
use crate::resources::primitives::MAX_DIVISIONS;

/// Truncated cone along +Z from `bottom_radius` at z = 0 to `top_radius`
/// at z = `height`, closed by two circular caps.
#[derive(Debug, Clone)]
pub struct Cylinder {
    pub height: f32,
    pub top_radius: f32,
    pub bottom_radius: f32,
    pub slices: u32,
    pub stacks: u32,
    pub lateral: Geometry,
    pub bottom_cap: Geometry,
    pub top_cap: Geometry,
}

impl Cylinder {
    #[must_use]
    pub fn new(height: f32, top_radius: f32, bottom_radius: f32, slices: u32, stacks: u32) -> Self {
        Self {
            height,
            top_radius,
            bottom_radius,
            slices,
            stacks,
            lateral: create_lateral(height, top_radius, bottom_radius, slices, stacks),
            bottom_cap: create_circle(bottom_radius, slices),
            top_cap: create_circle(top_radius, slices),
        }
    }

    /// Bottom cap (flipped to face -Z), lateral surface, then top cap.
    pub fn display(&self, ctx: &mut dyn RenderContext) {
        ctx.push_matrix();
        ctx.rotate(PI, Vec3::Y);
        ctx.draw_mesh(&self.bottom_cap);
        ctx.pop_matrix();

        ctx.draw_mesh(&self.lateral);

        ctx.push_matrix();
        ctx.translate(Vec3::new(0.0, 0.0, self.height));
        ctx.draw_mesh(&self.top_cap);
        ctx.pop_matrix();
    }
}

fn create_lateral(height: f32, top_radius: f32, bottom_radius: f32, slices: u32, stacks: u32) -> Geometry {
    let slices = slices.clamp(3, MAX_DIVISIONS);
    let stacks = stacks.clamp(1, MAX_DIVISIONS);

    let height_step = height / stacks as f32;
    let radius_step = (top_radius - bottom_radius) / stacks as f32;
    // radial normals tilted by the cone slope
    let slope = if height > 0.0 {
        (bottom_radius - top_radius) / height
    } else {
        0.0
    };

    let stride = stacks + 1;
    let mut geo = Geometry::with_capacity(
        (stride * (slices + 1)) as usize,
        (slices * stacks * 6) as usize,
    );

    for i in 0..=slices {
        let (sin, cos) = (TAU * i as f32 / slices as f32).sin_cos();
        let normal = Vec3::new(cos, sin, slope).normalize_or_zero();
        for j in 0..=stacks {
            let radius = bottom_radius + j as f32 * radius_step;
            geo.push_vertex(
                Vec3::new(radius * cos, radius * sin, j as f32 * height_step),
                normal,
                Vec2::new(i as f32 / slices as f32, j as f32 / stacks as f32),
            );

            if i < slices && j < stacks {
                let current = i * stride + j;
                let next = current + stride;
                geo.push_triangle(current + 1, current, next);
                geo.push_triangle(current + 1, next, next + 1);
            }
        }
    }

    geo
}

/// Triangle fan disc in z = 0 facing +Z.
fn create_circle(radius: f32, slices: u32) -> Geometry {
    let slices = slices.clamp(3, MAX_DIVISIONS);
    let mut geo = Geometry::with_capacity(slices as usize + 2, slices as usize * 3);

    geo.push_vertex(Vec3::ZERO, Vec3::Z, Vec2::splat(0.5));
    for i in 0..=slices {
        let (sin, cos) = (TAU * i as f32 / slices as f32).sin_cos();
        geo.push_vertex(
            Vec3::new(radius * cos, radius * sin, 0.0),
            Vec3::Z,
            Vec2::new((cos + 1.0) / 2.0, 1.0 - (sin + 1.0) / 2.0),
        );
    }
    for i in 0..slices {
        geo.push_triangle(0, i + 1, i + 2);
    }

    geo
}
