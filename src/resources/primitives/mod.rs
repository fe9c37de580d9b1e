//! Leaf Primitives
//!
//! Every `<leaf type="...">` of a scene document becomes one variant of the
//! closed [`Primitive`] enum. Each variant owns a validated parameter struct
//! and its pre-generated [`Geometry`](crate::resources::Geometry).
//!
//! | `type`       | variant                    | geometry                                   |
//! |--------------|----------------------------|--------------------------------------------|
//! | `rectangle`  | [`Rectangle`]              | axis-aligned quad in z = 0                 |
//! | `triangle`   | [`Triangle`]               | single triangle in z = 0                   |
//! | `sphere`     | [`Sphere`]                 | UV sphere, `stacks * 2` latitude bands     |
//! | `torus`      | [`Torus`]                  | ring around Z                              |
//! | `cylinder`   | [`Cylinder`]               | lateral surface along +Z plus two caps     |
//! | `spritetext` | [`SpriteText`]             | one font cell per character                |
//! | `spriteanim` | [`SpriteAnimLeaf`]         | unit quad showing the current sheet cell   |
//! | `plane`      | [`Plane`]                  | degree-1 NURBS unit square in y = 0        |
//! | `patch`      | [`Patch`]                  | Bézier-form NURBS from control points      |
//! | `defbarrel`  | [`DefBarrel`]              | two mirrored cubic patches                 |

pub mod cylinder;
pub mod nurbs;
pub mod patch;
pub mod rectangle;
pub mod sphere;
pub mod sprite;
pub mod torus;
pub mod triangle;

pub use cylinder::Cylinder;
pub use nurbs::NurbsSurface;
pub use patch::{DefBarrel, Patch, Plane};
pub use rectangle::Rectangle;
pub use sphere::Sphere;
pub use sprite::{SpriteAnimLeaf, SpriteText, character_cell};
pub use torus::Torus;
pub use triangle::Triangle;

use crate::renderer::RenderContext;
use crate::scene::ResourceTables;

/// Upper bound on any slice, stack, loop or part count of a generated mesh.
///
/// The parser rejects leaves above it; the generators clamp to it.
pub const MAX_DIVISIONS: u32 = 1024;

/// A renderable leaf descendant.
#[derive(Debug, Clone)]
pub enum Primitive {
    Rectangle(Rectangle),
    Triangle(Triangle),
    Sphere(Sphere),
    Torus(Torus),
    Cylinder(Cylinder),
    SpriteText(SpriteText),
    SpriteAnim(SpriteAnimLeaf),
    Plane(Plane),
    Patch(Patch),
    DefBarrel(DefBarrel),
}

impl Primitive {
    /// The document `type` string of this primitive.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Triangle(_) => "triangle",
            Self::Sphere(_) => "sphere",
            Self::Torus(_) => "torus",
            Self::Cylinder(_) => "cylinder",
            Self::SpriteText(_) => "spritetext",
            Self::SpriteAnim(_) => "spriteanim",
            Self::Plane(_) => "plane",
            Self::Patch(_) => "patch",
            Self::DefBarrel(_) => "defbarrel",
        }
    }

    /// Rescales texture coordinates by the node's amplification factors.
    ///
    /// Only rectangles and triangles carry amplification-dependent
    /// coordinates; the call is a no-op for every other kind.
    pub fn update_tex_coords(&mut self, afs: f32, aft: f32) {
        match self {
            Self::Rectangle(rect) => rect.update_tex_coords(afs, aft),
            Self::Triangle(tri) => tri.update_tex_coords(afs, aft),
            _ => {}
        }
    }

    /// Issues the draw calls for this leaf in the current transform.
    pub fn display(&self, tables: &ResourceTables, ctx: &mut dyn RenderContext) {
        match self {
            Self::Rectangle(rect) => ctx.draw_mesh(&rect.geometry),
            Self::Triangle(tri) => ctx.draw_mesh(&tri.geometry),
            Self::Sphere(sphere) => ctx.draw_mesh(&sphere.geometry),
            Self::Torus(torus) => ctx.draw_mesh(&torus.geometry),
            Self::Cylinder(cylinder) => cylinder.display(ctx),
            Self::SpriteText(text) => text.display(&tables.font, ctx),
            Self::SpriteAnim(anim) => anim.display(tables, ctx),
            Self::Plane(plane) => ctx.draw_mesh(&plane.geometry),
            Self::Patch(patch) => ctx.draw_mesh(&patch.geometry),
            Self::DefBarrel(barrel) => barrel.display(ctx),
        }
    }
}
