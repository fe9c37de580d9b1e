use glam::{Vec2, Vec4};
use roxmltree::Node;

use crate::animation::SpriteAnimation;
use crate::parser::reader::{self, AttrResult};
use crate::parser::SceneLoader;
use crate::resources::primitives::{
    Cylinder, DefBarrel, MAX_DIVISIONS, NurbsSurface, Patch, Plane, Primitive, Rectangle, Sphere, SpriteAnimLeaf, SpriteText, Torus,
    Triangle,
};

/// Attribute access with leaf-specific error messages.
struct LeafAttributes<'a, 'input, 'o> {
    node: Node<'a, 'input>,
    kind: &'static str,
    owner: &'o str,
}

impl LeafAttributes<'_, '_, '_> {
    fn error(&self, name: &str) -> String {
        format!("unable to parse {name} of the node {}; ignoring {}", self.owner, self.kind)
    }

    fn float(&self, name: &str) -> AttrResult<f32> {
        reader::float(self.node, name).ok_or_else(|| self.error(name))
    }

    /// A length that must be `>= 0`.
    fn dimension(&self, name: &str) -> AttrResult<f32> {
        reader::non_negative(self.node, name).ok_or_else(|| self.error(name))
    }

    fn count(&self, name: &str) -> AttrResult<u32> {
        reader::count(self.node, name).ok_or_else(|| self.error(name))
    }

    /// A mesh subdivision count, at most [`MAX_DIVISIONS`].
    fn divisions(&self, name: &str) -> AttrResult<u32> {
        let value = self.count(name)?;
        if value > MAX_DIVISIONS {
            return Err(format!(
                "{name} of the node {} exceeds {MAX_DIVISIONS} divisions; ignoring {}",
                self.owner, self.kind
            ));
        }
        Ok(value)
    }

    fn point(&self, x: &str, y: &str) -> AttrResult<Vec2> {
        Ok(Vec2::new(self.float(x)?, self.float(y)?))
    }
}

impl SceneLoader {
    /// Builds the primitive of a `<leaf type>`; `None` (with a warning) when
    /// the type is unknown or a parameter is missing or out of range.
    pub(crate) fn parse_leaf(&mut self, node: Node, owner: &str) -> Option<Primitive> {
        let Some(kind) = reader::string(node, "type") else {
            self.diagnostics.warn(format!("leaf without type in node {owner}; ignoring it"));
            return None;
        };

        let parsed = match kind {
            "rectangle" => parse_rectangle(&attributes(node, "rectangle", owner)),
            "triangle" => parse_triangle(&attributes(node, "triangle", owner)),
            "sphere" => parse_sphere(&attributes(node, "sphere", owner)),
            "torus" => parse_torus(&attributes(node, "torus", owner)),
            "cylinder" => parse_cylinder(&attributes(node, "cylinder", owner)),
            "spritetext" => reader::string(node, "text")
                .map(|text| Primitive::SpriteText(SpriteText::new(text)))
                .ok_or_else(|| attributes(node, "spritetext", owner).error("text")),
            "spriteanim" => self.parse_sprite_anim(&attributes(node, "spriteanim", owner)),
            "plane" => parse_plane(&attributes(node, "plane", owner)),
            "patch" => parse_patch(&attributes(node, "patch", owner)),
            "defbarrel" => parse_defbarrel(&attributes(node, "defbarrel", owner)),
            other => Err(format!("primitive {other} not recognized in node {owner}; ignoring it")),
        };

        parsed.map_err(|message| self.diagnostics.warn(message)).ok()
    }

    fn parse_sprite_anim(&mut self, attrs: &LeafAttributes) -> AttrResult<Primitive> {
        let sheet = reader::string(attrs.node, "ssid").ok_or_else(|| attrs.error("ssid"))?;
        if !self.tables.spritesheets.contains_key(sheet) {
            return Err(format!(
                "there isn't a spritesheet with id {sheet}; ignoring spriteanim of node {}",
                attrs.owner
            ));
        }
        let start_cell = attrs.count("startCell")?;
        let end_cell = attrs.count("endCell")?;
        let duration = attrs
            .float("duration")
            .and_then(|d| if d > 0.0 { Ok(d) } else { Err(attrs.error("duration")) })?;

        let key = self
            .tables
            .add_sprite_animation(SpriteAnimation::new(sheet, start_cell, end_cell, duration));
        Ok(Primitive::SpriteAnim(SpriteAnimLeaf::new(key)))
    }
}

fn attributes<'a, 'input, 'o>(node: Node<'a, 'input>, kind: &'static str, owner: &'o str) -> LeafAttributes<'a, 'input, 'o> {
    LeafAttributes { node, kind, owner }
}

fn parse_rectangle(attrs: &LeafAttributes) -> AttrResult<Primitive> {
    let p1 = attrs.point("x1", "y1")?;
    let p2 = attrs.point("x2", "y2")?;
    Ok(Primitive::Rectangle(Rectangle::new(p1.x, p1.y, p2.x, p2.y)))
}

fn parse_triangle(attrs: &LeafAttributes) -> AttrResult<Primitive> {
    Ok(Primitive::Triangle(Triangle::new(
        attrs.point("x1", "y1")?,
        attrs.point("x2", "y2")?,
        attrs.point("x3", "y3")?,
    )))
}

fn parse_sphere(attrs: &LeafAttributes) -> AttrResult<Primitive> {
    Ok(Primitive::Sphere(Sphere::new(
        attrs.dimension("radius")?,
        attrs.divisions("slices")?,
        attrs.divisions("stacks")?,
    )))
}

fn parse_torus(attrs: &LeafAttributes) -> AttrResult<Primitive> {
    Ok(Primitive::Torus(Torus::new(
        attrs.dimension("inner")?,
        attrs.dimension("outer")?,
        attrs.divisions("slices")?,
        attrs.divisions("loops")?,
    )))
}

fn parse_cylinder(attrs: &LeafAttributes) -> AttrResult<Primitive> {
    Ok(Primitive::Cylinder(Cylinder::new(
        attrs.dimension("height")?,
        attrs.dimension("topRadius")?,
        attrs.dimension("bottomRadius")?,
        attrs.divisions("slices")?,
        attrs.divisions("stacks")?,
    )))
}

fn parse_plane(attrs: &LeafAttributes) -> AttrResult<Primitive> {
    Ok(Primitive::Plane(Plane::new(attrs.divisions("npartsU")?, attrs.divisions("npartsV")?)))
}

/// `npointsU × npointsV` `<controlpoint x y z>` children, U-major, all with
/// weight 1.
fn parse_patch(attrs: &LeafAttributes) -> AttrResult<Primitive> {
    let points_u = attrs.count("npointsU")? as usize;
    let points_v = attrs.count("npointsV")? as usize;
    let parts_u = attrs.divisions("npartsU")?;
    let parts_v = attrs.divisions("npartsV")?;

    let wrong_count = || {
        format!(
            "the number of control points in node {} is not correct; ignoring patch",
            attrs.owner
        )
    };
    let points: Vec<Node> = reader::elements(attrs.node).collect();
    if points_u.checked_mul(points_v) != Some(points.len()) || points.is_empty() {
        return Err(wrong_count());
    }

    let context = format!("control point of node {}", attrs.owner);
    let mut net = Vec::with_capacity(points_u);
    for row in points.chunks(points_v) {
        let mut line = Vec::with_capacity(points_v);
        for point in row {
            if !point.has_tag_name("controlpoint") {
                return Err(format!(
                    "unknown tag <{}> in patch of node {}; ignoring patch",
                    reader::tag(*point),
                    attrs.owner
                ));
            }
            line.push(Vec4::from((reader::point3(*point, &context)?, 1.0)));
        }
        net.push(line);
    }

    let surface = NurbsSurface::new(net).ok_or_else(wrong_count)?;
    Ok(Primitive::Patch(Patch::new(parts_u, parts_v, surface)))
}

fn parse_defbarrel(attrs: &LeafAttributes) -> AttrResult<Primitive> {
    Ok(Primitive::DefBarrel(DefBarrel::new(
        attrs.dimension("base")?,
        attrs.dimension("middle")?,
        attrs.dimension("height")?,
        attrs.divisions("slices")?,
        attrs.divisions("stacks")?,
    )))
}
