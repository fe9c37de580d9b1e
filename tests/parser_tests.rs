//! Scene Document Parser Tests
//!
//! Tests for:
//! - Section presence and order checks
//! - Per-section fallbacks (cameras, lights, materials)
//! - Node references: material/texture inheritance tags, dangling children
//! - Leaf primitive parameter validation
//! - Animation keyframe validation

use std::f32::consts::PI;

use glam::{Mat4, Vec3, Vec4};

use lsf::resources::material::FALLBACK_COMPONENT;
use lsf::{
    Camera, Descendant, Light, Material, MaterialRef, Primitive, SceneError, TextureId, parse_document,
};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Fixtures
// ============================================================================

const LIGHT: &str = r#"<light id="l1">
    <enable value="1"/>
    <position x="0" y="10" z="0" w="1"/>
    <ambient r="0" g="0" b="0" a="1"/>
    <diffuse r="1" g="1" b="1" a="1"/>
    <specular r="1" g="1" b="1" a="1"/>
</light>"#;

const RED: &str = r#"<material id="red">
    <shininess value="10"/>
    <ambient r="0.5" g="0" b="0" a="1"/>
    <diffuse r="1" g="0" b="0" a="1"/>
    <specular r="1" g="1" b="1" a="1"/>
    <emissive r="0" g="0" b="0" a="1"/>
</material>"#;

const NODES: &str = r#"
<node id="root">
    <transformations/>
    <material id="red"/>
    <texture id="clear"/>
    <descendants><noderef id="child"/></descendants>
</node>
<node id="child">
    <transformations><translation x="1" y="0" z="0"/></transformations>
    <material id="null"/>
    <texture id="null"><amplification afs="1" aft="1"/></texture>
    <animationref id="slide"/>
    <descendants><leaf type="rectangle" x1="0" y1="0" x2="1" y2="1"/></descendants>
</node>"#;

/// Every section of a valid document, in canonical order.
fn sections(nodes: &str) -> Vec<(&'static str, String)> {
    vec![
        ("initials", r#"<initials><reference length="2"/><root id="root"/></initials>"#.to_string()),
        (
            "views",
            r#"<views default="cam1">
                <perspective id="cam1" near="0.1" far="500" angle="45">
                    <from x="30" y="15" z="30"/><to x="0" y="-2" z="0"/>
                </perspective>
                <ortho id="top" near="0.1" far="100" left="-5" right="5" top="5" bottom="-5">
                    <from x="0" y="10" z="0"/><to x="0" y="0" z="0"/><up x="0" y="0" z="1"/>
                </ortho>
            </views>"#
                .to_string(),
        ),
        (
            "illumination",
            r#"<illumination>
                <ambient r="0.2" g="0.2" b="0.2" a="1"/>
                <background r="0" g="0" b="0" a="1"/>
            </illumination>"#
                .to_string(),
        ),
        ("lights", format!("<lights>{LIGHT}</lights>")),
        ("textures", r#"<textures><texture id="wood" path="images/wood.jpg"/></textures>"#.to_string()),
        (
            "spritesheets",
            r#"<spritesheets><spritesheet id="fire" path="images/fire.png" sizeM="4" sizeN="2"/></spritesheets>"#
                .to_string(),
        ),
        ("materials", format!("<materials>{RED}</materials>")),
        (
            "animations",
            r#"<animations><animation id="slide">
                <keyframe instant="0">
                    <translation x="0" y="0" z="0"/>
                    <rotation axis="x" angle="0"/><rotation axis="y" angle="0"/><rotation axis="z" angle="0"/>
                    <scale sx="1" sy="1" sz="1"/>
                </keyframe>
                <keyframe instant="2">
                    <translation x="1" y="0" z="0"/>
                    <rotation axis="x" angle="0"/><rotation axis="y" angle="90"/><rotation axis="z" angle="0"/>
                    <scale sx="1" sy="1" sz="1"/>
                </keyframe>
            </animation></animations>"#
                .to_string(),
        ),
        ("nodes", format!("<nodes>{nodes}</nodes>")),
    ]
}

fn assemble(sections: &[(&'static str, String)]) -> String {
    let body: String = sections.iter().map(|(_, xml)| xml.as_str()).collect();
    format!("<lsf>{body}</lsf>")
}

fn document(nodes: &str) -> String {
    assemble(&sections(nodes))
}

fn replace_section(name: &str, xml: &str, nodes: &str) -> String {
    let mut all = sections(nodes);
    for (section, content) in &mut all {
        if *section == name {
            *content = xml.to_string();
        }
    }
    assemble(&all)
}

/// A root node holding only the given descendants.
fn root_with(descendants: &str) -> String {
    format!(
        r#"<node id="root"><transformations/><material id="red"/><texture id="clear"/>
        <descendants>{descendants}</descendants></node>"#
    )
}

// ============================================================================
// Document Structure
// ============================================================================

#[test]
fn full_document_parses() -> anyhow::Result<()> {
    init_logger();
    let scene = parse_document(&document(NODES))?;

    assert_eq!(scene.root_id(), "root");
    assert!(approx(scene.initials.reference_length, 2.0));
    assert_eq!(scene.tables.camera_ids(), ["cam1".to_string(), "top".to_string()]);
    assert_eq!(scene.default_camera, "cam1");
    assert_eq!(scene.lights.len(), 1);
    assert_eq!(scene.illumination.ambient, Vec4::new(0.2, 0.2, 0.2, 1.0));
    assert!(scene.tables.textures.contains_key("wood"));
    assert_eq!(scene.tables.spritesheets["fire"].size_m, 4);
    assert!(scene.tables.materials.contains_key("red"));
    assert_eq!(scene.tables.animations["slide"].len(), 2);
    assert_eq!(scene.graph.len(), 2);
    assert!(scene.diagnostics.is_empty(), "unexpected warnings: {:?}", scene.diagnostics.warnings());
    Ok(())
}

#[test]
fn each_missing_required_section_is_fatal() {
    init_logger();
    for required in ["initials", "views", "illumination", "lights", "textures", "materials", "nodes"] {
        let remaining: Vec<_> = sections(NODES).into_iter().filter(|(name, _)| *name != required).collect();
        match parse_document(&assemble(&remaining)) {
            Err(SceneError::MissingSection(name)) => assert_eq!(name, required),
            other => panic!("expected missing <{required}>, got {other:?}"),
        }
    }
}

#[test]
fn optional_sections_may_be_absent() {
    let nodes = root_with(r#"<leaf type="sphere" radius="1" slices="8" stacks="4"/>"#);
    let remaining: Vec<_> = sections(&nodes)
        .into_iter()
        .filter(|(name, _)| *name != "spritesheets" && *name != "animations")
        .collect();
    let scene = parse_document(&assemble(&remaining)).unwrap();
    assert!(scene.tables.spritesheets.is_empty());
    assert!(scene.tables.animations.is_empty());
}

#[test]
fn out_of_order_sections_only_warn() {
    let mut all = sections(NODES);
    all.swap(0, 1);
    let scene = parse_document(&assemble(&all)).unwrap();
    assert!(scene.diagnostics.contains("out of order"));
    assert_eq!(scene.root_id(), "root");
}

#[test]
fn wrong_root_tag_is_fatal() {
    let err = parse_document("<scene><initials/></scene>").unwrap_err();
    assert!(matches!(err, SceneError::UnexpectedRootTag(ref tag) if tag == "scene"));
}

#[test]
fn malformed_xml_is_fatal() {
    assert!(matches!(parse_document("<lsf><initials>"), Err(SceneError::Xml(_))));
}

#[test]
fn missing_root_id_is_fatal() {
    let xml = replace_section("initials", "<initials><reference length=\"1\"/></initials>", NODES);
    assert!(matches!(parse_document(&xml), Err(SceneError::MissingRootId)));
}

#[test]
fn missing_reference_length_defaults_to_one() {
    let xml = replace_section("initials", "<initials><root id=\"root\"/></initials>", NODES);
    let scene = parse_document(&xml).unwrap();
    assert!(approx(scene.initials.reference_length, 1.0));
    assert!(scene.diagnostics.contains("axis length"));
}

// ============================================================================
// Views
// ============================================================================

#[test]
fn perspective_angle_is_converted_to_radians() {
    let scene = parse_document(&document(NODES)).unwrap();
    match scene.default_camera().unwrap() {
        Camera::Perspective { fov, near, far, position, .. } => {
            assert!(approx(*fov, PI / 4.0));
            assert!(approx(*near, 0.1));
            assert!(approx(*far, 500.0));
            assert_eq!(*position, Vec3::new(30.0, 15.0, 30.0));
        }
        other => panic!("expected perspective, got {other:?}"),
    }
    assert_eq!(scene.tables.camera("top").unwrap().up(), Vec3::Z);
}

#[test]
fn zero_cameras_registers_default() {
    let xml = replace_section("views", "<views default=\"cam1\"></views>", NODES);
    let scene = parse_document(&xml).unwrap();
    assert_eq!(scene.tables.camera_ids(), ["default".to_string()]);
    assert_eq!(scene.default_camera, "default");
    assert_eq!(scene.default_camera().unwrap(), &Camera::fallback());
}

#[test]
fn malformed_camera_is_dropped_alone() {
    let views = r#"<views default="bad">
        <perspective id="bad" near="10" far="1" angle="45"><from x="1" y="1" z="1"/><to x="0" y="0" z="0"/></perspective>
        <perspective id="noto" near="0.1" far="10" angle="45"><from x="1" y="1" z="1"/></perspective>
        <perspective id="ok" near="0.1" far="10" angle="45"><from x="1" y="1" z="1"/><to x="0" y="0" z="0"/></perspective>
    </views>"#;
    let scene = parse_document(&replace_section("views", views, NODES)).unwrap();
    assert_eq!(scene.tables.camera_ids(), ["ok".to_string()]);
    assert_eq!(scene.default_camera, "ok");
    assert!(scene.diagnostics.contains("default camera bad"));
}

#[test]
fn ortho_without_up_uses_y() {
    let views = r#"<views default="o">
        <ortho id="o" near="0" far="10" left="-1" right="1" top="1" bottom="-1">
            <from x="0" y="0" z="5"/><to x="0" y="0" z="0"/>
        </ortho>
    </views>"#;
    let scene = parse_document(&replace_section("views", views, NODES)).unwrap();
    assert_eq!(scene.default_camera().unwrap().up(), Vec3::Y);
}

// ============================================================================
// Illumination & Lights
// ============================================================================

#[test]
fn zero_lights_yields_one_default_light() {
    let scene = parse_document(&replace_section("lights", "<lights></lights>", NODES)).unwrap();
    assert_eq!(scene.lights, vec![Light::fallback()]);
    assert!(scene.diagnostics.contains("no lights"));
}

#[test]
fn every_valid_light_is_counted() {
    let second = LIGHT.replace("l1", "l2");
    let lights = format!("<lights>{LIGHT}{second}</lights>");
    let scene = parse_document(&replace_section("lights", &lights, NODES)).unwrap();
    assert_eq!(scene.lights.len(), 2);
    assert!(scene.light("l2").unwrap().enabled);
    assert_eq!(scene.light("l1").unwrap().position, Vec4::new(0.0, 10.0, 0.0, 1.0));
}

#[test]
fn light_missing_component_is_fatal() {
    let broken = LIGHT.replace(r#"<specular r="1" g="1" b="1" a="1"/>"#, "");
    let err = parse_document(&replace_section("lights", &format!("<lights>{broken}</lights>"), NODES)).unwrap_err();
    assert!(matches!(err, SceneError::InvalidLight { ref light, .. } if light == "l1"));
}

#[test]
fn light_out_of_range_color_is_fatal() {
    let broken = LIGHT.replace(r#"<diffuse r="1""#, r#"<diffuse r="3""#);
    let err = parse_document(&replace_section("lights", &format!("<lights>{broken}</lights>"), NODES)).unwrap_err();
    assert!(matches!(err, SceneError::InvalidLight { .. }));
}

#[test]
fn light_invalid_enable_assumes_true() {
    let odd = LIGHT.replace(r#"<enable value="1"/>"#, r#"<enable value="yes"/>"#);
    let scene = parse_document(&replace_section("lights", &format!("<lights>{odd}</lights>"), NODES)).unwrap();
    assert!(scene.lights[0].enabled);
    assert!(scene.diagnostics.contains("enable"));
}

#[test]
fn duplicate_light_id_is_skipped() {
    let lights = format!("<lights>{LIGHT}{LIGHT}</lights>");
    let scene = parse_document(&replace_section("lights", &lights, NODES)).unwrap();
    assert_eq!(scene.lights.len(), 1);
}

#[test]
fn invalid_illumination_is_fatal() {
    let xml = replace_section(
        "illumination",
        r#"<illumination><ambient r="0.2" g="0.2" b="0.2" a="1"/></illumination>"#,
        NODES,
    );
    assert!(matches!(parse_document(&xml), Err(SceneError::InvalidIllumination(_))));
}

// ============================================================================
// Textures, Spritesheets & Materials
// ============================================================================

#[test]
fn duplicate_texture_keeps_first() {
    let textures = r#"<textures>
        <texture id="wood" path="a.jpg"/>
        <texture id="wood" path="b.jpg"/>
        <texture id="nopath"/>
    </textures>"#;
    let scene = parse_document(&replace_section("textures", textures, NODES)).unwrap();
    assert_eq!(scene.tables.textures.len(), 1);
    assert_eq!(scene.tables.textures["wood"].path.to_str(), Some("a.jpg"));
}

#[test]
fn spritesheet_sizes_must_be_positive() {
    let sheets = r#"<spritesheets>
        <spritesheet id="zero" path="a.png" sizeM="0" sizeN="2"/>
        <spritesheet id="ok" path="b.png" sizeM="3" sizeN="3"/>
    </spritesheets>"#;
    let scene = parse_document(&replace_section("spritesheets", sheets, NODES)).unwrap();
    assert!(!scene.tables.spritesheets.contains_key("zero"));
    assert!(scene.tables.spritesheets.contains_key("ok"));
}

#[test]
fn incomplete_material_is_replaced_by_fallback() {
    let partial = RED.replace(r#"<emissive r="0" g="0" b="0" a="1"/>"#, "");
    let scene = parse_document(&replace_section("materials", &format!("<materials>{partial}</materials>"), NODES)).unwrap();
    assert_eq!(scene.tables.materials["red"], Material::fallback());
}

#[test]
fn invalid_material_component_falls_back_alone() {
    let odd = RED
        .replace(r#"<diffuse r="1""#, r#"<diffuse r="2""#)
        .replace(r#"<shininess value="10"/>"#, r#"<shininess value="shiny"/>"#);
    let scene = parse_document(&replace_section("materials", &format!("<materials>{odd}</materials>"), NODES)).unwrap();
    let red = scene.tables.materials["red"];
    assert_eq!(red.diffuse, FALLBACK_COMPONENT);
    assert_eq!(red.ambient, Vec4::new(0.5, 0.0, 0.0, 1.0));
    assert!(approx(red.shininess, 40.0));
}

// ============================================================================
// Nodes
// ============================================================================

#[test]
fn node_without_id_is_fatal() {
    let nodes = r#"<node><transformations/><descendants/></node>"#;
    assert!(matches!(parse_document(&document(nodes)), Err(SceneError::MissingNodeId)));
}

#[test]
fn duplicate_node_is_fatal() {
    let nodes = format!("{}{}", root_with(""), root_with(""));
    assert!(matches!(
        parse_document(&document(&nodes)),
        Err(SceneError::DuplicateNode(ref id)) if id == "root"
    ));
}

#[test]
fn node_without_descendants_is_fatal() {
    let nodes = r#"<node id="root"><transformations/><material id="null"/><texture id="null"/></node>"#;
    assert!(matches!(
        parse_document(&document(nodes)),
        Err(SceneError::MissingDescendants(ref id)) if id == "root"
    ));
}

#[test]
fn unknown_root_is_fatal() {
    let nodes = r#"<node id="other"><descendants/></node>"#;
    assert!(matches!(
        parse_document(&document(nodes)),
        Err(SceneError::UnknownRootNode(ref id)) if id == "root"
    ));
}

#[test]
fn dangling_child_is_pruned() {
    let nodes = root_with(r#"<noderef id="ghost"/><noderef id="real"/>"#)
        + r#"<node id="real"><material id="null"/><texture id="null"/><descendants/></node>"#;
    let scene = parse_document(&document(&nodes)).unwrap();

    let root = scene.graph.get("root").unwrap();
    assert_eq!(root.child_ids().collect::<Vec<_>>(), ["real"]);
    assert!(scene.graph.dangling_references().is_empty());
    assert!(scene.diagnostics.contains("ghost"));
}

#[test]
fn forward_references_resolve() {
    let nodes = root_with(r#"<noderef id="later"/>"#)
        + r#"<node id="later"><material id="null"/><texture id="null"/><descendants/></node>"#;
    let scene = parse_document(&document(&nodes)).unwrap();
    assert_eq!(scene.graph.get("root").unwrap().child_ids().count(), 1);
}

#[test]
fn unresolved_references_fall_back() {
    let nodes = r#"<node id="root">
        <material id="missing"/>
        <texture id="missing"/>
        <animationref id="missing"/>
        <descendants/>
    </node>"#;
    let scene = parse_document(&document(nodes)).unwrap();
    let root = scene.graph.get("root").unwrap();
    assert_eq!(root.material, MaterialRef::Inherit);
    assert_eq!(root.texture.id, TextureId::Clear);
    assert_eq!(root.animation, None);
}

#[test]
fn absent_tags_inherit() {
    let nodes = r#"<node id="root"><descendants/></node>"#;
    let scene = parse_document(&document(nodes)).unwrap();
    let root = scene.graph.get("root").unwrap();
    assert_eq!(root.transform, Mat4::IDENTITY);
    assert_eq!(root.material, MaterialRef::Inherit);
    assert_eq!(root.texture.id, TextureId::Inherit);
    assert!(approx(root.texture.afs, 1.0) && approx(root.texture.aft, 1.0));
    assert!(scene.diagnostics.contains("no transformations tag"));
}

#[test]
fn named_references_resolve() {
    let scene = parse_document(&document(NODES)).unwrap();
    let root = scene.graph.get("root").unwrap();
    let child = scene.graph.get("child").unwrap();
    assert_eq!(root.material, MaterialRef::Named("red".into()));
    assert_eq!(root.texture.id, TextureId::Clear);
    assert_eq!(child.material, MaterialRef::Inherit);
    assert_eq!(child.texture.id, TextureId::Inherit);
    assert_eq!(child.animation.as_deref(), Some("slide"));
}

#[test]
fn texture_amplification_is_read() {
    let nodes = r#"<node id="root"><texture id="wood"><amplification afs="2" aft="0.5"/></texture><descendants/></node>"#;
    let scene = parse_document(&document(nodes)).unwrap();
    let texture = &scene.graph.get("root").unwrap().texture;
    assert_eq!(texture.id, TextureId::Named("wood".into()));
    assert!(approx(texture.afs, 2.0));
    assert!(approx(texture.aft, 0.5));
}

#[test]
fn transformations_compose_in_document_order() {
    let nodes = r#"<node id="root">
        <transformations>
            <translation x="1" y="0" z="0"/>
            <rotation axis="z" angle="90"/>
            <rotation axis="w" angle="45"/>
            <scale sx="2" sy="2" sz="2"/>
        </transformations>
        <descendants/>
    </node>"#;
    let scene = parse_document(&document(nodes)).unwrap();
    let transform = scene.graph.get("root").unwrap().transform;

    // (1,0,0) scaled to (2,0,0), rotated to (0,2,0), moved to (1,2,0)
    let p = transform.transform_point3(Vec3::X);
    assert!((p - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-4, "got {p}");
    assert!(scene.diagnostics.contains("axis"));
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn every_leaf_kind_parses() {
    let leaves = r#"
        <leaf type="rectangle" x1="-1" y1="-1" x2="1" y2="1"/>
        <leaf type="triangle" x1="0" y1="0" x2="1" y2="0" x3="0" y3="1"/>
        <leaf type="sphere" radius="1" slices="10" stacks="5"/>
        <leaf type="torus" inner="0.2" outer="1" slices="8" loops="8"/>
        <leaf type="cylinder" height="2" topRadius="0.5" bottomRadius="1" slices="8" stacks="2"/>
        <leaf type="spritetext" text="Hi"/>
        <leaf type="spriteanim" ssid="fire" startCell="0" endCell="7" duration="2"/>
        <leaf type="plane" npartsU="4" npartsV="4"/>
        <leaf type="patch" npointsU="2" npointsV="2" npartsU="3" npartsV="3">
            <controlpoint x="0" y="0" z="0"/><controlpoint x="0" y="1" z="0"/>
            <controlpoint x="1" y="0" z="0"/><controlpoint x="1" y="1" z="0"/>
        </leaf>
        <leaf type="defbarrel" base="0.5" middle="0.7" height="2" slices="6" stacks="6"/>"#;
    let scene = parse_document(&document(&root_with(leaves))).unwrap();
    let root = scene.graph.get("root").unwrap();

    let kinds: Vec<&str> = root
        .descendants
        .iter()
        .filter_map(|d| match d {
            Descendant::Leaf(p) => Some(p.kind()),
            Descendant::Composite(_) => None,
        })
        .collect();
    assert_eq!(
        kinds,
        ["rectangle", "triangle", "sphere", "torus", "cylinder", "spritetext", "spriteanim", "plane", "patch", "defbarrel"]
    );
    assert_eq!(scene.tables.sprite_animations.len(), 1);
    assert!(scene.diagnostics.contains("more than one leaf"));
}

#[test]
fn invalid_leaves_are_dropped_alone() {
    let leaves = r#"
        <leaf type="sphere" radius="-1" slices="10" stacks="5"/>
        <leaf type="cylinder" height="2" topRadius="0.5" slices="8" stacks="2"/>
        <leaf type="hexagon"/>
        <leaf type="spriteanim" ssid="nope" startCell="0" endCell="7" duration="2"/>
        <leaf type="spriteanim" ssid="fire" startCell="0" endCell="7" duration="0"/>
        <leaf type="patch" npointsU="2" npointsV="2" npartsU="3" npartsV="3">
            <controlpoint x="0" y="0" z="0"/>
        </leaf>
        <leaf type="torus" inner="0.2" outer="1" slices="8" loops="8"/>"#;
    let scene = parse_document(&document(&root_with(leaves))).unwrap();
    let root = scene.graph.get("root").unwrap();

    assert_eq!(root.leaf_count(), 1);
    assert!(matches!(root.descendants[0], Descendant::Leaf(Primitive::Torus(_))));
    assert!(scene.diagnostics.contains("radius"));
    assert!(scene.diagnostics.contains("hexagon"));
    assert!(scene.diagnostics.contains("control points"));
}

#[test]
fn oversized_subdivisions_drop_the_leaf() -> anyhow::Result<()> {
    init_logger();
    let leaves = r#"
        <leaf type="sphere" radius="1" slices="10" stacks="3000000000"/>
        <leaf type="torus" inner="0.2" outer="1" slices="70000" loops="70000"/>
        <leaf type="cylinder" height="1" topRadius="1" bottomRadius="1" slices="inf" stacks="2"/>
        <leaf type="plane" npartsU="1025" npartsV="4"/>
        <leaf type="sphere" radius="inf" slices="8" stacks="4"/>
        <leaf type="sphere" radius="1" slices="1024" stacks="2"/>"#;
    let scene = parse_document(&document(&root_with(leaves)))?;
    let root = scene.graph.get("root").unwrap();

    assert_eq!(root.leaf_count(), 1);
    let Descendant::Leaf(Primitive::Sphere(sphere)) = &root.descendants[0] else {
        panic!("expected the in-range sphere to survive");
    };
    assert_eq!(sphere.slices, 1024);
    assert!(scene.diagnostics.contains("stacks of the node root exceeds"));
    assert!(scene.diagnostics.contains("slices of the node root exceeds"));
    assert!(scene.diagnostics.contains("unable to parse slices"));
    assert!(scene.diagnostics.contains("npartsU of the node root exceeds"));
    assert!(scene.diagnostics.contains("unable to parse radius"));
    Ok(())
}

#[test]
fn amplification_rescales_rectangle_uvs() {
    let nodes = r#"<node id="root">
        <texture id="wood"><amplification afs="2" aft="2"/></texture>
        <descendants><leaf type="rectangle" x1="0" y1="0" x2="4" y2="4"/></descendants>
    </node>"#;
    let scene = parse_document(&document(nodes)).unwrap();
    let Descendant::Leaf(Primitive::Rectangle(rect)) = &scene.graph.get("root").unwrap().descendants[0] else {
        panic!("expected a rectangle");
    };
    assert!(approx(rect.geometry.uvs[1].x, 2.0));
}

// ============================================================================
// Animations
// ============================================================================

#[test]
fn keyframe_rotations_are_radians() {
    let scene = parse_document(&document(NODES)).unwrap();
    let slide = &scene.tables.animations["slide"];
    assert!(approx(slide.last().transform.rotation_y.y, PI / 2.0));
    assert_eq!(slide.last().transform.translation, Vec3::X);
}

#[test]
fn bad_keyframes_are_dropped() {
    let keyframe = |instant: &str, body: &str| format!(r#"<keyframe instant="{instant}">{body}</keyframe>"#);
    let full = r#"<translation x="0" y="0" z="0"/><rotation axis="x" angle="0"/><rotation axis="y" angle="0"/><rotation axis="z" angle="0"/><scale sx="1" sy="1" sz="1"/>"#;
    let repeated_axis = r#"<translation x="0" y="0" z="0"/><rotation axis="x" angle="0"/><rotation axis="x" angle="0"/><rotation axis="z" angle="0"/><scale sx="1" sy="1" sz="1"/>"#;
    let short = r#"<translation x="0" y="0" z="0"/>"#;

    let animation = format!(
        r#"<animations><animation id="slide">{}{}{}{}{}{}</animation><animation id="empty">{}</animation></animations>"#,
        keyframe("1", full),
        keyframe("1", full),
        keyframe("0.5", full),
        keyframe("2", repeated_axis),
        keyframe("3", short),
        keyframe("4", full),
        keyframe("-1", full),
    );
    let scene = parse_document(&replace_section("animations", &animation, NODES)).unwrap();

    let instants: Vec<f32> = scene.tables.animations["slide"].keyframes().iter().map(|k| k.instant).collect();
    assert_eq!(instants, [1.0, 4.0]);
    assert!(!scene.tables.animations.contains_key("empty"));
}
