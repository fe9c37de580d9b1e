//! Typed attribute access on `roxmltree` elements.
//!
//! Composite readers return the warning text on failure so the caller can
//! decide between skipping the element and aborting the section.

use glam::{Vec3, Vec4};
use roxmltree::Node;

pub(crate) type AttrResult<T> = std::result::Result<T, String>;

/// Element children of `node`, skipping text and comments.
pub(crate) fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

/// First element child named `tag`.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    elements(node).find(|c| c.has_tag_name(tag))
}

pub(crate) fn tag<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

pub(crate) fn string<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// A finite float attribute.
pub(crate) fn float(node: Node, name: &str) -> Option<f32> {
    node.attribute(name)?
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
}

/// A float attribute that must be `>= 0`.
pub(crate) fn non_negative(node: Node, name: &str) -> Option<f32> {
    float(node, name).filter(|v| *v >= 0.0)
}

/// A non-negative count, truncated towards zero.
pub(crate) fn count(node: Node, name: &str) -> Option<u32> {
    non_negative(node, name).map(|v| v.trunc() as u32)
}

/// `true`/`false`, also accepting `1`/`0`.
pub(crate) fn boolean(node: Node, name: &str) -> Option<bool> {
    match node.attribute(name)?.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn component(node: Node, name: &str, what: &str, context: &str) -> AttrResult<f32> {
    float(node, name).ok_or_else(|| format!("unable to parse {what} of the {context}"))
}

/// `x`, `y`, `z` attributes.
pub(crate) fn point3(node: Node, context: &str) -> AttrResult<Vec3> {
    Ok(Vec3::new(
        component(node, "x", "x-coordinate", context)?,
        component(node, "y", "y-coordinate", context)?,
        component(node, "z", "z-coordinate", context)?,
    ))
}

/// `x`, `y`, `z`, `w` attributes.
pub(crate) fn point4(node: Node, context: &str) -> AttrResult<Vec4> {
    Ok(point3(node, context)?.extend(component(node, "w", "w-coordinate", context)?))
}

/// `sx`, `sy`, `sz` attributes.
pub(crate) fn scale3(node: Node, context: &str) -> AttrResult<Vec3> {
    Ok(Vec3::new(
        component(node, "sx", "sx-coordinate", context)?,
        component(node, "sy", "sy-coordinate", context)?,
        component(node, "sz", "sz-coordinate", context)?,
    ))
}

/// `r`, `g`, `b`, `a` attributes, each within `[0, 1]`.
pub(crate) fn color(node: Node, context: &str) -> AttrResult<Vec4> {
    let channel = |name: &str, label: &str| {
        float(node, name)
            .filter(|v| (0.0..=1.0).contains(v))
            .ok_or_else(|| format!("unable to parse {label} component of the {context}"))
    };
    Ok(Vec4::new(
        channel("r", "R")?,
        channel("g", "G")?,
        channel("b", "B")?,
        channel("a", "A")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_element<R>(xml: &str, f: impl FnOnce(Node) -> R) -> R {
        let doc = roxmltree::Document::parse(xml).unwrap();
        f(doc.root_element())
    }

    #[test]
    fn float_rejects_garbage_and_non_finite() {
        with_element(r#"<e a="1.5" b="abc" c="NaN" d="inf" f="-infinity"/>"#, |e| {
            assert_eq!(float(e, "a"), Some(1.5));
            assert_eq!(float(e, "b"), None);
            assert_eq!(float(e, "c"), None);
            assert_eq!(float(e, "d"), None);
            assert_eq!(count(e, "d"), None);
            assert_eq!(float(e, "f"), None);
            assert_eq!(float(e, "missing"), None);
        });
    }

    #[test]
    fn color_channels_are_range_checked() {
        with_element(r#"<c r="0.2" g="1" b="0" a="1"/>"#, |e| {
            assert_eq!(color(e, "test").unwrap(), Vec4::new(0.2, 1.0, 0.0, 1.0));
        });
        with_element(r#"<c r="1.2" g="1" b="0" a="1"/>"#, |e| {
            assert!(color(e, "test").unwrap_err().contains("R component"));
        });
    }

    #[test]
    fn booleans() {
        with_element(r#"<e a="true" b="0" c="maybe"/>"#, |e| {
            assert_eq!(boolean(e, "a"), Some(true));
            assert_eq!(boolean(e, "b"), Some(false));
            assert_eq!(boolean(e, "c"), None);
        });
    }

    #[test]
    fn counts_truncate() {
        with_element(r#"<e a="4.7" b="-1"/>"#, |e| {
            assert_eq!(count(e, "a"), Some(4));
            assert_eq!(count(e, "b"), None);
        });
    }
}
