use glam::Vec4;

/// The `<initials>` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Initials {
    /// Id of the node traversal starts from.
    pub root: String,
    /// Length of the reference axes drawn by the host.
    pub reference_length: f32,
}

impl Initials {
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            reference_length: 1.0,
        }
    }
}

/// The `<illumination>` block: global ambient light and clear color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    pub ambient: Vec4,
    pub background: Vec4,
}

impl Default for Illumination {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.0, 0.0, 0.0, 1.0),
            background: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}
