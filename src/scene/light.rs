use glam::Vec4;

/// A fixed-function light from `<lights>`.
///
/// `position.w == 0` denotes a directional light.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub id: String,
    pub enabled: bool,
    pub position: Vec4,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
}

impl Light {
    /// The single light registered when `<lights>` yields none.
    #[must_use]
    pub fn fallback() -> Self {
        let color = Vec4::new(0.3, 1.0, 1.0, 1.0);
        Self {
            id: "default".to_string(),
            enabled: true,
            position: Vec4::new(5.0, 5.0, 5.0, 1.0),
            ambient: color,
            diffuse: color,
            specular: color,
        }
    }
}
