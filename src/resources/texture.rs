use std::path::PathBuf;

/// An image registered under an id in `<textures>`.
///
/// The core never decodes images; `path` is handed to the host as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub id: String,
    pub path: PathBuf,
}

impl Texture {
    #[must_use]
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }
}
