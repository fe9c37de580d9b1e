use glam::Vec2;

use crate::resources::texture::Texture;

/// A texture divided into an `size_m` × `size_n` grid of equally sized cells.
///
/// Cells are numbered row-major: cell `p` sits at column `p % size_m`,
/// row `p / size_m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spritesheet {
    pub id: String,
    pub texture: Texture,
    pub size_m: u32,
    pub size_n: u32,
}

impl Spritesheet {
    /// Both grid sizes must be positive; the parser rejects anything else.
    #[must_use]
    pub fn new(id: impl Into<String>, texture: Texture, size_m: u32, size_n: u32) -> Self {
        Self {
            id: id.into(),
            texture,
            size_m: size_m.max(1),
            size_n: size_n.max(1),
        }
    }

    /// The bitmap font sheet used by `spritetext` leaves.
    #[must_use]
    pub fn font(path: &str, (size_m, size_n): (u32, u32)) -> Self {
        Self::new("font", Texture::new("font", path), size_m, size_n)
    }

    #[must_use]
    pub fn cell_count(&self) -> u32 {
        self.size_m * self.size_n
    }

    /// Column and row of a linear cell index.
    #[must_use]
    pub fn cell_position(&self, cell: u32) -> (u32, u32) {
        (cell % self.size_m, cell / self.size_m)
    }

    /// Texture-space size of one cell.
    #[must_use]
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(1.0 / self.size_m as f32, 1.0 / self.size_n as f32)
    }

    /// Texture-space origin of cell `(m, n)`.
    #[must_use]
    pub fn cell_offset(&self, m: u32, n: u32) -> Vec2 {
        self.cell_size() * Vec2::new(m as f32, n as f32)
    }
}
