use glam::Vec3;

use crate::animation::SpriteAnimKey;
use crate::renderer::RenderContext;
use crate::resources::primitives::rectangle::Rectangle;
use crate::resources::spritesheet::Spritesheet;
use crate::scene::ResourceTables;

/// Font cell shown for characters missing from the sheet (a blank).
pub const BLANK_CELL: u32 = 69;

/// Advance between consecutive characters of a [`SpriteText`].
pub const CHARACTER_ADVANCE: f32 = 0.5;

/// Cell of `c` in the 10 × 7 bitmap font.
///
/// Layout: `A-Z`, `a-z`, `1-9`, `0`, then `@ & ! ? = - .` and a blank.
#[must_use]
pub fn character_cell(c: char) -> u32 {
    match c {
        'A'..='Z' => c as u32 - 'A' as u32,
        'a'..='z' => 26 + (c as u32 - 'a' as u32),
        '1'..='9' => 52 + (c as u32 - '1' as u32),
        '0' => 61,
        '@' => 62,
        '&' => 63,
        '!' => 64,
        '?' => 65,
        '=' => 66,
        '-' => 67,
        '.' => 68,
        _ => BLANK_CELL,
    }
}

/// A line of text drawn with the scene's font sheet, one half-unit quad
/// per character advancing along +X.
#[derive(Debug, Clone)]
pub struct SpriteText {
    pub text: String,
    cells: Vec<u32>,
    glyph: Rectangle,
}

impl SpriteText {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cells = text.chars().map(character_cell).collect();
        Self {
            text,
            cells,
            glyph: Rectangle::new(0.0, 0.0, CHARACTER_ADVANCE, CHARACTER_ADVANCE),
        }
    }

    /// Font cells in display order.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn display(&self, font: &Spritesheet, ctx: &mut dyn RenderContext) {
        ctx.push_matrix();
        for &cell in &self.cells {
            let (m, n) = font.cell_position(cell);
            ctx.activate_sprite_cell(font, m, n);
            ctx.draw_mesh(&self.glyph.geometry);
            ctx.translate(Vec3::new(CHARACTER_ADVANCE, 0.0, 0.0));
        }
        ctx.pop_matrix();
        ctx.reset_shader();
    }
}

/// A unit quad showing the current cell of a sprite animation.
///
/// The animation state itself lives in
/// [`ResourceTables::sprite_animations`](crate::scene::ResourceTables) so the
/// engine can advance it without touching the node graph.
#[derive(Debug, Clone)]
pub struct SpriteAnimLeaf {
    pub key: SpriteAnimKey,
    quad: Rectangle,
}

impl SpriteAnimLeaf {
    #[must_use]
    pub fn new(key: SpriteAnimKey) -> Self {
        Self {
            key,
            quad: Rectangle::new(0.0, 0.0, 1.0, 1.0),
        }
    }

    pub fn display(&self, tables: &ResourceTables, ctx: &mut dyn RenderContext) {
        let Some(animation) = tables.sprite_animations.get(self.key) else {
            log::warn!("sprite animation leaf refers to a removed animation");
            return;
        };
        let Some(sheet) = tables.spritesheets.get(&animation.spritesheet) else {
            log::warn!("spritesheet {} not found", animation.spritesheet);
            return;
        };

        let (m, n) = sheet.cell_position(animation.current_cell());
        ctx.push_matrix();
        ctx.activate_sprite_cell(sheet, m, n);
        ctx.draw_mesh(&self.quad.geometry);
        ctx.pop_matrix();
        ctx.reset_shader();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_map_matches_font_layout() {
        assert_eq!(character_cell('A'), 0);
        assert_eq!(character_cell('Z'), 25);
        assert_eq!(character_cell('a'), 26);
        assert_eq!(character_cell('z'), 51);
        assert_eq!(character_cell('1'), 52);
        assert_eq!(character_cell('9'), 60);
        assert_eq!(character_cell('0'), 61);
        assert_eq!(character_cell('.'), 68);
        assert_eq!(character_cell(' '), 69);
        assert_eq!(character_cell('#'), BLANK_CELL);
    }

    #[test]
    fn text_is_mapped_once() {
        let text = SpriteText::new("Hi!");
        assert_eq!(text.cells(), &[7, 34, 64]);
    }
}
