use slotmap::new_key_type;

new_key_type! {
    /// Handle of a [`SpriteAnimation`] in the scene's resource tables.
    pub struct SpriteAnimKey;
}

/// Loops a spritesheet through the cells `start_cell..end_cell` every
/// `duration` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    /// Id of the spritesheet in the resource tables.
    pub spritesheet: String,
    pub start_cell: u32,
    pub end_cell: u32,
    /// Loop length in seconds, always positive.
    pub duration: f32,
    cells_per_second: f32,
    current_cell: u32,
    origin_ms: Option<f64>,
}

impl SpriteAnimation {
    #[must_use]
    pub fn new(spritesheet: impl Into<String>, start_cell: u32, end_cell: u32, duration: f32) -> Self {
        let cells_per_second = if duration > 0.0 {
            (end_cell as f32 - start_cell as f32) / duration
        } else {
            0.0
        };
        Self {
            spritesheet: spritesheet.into(),
            start_cell,
            end_cell,
            duration,
            cells_per_second,
            current_cell: start_cell,
            origin_ms: None,
        }
    }

    #[must_use]
    pub fn cells_per_second(&self) -> f32 {
        self.cells_per_second
    }

    #[must_use]
    pub fn current_cell(&self) -> u32 {
        self.current_cell
    }

    /// Advances to wall time `now_ms`. The first call latches the origin.
    pub fn update(&mut self, now_ms: f64) {
        let origin = *self.origin_ms.get_or_insert(now_ms);
        if self.duration <= 0.0 {
            return;
        }
        let elapsed = ((now_ms - origin) / 1000.0) as f32;
        let wrapped = elapsed.rem_euclid(self.duration);
        let cell = self.start_cell as f32 + (wrapped * self.cells_per_second).floor();
        self.current_cell = cell.max(0.0) as u32;
    }

    pub fn reset(&mut self) {
        self.origin_ms = None;
        self.current_cell = self.start_cell;
    }
}
