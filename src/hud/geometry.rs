use serde::{Deserialize, Serialize};

/// Widget bounds expressed as percentages of the current viewport.
/// Values are logically in `[0, 100]` but are not clamped; the overlay
/// may extend past the viewport edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Resolve these percentage bounds against a viewport, ceiling each
    /// component to whole pixels.
    pub fn to_pixels(&self, viewport_width: i32, viewport_height: i32) -> PixelRect {
        PixelRect {
            x: ceil_to_int(viewport_width as f64 * self.x / 100.0),
            y: ceil_to_int(viewport_height as f64 * self.y / 100.0),
            width: ceil_to_int(viewport_width as f64 * self.width / 100.0),
            height: ceil_to_int(viewport_height as f64 * self.height / 100.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    /// Shrink by `amount` pixels on each side.
    pub fn inset(&self, amount: i32) -> PixelRect {
        PixelRect {
            x: self.x + amount,
            y: self.y + amount,
            width: self.width - 2 * amount,
            height: self.height - 2 * amount,
        }
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }
}

/// Smallest integer greater than or equal to `v`. Exact for integral
/// inputs: `ceil_to_int(4.0) == 4`.
pub fn ceil_to_int(v: f64) -> i32 {
    v.ceil() as i32
}
