use serde::{Deserialize, Serialize};

/// Semi-transparent light gray used for unpressed keys.
pub const BUTTON_UP: Argb = Argb::argb(0x10, 0xa0, 0xa0, 0xa0);

/// Semi-transparent darker gray used for pressed keys.
pub const BUTTON_DOWN: Argb = Argb::argb(0x10, 0x50, 0x50, 0x50);

/// Opaque white used for all text and fill glyphs.
pub const TEXT: Argb = Argb::argb(0xff, 0xff, 0xff, 0xff);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Pack into a 32-bit integer, byte order `[a][r][g][b]` from most
    /// to least significant.
    pub const fn pack(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn unpack(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }
}
