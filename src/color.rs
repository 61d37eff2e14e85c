// src/color.rs

//! Packing of 8-bit RGB channels into the 32-bit words stored in `xcolortab[]`.
//!
//! The layout is little-endian RGBA: red in the lowest byte, alpha in the
//! highest. Every color in the table is fully opaque.

/// Alpha byte written into every packed color.
pub const ALPHA_OPAQUE: u8 = 0xFF;

/// An opaque color, with each component from 0 to 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Returns the packed `R | G << 8 | B << 16 | 0xFF << 24` word.
    pub fn to_rgba(self) -> u32 {
        pack_rgba(self.0, self.1, self.2, ALPHA_OPAQUE)
    }

    /// Recovers the channels of a packed word, discarding alpha.
    pub fn from_rgba(rgba: u32) -> Self {
        let (r, g, b, _) = unpack_rgba(rgba);
        Rgb(r, g, b)
    }
}

/// Packs four channels into a single word, red in the lowest byte.
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from(r) | (u32::from(g) << 8) | (u32::from(b) << 16) | (u32::from(a) << 24)
}

/// Inverse of [`pack_rgba`]. Returns `(r, g, b, a)`.
pub fn unpack_rgba(rgba: u32) -> (u8, u8, u8, u8) {
    let [r, g, b, a] = rgba.to_le_bytes();
    (r, g, b, a)
}
