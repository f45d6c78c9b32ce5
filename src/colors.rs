use core::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A 24-bit RGB color.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared euclidean distance between two colors in RGB space.
    pub fn distance_sq(&self, other: &RgbColor) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Parses a color from hex RGB ("rrggbb" or "#rrggbb").
impl FromStr for RgbColor {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let err = Error::ColorParsing(String::from(s));
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err);
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err.clone())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err.clone())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err.clone())?;
        Ok(Self { r, g, b })
    }
}

/// Formats the color as lowercase hex RGB.
impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Index of CGA black, the default background.
pub const CGA_BLACK: u8 = 0;
/// Index of CGA light gray, the default foreground.
pub const CGA_LIGHT_GRAY: u8 = 7;

/// The 16 color CGA palette.
///
/// Entries are in ANSI order so that `index % 8` is the SGR color number
/// and `index + 8` is the bright version of `index`.
pub const CGA_PALETTE: [RgbColor; 16] = [
    RgbColor::new(0x00, 0x00, 0x00), // black
    RgbColor::new(0xAA, 0x00, 0x00), // red
    RgbColor::new(0x00, 0xAA, 0x00), // green
    RgbColor::new(0xAA, 0x55, 0x00), // brown
    RgbColor::new(0x00, 0x00, 0xAA), // blue
    RgbColor::new(0xAA, 0x00, 0xAA), // magenta
    RgbColor::new(0x00, 0xAA, 0xAA), // cyan
    RgbColor::new(0xAA, 0xAA, 0xAA), // light gray
    RgbColor::new(0x55, 0x55, 0x55), // dark gray
    RgbColor::new(0xFF, 0x55, 0x55), // bright red
    RgbColor::new(0x55, 0xFF, 0x55), // bright green
    RgbColor::new(0xFF, 0xFF, 0x55), // yellow
    RgbColor::new(0x55, 0x55, 0xFF), // bright blue
    RgbColor::new(0xFF, 0x55, 0xFF), // bright magenta
    RgbColor::new(0x55, 0xFF, 0xFF), // bright cyan
    RgbColor::new(0xFF, 0xFF, 0xFF), // white
];

/// Returns the index of the CGA palette entry closest to `color`.
/// On equal distance the lower index wins.
pub fn nearest_cga_index(color: RgbColor) -> u8 {
    let mut best = 0;
    let mut best_dist = u32::MAX;
    for (idx, entry) in CGA_PALETTE.iter().enumerate() {
        let dist = color.distance_sq(entry);
        if dist < best_dist {
            best = idx;
            best_dist = dist;
        }
    }
    best as u8
}

/// Snaps `color` to the closest CGA palette color.
pub fn cga_quantize(color: RgbColor) -> RgbColor {
    CGA_PALETTE[nearest_cga_index(color) as usize]
}
