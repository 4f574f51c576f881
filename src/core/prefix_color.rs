//! Colours assigned to logger prefixes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Solarized accent colours handed out to prefixes in turn.
pub const PREFIX_PALETTE: [PrefixColor; 8] = [
    PrefixColor::new(0xB5, 0x89, 0x00),
    PrefixColor::new(0xCB, 0x4B, 0x16),
    PrefixColor::new(0xDC, 0x32, 0x2F),
    PrefixColor::new(0xD3, 0x36, 0x82),
    PrefixColor::new(0x6C, 0x71, 0xC4),
    PrefixColor::new(0x26, 0x8B, 0xD2),
    PrefixColor::new(0x2A, 0xA1, 0x98),
    PrefixColor::new(0x85, 0x99, 0x00),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PrefixColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Palette entry for the `index`-th registration
    pub fn nth(index: usize) -> Self {
        PREFIX_PALETTE[index % PREFIX_PALETTE.len()]
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Style declaration for a prefix drawn in this colour
    pub fn prefix_style(&self) -> String {
        format!("color:{}; font-weight:bold;", self.to_hex())
    }
}

impl fmt::Display for PrefixColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
