//! Fill styles for the drawing surface.

use std::fmt;
use std::str::FromStr;

use errors::ChaosError;

/// A straight (non-premultiplied) RGBA colour, eight bits a channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black, the default colour of game points.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white, the default background.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// The blue-violet of the vertex markers.
    pub const MARKER: Color = Color::rgb(0x33, 0x00, 0xff);
    /// Fully transparent, what a cleared surface holds.
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

fn hex_byte(s: &[u8]) -> Option<u8> {
    Some(hex_digit(s[0])? * 16 + hex_digit(s[1])?)
}

impl FromStr for Color {
    type Err = ChaosError;

    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `black` and `white`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ChaosError::BadColor(s.to_string());
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "black" => return Ok(Color::BLACK),
            "white" => return Ok(Color::WHITE),
            _ => {}
        }
        if !trimmed.starts_with('#') {
            return Err(bad());
        }
        let digits = trimmed[1..].as_bytes();
        let parsed = match digits.len() {
            3 => {
                let d: Option<Vec<u8>> = digits.iter().map(|c| hex_digit(*c).map(|v| v * 17)).collect();
                d.map(|d| Color::rgb(d[0], d[1], d[2]))
            }
            6 | 8 => {
                let bytes: Option<Vec<u8>> = digits.chunks(2).map(hex_byte).collect();
                bytes.map(|b| Color {
                    r: b[0],
                    g: b[1],
                    b: b[2],
                    a: if b.len() == 4 { b[3] } else { 255 },
                })
            }
            _ => None,
        };
        parsed.ok_or_else(bad)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}
