use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SketchError;

/// An opaque color written as `#RRGGBB`, the value a color picker produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor(Color32);

impl HexColor {
    pub const WHITE: Self = Self(Color32::WHITE);
    pub const BLACK: Self = Self(Color32::BLACK);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Color32::from_rgb(r, g, b))
    }

    /// Drops any alpha so the stored value always round-trips through `#RRGGBB`.
    pub fn from_color32(color: Color32) -> Self {
        let [r, g, b, _] = color.to_srgba_unmultiplied();
        Self::from_rgb(r, g, b)
    }

    pub fn color32(self) -> Color32 {
        self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<HexColor> for Color32 {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // to_hex always carries an alpha pair, which is opaque here
        let hex = self.0.to_hex();
        f.write_str(&hex[..7].to_ascii_uppercase())
    }
}

impl FromStr for HexColor {
    type Err = SketchError;

    /// Accepts `#RRGGBB` in either case. Shorthand and alpha forms are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SketchError::InvalidHexColor(s.to_owned());

        if s.len() != 7 || !s.is_ascii() {
            return Err(invalid());
        }
        let color = Self::from_color32(Color32::from_hex(s).map_err(|_| invalid())?);

        // from_hex is lenient about digit syntax, so insist on the canonical spelling
        if !color.to_string().eq_ignore_ascii_case(s) {
            return Err(invalid());
        }
        Ok(color)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
