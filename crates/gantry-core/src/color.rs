//! Color handling for Gantry diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are parsed from CSS color strings and emitted
//! in the `#rrggbb` hex form the Graphviz attribute grammar accepts.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{ColorSpaceTag, DynamicColor};

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantry_core::color::Color;
    ///
    /// let green = Color::new("green").unwrap();
    /// let purple = Color::new("#800080").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns this color as a `#rrggbb` hex string.
    ///
    /// Graphviz does not understand CSS functional notation, so colors are
    /// converted to sRGB and emitted as hex when written into DOT attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantry_core::color::Color;
    ///
    /// let green = Color::new("green").unwrap();
    /// assert_eq!(green.to_hex_string(), "#008000");
    /// ```
    pub fn to_hex_string(self) -> String {
        let srgb = self.color.convert(ColorSpaceTag::Srgb);
        let [r, g, b, _] = srgb.components;
        format!(
            "#{:02x}{:02x}{:02x}",
            (r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_hex_string(), "#000000");
    }

    #[test]
    fn test_color_hex_from_names() {
        assert_eq!(Color::new("green").unwrap().to_hex_string(), "#008000");
        assert_eq!(Color::new("purple").unwrap().to_hex_string(), "#800080");
        assert_eq!(Color::new("white").unwrap().to_hex_string(), "#ffffff");
    }

    #[test]
    fn test_color_hex_roundtrip() {
        let color = Color::new("#2d3436").unwrap();
        assert_eq!(color.to_hex_string(), "#2d3436");
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
