//! Named colors for clear values and debug drawing

/// A set of predefined colors
///
/// The underlying type is `u8` to keep the storage small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Blue,
    White,
    Black,
    Yellow,
    Cyan,
    Magenta,
    Orange,
    Purple,
    LightBlue,
    Pink,
    Lime,
    Silver,
    Gold,
    Brown,
}

/// RGB components as floats in the range [0, 1]
///
/// Convenient for uploading color uniforms and clear values to a backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRgb {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

// Table order must match the Color enum above.
const COLOR_TABLE: [ColorRgb; 16] = [
    ColorRgb { r: 1.0, g: 0.0, b: 0.0 },    // Red
    ColorRgb { r: 0.0, g: 1.0, b: 0.0 },    // Green
    ColorRgb { r: 0.0, g: 0.0, b: 1.0 },    // Blue
    ColorRgb { r: 1.0, g: 1.0, b: 1.0 },    // White
    ColorRgb { r: 0.0, g: 0.0, b: 0.0 },    // Black
    ColorRgb { r: 1.0, g: 1.0, b: 0.0 },    // Yellow
    ColorRgb { r: 0.0, g: 1.0, b: 1.0 },    // Cyan
    ColorRgb { r: 1.0, g: 0.0, b: 1.0 },    // Magenta
    ColorRgb { r: 1.0, g: 0.5, b: 0.0 },    // Orange
    ColorRgb { r: 0.6, g: 0.0, b: 1.0 },    // Purple
    ColorRgb { r: 0.5, g: 0.8, b: 1.0 },    // LightBlue
    ColorRgb { r: 1.0, g: 0.7, b: 0.8 },    // Pink
    ColorRgb { r: 0.7, g: 1.0, b: 0.2 },    // Lime
    ColorRgb { r: 0.75, g: 0.75, b: 0.75 }, // Silver
    ColorRgb { r: 1.0, g: 0.84, b: 0.0 },   // Gold
    ColorRgb { r: 0.6, g: 0.3, b: 0.1 },    // Brown
];

impl Color {
    /// Get the RGB components for this color
    pub const fn rgb(self) -> ColorRgb {
        COLOR_TABLE[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup_matches_table_order() {
        assert_eq!(Color::Red.rgb(), ColorRgb { r: 1.0, g: 0.0, b: 0.0 });
        assert_eq!(Color::Black.rgb(), ColorRgb { r: 0.0, g: 0.0, b: 0.0 });
        assert_eq!(Color::Gold.rgb(), ColorRgb { r: 1.0, g: 0.84, b: 0.0 });
    }
}
