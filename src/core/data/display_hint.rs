use crate::core::data::colour::Colour;

pub const DEFAULT_TITLE: &str = "Mandelbrot Set (press q to quit)";

/// Rendering hints passed along with a classified point set.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayHint {
    /// Side of the square marker drawn for each point, in pixels.
    pub marker_size: u32,
    pub marker_colour: Colour,
    pub background: Colour,
    /// Use one scale for both axes.
    pub equal_aspect: bool,
    pub show_axes: bool,
    pub title: String,
}

impl Default for DisplayHint {
    fn default() -> Self {
        Self {
            marker_size: 1,
            marker_colour: Colour::from_rgb_hex(0x40BE59),
            background: Colour::WHITE,
            equal_aspect: true,
            show_axes: false,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
