use crate::color::Color;
use crate::padding::Padding;

/// Options for a single conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Fill color for targets without an alpha channel.
    pub background: Color,
    /// Border added around the source image.
    pub padding: Padding,
}

impl Config {
    /// Create a config with the given background and padding.
    pub fn new(background: Color, padding: Padding) -> Self {
        Self {
            background,
            padding,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}
