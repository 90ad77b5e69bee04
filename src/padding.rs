use std::str::FromStr;

use crate::{ConvertError, ConvertResult};

/// Border widths, in pixels, for each edge of the canvas.
///
/// Values are signed: a negative edge shrinks the canvas and crops the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub left: i64,
}

impl Padding {
    /// Create padding in CSS order (top, right, bottom, left).
    pub const fn new(top: i64, right: i64, bottom: i64, left: i64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same width on every edge.
    pub const fn uniform(value: i64) -> Self {
        Self::new(value, value, value, value)
    }

    /// `vertical` on top and bottom, `horizontal` on left and right.
    pub const fn symmetric(vertical: i64, horizontal: i64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total added width.
    pub fn horizontal(&self) -> i128 {
        i128::from(self.left) + i128::from(self.right)
    }

    /// Total added height.
    pub fn vertical(&self) -> i128 {
        i128::from(self.top) + i128::from(self.bottom)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl FromStr for Padding {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_padding(s)
    }
}

/// Parse a comma-separated padding specification.
///
/// Accepts CSS shorthand: `""`, `"v"`, `"vertical,horizontal"` or
/// `"top,right,bottom,left"`.
pub fn parse_padding(input: &str) -> ConvertResult<Padding> {
    if input.is_empty() {
        return Ok(Padding::default());
    }

    let tokens: Vec<&str> = input.split(',').collect();
    let edge = |index: usize, name: &str| parse_edge(input, tokens[index], name);

    match tokens.len() {
        1 => Ok(Padding::uniform(edge(0, "uniform")?)),
        2 => Ok(Padding::symmetric(
            edge(0, "vertical")?,
            edge(1, "horizontal")?,
        )),
        4 => Ok(Padding::new(
            edge(0, "top")?,
            edge(1, "right")?,
            edge(2, "bottom")?,
            edge(3, "left")?,
        )),
        count => Err(ConvertError::InvalidPadding {
            input: input.to_string(),
            reason: format!("expected 1, 2 or 4 values, got {count}"),
        }),
    }
}

fn parse_edge(input: &str, token: &str, name: &str) -> ConvertResult<i64> {
    token.parse().map_err(|err| ConvertError::InvalidPadding {
        input: input.to_string(),
        reason: format!("{name} padding `{token}`: {err}"),
    })
}
