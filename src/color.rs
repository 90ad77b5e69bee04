use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use image::Rgba;
use regex::{Matches, Regex};

use crate::{ConvertError, ConvertResult};

/// Two consecutive ASCII word characters.
static HEX_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9A-Za-z_]{2}").expect("hex token pattern is valid"));

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color([0, 0, 0, 0]);

    /// Create a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    pub fn alpha(self) -> u8 {
        self.0[3]
    }

    pub fn is_opaque(self) -> bool {
        self.alpha() == u8::MAX
    }

    /// The color as an `image` pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba(self.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        if a == u8::MAX {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl FromStr for Color {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Lazy scan of the two-character tokens in a hex color string.
///
/// Characters that cannot start a token are skipped, so `ff-80-00` yields
/// `ff`, `80`, `00`. Tokens are not validated as hexadecimal here.
pub struct HexTokens<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> HexTokens<'a> {
    pub fn new(haystack: &'a str) -> Self {
        Self {
            matches: HEX_TOKEN.find_iter(haystack),
        }
    }
}

impl<'a> Iterator for HexTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| m.as_str())
    }
}

/// Parse a named color (`black`, `white`, `red`, `green`, `blue`) or a hex color
/// such as `#ff8000` or `ff8000`.
pub fn parse_color(input: &str) -> ConvertResult<Color> {
    match input.to_ascii_lowercase().as_str() {
        "black" => Ok(Color::BLACK),
        "white" => Ok(Color::WHITE),
        "red" => Ok(Color::RED),
        "green" => Ok(Color::GREEN),
        "blue" => Ok(Color::BLUE),
        _ => parse_hex_color(input),
    }
}

fn parse_hex_color(input: &str) -> ConvertResult<Color> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    let mut tokens = HexTokens::new(digits);

    let mut channels = [0u8; 3];
    for (index, channel) in channels.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| ConvertError::InvalidColor {
            input: input.to_string(),
            reason: format!("expected 3 hex pairs, found {index}"),
        })?;
        *channel = u8::from_str_radix(token, 16).map_err(|_| ConvertError::InvalidColor {
            input: input.to_string(),
            reason: format!("`{token}` is not a hex byte"),
        })?;
    }

    let [r, g, b] = channels;
    Ok(Color::rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(input: &str) {
        match parse_color(input) {
            Err(ConvertError::InvalidColor { input: reported, .. }) => {
                assert_eq!(reported, input)
            }
            other => panic!("expected InvalidColor for {input:?}, got {other:?}"),
        }
    }

    mod hex_tokens {
        use super::*;

        #[test]
        fn splits_contiguous_pairs() {
            let tokens: Vec<_> = HexTokens::new("ff8000").collect();
            assert_eq!(tokens, ["ff", "80", "00"]);
        }

        #[test]
        fn skips_separators() {
            let tokens: Vec<_> = HexTokens::new("ff-80 00").collect();
            assert_eq!(tokens, ["ff", "80", "00"]);
        }

        #[test]
        fn odd_tail_is_dropped() {
            let tokens: Vec<_> = HexTokens::new("abcde").collect();
            assert_eq!(tokens, ["ab", "cd"]);
        }

        #[test]
        fn underscore_counts_as_word_character() {
            let tokens: Vec<_> = HexTokens::new("_a").collect();
            assert_eq!(tokens, ["_a"]);
        }
    }

    mod parse_color {
        use super::*;

        mod unit {
            use super::*;

            #[test]
            fn named_colors() {
                assert_eq!(parse_color("black").unwrap().0, [0, 0, 0, 255]);
                assert_eq!(parse_color("white").unwrap().0, [255, 255, 255, 255]);
                assert_eq!(parse_color("red").unwrap().0, [255, 0, 0, 255]);
                assert_eq!(parse_color("green").unwrap().0, [0, 255, 0, 255]);
                assert_eq!(parse_color("blue").unwrap().0, [0, 0, 255, 255]);
            }

            #[test]
            fn named_colors_ignore_case() {
                assert_eq!(parse_color("RED").unwrap(), Color::RED);
                assert_eq!(parse_color("White").unwrap(), Color::WHITE);
                assert_eq!(parse_color("bLuE").unwrap(), Color::BLUE);
            }

            #[test]
            fn hex_with_and_without_hash() {
                assert_eq!(parse_color("#1a2b3c").unwrap(), Color::rgb(0x1a, 0x2b, 0x3c));
                assert_eq!(parse_color("1A2B3C").unwrap(), Color::rgb(0x1a, 0x2b, 0x3c));
            }

            #[test]
            fn hex_is_opaque() {
                assert!(parse_color("#000000").unwrap().is_opaque());
            }

            #[test]
            fn permissive_separators_are_accepted() {
                assert_eq!(parse_color("#ff-80-00").unwrap(), Color::rgb(255, 128, 0));
            }

            #[test]
            fn extra_pairs_are_ignored() {
                assert_eq!(parse_color("ff000080").unwrap(), Color::RED);
            }

            #[test]
            fn too_few_pairs_fail() {
                assert_invalid("#ff00");
                assert_invalid("");
                assert_invalid("#");
            }

            #[test]
            fn non_hex_pairs_fail() {
                assert_invalid("#zz0000");
                assert_invalid("purple");
                assert_invalid("#_a0000");
            }

            #[test]
            fn from_str_matches_parse_color() {
                let color: Color = "#102030".parse().unwrap();
                assert_eq!(color, Color::rgb(16, 32, 48));
            }

            #[test]
            fn display_renders_hex() {
                assert_eq!(Color::rgb(255, 128, 0).to_string(), "#ff8000");
                assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
            }
        }

        mod prop {
            use super::*;
            use proptest::prelude::*;

            proptest! {
                /// Any lowercase hex triple parses back to its channels.
                #[test]
                fn lowercase_hex_round_trips(
                    r in proptest::num::u8::ANY,
                    g in proptest::num::u8::ANY,
                    b in proptest::num::u8::ANY
                ) {
                    let color = parse_color(&format!("#{r:02x}{g:02x}{b:02x}")).unwrap();
                    prop_assert_eq!(color, Color::rgb(r, g, b));
                }

                /// The leading `#` and letter case do not matter.
                #[test]
                fn uppercase_without_hash_round_trips(
                    r in proptest::num::u8::ANY,
                    g in proptest::num::u8::ANY,
                    b in proptest::num::u8::ANY
                ) {
                    let color = parse_color(&format!("{r:02X}{g:02X}{b:02X}")).unwrap();
                    prop_assert_eq!(color, Color::rgb(r, g, b));
                }

                /// Display output is accepted by the parser.
                #[test]
                fn display_is_parseable(
                    r in proptest::num::u8::ANY,
                    g in proptest::num::u8::ANY,
                    b in proptest::num::u8::ANY
                ) {
                    let color = Color::rgb(r, g, b);
                    prop_assert_eq!(parse_color(&color.to_string()).unwrap(), color);
                }
            }
        }
    }
}
