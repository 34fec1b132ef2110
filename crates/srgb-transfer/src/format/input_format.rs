//! Textual color encodings accepted on input.

use std::fmt;

use super::error::ParseColorError;
use crate::color::Srgb;

const CHANNELS: usize = 3;
const HEX_DIGITS: usize = 6;

/// How a line of text encodes an sRGB color.
///
/// The numeric selector of each variant is what users type to choose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `r g b` with each channel a decimal in 0.0..=1.0 (selector 0)
    Decimal,
    /// `r g b` with each channel an integer in 0..=255 (selector 1)
    Byte,
    /// `RRGGBB` as six hex digits without separators (selector 2)
    Hex,
}

impl InputFormat {
    /// All formats, ordered by selector.
    pub const ALL: [InputFormat; 3] = [InputFormat::Decimal, InputFormat::Byte, InputFormat::Hex];

    /// Numeric selector for this format.
    pub fn selector(self) -> u8 {
        match self {
            InputFormat::Decimal => 0,
            InputFormat::Byte => 1,
            InputFormat::Hex => 2,
        }
    }

    /// Resolve a selector as typed by the user.
    ///
    /// Surrounding whitespace is ignored. Anything other than the integers
    /// 0, 1 and 2 is rejected.
    ///
    /// # Example
    /// ```
    /// use srgb_transfer::InputFormat;
    /// assert_eq!(InputFormat::from_selector(" 2 ").unwrap(), InputFormat::Hex);
    /// assert!(InputFormat::from_selector("3").is_err());
    /// ```
    pub fn from_selector(text: &str) -> Result<Self, ParseColorError> {
        match text.trim().parse::<i64>() {
            Ok(0) => Ok(InputFormat::Decimal),
            Ok(1) => Ok(InputFormat::Byte),
            Ok(2) => Ok(InputFormat::Hex),
            _ => Err(ParseColorError::InvalidSelector(text.trim().to_string())),
        }
    }

    /// Instruction shown to the user before reading a color in this format.
    pub fn instructions(self) -> &'static str {
        match self {
            InputFormat::Decimal => "Input the color as \"r g b\" with 0 <= r,g,b <= 1.",
            InputFormat::Byte => "Input the color as \"r g b\" with 0 <= r,g,b <= 255.",
            InputFormat::Hex => "Input the color as \"RRGGBB\" in hexadecimal.",
        }
    }

    /// Parse one line of text into an encoded color.
    ///
    /// The line must not contain its trailing line terminator. Tokens are
    /// separated by exactly one space; repeated spaces produce empty tokens
    /// which fail to parse.
    ///
    /// # Example
    /// ```
    /// use srgb_transfer::{InputFormat, Srgb};
    ///
    /// let color = InputFormat::Hex.parse("808080").unwrap();
    /// assert_eq!(color, Srgb::new(0.5, 0.5, 0.5));
    /// ```
    pub fn parse(self, line: &str) -> Result<Srgb, ParseColorError> {
        match self {
            InputFormat::Decimal => {
                let [r, g, b] = split_channels(line)?;
                Ok(Srgb::new(r.parse()?, g.parse()?, b.parse()?))
            }
            InputFormat::Byte => {
                let [r, g, b] = split_channels(line)?;
                Ok(Srgb::from_channel_bytes(r.parse()?, g.parse()?, b.parse()?))
            }
            InputFormat::Hex => {
                let [r, g, b] = hex_channels(line)?;
                Ok(Srgb::from_channel_bytes(r.into(), g.into(), b.into()))
            }
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::Decimal => "decimal \"r g b\" in [0, 1]",
            InputFormat::Byte => "integer \"r g b\" in [0, 255]",
            InputFormat::Hex => "hex \"RRGGBB\"",
        };
        write!(f, "{}: {}", self.selector(), name)
    }
}

fn split_channels(line: &str) -> Result<[&str; CHANNELS], ParseColorError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    <[&str; CHANNELS]>::try_from(tokens.as_slice()).map_err(|_| ParseColorError::TokenCount {
        expected: CHANNELS,
        found: tokens.len(),
    })
}

fn hex_channels(token: &str) -> Result<[u8; CHANNELS], ParseColorError> {
    let digits: Vec<char> = token.chars().collect();
    if digits.len() != HEX_DIGITS {
        return Err(ParseColorError::InvalidLength {
            found: digits.len(),
        });
    }

    let mut channels = [0u8; CHANNELS];
    for (channel, pair) in channels.iter_mut().zip(digits.chunks(2)) {
        let pair: String = pair.iter().collect();
        // from_str_radix alone would also take a sign
        if !pair.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(pair));
        }
        *channel = u8::from_str_radix(&pair, 16)?;
    }
    Ok(channels)
}
