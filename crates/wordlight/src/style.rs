//! Visual style handed to the renderer with each range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Named colours accepted by [`HighlightStyle::from_str`].
const NAMED_COLOURS: &[(&str, [u8; 3])] = &[
    ("yellow", [0xff, 0xff, 0x00]),
    ("red", [0xff, 0x00, 0x00]),
    ("green", [0x00, 0xff, 0x00]),
    ("blue", [0x00, 0x00, 0xff]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("orange", [0xff, 0xc8, 0x00]),
    ("pink", [0xff, 0xaf, 0xaf]),
    ("gray", [0x80, 0x80, 0x80]),
    ("grey", [0x80, 0x80, 0x80]),
    ("white", [0xff, 0xff, 0xff]),
    ("black", [0x00, 0x00, 0x00]),
];

/// Background colour used to paint highlighted ranges.
///
/// # Example
///
/// ```
/// use wordlight::HighlightStyle;
///
/// let style: HighlightStyle = "#ff8800".parse()?;
/// assert_eq!(style.rgb(), (0xff, 0x88, 0x00));
/// assert_eq!(HighlightStyle::default().to_string(), "#ffff00");
/// # Ok::<(), wordlight::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightStyle {
    red: u8,
    green: u8,
    blue: u8,
}

impl HighlightStyle {
    /// Creates a style from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the colour as an `(r, g, b)` triple.
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self::new(0xff, 0xff, 0x00)
    }
}

impl fmt::Display for HighlightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for HighlightStyle {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| {
                EngineError::invalid_argument(format!("'{trimmed}' is not a hex colour"))
            });
        }

        NAMED_COLOURS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
            .map(|(_, [r, g, b])| Self::new(*r, *g, *b))
            .ok_or_else(|| EngineError::invalid_argument(format!("unknown colour '{trimmed}'")))
    }
}

fn parse_hex(hex: &str) -> Option<HighlightStyle> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => Some(HighlightStyle::new(
            u8::from_str_radix(hex.get(0..2)?, 16).ok()?,
            u8::from_str_radix(hex.get(2..4)?, 16).ok()?,
            u8::from_str_radix(hex.get(4..6)?, 16).ok()?,
        )),
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16));
            let mut next = || -> Option<u8> {
                let digit = u8::try_from(digits.next()??).ok()?;
                Some(digit * 17)
            };
            Some(HighlightStyle::new(next()?, next()?, next()?))
        }
        _ => None,
    }
}
