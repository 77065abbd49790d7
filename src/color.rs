use rand::Rng;
use thiserror::Error;

/// One color: three independent channels, each an integer in [0, 255].
///
/// A plain value type, built fresh on every input event. Storing the
/// channels as `u8` makes the range invariant hold by construction, so
/// the conversions below are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseHexError {
    #[error("hex color code must have 6 digits, got {0}")]
    WrongLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Each channel drawn independently and uniformly, 0 and 255 both
    /// reachable.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            red: rng.gen_range(0..=255),
            green: rng.gen_range(0..=255),
            blue: rng.gen_range(0..=255),
        }
    }

    /// Six uppercase hex digits, red-green-blue, without a `#` prefix.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// CSS-style decimal form, e.g. `rgb(221, 222, 238)`.
    pub fn to_rgb_css(self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    /// Parses exactly six hex digits as three byte pairs, either case.
    pub fn from_hex(code: &str) -> Result<Self, ParseHexError> {
        if code.len() != 6 {
            return Err(ParseHexError::WrongLength(code.chars().count()));
        }
        if let Some(bad) = code.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseHexError::InvalidDigit(bad));
        }
        // Every character is an ASCII hex digit here, so the pair slices
        // are in bounds and base-16 parsing cannot fail.
        let channel = |pair: &str| u8::from_str_radix(pair, 16).unwrap_or_default();
        Ok(Self::new(
            channel(&code[0..2]),
            channel(&code[2..4]),
            channel(&code[4..6]),
        ))
    }
}

/// True iff `code` is exactly six hex digits, either case.
pub fn is_valid_hex(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_hexdigit())
}
