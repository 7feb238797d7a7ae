use serde::{Deserialize, Serialize};

/// Color representation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_hex(&value).ok_or_else(|| format!("invalid hex color: '{value}'"))
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_hex()
    }
}

impl Color {
    /// Transparent color: `#00000000`
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Red color: `#FF0000FF`
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Black color: `#000000FF`
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into u8 array (RGBA).
    pub fn to_u8_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts the color into HEX8 string: `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Parses a color from the hex string.
    ///
    /// Accepted forms are `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA`, with or without the leading `#`. Digits of the
    /// short forms are doubled (`#F80` is `#FF8800`).
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        let digits = hex_string.strip_prefix('#').unwrap_or(hex_string);
        if !digits.is_ascii() {
            return None;
        }

        let channel = |i: usize, width: usize| -> Option<u8> {
            let value = u8::from_str_radix(&digits[i * width..(i + 1) * width], 16).ok()?;
            Some(if width == 1 { value * 17 } else { value })
        };

        match digits.len() {
            3 | 4 => Some(Self {
                r: channel(0, 1)?,
                g: channel(1, 1)?,
                b: channel(2, 1)?,
                a: if digits.len() == 4 { channel(3, 1)? } else { 255 },
            }),
            6 | 8 => Some(Self {
                r: channel(0, 2)?,
                g: channel(1, 2)?,
                b: channel(2, 2)?,
                a: if digits.len() == 8 { channel(3, 2)? } else { 255 },
            }),
            _ => None,
        }
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`) or HEX8 (`#RRGGBBAA`).
    ///
    /// # Panics
    ///
    /// Panics if the parsing fails.
    pub const fn from_hex(hex_string: &'static str) -> Self {
        let bytes = hex_string.as_bytes();
        if bytes.len() != 7 && bytes.len() != 9 || bytes[0] != b'#' {
            panic!("Invalid color hex string");
        }

        let r = decode_byte(&[bytes[1], bytes[2]]);
        let g = decode_byte(&[bytes[3], bytes[4]]);
        let b = decode_byte(&[bytes[5], bytes[6]]);
        let a = if hex_string.len() == 9 {
            decode_byte(&[bytes[7], bytes[8]])
        } else {
            255
        };

        Self { r, g, b, a }
    }

    /// Returns a new color instance, copied from the base one but with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Returns true if the color is fully transparent (`a == 0`).
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Red component of the color in RGBA space.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green component of the color in RGBA space.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue component of the color in RGBA space.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Opacity component of the color.
    pub fn a(&self) -> u8 {
        self.a
    }
}

const fn decode_byte(chars: &[u8]) -> u8 {
    debug_assert!(chars.len() == 2);
    let first = decode_char(chars[0]);
    let second = decode_char(chars[1]);

    first * 16 + second
}

const fn decode_char(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_serialization() {
        let hex = "#FF1000AA";
        let color = Color::try_from_hex(hex).unwrap();
        assert_eq!(&color.to_hex(), hex);

        assert_eq!(Color::from_hex(hex), color);
    }

    #[test]
    fn short_and_unprefixed_forms() {
        assert_eq!(Color::try_from_hex("#F80"), Some(Color::rgba(255, 136, 0, 255)));
        assert_eq!(Color::try_from_hex("F808"), Some(Color::rgba(255, 136, 0, 136)));
        assert_eq!(Color::try_from_hex("0f0f0fFF"), Some(Color::rgba(15, 15, 15, 255)));
    }

    #[test]
    fn invalid_hex() {
        assert_eq!(Color::try_from_hex(""), None);
        assert_eq!(Color::try_from_hex("#12345"), None);
        assert_eq!(Color::try_from_hex("#GG0000"), None);
        assert_eq!(Color::try_from_hex("#ÿÿÿ"), None);
    }
}
