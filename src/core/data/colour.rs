#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    /// Builds a colour from a `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_hex_splits_channels() {
        assert_eq!(
            Colour::from_rgb_hex(0x40BE59),
            Colour {
                r: 0x40,
                g: 0xBE,
                b: 0x59
            }
        );
    }
}
