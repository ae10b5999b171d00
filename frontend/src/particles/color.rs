use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("invalid hex colour `{0}`")]
    InvalidHex(String),
}

/// 8-bit sRGB triple, the unit every palette and interpolation works in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb`.
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input.trim().trim_start_matches('#');
        let invalid = || ColorError::InvalidHex(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Unparseable colours render white rather than failing the whole background.
    pub fn from_hex_or_white(input: &str) -> Self {
        Self::parse_hex(input).unwrap_or(Self::WHITE)
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let a = a as f64;
            let b = b as f64;
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in [0, 1].
    pub fn relative_luminance(self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = channel as f64 / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    pub fn is_light(self) -> bool {
        self.relative_luminance() > 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::parse_hex("#60a5fa"), Ok(Rgb::new(0x60, 0xa5, 0xfa)));
        assert_eq!(Rgb::parse_hex("F8F8F8"), Ok(Rgb::new(248, 248, 248)));
        assert_eq!(Rgb::parse_hex("#fff"), Ok(Rgb::WHITE));
    }

    #[test]
    fn rejects_garbage_and_falls_back_to_white() {
        assert!(Rgb::parse_hex("#12345").is_err());
        assert!(Rgb::parse_hex("#zzzzzz").is_err());
        assert!(Rgb::parse_hex("rgb(1, 2, 3)").is_err());
        assert_eq!(Rgb::from_hex_or_white("not a colour"), Rgb::WHITE);
    }

    #[test]
    fn lerp_hits_both_endpoints_exactly() {
        let from = Rgb::WHITE;
        let to = Rgb::new(0x60, 0xa5, 0xfa);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn lerp_clamps_out_of_range_progress() {
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 3.0), Rgb::WHITE);
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, -1.0), Rgb::BLACK);
    }

    #[test]
    fn light_detection_follows_luminance() {
        assert!(Rgb::from_hex_or_white("#f8f8f8").is_light());
        assert!(Rgb::from_hex_or_white("#e9ecef").is_light());
        assert!(!Rgb::BLACK.is_light());
        assert!(!Rgb::from_hex_or_white("#262626").is_light());
    }

    #[test]
    fn css_and_hex_formatting() {
        let c = Rgb::new(96, 165, 250);
        assert_eq!(c.to_css(), "rgb(96, 165, 250)");
        assert_eq!(c.to_hex(), "#60a5fa");
    }
}
