//! Color Brightness
//!
//! Perceived brightness of a tier color, used to pick black or white text
//! on the tier head. Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
//! `rgb(r, g, b)` and `rgba(r, g, b, a)`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{DomainError, DomainResult};

/// Brightness above this reads better with black text
pub const CONTRAST_THRESHOLD: f64 = 127.0;

static RGB_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*(?:[,/]\s*[\d.]+%?\s*)?\)$")
        .expect("rgb pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// ITU-R BT.601 weighted brightness in 0..=255
    pub fn brightness(self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0) / 1000.0
    }
}

/// Text color that stays readable on a given background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastColor {
    Black,
    White,
}

impl ContrastColor {
    pub fn as_css(self) -> &'static str {
        match self {
            ContrastColor::Black => "black",
            ContrastColor::White => "white",
        }
    }
}

pub fn parse_color(color: &str) -> DomainResult<Rgb> {
    let trimmed = color.trim();
    let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
        parse_hex(hex)
    } else if trimmed.starts_with("rgb") {
        parse_rgb_function(trimmed)
    } else {
        None
    };
    parsed.ok_or_else(|| DomainError::UnresolvableColor(color.to_string()))
}

/// `None` when the color cannot be resolved
pub fn brightness(color: &str) -> Option<f64> {
    parse_color(color).ok().map(Rgb::brightness)
}

/// Black on bright backgrounds, white otherwise. Unresolvable colors are
/// treated as dark.
pub fn contrast_color(color: &str) -> ContrastColor {
    match brightness(color) {
        Some(b) if b > CONTRAST_THRESHOLD => ContrastColor::Black,
        Some(_) => ContrastColor::White,
        None => {
            tracing::debug!(color, "unresolvable color, using white text");
            ContrastColor::White
        }
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 | 4 => {
            let mut digits = hex.chars().map(|c| c.to_string().repeat(2));
            Some(Rgb {
                r: channel(&digits.next()?)?,
                g: channel(&digits.next()?)?,
                b: channel(&digits.next()?)?,
            })
        }
        6 | 8 => Some(Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        _ => None,
    }
}

fn parse_rgb_function(text: &str) -> Option<Rgb> {
    let caps = RGB_FUNCTION.captures(text)?;
    let channel = |i: usize| -> Option<u8> {
        let value: u16 = caps.get(i)?.as_str().parse().ok()?;
        Some(value.min(255) as u8)
    };
    Some(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#000000", 0.0)]
    #[case("#FFFFFF", 255.0)]
    #[case("#fff", 255.0)]
    #[case("#FF0000", 76.245)]
    #[case("rgb(0, 255, 0)", 149.685)]
    #[case("rgba(0,0,255,0.5)", 29.07)]
    #[case("#0000ff80", 29.07)]
    fn test_brightness(#[case] color: &str, #[case] expected: f64) {
        let b = brightness(color).unwrap();
        assert!((b - expected).abs() < 1e-9, "{color}: {b}");
    }

    #[rstest]
    #[case("#FFF", ContrastColor::Black)]
    #[case("#FFFF7F", ContrastColor::Black)]
    #[case("#7F7F7F", ContrastColor::White)]
    #[case("#808080", ContrastColor::Black)]
    #[case("#000", ContrastColor::White)]
    #[case("rgb(200, 200, 200)", ContrastColor::Black)]
    fn test_contrast(#[case] color: &str, #[case] expected: ContrastColor) {
        assert_eq!(contrast_color(color), expected);
    }

    #[rstest]
    #[case("red")]
    #[case("#12")]
    #[case("#ggg")]
    #[case("#12345")]
    #[case("rgb(1, 2)")]
    #[case("")]
    fn test_unresolvable(#[case] color: &str) {
        assert_eq!(brightness(color), None);
        assert_eq!(
            parse_color(color),
            Err(DomainError::UnresolvableColor(color.to_string()))
        );
        assert_eq!(contrast_color(color), ContrastColor::White);
    }

    #[test]
    fn test_rgb_channels_clamp() {
        assert_eq!(parse_color("rgb(300, 0, 0)"), Ok(Rgb { r: 255, g: 0, b: 0 }));
    }

    #[test]
    fn test_css_names() {
        assert_eq!(ContrastColor::Black.as_css(), "black");
        assert_eq!(ContrastColor::White.as_css(), "white");
    }
}
