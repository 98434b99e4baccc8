use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Opacity of the dot that marks the current page.
pub const ACTIVE_DOT_OPACITY: f32 = 0.9;
/// Opacity of every other dot.
pub const INACTIVE_DOT_OPACITY: f32 = 0.4;

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Same color with the alpha replaced by `opacity`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB` into a [`Color`].
pub fn parse_hex_color(value: &str) -> Result<Color> {
    let digits = value
        .trim()
        .strip_prefix('#')
        .ok_or(Error::InvalidColorString)?;

    if !digits.is_ascii() {
        return Err(Error::InvalidColorString);
    }

    let channel =
        |at: usize| u8::from_str_radix(&digits[at..at + 2], 16);

    match digits.len() {
        6 => Ok(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Ok(Color::from_argb8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => Err(Error::InvalidColorString),
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Brightness {
    #[default]
    Light,
    Dark,
}

/// Ambient theme the control renders into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub brightness: Brightness,
}

impl Theme {
    pub fn new(brightness: Brightness) -> Self {
        Self { brightness }
    }

    /// Base dot color: dark dots on a light theme, light dots on a dark one.
    pub fn indicator_base(&self) -> Color {
        match self.brightness {
            Brightness::Light => Color::BLACK,
            Brightness::Dark => Color::WHITE,
        }
    }

    pub fn indicator_active(&self) -> Color {
        self.indicator_base().with_opacity(ACTIVE_DOT_OPACITY)
    }

    pub fn indicator_inactive(&self) -> Color {
        self.indicator_base().with_opacity(INACTIVE_DOT_OPACITY)
    }
}
