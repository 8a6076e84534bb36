// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color values.
//!
//! This module provides [`Color`], a packed ARGB color or an opaque
//! resource reference, following the same parse-or-pass-through rule as
//! [`Length`](crate::Length).

use alloc::string::{String, ToString};
use core::fmt;

/// A color value.
///
/// Colors are either a packed `0xAARRGGBB` word or an opaque reference
/// resolved by an external theme system.
///
/// # Example
///
/// ```rust
/// use canopy_value::Color;
///
/// assert_eq!(Color::parse("#FF0000"), Color::Argb(0xFF_FF0000));
/// assert_eq!(Color::parse("#80FF0000"), Color::Argb(0x80_FF0000));
/// assert_eq!(
///     Color::parse("sys.color.accent"),
///     Color::Resource("sys.color.accent".into()),
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A packed `0xAARRGGBB` color.
    Argb(u32),
    /// An opaque resource reference, stored verbatim.
    Resource(String),
}

impl Color {
    /// Parses a `#RRGGBB` or `#AARRGGBB` hex string.
    ///
    /// `#RRGGBB` input is promoted to fully opaque. Anything that is not a
    /// recognizable hex color degrades to [`Color::Resource`] pass-through.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(hex) = raw.strip_prefix('#') {
            match hex.len() {
                6 => {
                    if let Ok(rgb) = u32::from_str_radix(hex, 16) {
                        return Self::Argb(0xFF00_0000 | rgb);
                    }
                }
                8 => {
                    if let Ok(argb) = u32::from_str_radix(hex, 16) {
                        return Self::Argb(argb);
                    }
                }
                _ => {}
            }
        }
        Self::Resource(raw.to_string())
    }

    /// Creates a fully opaque color from 8-bit channels.
    #[must_use]
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Argb(0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Returns the packed ARGB word when this color is concrete.
    #[must_use]
    #[inline]
    pub fn as_argb(&self) -> Option<u32> {
        match self {
            Self::Argb(argb) => Some(*argb),
            Self::Resource(_) => None,
        }
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(argb: u32) -> Self {
        Self::Argb(argb)
    }
}

impl From<&str> for Color {
    #[inline]
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argb(argb) => write!(f, "#{argb:08X}"),
            Self::Resource(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn parse_rgb_promotes_alpha() {
        assert_eq!(Color::parse("#007DFF"), Color::Argb(0xFF00_7DFF));
    }

    #[test]
    fn parse_argb() {
        assert_eq!(Color::parse("#80007DFF"), Color::Argb(0x8000_7DFF));
    }

    #[test]
    fn parse_unrecognized_degrades_to_resource() {
        assert_eq!(Color::parse("red"), Color::Resource("red".into()));
        assert_eq!(Color::parse("#12"), Color::Resource("#12".into()));
        assert_eq!(Color::parse("#GGGGGG"), Color::Resource("#GGGGGG".into()));
    }

    #[test]
    fn rgb_constructor() {
        assert_eq!(Color::rgb(0xFF, 0x00, 0x00), Color::Argb(0xFF_FF0000));
        assert_eq!(Color::rgb(0, 0x7D, 0xFF), Color::parse("#007DFF"));
    }

    #[test]
    fn as_argb_only_for_concrete() {
        assert_eq!(Color::Argb(0x1234_5678).as_argb(), Some(0x1234_5678));
        assert_eq!(Color::Resource("r".into()).as_argb(), None);
    }

    #[test]
    fn display_round_trips_hex() {
        assert_eq!(format!("{}", Color::parse("#007DFF")), "#FF007DFF");
        assert_eq!(format!("{}", Color::Resource("x".into())), "x");
    }
}
