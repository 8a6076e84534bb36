// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legacy setter delegation.
//!
//! Superseded setters are permanently retained. Each one delegates to
//! exactly one current entry point (or fans out to several), performing
//! only a value transform on the way; parsing, kind checking, and range
//! policies run once, inside the current setter. The full routing is
//! materialized in [`LEGACY_ROUTES`] so it can be audited in tests.

use canopy_property::AttrError;
use canopy_value::{Color, Length};

use crate::arg::Arg;
use crate::builder::ButtonAttrs;
use crate::kinds::FontWeight;

/// The width `width_px` substitutes when called with `Arg::Unset`, in px.
///
/// The pixel-era setter predates the dp default, so its documented unset
/// fallback is applied before unit conversion rather than delegating the
/// unset sentinel.
pub const LEGACY_WIDTH_PX_DEFAULT: f64 = 200.0;

/// The value transform a legacy route applies before delegating.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LegacyTransform {
    /// Unit conversion (px to dp) on the way through.
    UnitScale,
    /// Argument forwarded unchanged under a new name.
    Rename,
    /// One composite argument split across several current setters.
    FanOut,
    /// The legacy semantics are a narrower case of the current setter.
    Narrowing,
}

/// One legacy-to-current delegation route.
#[derive(Copy, Clone, Debug)]
pub struct LegacyRoute {
    /// The legacy method name.
    pub legacy: &'static str,
    /// The current attribute(s) it writes through.
    pub targets: &'static [&'static str],
    /// The transform applied on the way.
    pub transform: LegacyTransform,
}

/// Every legacy route, one entry per retained legacy method.
pub const LEGACY_ROUTES: &[LegacyRoute] = &[
    LegacyRoute {
        legacy: "width_px",
        targets: &["width"],
        transform: LegacyTransform::UnitScale,
    },
    LegacyRoute {
        legacy: "set_height",
        targets: &["height"],
        transform: LegacyTransform::Rename,
    },
    LegacyRoute {
        legacy: "bg_color",
        targets: &["background"],
        transform: LegacyTransform::Rename,
    },
    LegacyRoute {
        legacy: "text_style",
        targets: &["font_size", "foreground", "font_weight"],
        transform: LegacyTransform::FanOut,
    },
    LegacyRoute {
        legacy: "legacy_style",
        targets: &["width", "height", "background", "font_size"],
        transform: LegacyTransform::FanOut,
    },
    LegacyRoute {
        legacy: "touchable",
        targets: &["enabled"],
        transform: LegacyTransform::Narrowing,
    },
];

/// Composite text styling accepted by the legacy `text_style` setter.
///
/// Absent fields leave the corresponding attributes untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyleOptions {
    /// Label font size, in fp.
    pub font_size: Option<f64>,
    /// Label and icon tint color.
    pub color: Option<Color>,
    /// Label font weight.
    pub weight: Option<FontWeight>,
}

/// Composite styling accepted by the legacy `legacy_style` setter.
///
/// Absent fields leave the corresponding attributes untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegacyStyle {
    /// Button width, in dp.
    pub width: Option<f64>,
    /// Button height, in dp.
    pub height: Option<f64>,
    /// Background color.
    pub background: Option<Color>,
    /// Label font size, in fp.
    pub font_size: Option<f64>,
}

impl ButtonAttrs {
    /// Sets the button width from a pixel value.
    ///
    /// Converts px to dp with the builder's px scale, then delegates to
    /// [`ButtonAttrs::width`]. `Arg::Unset` substitutes the legacy default
    /// of [`LEGACY_WIDTH_PX_DEFAULT`] px before conversion.
    #[deprecated(note = "use `width` with dp values instead")]
    pub fn width_px(self, width: impl Into<Arg<f64>>) -> Result<Self, AttrError> {
        let px = match width.into() {
            Arg::Value(px) => px,
            Arg::Unset => LEGACY_WIDTH_PX_DEFAULT,
        };
        let dp = px * self.px_scale;
        self.width(dp)
    }

    /// Sets the button height.
    #[deprecated(note = "use `height` instead")]
    pub fn set_height(self, height: impl Into<Arg<Length>>) -> Result<Self, AttrError> {
        self.height(height)
    }

    /// Sets the background color.
    #[deprecated(note = "use `background` instead")]
    #[must_use]
    pub fn bg_color(self, color: impl Into<Arg<Color>>) -> Self {
        self.background(color)
    }

    /// Applies composite text styling.
    ///
    /// Fans out to [`ButtonAttrs::font_size`], [`ButtonAttrs::foreground`],
    /// and [`ButtonAttrs::font_weight`]; only populated fields are applied.
    #[deprecated(note = "use `font_size`, `foreground`, and `font_weight` instead")]
    #[must_use]
    pub fn text_style(mut self, options: TextStyleOptions) -> Self {
        if let Some(size) = options.font_size {
            self = self.font_size(size);
        }
        if let Some(color) = options.color {
            self = self.foreground(color);
        }
        if let Some(weight) = options.weight {
            self = self.font_weight(weight);
        }
        self
    }

    /// Applies composite styling.
    ///
    /// Fans out to the individual setters; only populated fields are
    /// applied. Width and height pass through their reject policies, so
    /// the call is fallible.
    #[deprecated(note = "use the individual attribute setters instead")]
    pub fn legacy_style(mut self, style: LegacyStyle) -> Result<Self, AttrError> {
        if let Some(width) = style.width {
            self = self.width(width)?;
        }
        if let Some(height) = style.height {
            self = self.height(height)?;
        }
        if let Some(background) = style.background {
            self = self.background(background);
        }
        if let Some(font_size) = style.font_size {
            self = self.font_size(font_size);
        }
        Ok(self)
    }

    /// Sets whether the button accepts input.
    ///
    /// `Arg::Unset` restores the legacy setter's own documented default of
    /// `true` rather than forwarding the unset sentinel.
    #[deprecated(note = "use `enabled` instead")]
    #[must_use]
    pub fn touchable(self, touchable: impl Into<Arg<bool>>) -> Self {
        let value = match touchable.into() {
            Arg::Value(value) => value,
            Arg::Unset => true,
        };
        self.enabled(value)
    }
}
