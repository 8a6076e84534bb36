// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The button attribute schema.
//!
//! One [`Schema`] declares every button attribute once: its name, documented
//! default, unit family, and out-of-range policy. The builder holds a schema
//! and routes all reads and writes through its registry, so the contract
//! lives in exactly one place.

use alloc::string::String;

use canopy_property::{Attr, AttrMetadataBuilder, AttrRegistry};
use canopy_value::{Color, Insets, Length, UnitFamily};

use crate::kinds::{FontWeight, ShapeKind};

/// Default button width, in dp.
pub const DEFAULT_WIDTH: f64 = 200.0;
/// Default button height, in dp.
pub const DEFAULT_HEIGHT: f64 = 40.0;
/// Default label font size, in fp.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
/// Default icon edge length, in dp.
pub const DEFAULT_ICON_SIZE: f64 = 24.0;
/// Default background color.
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0x00, 0x7D, 0xFF);
/// Default foreground (label and icon tint) color.
pub const DEFAULT_FOREGROUND: Color = Color::rgb(0xFF, 0xFF, 0xFF);
/// Default content padding, `[top, right, bottom, left]` in dp.
pub const DEFAULT_PADDING: Insets = Insets::new(8.0, 16.0, 8.0, 16.0);
/// Upper clamp bound shared by the dimensional clamp-policy attributes.
pub const DIMENSION_MAX: f64 = 1000.0;

/// The registered attribute set of a button.
///
/// Construction registers every attribute and keeps the typed keys, so
/// lookups are compile-time checked and carry no name hashing.
#[derive(Debug)]
pub struct Schema {
    registry: AttrRegistry,
    /// Button width. Rejects negative values.
    pub width: Attr<Length>,
    /// Button height. Rejects negative values.
    pub height: Attr<Length>,
    /// Label font size. Clamps into `[0, 1000]`.
    pub font_size: Attr<Length>,
    /// Corner radius. Clamps into `[0, 1000]`; defaults follow the shape.
    pub corner_radius: Attr<Length>,
    /// Icon edge length. Clamps into `[0, 1000]`.
    pub icon_size: Attr<Length>,
    /// Opacity. Clamps into `[0, 1]`; supports a distinct inherit state.
    pub opacity: Attr<f64>,
    /// Geometric shape.
    pub shape: Attr<ShapeKind>,
    /// Background color.
    pub background: Attr<Color>,
    /// Foreground color for label and icon tint.
    pub foreground: Attr<Color>,
    /// Label font weight.
    pub font_weight: Attr<FontWeight>,
    /// Icon resource name; empty means no icon.
    pub icon: Attr<String>,
    /// Whether the button accepts input.
    pub enabled: Attr<bool>,
    /// Content padding.
    pub padding: Attr<Insets>,
}

impl Schema {
    /// Registers the full button attribute set.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = AttrRegistry::new();

        let width = registry.register(
            "width",
            AttrMetadataBuilder::new(Length::Dp(DEFAULT_WIDTH))
                .unit(UnitFamily::Dp)
                .reject_below(0.0)
                .build(),
        );
        let height = registry.register(
            "height",
            AttrMetadataBuilder::new(Length::Dp(DEFAULT_HEIGHT))
                .unit(UnitFamily::Dp)
                .reject_below(0.0)
                .build(),
        );
        let font_size = registry.register(
            "font_size",
            AttrMetadataBuilder::new(Length::Dp(DEFAULT_FONT_SIZE))
                .unit(UnitFamily::Fp)
                .clamp(0.0, DIMENSION_MAX)
                .build(),
        );
        // The stored default matches the default shape (normal); shape
        // changes rewrite this as a derived value.
        let corner_radius = registry.register(
            "corner_radius",
            AttrMetadataBuilder::new(Length::Dp(0.0))
                .unit(UnitFamily::Dp)
                .clamp(0.0, DIMENSION_MAX)
                .build(),
        );
        let icon_size = registry.register(
            "icon_size",
            AttrMetadataBuilder::new(Length::Dp(DEFAULT_ICON_SIZE))
                .unit(UnitFamily::Dp)
                .clamp(0.0, DIMENSION_MAX)
                .build(),
        );
        let opacity = registry.register(
            "opacity",
            AttrMetadataBuilder::new(1.0_f64)
                .clamp(0.0, 1.0)
                .supports_inherit(true)
                .build(),
        );
        let shape = registry.register("shape", AttrMetadataBuilder::new(ShapeKind::Normal).build());
        let background = registry.register(
            "background",
            AttrMetadataBuilder::new(DEFAULT_BACKGROUND).build(),
        );
        let foreground = registry.register(
            "foreground",
            AttrMetadataBuilder::new(DEFAULT_FOREGROUND).build(),
        );
        let font_weight = registry.register(
            "font_weight",
            AttrMetadataBuilder::new(FontWeight::Normal).build(),
        );
        let icon = registry.register("icon", AttrMetadataBuilder::new(String::new()).build());
        let enabled = registry.register("enabled", AttrMetadataBuilder::new(true).build());
        let padding = registry.register(
            "padding",
            AttrMetadataBuilder::new(DEFAULT_PADDING)
                .unit(UnitFamily::Dp)
                .build(),
        );

        Self {
            registry,
            width,
            height,
            font_size,
            corner_radius,
            icon_size,
            opacity,
            shape,
            background,
            foreground,
            font_weight,
            icon,
            enabled,
            padding,
        }
    }

    /// Returns the underlying registry.
    #[must_use]
    #[inline]
    pub fn registry(&self) -> &AttrRegistry {
        &self.registry
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
