// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fluent button attribute builder.

use alloc::string::String;

use canopy_property::{Attr, AttrError, AttrKind, AttrState, Resolution};
use canopy_value::{Color, Insets, Length};

use crate::arg::{Arg, OpacityArg};
use crate::kinds::{FontWeight, ShapeKind};
use crate::schema::Schema;

/// A fluent builder over the full button attribute set.
///
/// A fresh builder carries every documented default; setters override one
/// attribute at a time and pass `Arg::Unset` to restore the default.
/// Setters consume and return the builder, so configuration reads as a
/// chain. Only the reject-policy attributes (`width`, `height`) and the
/// legacy routes that reach them are fallible; everything else clamps or
/// passes through silently.
///
/// # Example
///
/// ```rust
/// use canopy_button::{ButtonAttrs, ShapeKind};
///
/// let attrs = ButtonAttrs::new()
///     .width(120.0)?
///     .shape(ShapeKind::Capsule)
///     .font_size("18fp")
///     .background("#FF3B30");
///
/// let snapshot = attrs.snapshot();
/// assert_eq!(snapshot.corner_radius, Some(canopy_value::Length::Dp(20.0)));
/// # Ok::<(), canopy_property::AttrError>(())
/// ```
#[derive(Debug)]
pub struct ButtonAttrs {
    pub(crate) schema: Schema,
    pub(crate) state: AttrState,
    pub(crate) px_scale: f64,
}

impl ButtonAttrs {
    /// Creates a builder with every attribute at its documented default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: Schema::new(),
            state: AttrState::new(),
            px_scale: 1.0,
        }
    }

    /// Sets the px-to-dp factor used by the legacy pixel-unit setters.
    ///
    /// The default of `1.0` is baseline density.
    #[must_use]
    pub fn with_px_scale(mut self, scale: f64) -> Self {
        self.px_scale = scale;
        self
    }

    /// Stores or clears an attribute whose policy cannot reject.
    fn put<T: AttrKind>(mut self, attr: Attr<T>, arg: Arg<T>) -> Self {
        match arg {
            Arg::Value(value) => {
                self.state
                    .set(attr, value, self.schema.registry())
                    .expect("non-reject attribute write cannot fail");
            }
            Arg::Unset => {
                self.state.clear(attr);
            }
        }
        self
    }

    /// Stores or clears a reject-policy attribute.
    fn try_put<T: AttrKind>(mut self, attr: Attr<T>, arg: Arg<T>) -> Result<Self, AttrError> {
        match arg {
            Arg::Value(value) => self.state.set(attr, value, self.schema.registry())?,
            Arg::Unset => {
                self.state.clear(attr);
            }
        }
        Ok(self)
    }

    /// Sets the button width. Default `200` dp; negative numeric values
    /// are rejected and leave the builder unchanged.
    pub fn width(self, width: impl Into<Arg<Length>>) -> Result<Self, AttrError> {
        let attr = self.schema.width;
        self.try_put(attr, width.into())
    }

    /// Sets the button height. Default `40` dp; negative numeric values
    /// are rejected and leave the builder unchanged.
    pub fn height(self, height: impl Into<Arg<Length>>) -> Result<Self, AttrError> {
        let attr = self.schema.height;
        self.try_put(attr, height.into())
    }

    /// Sets the label font size. Default `16` fp; clamps into `[0, 1000]`.
    #[must_use]
    pub fn font_size(self, size: impl Into<Arg<Length>>) -> Self {
        let attr = self.schema.font_size;
        self.put(attr, size.into())
    }

    /// Sets the corner radius. Clamps into `[0, 1000]`.
    ///
    /// The default follows the current shape, so `Arg::Unset` re-derives
    /// from the shape rather than restoring a fixed number.
    #[must_use]
    pub fn corner_radius(mut self, radius: impl Into<Arg<Length>>) -> Self {
        let attr = self.schema.corner_radius;
        match radius.into() {
            Arg::Value(value) => self.put(attr, Arg::Value(value)),
            Arg::Unset => {
                self.state.clear(attr);
                self.rederive_corner_radius()
            }
        }
    }

    /// Sets the icon edge length. Default `24` dp; clamps into `[0, 1000]`.
    #[must_use]
    pub fn icon_size(self, size: impl Into<Arg<Length>>) -> Self {
        let attr = self.schema.icon_size;
        self.put(attr, size.into())
    }

    /// Sets the opacity. Default `1.0`; clamps into `[0, 1]`.
    ///
    /// [`OpacityArg::Inherit`] is distinct from [`OpacityArg::Unset`]:
    /// unset restores the opaque default, inherit defers to the enclosing
    /// context.
    #[must_use]
    pub fn opacity(mut self, opacity: impl Into<OpacityArg>) -> Self {
        let attr = self.schema.opacity;
        match opacity.into() {
            OpacityArg::Value(value) => self.put(attr, Arg::Value(value)),
            OpacityArg::Unset => {
                self.state.clear(attr);
                self
            }
            OpacityArg::Inherit => {
                self.state.set_inherit(attr, self.schema.registry());
                self
            }
        }
    }

    /// Sets the shape. Default [`ShapeKind::Normal`].
    ///
    /// Changing the shape recomputes the corner radius default unless the
    /// radius has been set explicitly.
    #[must_use]
    pub fn shape(self, shape: impl Into<Arg<ShapeKind>>) -> Self {
        let attr = self.schema.shape;
        self.put(attr, shape.into()).rederive_corner_radius()
    }

    /// Sets the background color. Default `#007DFF`.
    #[must_use]
    pub fn background(self, color: impl Into<Arg<Color>>) -> Self {
        let attr = self.schema.background;
        self.put(attr, color.into())
    }

    /// Sets the foreground (label and icon tint) color. Default `#FFFFFF`.
    #[must_use]
    pub fn foreground(self, color: impl Into<Arg<Color>>) -> Self {
        let attr = self.schema.foreground;
        self.put(attr, color.into())
    }

    /// Sets the label font weight. Default [`FontWeight::Normal`].
    #[must_use]
    pub fn font_weight(self, weight: impl Into<Arg<FontWeight>>) -> Self {
        let attr = self.schema.font_weight;
        self.put(attr, weight.into())
    }

    /// Sets the icon resource name. Default empty (no icon).
    #[must_use]
    pub fn icon(self, icon: impl Into<Arg<String>>) -> Self {
        let attr = self.schema.icon;
        self.put(attr, icon.into())
    }

    /// Sets whether the button accepts input. Default `true`.
    #[must_use]
    pub fn enabled(self, enabled: impl Into<Arg<bool>>) -> Self {
        let attr = self.schema.enabled;
        self.put(attr, enabled.into())
    }

    /// Sets the content padding. Default `8/16/8/16` dp.
    #[must_use]
    pub fn padding(self, padding: impl Into<Arg<Insets>>) -> Self {
        let attr = self.schema.padding;
        self.put(attr, padding.into())
    }

    /// Rewrites the corner radius derived slot from the current shape.
    ///
    /// An explicitly set radius is left alone. A circle has no configured
    /// radius (the renderer resolves it from the measured size), so the
    /// derived slot is removed instead.
    fn rederive_corner_radius(mut self) -> Self {
        let shape = self
            .state
            .resolution(self.schema.shape, self.schema.registry())
            .into_value()
            .unwrap_or_default();
        match shape.default_corner_radius() {
            Some(radius) => {
                self.state.set_derived(
                    self.schema.corner_radius,
                    Length::Dp(radius),
                    self.schema.registry(),
                );
            }
            None => {
                self.state.clear_derived(self.schema.corner_radius.id());
            }
        }
        self
    }

    /// Returns the attribute schema.
    #[must_use]
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the raw configuration state, for dynamic consumers.
    #[must_use]
    #[inline]
    pub fn state(&self) -> &AttrState {
        &self.state
    }

    fn resolve<T: AttrKind>(&self, attr: Attr<T>) -> T {
        match self.state.resolution(attr, self.schema.registry()) {
            Resolution::Value(value) => value,
            Resolution::Inherit => unreachable!("attribute has no inherit state"),
        }
    }

    /// Resolves every attribute into a plain snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ButtonSnapshot {
        let shape = self.resolve(self.schema.shape);
        // A vacant radius slot means the shape decides; a circle's radius
        // is resolved by the renderer and stays `None` here.
        let corner_radius = match self.state.origin(self.schema.corner_radius) {
            Some(_) => self
                .state
                .resolution(self.schema.corner_radius, self.schema.registry())
                .into_value(),
            None => shape.default_corner_radius().map(Length::Dp),
        };

        ButtonSnapshot {
            width: self.resolve(self.schema.width),
            height: self.resolve(self.schema.height),
            font_size: self.resolve(self.schema.font_size),
            corner_radius,
            icon_size: self.resolve(self.schema.icon_size),
            opacity: self.state.resolution(self.schema.opacity, self.schema.registry()),
            shape,
            background: self.resolve(self.schema.background),
            foreground: self.resolve(self.schema.foreground),
            font_weight: self.resolve(self.schema.font_weight),
            icon: self.resolve(self.schema.icon),
            enabled: self.resolve(self.schema.enabled),
            padding: self.resolve(self.schema.padding),
        }
    }
}

impl Default for ButtonAttrs {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully resolved button configuration.
///
/// Every field holds a canonical value; untouched attributes carry their
/// documented defaults. `corner_radius` is `None` only for circle buttons,
/// whose radius the renderer derives from the final measured size.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonSnapshot {
    /// Button width.
    pub width: Length,
    /// Button height.
    pub height: Length,
    /// Label font size, in fp.
    pub font_size: Length,
    /// Corner radius, or `None` when the renderer resolves it.
    pub corner_radius: Option<Length>,
    /// Icon edge length.
    pub icon_size: Length,
    /// Opacity, or [`Resolution::Inherit`] when deferred to the context.
    pub opacity: Resolution<f64>,
    /// Geometric shape.
    pub shape: ShapeKind,
    /// Background color.
    pub background: Color,
    /// Foreground color.
    pub foreground: Color,
    /// Label font weight.
    pub font_weight: FontWeight,
    /// Icon resource name; empty means no icon.
    pub icon: String,
    /// Whether the button accepts input.
    pub enabled: bool,
    /// Content padding.
    pub padding: Insets,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DEFAULT_HEIGHT, DEFAULT_PADDING, DEFAULT_WIDTH};

    #[test]
    fn fresh_builder_carries_documented_defaults() {
        let snapshot = ButtonAttrs::new().snapshot();
        assert_eq!(snapshot.width, Length::Dp(DEFAULT_WIDTH));
        assert_eq!(snapshot.height, Length::Dp(DEFAULT_HEIGHT));
        assert_eq!(snapshot.font_size, Length::Dp(16.0));
        assert_eq!(snapshot.corner_radius, Some(Length::Dp(0.0)));
        assert_eq!(snapshot.icon_size, Length::Dp(24.0));
        assert_eq!(snapshot.opacity, Resolution::Value(1.0));
        assert_eq!(snapshot.shape, ShapeKind::Normal);
        assert_eq!(snapshot.background, Color::parse("#007DFF"));
        assert_eq!(snapshot.foreground, Color::parse("#FFFFFF"));
        assert_eq!(snapshot.font_weight, FontWeight::Normal);
        assert_eq!(snapshot.icon, "");
        assert!(snapshot.enabled);
        assert_eq!(snapshot.padding, DEFAULT_PADDING);
    }

    #[test]
    fn width_rejects_negative_and_keeps_prior_value() {
        let attrs = ButtonAttrs::new().width(120.0).unwrap();
        let err = attrs.width(-5.0).unwrap_err();
        assert_eq!(
            err,
            AttrError::OutOfRange {
                attr: "width",
                value: -5.0,
                min: 0.0,
            },
        );

        // The same failed write on a fresh chain leaves earlier settings
        // observable before the failing call.
        let attrs = ButtonAttrs::new().width(120.0).unwrap();
        assert_eq!(attrs.snapshot().width, Length::Dp(120.0));
    }

    #[test]
    fn width_accepts_percent_and_resource_unchecked() {
        let attrs = ButtonAttrs::new().width("50%").unwrap();
        assert_eq!(attrs.snapshot().width, Length::Percent("50%".into()));

        let attrs = ButtonAttrs::new().width("app.float.button_width").unwrap();
        assert_eq!(
            attrs.snapshot().width,
            Length::Resource("app.float.button_width".into()),
        );
    }

    #[test]
    fn clamp_attributes_round_into_range() {
        let snapshot = ButtonAttrs::new()
            .font_size(1500.0)
            .icon_size(-3.0)
            .opacity(1.7)
            .corner_radius(2000.0)
            .snapshot();
        assert_eq!(snapshot.font_size, Length::Dp(1000.0));
        assert_eq!(snapshot.icon_size, Length::Dp(0.0));
        assert_eq!(snapshot.opacity, Resolution::Value(1.0));
        assert_eq!(snapshot.corner_radius, Some(Length::Dp(1000.0)));
    }

    #[test]
    fn unset_restores_defaults_idempotently() {
        let attrs = ButtonAttrs::new()
            .width(120.0)
            .unwrap()
            .width(Arg::Unset)
            .unwrap()
            .width(Arg::Unset)
            .unwrap()
            .font_size(30.0)
            .font_size(Arg::Unset)
            .padding([1.0, 2.0, 3.0, 4.0])
            .padding(Arg::Unset);
        let snapshot = attrs.snapshot();
        assert_eq!(snapshot.width, Length::Dp(DEFAULT_WIDTH));
        assert_eq!(snapshot.font_size, Length::Dp(16.0));
        assert_eq!(snapshot.padding, DEFAULT_PADDING);
    }

    #[test]
    fn opacity_inherit_is_not_unset() {
        let inherited = ButtonAttrs::new().opacity(0.5).opacity(OpacityArg::Inherit);
        assert_eq!(inherited.snapshot().opacity, Resolution::Inherit);

        let unset = ButtonAttrs::new().opacity(0.5).opacity(OpacityArg::Unset);
        assert_eq!(unset.snapshot().opacity, Resolution::Value(1.0));
    }

    #[test]
    fn shape_drives_corner_radius_default() {
        let capsule = ButtonAttrs::new().shape(ShapeKind::Capsule);
        assert_eq!(capsule.snapshot().corner_radius, Some(Length::Dp(20.0)));

        let circle = ButtonAttrs::new().shape(ShapeKind::Circle);
        assert_eq!(circle.snapshot().corner_radius, None);

        let back_to_normal = ButtonAttrs::new()
            .shape(ShapeKind::Capsule)
            .shape(ShapeKind::Normal);
        assert_eq!(back_to_normal.snapshot().corner_radius, Some(Length::Dp(0.0)));
    }

    #[test]
    fn explicit_radius_survives_shape_change() {
        // Set radius first, change shape after.
        let attrs = ButtonAttrs::new()
            .corner_radius(5.0)
            .shape(ShapeKind::Capsule);
        assert_eq!(attrs.snapshot().corner_radius, Some(Length::Dp(5.0)));

        // Set shape first, override radius after.
        let attrs = ButtonAttrs::new()
            .shape(ShapeKind::Capsule)
            .corner_radius(5.0);
        assert_eq!(attrs.snapshot().corner_radius, Some(Length::Dp(5.0)));
    }

    #[test]
    fn radius_unset_rederives_from_shape() {
        let attrs = ButtonAttrs::new()
            .shape(ShapeKind::Capsule)
            .corner_radius(5.0)
            .corner_radius(Arg::Unset);
        assert_eq!(attrs.snapshot().corner_radius, Some(Length::Dp(20.0)));

        let attrs = ButtonAttrs::new()
            .shape(ShapeKind::Circle)
            .corner_radius(5.0)
            .corner_radius(Arg::Unset);
        assert_eq!(attrs.snapshot().corner_radius, None);
    }

    #[test]
    fn shape_unset_restores_normal_and_its_radius() {
        let attrs = ButtonAttrs::new().shape(ShapeKind::Capsule).shape(Arg::Unset);
        let snapshot = attrs.snapshot();
        assert_eq!(snapshot.shape, ShapeKind::Normal);
        assert_eq!(snapshot.corner_radius, Some(Length::Dp(0.0)));
    }

    #[test]
    fn colors_parse_and_pass_through() {
        let snapshot = ButtonAttrs::new()
            .background("#FF3B30")
            .foreground("sys.color.text_primary")
            .snapshot();
        assert_eq!(snapshot.background, Color::Argb(0xFFFF_3B30));
        assert_eq!(
            snapshot.foreground,
            Color::Resource("sys.color.text_primary".into()),
        );
    }

    #[test]
    fn supplement_attributes_round_trip() {
        let snapshot = ButtonAttrs::new()
            .icon("app.media.search")
            .enabled(false)
            .font_weight(FontWeight::Bold)
            .padding([8.0, 24.0])
            .snapshot();
        assert_eq!(snapshot.icon, "app.media.search");
        assert!(!snapshot.enabled);
        assert_eq!(snapshot.font_weight, FontWeight::Bold);
        assert_eq!(snapshot.padding, Insets::symmetric(8.0, 24.0));
    }

    #[test]
    fn state_exposes_raw_slots() {
        let attrs = ButtonAttrs::new().font_size(20.0);
        let schema = attrs.schema();
        assert!(attrs.state().has_explicit(schema.font_size));
        assert!(!attrs.state().has_explicit(schema.width));
    }
}
