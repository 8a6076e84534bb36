// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical attribute types.

use canopy_property::{AttrKind, AttrValue, ValueKind};

/// The geometric shape of a button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A rounded rectangle.
    #[default]
    Normal,
    /// A stadium shape with fully rounded short sides.
    Capsule,
    /// A circle; the corner radius is resolved by the renderer from the
    /// final measured size rather than configured here.
    Circle,
}

impl ShapeKind {
    /// Returns the default corner radius implied by this shape, or `None`
    /// when the radius cannot be known until layout (circle).
    #[must_use]
    pub fn default_corner_radius(self) -> Option<f64> {
        match self {
            Self::Normal => Some(0.0),
            Self::Capsule => Some(20.0),
            Self::Circle => None,
        }
    }
}

impl AttrKind for ShapeKind {
    const KIND: ValueKind = ValueKind::Token;

    fn into_value(self) -> AttrValue {
        AttrValue::Token(match self {
            Self::Normal => 0,
            Self::Capsule => 1,
            Self::Circle => 2,
        })
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Token(0) => Some(Self::Normal),
            AttrValue::Token(1) => Some(Self::Capsule),
            AttrValue::Token(2) => Some(Self::Circle),
            _ => None,
        }
    }
}

/// Named font weight steps.
///
/// The discriminants are the conventional CSS-style weight numbers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum FontWeight {
    /// Weight 100.
    Lighter = 100,
    /// Weight 300.
    Light = 300,
    /// Weight 400.
    #[default]
    Normal = 400,
    /// Weight 500.
    Medium = 500,
    /// Weight 700.
    Bold = 700,
    /// Weight 900.
    Bolder = 900,
}

impl FontWeight {
    /// Returns the numeric weight.
    #[must_use]
    pub fn value(self) -> u16 {
        self as u16
    }
}

impl AttrKind for FontWeight {
    const KIND: ValueKind = ValueKind::Token;

    fn into_value(self) -> AttrValue {
        AttrValue::Token(self as u16)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Token(100) => Some(Self::Lighter),
            AttrValue::Token(300) => Some(Self::Light),
            AttrValue::Token(400) => Some(Self::Normal),
            AttrValue::Token(500) => Some(Self::Medium),
            AttrValue::Token(700) => Some(Self::Bold),
            AttrValue::Token(900) => Some(Self::Bolder),
            _ => None,
        }
    }
}
