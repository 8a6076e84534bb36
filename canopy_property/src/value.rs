// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed attribute value union.
//!
//! Component attributes draw their values from a small, closed set of
//! shapes, so heterogeneous storage uses an ordinary enum rather than
//! type erasure. [`AttrKind`] bridges between typed [`Attr<T>`] keys and
//! the erased [`AttrValue`] slots.
//!
//! [`Attr<T>`]: crate::Attr

use alloc::string::String;
use core::fmt;

use canopy_value::{Color, Insets, Length};

/// The shape of an [`AttrValue`], used for structural checking and error
/// reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A [`Length`] value.
    Length,
    /// A bare numeric value.
    Scalar,
    /// A boolean flag.
    Flag,
    /// A [`Color`] value.
    Color,
    /// A categorical token (enumeration discriminant).
    Token,
    /// A text value.
    Text,
    /// An [`Insets`] value.
    Insets,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::Scalar => "scalar",
            Self::Flag => "flag",
            Self::Color => "color",
            Self::Token => "token",
            Self::Text => "text",
            Self::Insets => "insets",
        };
        f.write_str(name)
    }
}

/// A single attribute value of any supported shape.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A dimensional value.
    Length(Length),
    /// A bare numeric value (e.g. opacity).
    Scalar(f64),
    /// A boolean flag.
    Flag(bool),
    /// A color.
    Color(Color),
    /// A categorical token; the meaning of the discriminant belongs to
    /// the type that implements [`AttrKind`] over it.
    Token(u16),
    /// A text value.
    Text(String),
    /// Per-side insets.
    Insets(Insets),
}

impl AttrValue {
    /// Returns the shape of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Length(_) => ValueKind::Length,
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Flag(_) => ValueKind::Flag,
            Self::Color(_) => ValueKind::Color,
            Self::Token(_) => ValueKind::Token,
            Self::Text(_) => ValueKind::Text,
            Self::Insets(_) => ValueKind::Insets,
        }
    }

    /// Returns the numeric payload subject to range policies, if any.
    ///
    /// Percentage and resource lengths have no numeric payload at this
    /// layer and therefore bypass range checking.
    #[must_use]
    pub fn as_dp(&self) -> Option<f64> {
        match self {
            Self::Length(length) => length.as_dp(),
            Self::Scalar(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns this value with its numeric payload replaced.
    ///
    /// Values without a numeric payload are returned unchanged.
    #[must_use]
    pub fn with_dp(self, n: f64) -> Self {
        match self {
            Self::Length(Length::Dp(_)) => Self::Length(Length::Dp(n)),
            Self::Scalar(_) => Self::Scalar(n),
            other => other,
        }
    }
}

/// Conversion between a concrete attribute value type and [`AttrValue`].
///
/// Implemented here for the built-in shapes; categorical enums implement
/// it downstream by round-tripping through [`AttrValue::Token`].
pub trait AttrKind: Sized + Clone {
    /// The [`ValueKind`] values of this type erase to.
    const KIND: ValueKind;

    /// Erases this value into an [`AttrValue`].
    fn into_value(self) -> AttrValue;

    /// Recovers a value of this type from an [`AttrValue`].
    ///
    /// Returns `None` if the value has a different shape.
    fn from_value(value: &AttrValue) -> Option<Self>;
}

impl<T: AttrKind> From<T> for AttrValue {
    #[inline]
    fn from(value: T) -> Self {
        value.into_value()
    }
}

impl AttrKind for Length {
    const KIND: ValueKind = ValueKind::Length;

    fn into_value(self) -> AttrValue {
        AttrValue::Length(self)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Length(length) => Some(length.clone()),
            _ => None,
        }
    }
}

impl AttrKind for f64 {
    const KIND: ValueKind = ValueKind::Scalar;

    fn into_value(self) -> AttrValue {
        AttrValue::Scalar(self)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Scalar(n) => Some(*n),
            _ => None,
        }
    }
}

impl AttrKind for bool {
    const KIND: ValueKind = ValueKind::Flag;

    fn into_value(self) -> AttrValue {
        AttrValue::Flag(self)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl AttrKind for Color {
    const KIND: ValueKind = ValueKind::Color;

    fn into_value(self) -> AttrValue {
        AttrValue::Color(self)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Color(color) => Some(color.clone()),
            _ => None,
        }
    }
}

impl AttrKind for String {
    const KIND: ValueKind = ValueKind::Text;

    fn into_value(self) -> AttrValue {
        AttrValue::Text(self)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

impl AttrKind for Insets {
    const KIND: ValueKind = ValueKind::Insets;

    fn into_value(self) -> AttrValue {
        AttrValue::Insets(self)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Insets(insets) => Some(*insets),
            _ => None,
        }
    }
}
