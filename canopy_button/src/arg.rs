// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setter argument wrappers.
//!
//! Every setter accepts either a value or an explicit "unset" marker that
//! restores the attribute's documented default. The [`From`] impls let
//! call sites pass plain values (`.width(120.0)`, `.background("#FF0000")`)
//! without naming the wrapper.

use alloc::string::String;

use canopy_value::{Color, Insets, Length};

/// A setter argument: a value, or a request to restore the default.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg<T> {
    /// Set the attribute to this value.
    Value(T),
    /// Remove any override and fall back to the documented default.
    Unset,
}

impl<T> From<T> for Arg<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl From<f64> for Arg<Length> {
    #[inline]
    fn from(dp: f64) -> Self {
        Self::Value(Length::Dp(dp))
    }
}

impl From<&str> for Arg<Length> {
    /// Parses the string as a length; never fails (unrecognized strings
    /// become resource references).
    #[inline]
    fn from(raw: &str) -> Self {
        Self::Value(Length::parse(raw))
    }
}

impl From<&str> for Arg<Color> {
    #[inline]
    fn from(raw: &str) -> Self {
        Self::Value(Color::parse(raw))
    }
}

impl From<u32> for Arg<Color> {
    #[inline]
    fn from(argb: u32) -> Self {
        Self::Value(Color::Argb(argb))
    }
}

impl From<&str> for Arg<String> {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Value(String::from(text))
    }
}

impl From<f64> for Arg<Insets> {
    #[inline]
    fn from(uniform: f64) -> Self {
        Self::Value(Insets::uniform(uniform))
    }
}

impl From<[f64; 2]> for Arg<Insets> {
    /// `[vertical, horizontal]` symmetric insets.
    #[inline]
    fn from(sides: [f64; 2]) -> Self {
        Self::Value(Insets::from(sides))
    }
}

impl From<[f64; 4]> for Arg<Insets> {
    /// `[top, right, bottom, left]` insets.
    #[inline]
    fn from(sides: [f64; 4]) -> Self {
        Self::Value(Insets::from(sides))
    }
}

/// Argument for the opacity setter, which has a third state.
///
/// Unlike other attributes, removing an opacity override has two distinct
/// meanings: restore the default (fully opaque) or inherit from the
/// enclosing context. [`OpacityArg::Unset`] and [`OpacityArg::Inherit`]
/// keep the two separate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OpacityArg {
    /// Set the opacity to this value.
    Value(f64),
    /// Remove any override and fall back to the default of `1.0`.
    Unset,
    /// Remove any override and inherit the enclosing context's opacity.
    Inherit,
}

impl From<f64> for OpacityArg {
    #[inline]
    fn from(opacity: f64) -> Self {
        Self::Value(opacity)
    }
}
