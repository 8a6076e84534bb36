// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent button attribute configuration.
//!
//! ## Overview
//!
//! [`ButtonAttrs`] is a consuming builder over the full button attribute
//! set. A fresh builder carries every documented default; setters override
//! one attribute at a time, accept raw strings through the same forgiving
//! parser everywhere, and pass [`Arg::Unset`] to restore the default.
//! Range contracts are declared per attribute in the [`Schema`] and
//! enforced in one place, so deprecated setters cannot drift from their
//! replacements.
//!
//! ```rust
//! use canopy_button::{ButtonAttrs, ShapeKind};
//! use canopy_value::Length;
//!
//! let attrs = ButtonAttrs::new()
//!     .width("240vp")?
//!     .shape(ShapeKind::Capsule)
//!     .background("#FF3B30")
//!     .opacity(0.8);
//!
//! let snapshot = attrs.snapshot();
//! assert_eq!(snapshot.width, Length::Dp(240.0));
//! // The capsule shape supplies the corner radius default.
//! assert_eq!(snapshot.corner_radius, Some(Length::Dp(20.0)));
//! # Ok::<(), canopy_property::AttrError>(())
//! ```
//!
//! Superseded setters remain available under `#[deprecated]` and delegate
//! to the current ones; see the [`deprecated`] module docs and
//! [`LEGACY_ROUTES`].
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod arg;
mod builder;
pub mod deprecated;
mod kinds;
mod schema;

pub use arg::{Arg, OpacityArg};
pub use builder::{ButtonAttrs, ButtonSnapshot};
pub use deprecated::{
    LEGACY_ROUTES, LEGACY_WIDTH_PX_DEFAULT, LegacyRoute, LegacyStyle, LegacyTransform,
    TextStyleOptions,
};
pub use kinds::{FontWeight, ShapeKind};
pub use schema::{
    DEFAULT_BACKGROUND, DEFAULT_FONT_SIZE, DEFAULT_FOREGROUND, DEFAULT_HEIGHT, DEFAULT_ICON_SIZE,
    DEFAULT_PADDING, DEFAULT_WIDTH, DIMENSION_MAX, Schema,
};
