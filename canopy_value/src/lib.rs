// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Value: leaf value primitives for attribute configuration.
//!
//! This crate provides the value vocabulary shared by the canopy attribute
//! crates:
//!
//! - [`Length`] - a tagged union over numeric lengths, percentage strings,
//!   and opaque resource references, with a forgiving parser.
//! - [`Color`] - packed ARGB colors with the same parse-or-pass-through rule.
//! - [`Insets`] - per-side padding values with shorthand constructors.
//! - [`UnitFamily`] - the unit a property interprets its numbers in.
//!
//! ## Parsing Philosophy
//!
//! Raw attribute input arrives from authoring surfaces that evolve faster
//! than this crate does. The parsers here therefore never fail: a string
//! that is neither a recognizable number nor a percentage degrades to an
//! opaque [`Length::Resource`] (or [`Color::Resource`]) that a downstream
//! theme system may resolve. Rejecting unknown shapes would break
//! forward-compatible inputs.
//!
//! ```rust
//! use canopy_value::Length;
//!
//! assert_eq!(Length::parse("100vp"), Length::Dp(100.0));
//! assert_eq!(Length::parse("50%"), Length::Percent("50%".into()));
//! assert_eq!(
//!     Length::parse("app.float.button_width"),
//!     Length::Resource("app.float.button_width".into()),
//! );
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod color;
mod insets;
mod length;

pub use color::Color;
pub use insets::Insets;
pub use length::{Length, UnitFamily};
