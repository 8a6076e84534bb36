// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `canopy_property` crate.
//!
//! These exercise the registry, range policies, and state together, with a
//! focus on how slot origins interact with policy enforcement and
//! resolution fallback.

use canopy_property::{
    AttrError, AttrMetadataBuilder, AttrRegistry, AttrState, AttrValue, Origin, RangePolicy,
    Resolution, ValueKind,
};
use canopy_value::{Color, Insets, Length, UnitFamily};

fn button_like_registry() -> AttrRegistry {
    let mut registry = AttrRegistry::new();
    let _ = registry.register::<Length>(
        "width",
        AttrMetadataBuilder::new(Length::Dp(200.0))
            .unit(UnitFamily::Dp)
            .reject_below(0.0)
            .build(),
    );
    let _ = registry.register::<Length>(
        "font_size",
        AttrMetadataBuilder::new(Length::Dp(16.0))
            .unit(UnitFamily::Fp)
            .clamp(0.0, 1000.0)
            .build(),
    );
    let _ = registry.register::<f64>(
        "opacity",
        AttrMetadataBuilder::new(1.0_f64)
            .clamp(0.0, 1.0)
            .supports_inherit(true)
            .build(),
    );
    let _ = registry.register::<Color>(
        "background",
        AttrMetadataBuilder::new(Color::rgb(0x00, 0x7D, 0xFF)).build(),
    );
    let _ = registry.register::<Insets>(
        "padding",
        AttrMetadataBuilder::new(Insets::symmetric(8.0, 16.0))
            .unit(UnitFamily::Dp)
            .build(),
    );
    registry
}

#[test]
fn policy_is_enforced_through_the_erased_path_too() {
    let registry = button_like_registry();
    let width = registry.by_name("width").unwrap();
    let font_size = registry.by_name("font_size").unwrap();
    let mut state = AttrState::new();

    // Typed and erased writes share the same policy gate.
    let err = state
        .set_value(width, AttrValue::Length(Length::Dp(-1.0)), &registry)
        .unwrap_err();
    assert_eq!(
        err,
        AttrError::OutOfRange {
            attr: "width",
            value: -1.0,
            min: 0.0,
        },
    );

    state
        .set_value(font_size, AttrValue::Length(Length::Dp(4000.0)), &registry)
        .unwrap();
    assert_eq!(
        state.get_value(font_size),
        Some(&AttrValue::Length(Length::Dp(1000.0))),
    );
}

#[test]
fn kind_mismatch_reports_both_shapes() {
    let registry = button_like_registry();
    let background = registry.by_name("background").unwrap();
    let mut state = AttrState::new();

    let err = state
        .set_value(background, AttrValue::Scalar(1.0), &registry)
        .unwrap_err();
    assert_eq!(
        err,
        AttrError::KindMismatch {
            attr: "background",
            expected: ValueKind::Color,
            got: ValueKind::Scalar,
        },
    );
    assert_eq!(
        err.to_string(),
        "background expects a color value, got scalar",
    );
}

#[test]
fn resolution_precedence_explicit_then_derived_then_default() {
    let mut registry = AttrRegistry::new();
    let radius = registry.register::<Length>(
        "corner_radius",
        AttrMetadataBuilder::new(Length::Dp(0.0))
            .clamp(0.0, 1000.0)
            .build(),
    );
    let mut state = AttrState::new();

    // Default.
    assert_eq!(
        state.resolution(radius, &registry),
        Resolution::Value(Length::Dp(0.0)),
    );

    // Derived beats default.
    state.set_derived(radius, Length::Dp(20.0), &registry);
    assert_eq!(
        state.resolution(radius, &registry),
        Resolution::Value(Length::Dp(20.0)),
    );

    // Explicit beats derived, and later derived writes lose.
    state.set(radius, Length::Dp(5.0), &registry).unwrap();
    state.set_derived(radius, Length::Dp(20.0), &registry);
    assert_eq!(
        state.resolution(radius, &registry),
        Resolution::Value(Length::Dp(5.0)),
    );
    assert_eq!(state.origin(radius), Some(Origin::Explicit));

    // Clearing the explicit value re-opens the derived path.
    state.clear(radius);
    state.set_derived(radius, Length::Dp(20.0), &registry);
    assert_eq!(
        state.resolution(radius, &registry),
        Resolution::Value(Length::Dp(20.0)),
    );
}

#[test]
fn inherit_round_trip() {
    let registry = button_like_registry();
    let opacity: canopy_property::Attr<f64> =
        canopy_property::Attr::from_id(registry.by_name("opacity").unwrap());
    let mut state = AttrState::new();

    state.set(opacity, 0.4, &registry).unwrap();
    state.set_inherit(opacity, &registry);
    assert_eq!(state.resolution(opacity, &registry), Resolution::Inherit);

    // Setting a value again replaces the inherit slot.
    state.set(opacity, 0.6, &registry).unwrap();
    assert_eq!(
        state.resolution(opacity, &registry),
        Resolution::Value(0.6),
    );
}

#[test]
fn non_numeric_shapes_are_stored_without_policy_checks() {
    let registry = button_like_registry();
    let padding = registry.by_name("padding").unwrap();
    let width = registry.by_name("width").unwrap();
    let mut state = AttrState::new();

    // Insets carry no single numeric payload; stored as-is.
    state
        .set_value(
            padding,
            AttrValue::Insets(Insets::new(-1.0, 2.0, 3.0, 4.0)),
            &registry,
        )
        .unwrap();

    // A resource width skips the reject policy entirely.
    state
        .set_value(
            width,
            AttrValue::Length(Length::parse("app.float.width")),
            &registry,
        )
        .unwrap();
    assert_eq!(
        state.get_value(width),
        Some(&AttrValue::Length(Length::Resource("app.float.width".into()))),
    );
}

#[test]
fn registry_policy_table_is_queryable() {
    let registry = button_like_registry();
    let policies: Vec<_> = registry
        .iter()
        .map(|(_, r)| (r.name(), r.metadata().policy()))
        .collect();
    assert!(policies.contains(&("width", RangePolicy::Reject { min: 0.0 })));
    assert!(policies.contains(&(
        "font_size",
        RangePolicy::Clamp {
            min: 0.0,
            max: 1000.0,
        },
    )));
    assert!(policies.contains(&("background", RangePolicy::Unbounded)));
}
