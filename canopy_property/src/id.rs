// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute identification types.
//!
//! This module provides [`AttrId`] for runtime attribute identification and
//! [`Attr<T>`] for type-safe attribute keys.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A runtime attribute identifier.
///
/// A lightweight handle (u16) that uniquely identifies an attribute within
/// an [`AttrRegistry`](crate::AttrRegistry). The u16 size keeps per-slot
/// storage compact while allowing far more attributes than any component
/// schema declares.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttrId(u16);

impl AttrId {
    /// Creates a new attribute ID from the given index.
    ///
    /// Typically called by [`AttrRegistry::register`](crate::AttrRegistry::register)
    /// rather than directly.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this attribute ID.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for AttrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AttrId").field(&self.0).finish()
    }
}

impl fmt::Display for AttrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttrId({})", self.0)
    }
}

/// A type-safe attribute key.
///
/// Wraps an [`AttrId`] with a phantom type parameter `T` for the
/// attribute's value type, so setters and getters are checked at compile
/// time. `Attr<T>` is `Copy` and the same size as `AttrId`.
///
/// ```rust
/// use canopy_property::{Attr, AttrMetadataBuilder, AttrRegistry};
/// use canopy_value::Length;
///
/// let mut registry = AttrRegistry::new();
/// let width: Attr<Length> = registry.register(
///     "width",
///     AttrMetadataBuilder::new(Length::Dp(0.0)).build(),
/// );
/// assert_eq!(width.id().index(), 0);
/// ```
pub struct Attr<T> {
    id: AttrId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Attr<T> {
    /// Creates a typed attribute key from an attribute ID.
    ///
    /// Typically called by [`AttrRegistry::register`](crate::AttrRegistry::register)
    /// rather than directly. The caller must ensure the ID was registered
    /// with the same value type `T`; mismatched types panic at runtime.
    #[must_use]
    #[inline]
    pub const fn from_id(id: AttrId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying attribute ID.
    #[must_use]
    #[inline]
    pub const fn id(self) -> AttrId {
        self.id
    }
}

// Manual trait implementations to avoid requiring T: Clone, etc.

impl<T> Copy for Attr<T> {}

impl<T> Clone for Attr<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Attr<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Attr<T> {}

impl<T> Hash for Attr<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Attr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attr")
            .field("id", &self.id)
            .field("type", &core::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn attr_id_basics() {
        let id = AttrId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id, AttrId::new(7));
        assert_ne!(id, AttrId::new(8));
    }

    #[test]
    fn attr_id_formatting() {
        assert_eq!(format!("{:?}", AttrId::new(7)), "AttrId(7)");
        assert_eq!(format!("{}", AttrId::new(7)), "AttrId(7)");
    }

    #[test]
    fn attr_copy_and_eq() {
        let attr: Attr<f64> = Attr::from_id(AttrId::new(1));
        let copy = attr;
        assert_eq!(attr, copy);
    }

    #[test]
    fn attr_size() {
        use core::mem::size_of;
        assert_eq!(size_of::<AttrId>(), 2);
        assert_eq!(size_of::<Attr<f64>>(), 2);
        assert_eq!(size_of::<Attr<String>>(), 2);
    }
}
