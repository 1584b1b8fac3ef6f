//! Compile-time branding for plain string values.
//!
//! # Design
//! - Identical runtime representation, non-interchangeable types.
//! - The marker is phantom data; it costs nothing and never serializes.
//! - Construction is deliberately private to this crate so a brand can only
//!   be minted by the resolver (or the JSON encoding helper).

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};

/// A value of base type `T` tagged with a zero-sized compile-time marker.
///
/// Values carrying different markers are distinct types to the compiler even
/// though they are represented identically at runtime:
///
/// ```compile_fail
/// use tessella_addressing::{Address, RemoteUrl, resolve};
///
/// fn wants_remote(_url: RemoteUrl) {}
///
/// let Address::Local(path) = resolve("relative/path.tif") else {
///     unreachable!();
/// };
/// wants_remote(path);
/// ```
pub struct Branded<T, Marker> {
    value: T,
    marker: PhantomData<fn() -> Marker>,
}

/// Marker for filesystem-style references.
pub enum PathMarker {}

/// Marker for remote references that parsed as absolute URLs.
pub enum UrlMarker {}

/// Marker for strings holding serialized JSON.
pub enum JsonMarker {}

/// A local filesystem-style reference, produced when URL parsing fails.
pub type LocalPath = Branded<String, PathMarker>;

/// A remote reference that parsed as an absolute URL, stored in its
/// normalized form.
pub type RemoteUrl = Branded<String, UrlMarker>;

/// A string known to contain serialized JSON.
pub type JsonText = Branded<String, JsonMarker>;

impl<T, Marker> Branded<T, Marker> {
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    /// Consume the brand and return the underlying value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Borrow the underlying value.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }
}

impl<Marker> Branded<String, Marker> {
    /// Borrow the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl JsonText {
    /// Serialize `value` and brand the result as JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when `value` cannot be
    /// serialized.
    pub fn encode<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_string(value).map(Self::new)
    }

    /// Serialize `value` with human-friendly indentation and brand the result
    /// as JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when `value` cannot be
    /// serialized.
    pub fn encode_pretty<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_string_pretty(value).map(Self::new)
    }
}

impl<T: Clone, Marker> Clone for Branded<T, Marker> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: fmt::Debug, Marker> fmt::Debug for Branded<T, Marker> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: fmt::Display, Marker> fmt::Display for Branded<T, Marker> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: PartialEq, Marker> PartialEq for Branded<T, Marker> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, Marker> Eq for Branded<T, Marker> {}

impl<T: Serialize, Marker> Serialize for Branded<T, Marker> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
