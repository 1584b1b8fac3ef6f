//! Boundary classification of raw strings into branded addresses.

use url::Url;

use crate::brand::{LocalPath, RemoteUrl};

/// Classification result: either a remote URL or a local path.
///
/// The two arms carry differently branded strings, so consumers that only
/// accept one kind state that in their signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    /// Filesystem-style reference, carried byte-for-byte as supplied.
    Local(LocalPath),
    /// Remote reference in its normalized URL form.
    Remote(RemoteUrl),
}

impl Address {
    /// Borrow the underlying string regardless of classification.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local(path) => path.as_str(),
            Self::Remote(url) => url.as_str(),
        }
    }

    /// Whether this address names a remote object.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Machine-friendly discriminator for renderers and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Local(_) => "path",
            Self::Remote(_) => "url",
        }
    }

    /// Consume the address and return the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Local(path) => path.into_inner(),
            Self::Remote(url) => url.into_inner(),
        }
    }
}

/// Classify `input` as a remote URL or a local path.
///
/// The input is parsed as an absolute URL; on success the normalized form is
/// branded [`RemoteUrl`], on any parse failure the original string is
/// branded [`LocalPath`] unchanged. This is a total function: every input
/// yields exactly one branded output and classification never fails outward.
#[must_use]
pub fn resolve(input: &str) -> Address {
    match Url::parse(input) {
        Ok(parsed) => Address::Remote(RemoteUrl::new(parsed.as_str().to_owned())),
        Err(_) => Address::Local(LocalPath::new(input.to_owned())),
    }
}
