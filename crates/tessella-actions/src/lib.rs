//! Declarative batch actions handed to the pipeline executor.
//!
//! An action is pure data: it names what should happen (`action`) and the
//! inputs (`parameters`) without performing any IO. The executor that
//! consumes the JSON form lives outside this workspace, so the serialized
//! field names and the literal `"copy"` discriminant are wire contract.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

mod error;

pub use error::{ActionError, ActionResult};

/// One object to move from `source` to `target`.
///
/// Entries are carried verbatim: no branding, no existence checks, and no
/// uniqueness constraint. Validation belongs to the resolver and to the
/// executor, which keeps this shape a plain serializable record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CopyManifestEntry {
    /// Location the object is read from.
    pub source: String,
    /// Location the object is written to.
    pub target: String,
}

impl CopyManifestEntry {
    /// Convenience constructor taking anything string-like.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Batch action descriptor consumed by the executor.
///
/// A closed union with a single variant today; adding a future action kind
/// (delete, move) only adds a case for consumers that match on `action`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", content = "parameters", rename_all = "lowercase")]
pub enum BatchAction {
    /// Copy every manifest entry from its source to its target, in order.
    Copy {
        /// Ordered source/target pairs; duplicates are the executor's concern.
        manifest: Vec<CopyManifestEntry>,
    },
}

impl BatchAction {
    /// Construct a copy action over `manifest`, preserving entry order.
    ///
    /// An empty manifest is a valid action; construction cannot fail.
    #[must_use]
    pub fn copy(manifest: Vec<CopyManifestEntry>) -> Self {
        Self::Copy { manifest }
    }

    /// Machine-friendly discriminator matching the serialized `action` field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Copy { .. } => "copy",
        }
    }

    /// Borrow the ordered manifest entries.
    #[must_use]
    pub fn manifest(&self) -> &[CopyManifestEntry] {
        match self {
            Self::Copy { manifest } => manifest,
        }
    }
}

/// Read a manifest file holding a JSON array of source/target entries.
///
/// Entry order in the file is preserved.
///
/// # Errors
///
/// Returns [`ActionError::Io`] when the file cannot be read and
/// [`ActionError::Json`] when its contents are not a valid entry array.
pub fn load_manifest(path: &Path) -> ActionResult<Vec<CopyManifestEntry>> {
    let payload =
        fs::read_to_string(path).map_err(|source| ActionError::io("read_manifest", path, source))?;
    serde_json::from_str(&payload).map_err(|source| ActionError::json("parse_manifest", path, source))
}
