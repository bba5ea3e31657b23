//! Store and locale handles.
//!
//! Handles obtained through a catalog resolution are known to exist at
//! resolution time; handles built directly from a name carry no such
//! guarantee and are used where the repository tolerates unknown names.

use crate::ContentItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named partition of the content repository (e.g. an authoring store
/// vs. a delivery store).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentStore {
    name: String,
}

impl ContentStore {
    /// Creates a store handle from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The store's unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A language/region identifier used to select a content variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    code: String,
}

impl Locale {
    /// Creates a locale handle from a code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The locale code (e.g. `"en"`, `"fr-CA"`).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// A content node as seen by the publishing core: just enough to confirm
/// existence and report where it lives. Field data never crosses this
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// The item's stable identifier.
    pub id: ContentItemId,
    /// Repository path of the item, for logging.
    pub path: String,
}

impl ContentItem {
    /// Creates an item record.
    #[must_use]
    pub fn new(id: ContentItemId, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }
}
