//! File models

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::naming::display_name;
use crate::util::normalize_text_option;

/// One stored object as reported by the backend list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Storage key, usually `<prefix>/<id>-<original name>`.
    #[serde(alias = "name", alias = "s3Key")]
    pub key: String,
    /// Pre-signed URL for direct viewing or download.
    #[serde(
        rename = "viewUrl",
        alias = "view_url",
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub view_url: Option<String>,
}

impl FileRecord {
    pub fn new(key: impl Into<String>, view_url: Option<String>) -> Self {
        Self {
            key: key.into(),
            view_url: normalize_text_option(view_url),
        }
    }

    /// Human-readable name derived from the key.
    pub fn display_name(&self) -> String {
        display_name(Some(&self.key))
    }

    /// Project into a renderable gallery card.
    pub fn to_card(&self) -> FileCard {
        FileCard {
            id: self.key.clone(),
            display_name: self.display_name(),
            view_url: self.view_url.clone(),
        }
    }
}

/// Render-ready view of a [`FileRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCard {
    /// Stable card identity (the record key).
    pub id: String,
    pub display_name: String,
    pub view_url: Option<String>,
}

impl FileCard {
    /// The record this card was rendered from.
    pub fn to_record(&self) -> FileRecord {
        FileRecord::new(self.id.clone(), self.view_url.clone())
    }
}

/// A local file picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub file_name: String,
    pub bytes: Arc<[u8]>,
}

impl LocalFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for LocalFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_text_option(value))
}
