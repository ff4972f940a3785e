use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub String);

impl PhotoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(s: &str) -> Self {
        PhotoId(s.to_string())
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        PageId(s.to_string())
    }
}

/// A photo and its display payload. The engine never looks at `src`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub src: String,
}

/// A page: photo identities in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub photos: Vec<PhotoId>,
}

impl Page {
    pub fn new(id: impl Into<PageId>, photos: Vec<PhotoId>) -> Self {
        Self { id: id.into(), title: None, photos }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Slot of `photo` on this page.
    pub fn position(&self, photo: &PhotoId) -> Option<usize> {
        self.photos.iter().position(|p| p == photo)
    }

    pub fn contains(&self, photo: &PhotoId) -> bool {
        self.position(photo).is_some()
    }
}

/// Page as the host's dataset describes it: a title and image sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}
