//! Gallery entry kinds
//!
//! Entries are a closed union: a tile either shows a real image or holds a
//! placeholder slot (upload target, loading frame). The kind is carried
//! explicitly so collaborating layers never have to probe payloads at
//! runtime to find out what a tile is.

/// A single entry in a gallery
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEntry {
    /// A real image tile
    Image(ImageEntry),
    /// A placeholder slot with no image behind it
    Placeholder(PlaceholderEntry),
}

/// Metadata for a real image tile
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry {
    /// Source identifier the host resolves to image data
    pub source: String,
    /// Optional alternative text
    pub alt: Option<String>,
}

/// Metadata for a placeholder slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderEntry {
    /// Optional label shown inside the slot
    pub label: Option<String>,
}

impl GalleryEntry {
    /// Create an image entry
    pub fn image(source: impl Into<String>) -> Self {
        Self::Image(ImageEntry {
            source: source.into(),
            alt: None,
        })
    }

    /// Create an unlabeled placeholder entry
    pub fn placeholder() -> Self {
        Self::Placeholder(PlaceholderEntry::default())
    }

    /// Whether this entry is a placeholder slot
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Whether overlay controls may be placed on this entry.
    ///
    /// Placeholder slots carry no controls.
    pub fn supports_overlays(&self) -> bool {
        !self.is_placeholder()
    }
}
