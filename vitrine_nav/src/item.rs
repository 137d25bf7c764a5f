// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::NavError;

/// Whether a media entry should be painted as a still or played back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// A still image.
    Image,
    /// A video clip.
    Video,
}

const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".webm", ".ogg", ".mov"];

/// Reference to one media entry of an item, as understood by the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaRef {
    source: String,
}

impl MediaRef {
    /// Creates a reference to `source` (a URL, path, or asset key).
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The source string.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Classifies the entry by its file extension (case-insensitive).
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        let bytes = self.source.as_bytes();
        let is_video = VIDEO_EXTENSIONS.iter().any(|ext| {
            bytes.len() >= ext.len()
                && bytes[bytes.len() - ext.len()..].eq_ignore_ascii_case(ext.as_bytes())
        });
        if is_video {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

impl From<&str> for MediaRef {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for MediaRef {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

/// A navigable item: a stable key plus its ordered, non-empty media list.
///
/// The media list is validated once, here, so navigation never has to deal
/// with an item it cannot show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<K> {
    id: K,
    media: Vec<MediaRef>,
}

impl<K> Item<K> {
    /// Creates an item.
    ///
    /// # Errors
    ///
    /// [`NavError::EmptyMedia`] if `media` yields nothing.
    pub fn new<M>(id: K, media: impl IntoIterator<Item = M>) -> Result<Self, NavError>
    where
        M: Into<MediaRef>,
    {
        let media: Vec<MediaRef> = media.into_iter().map(Into::into).collect();
        if media.is_empty() {
            return Err(NavError::EmptyMedia);
        }
        Ok(Self { id, media })
    }

    /// The item key.
    #[must_use]
    pub fn id(&self) -> &K {
        &self.id
    }

    /// All media entries, in display order.
    #[must_use]
    pub fn media(&self) -> &[MediaRef] {
        &self.media
    }

    /// Number of media entries; always at least one.
    #[must_use]
    pub fn media_len(&self) -> usize {
        self.media.len()
    }

    /// Media entry at `index`, if any.
    #[must_use]
    pub fn media_at(&self, index: usize) -> Option<&MediaRef> {
        self.media.get(index)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Item, MediaKind, MediaRef};
    use crate::NavError;

    #[test]
    fn empty_media_is_rejected() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(Item::new(1_u32, empty), Err(NavError::EmptyMedia));
    }

    #[test]
    fn media_kind_by_extension() {
        assert_eq!(MediaRef::from("clips/1-motion.MP4").kind(), MediaKind::Video);
        assert_eq!(MediaRef::from("a.webm").kind(), MediaKind::Video);
        assert_eq!(MediaRef::from("1-1.png").kind(), MediaKind::Image);
        assert_eq!(MediaRef::from("mov").kind(), MediaKind::Image);
        assert_eq!(MediaRef::from("").kind(), MediaKind::Image);
    }

    #[test]
    fn keeps_media_order() {
        let item = Item::new("shirt", ["m.mp4", "1.png", "2.png"]).unwrap();
        assert_eq!(item.media_len(), 3);
        assert_eq!(item.media_at(1).map(MediaRef::source), Some("1.png"));
        assert_eq!(item.media_at(3), None);
        assert_eq!(item.id(), &"shirt");
    }
}
