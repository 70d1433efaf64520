// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song entries and the editable draft they are created from.

use std::fmt;

use chrono::{DateTime, Utc};

/// Opaque identifier of a song, encoded into its lookup URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SongId(String);

impl SongId {
    /// Wrap an existing identifier string
    pub fn new(id: impl Into<String>) -> Self {
        SongId(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SongId {
    fn from(id: &str) -> Self {
        SongId(id.to_string())
    }
}

impl From<String> for SongId {
    fn from(id: String) -> Self {
        SongId(id)
    }
}

impl AsRef<str> for SongId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A recorded song and the story behind it.
///
/// Songs are only built by [`CollectionManager`](super::CollectionManager)
/// after the draft passed validation, so every field is non-empty and
/// nothing changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    id: SongId,
    title: String,
    artist: String,
    story: String,
    created_at: DateTime<Utc>,
}

impl Song {
    pub(crate) fn from_draft(id: SongId, draft: SongDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            artist: draft.artist,
            story: draft.story,
            created_at,
        }
    }

    /// Get song id
    pub fn id(&self) -> &SongId {
        &self.id
    }

    /// Get title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Get story
    pub fn story(&self) -> &str {
        &self.story
    }

    /// Get creation time
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A field of the song form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// Song title
    Title,
    /// Performing artist
    Artist,
    /// The personal story
    Story,
}

impl DraftField {
    /// All fields in form order
    pub const ALL: [DraftField; 3] = [DraftField::Title, DraftField::Artist, DraftField::Story];

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Artist => "Artist",
            DraftField::Story => "Story",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unsaved form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDraft {
    /// Song title
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// The personal story
    pub story: String,
}

impl SongDraft {
    /// Create a draft from its three fields
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        story: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            story: story.into(),
        }
    }

    /// Read a field
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Artist => &self.artist,
            DraftField::Story => &self.story,
        }
    }

    /// Mutable access to a field
    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Artist => &mut self.artist,
            DraftField::Story => &mut self.story,
        }
    }

    /// Fields that are still the empty string.
    ///
    /// Whitespace counts as content: `" "` is not missing.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }

    /// Check if every field is empty
    pub fn is_blank(&self) -> bool {
        self.missing_fields().len() == DraftField::ALL.len()
    }

    /// Reset all fields to empty
    pub fn clear(&mut self) {
        *self = SongDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let draft = SongDraft::new("Imagine", "", "");
        assert_eq!(draft.missing_fields(), vec![DraftField::Artist, DraftField::Story]);

        let full = SongDraft::new("Imagine", "John Lennon", "Heard it first in 1988");
        assert!(full.missing_fields().is_empty());
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        let draft = SongDraft::new(" ", "\t", "\n");
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_field_access() {
        let mut draft = SongDraft::default();
        assert!(draft.is_blank());

        draft.field_mut(DraftField::Artist).push_str("Queen");
        assert_eq!(draft.field(DraftField::Artist), "Queen");
        assert!(!draft.is_blank());

        draft.clear();
        assert!(draft.is_blank());
    }

    #[test]
    fn test_song_from_draft() {
        let now = Utc::now();
        let song = Song::from_draft(
            SongId::from("abc123"),
            SongDraft::new("Bohemian Rhapsody", "Queen", "Road trip"),
            now,
        );
        assert_eq!(song.id().as_str(), "abc123");
        assert_eq!(song.title(), "Bohemian Rhapsody");
        assert_eq!(song.artist(), "Queen");
        assert_eq!(song.story(), "Road trip");
        assert_eq!(song.created_at(), now);
    }

    #[test]
    fn test_song_id_display() {
        let id = SongId::new("00ff");
        assert_eq!(id.to_string(), "00ff");
        assert_eq!(id, SongId::from("00ff".to_string()));
    }
}
