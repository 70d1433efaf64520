// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The song collection, its draft and the current selection.

use chrono::Utc;

use super::{Song, SongDraft, SongId, SongIdGenerator};
use crate::error::ValidationError;
use crate::ports::Notifier;

/// Shown when a draft is submitted with empty fields
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
/// Shown after a song was added
pub const MSG_SONG_ADDED: &str = "Song added successfully!";

/// Which song, if any, is shown with its QR code
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Unselected,
    /// The song with this id
    Selected(SongId),
}

impl Selection {
    /// Selected song id
    pub fn song_id(&self) -> Option<&SongId> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(id) => Some(id),
        }
    }

    /// Check if a song is selected
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

/// Owns the songs (newest first), the draft being edited and the selection.
///
/// The selection only stores an id; the song itself always lives in the
/// collection.
#[derive(Debug)]
pub struct CollectionManager {
    songs: Vec<Song>,
    selection: Selection,
    draft: SongDraft,
    ids: SongIdGenerator,
}

impl CollectionManager {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::with_id_generator(SongIdGenerator::new())
    }

    /// Create an empty collection drawing ids from `ids`
    pub fn with_id_generator(ids: SongIdGenerator) -> Self {
        Self {
            songs: Vec::new(),
            selection: Selection::Unselected,
            draft: SongDraft::default(),
            ids,
        }
    }

    /// Current draft
    pub fn draft(&self) -> &SongDraft {
        &self.draft
    }

    /// Mutable access to the draft (form editing)
    pub fn draft_mut(&mut self) -> &mut SongDraft {
        &mut self.draft
    }

    /// Replace the draft
    pub fn set_draft(&mut self, draft: SongDraft) {
        self.draft = draft;
    }

    /// Validate the current draft and add it as a new song.
    ///
    /// On success the song goes to the front of the collection, the draft
    /// is cleared and the new id is returned. The selection is untouched.
    /// On failure nothing changes apart from the error notification.
    pub fn submit_draft(&mut self, notifier: &mut dyn Notifier) -> Result<SongId, ValidationError> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            let err = ValidationError { missing };
            tracing::debug!(error = %err, "rejected draft");
            notifier.error(MSG_FILL_ALL_FIELDS);
            return Err(err);
        }

        let draft = std::mem::take(&mut self.draft);
        let id = self.ids.next_id();
        let song = Song::from_draft(id.clone(), draft, Utc::now());
        tracing::info!(song_id = %id, title = song.title(), artist = song.artist(), "song added");

        self.songs.insert(0, song);
        notifier.success(MSG_SONG_ADDED);
        Ok(id)
    }

    /// Replace the draft with `draft` and submit it
    pub fn submit(
        &mut self,
        draft: SongDraft,
        notifier: &mut dyn Notifier,
    ) -> Result<SongId, ValidationError> {
        self.draft = draft;
        self.submit_draft(notifier)
    }

    /// Select the song with `song_id`, or clear the selection if there is none
    pub fn select(&mut self, song_id: &SongId) {
        self.selection = if self.get(song_id).is_some() {
            Selection::Selected(song_id.clone())
        } else {
            tracing::warn!(song_id = %song_id, "selected unknown song");
            Selection::Unselected
        };
        tracing::debug!(selection = ?self.selection, "selection changed");
    }

    /// Currently selected song
    pub fn current_selection(&self) -> Option<&Song> {
        self.selection.song_id().and_then(|id| self.get(id))
    }

    /// Raw selection state
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Check if the song with `song_id` is the selected one
    pub fn is_selected(&self, song_id: &SongId) -> bool {
        self.selection.song_id() == Some(song_id)
    }

    /// All songs, newest first
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Look up a song by id
    pub fn get(&self, song_id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|song| song.id() == song_id)
    }

    /// Position of a song in [`songs`](Self::songs)
    pub fn position(&self, song_id: &SongId) -> Option<usize> {
        self.songs.iter().position(|song| song.id() == song_id)
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if there are no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl Default for CollectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::DraftField;
    use crate::ports::{Notification, RecordingNotifier};

    fn manager() -> CollectionManager {
        CollectionManager::with_id_generator(SongIdGenerator::with_seed(3))
    }

    #[test]
    fn test_submit_adds_song() {
        let mut songs = manager();
        let mut notifier = RecordingNotifier::new();

        songs.set_draft(SongDraft::new("Imagine", "John Lennon", "Mum's favourite"));
        let id = songs.submit_draft(&mut notifier).unwrap();

        assert_eq!(songs.len(), 1);
        let song = songs.get(&id).unwrap();
        assert_eq!(song.title(), "Imagine");
        assert_eq!(song.artist(), "John Lennon");
        assert_eq!(song.story(), "Mum's favourite");
        assert_eq!(notifier.last(), Some(&Notification::Success(MSG_SONG_ADDED.to_string())));
    }

    #[test]
    fn test_submit_clears_draft_and_keeps_selection() {
        let mut songs = manager();
        let mut notifier = RecordingNotifier::new();

        let first = songs.submit(SongDraft::new("A", "B", "C"), &mut notifier).unwrap();
        songs.select(&first);

        songs.submit(SongDraft::new("D", "E", "F"), &mut notifier).unwrap();
        assert!(songs.draft().is_blank());
        assert_eq!(songs.current_selection().map(Song::id), Some(&first));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut songs = manager();
        let mut notifier = RecordingNotifier::new();

        let err = songs
            .submit(SongDraft::new("", "Queen", ""), &mut notifier)
            .unwrap_err();
        assert_eq!(err.missing, vec![DraftField::Title, DraftField::Story]);
        assert!(songs.is_empty());
        assert_eq!(notifier.last(), Some(&Notification::Error(MSG_FILL_ALL_FIELDS.to_string())));

        // Draft is kept so the user can finish it
        assert_eq!(songs.draft().artist, "Queen");
    }

    #[test]
    fn test_newest_first() {
        let mut songs = manager();
        let mut notifier = RecordingNotifier::new();

        for title in ["A", "B", "C"] {
            songs.submit(SongDraft::new(title, "x", "y"), &mut notifier).unwrap();
        }

        let titles: Vec<&str> = songs.songs().iter().map(Song::title).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
        assert_eq!(songs.position(songs.songs()[2].id()), Some(2));
    }

    #[test]
    fn test_select() {
        let mut songs = manager();
        let mut notifier = RecordingNotifier::new();
        let id = songs.submit(SongDraft::new("A", "B", "C"), &mut notifier).unwrap();

        assert_eq!(songs.selection(), &Selection::Unselected);
        assert!(songs.current_selection().is_none());

        songs.select(&id);
        assert_eq!(songs.selection(), &Selection::Selected(id.clone()));
        assert!(songs.is_selected(&id));

        songs.select(&id);
        assert_eq!(songs.selection(), &Selection::Selected(id.clone()));
    }

    #[test]
    fn test_select_unknown_clears_selection() {
        let mut songs = manager();
        let mut notifier = RecordingNotifier::new();
        let id = songs.submit(SongDraft::new("A", "B", "C"), &mut notifier).unwrap();
        songs.select(&id);

        songs.select(&SongId::from("does-not-exist"));
        assert_eq!(songs.selection(), &Selection::Unselected);
        assert!(songs.current_selection().is_none());
    }
}
