// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! A running SongQR session.
//!
//! Wires one collection, one payload encoder and the collaborators
//! together. Front ends forward user events here and read state back for
//! display.

use std::path::PathBuf;

use crate::collection::{CollectionManager, Song, SongId};
use crate::error::{ExportError, ValidationError};
use crate::payload::{GraphicStore, PayloadEncoder, QrRenderer, RenderedGraphic};
use crate::ports::{FileSaver, GraphicRenderer, GraphicSource, Notifier};

/// Collection, encoder and collaborators for one user
#[derive(Debug)]
pub struct Session<N, S, R = QrRenderer> {
    collection: CollectionManager,
    encoder: PayloadEncoder,
    graphics: GraphicStore,
    renderer: R,
    notifier: N,
    saver: S,
}

impl<N: Notifier, S: FileSaver> Session<N, S, QrRenderer> {
    /// Create a session that renders with [`QrRenderer`]
    pub fn new(collection: CollectionManager, encoder: PayloadEncoder, notifier: N, saver: S) -> Self {
        Self::with_renderer(collection, encoder, QrRenderer::new(), notifier, saver)
    }
}

impl<N: Notifier, S: FileSaver, R: GraphicRenderer> Session<N, S, R> {
    /// Create a session with a custom renderer
    pub fn with_renderer(
        collection: CollectionManager,
        encoder: PayloadEncoder,
        renderer: R,
        notifier: N,
        saver: S,
    ) -> Self {
        Self {
            collection,
            encoder,
            graphics: GraphicStore::new(),
            renderer,
            notifier,
            saver,
        }
    }

    /// Song collection
    pub fn collection(&self) -> &CollectionManager {
        &self.collection
    }

    /// Mutable collection access, for draft editing
    pub fn collection_mut(&mut self) -> &mut CollectionManager {
        &mut self.collection
    }

    /// Payload encoder
    pub fn encoder(&self) -> &PayloadEncoder {
        &self.encoder
    }

    /// Notifier
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable notifier access
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// File saver
    pub fn saver(&self) -> &S {
        &self.saver
    }

    /// Submit the current draft
    pub fn submit(&mut self) -> Result<SongId, ValidationError> {
        self.collection.submit_draft(&mut self.notifier)
    }

    /// Select a song and draw its QR code
    pub fn select(&mut self, song_id: &SongId) {
        self.collection.select(song_id);
        self.refresh_graphic();
    }

    fn refresh_graphic(&mut self) {
        let Some(song) = self.collection.current_selection() else {
            self.graphics.clear();
            return;
        };

        let url = self.encoder.derive_lookup_url(song.id());
        match self.renderer.render(&url) {
            Ok(graphic) => self.graphics.show(song.id().clone(), graphic),
            Err(err) => {
                tracing::error!(song_id = %song.id(), error = %err, "failed to render QR code");
                self.graphics.clear();
                self.notifier.error(&format!("Could not render QR code: {}", err));
            }
        }
    }

    /// Selected song
    pub fn selected(&self) -> Option<&Song> {
        self.collection.current_selection()
    }

    /// Lookup URL of the selected song
    pub fn selected_url(&self) -> Option<String> {
        self.selected()
            .map(|song| self.encoder.derive_lookup_url(song.id()))
    }

    /// QR code drawn for the selected song
    pub fn selected_graphic(&self) -> Option<&RenderedGraphic> {
        self.selected()
            .and_then(|song| self.graphics.resolve(song.id()))
    }

    /// Check if the selected song's QR code can be exported
    pub fn export_ready(&self) -> bool {
        self.selected_graphic().is_some()
    }

    /// Export the selected song's QR code.
    ///
    /// Returns `Ok(None)` when no song is selected.
    pub fn export_selected(&mut self) -> Result<Option<PathBuf>, ExportError> {
        let Some(song) = self.collection.current_selection() else {
            return Ok(None);
        };
        self.encoder
            .export_graphic(song, &self.graphics, &mut self.saver, &mut self.notifier)
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{SongDraft, SongIdGenerator};
    use crate::error::RenderError;
    use crate::ports::{MemorySaver, Notification, RecordingNotifier};

    type TestSession<R = QrRenderer> = Session<RecordingNotifier, MemorySaver, R>;

    fn session() -> TestSession {
        Session::new(
            CollectionManager::with_id_generator(SongIdGenerator::with_seed(5)),
            PayloadEncoder::new("https://example.com"),
            RecordingNotifier::new(),
            MemorySaver::new(),
        )
    }

    fn add(session: &mut Session<RecordingNotifier, MemorySaver, impl GraphicRenderer>, title: &str) -> SongId {
        session
            .collection_mut()
            .set_draft(SongDraft::new(title, "Artist", "Story"));
        session.submit().unwrap()
    }

    /// Renderer that always fails
    struct BrokenRenderer;

    impl GraphicRenderer for BrokenRenderer {
        fn render(&mut self, payload: &str) -> Result<RenderedGraphic, RenderError> {
            let too_long = payload.repeat(2_000);
            QrRenderer::new().render(&too_long)
        }
    }

    #[test]
    fn test_select_renders_graphic() {
        let mut session = session();
        let id = add(&mut session, "Imagine");
        assert!(!session.export_ready());

        session.select(&id);
        let expected = format!("https://example.com/song/{}", id);
        assert_eq!(session.selected_url(), Some(expected.clone()));
        assert_eq!(session.selected_graphic().unwrap().payload(), expected);
        assert!(session.export_ready());
    }

    #[test]
    fn test_select_unknown_drops_graphic() {
        let mut session = session();
        let id = add(&mut session, "Imagine");
        session.select(&id);

        session.select(&SongId::from("missing"));
        assert!(session.selected().is_none());
        assert!(session.selected_graphic().is_none());
        assert!(!session.export_ready());
    }

    #[test]
    fn test_export_selected() {
        let mut session = session();
        assert_eq!(session.export_selected().unwrap(), None);

        let id = add(&mut session, "Imagine");
        session.select(&id);
        let path = session.export_selected().unwrap();

        assert_eq!(path, Some(PathBuf::from("Imagine-qr.svg")));
        assert_eq!(session.saver().files().len(), 1);
    }

    #[test]
    fn test_render_failure_reported() {
        let mut session: TestSession<BrokenRenderer> = Session::with_renderer(
            CollectionManager::with_id_generator(SongIdGenerator::with_seed(5)),
            PayloadEncoder::new("https://example.com"),
            BrokenRenderer,
            RecordingNotifier::new(),
            MemorySaver::new(),
        );
        let id = add(&mut session, "Imagine");
        session.select(&id);

        assert!(session.selected().is_some());
        assert!(!session.export_ready());
        assert!(session.notifier().last().map_or(false, Notification::is_error));

        let err = session.export_selected().unwrap_err();
        assert!(matches!(err, ExportError::GraphicNotReady { .. }));
        assert!(session.saver().files().is_empty());
    }
}
