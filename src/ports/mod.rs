// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Collaborator interfaces.
//!
//! The core never talks to a terminal, browser or file system directly.
//! It reports to a [`Notifier`], saves through a [`FileSaver`] and gets its
//! graphics from a [`GraphicRenderer`] / [`GraphicSource`] pair.

pub mod notifier;
pub mod saver;

pub use notifier::{Notification, RecordingNotifier, TracingNotifier};
pub use saver::{sanitize_file_name, DirectorySaver, MemorySaver};

use std::path::PathBuf;

use crate::collection::SongId;
use crate::error::{RenderError, SaveError};
use crate::payload::RenderedGraphic;

/// Receives user-facing success and error messages
pub trait Notifier {
    /// Report a completed action
    fn success(&mut self, message: &str);
    /// Report a failed action
    fn error(&mut self, message: &str);
}

/// A self-contained file offered to the user for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name
    pub file_name: String,
    /// MIME type of `bytes`
    pub mime: &'static str,
    /// File contents
    pub bytes: Vec<u8>,
}

/// Offers a file to the user.
///
/// The file is passed by value and dropped when `save` returns.
pub trait FileSaver {
    /// Save the file, returning where it ended up
    fn save(&mut self, file: ExportFile) -> Result<PathBuf, SaveError>;
}

/// Turns a payload string into a scannable graphic
pub trait GraphicRenderer {
    /// Render the payload
    fn render(&mut self, payload: &str) -> Result<RenderedGraphic, RenderError>;
}

/// Looks up the graphic currently rendered for a song
pub trait GraphicSource {
    /// The rendered graphic, or `None` if nothing has been drawn for this song
    fn resolve(&self, song_id: &SongId) -> Option<&RenderedGraphic>;
}
