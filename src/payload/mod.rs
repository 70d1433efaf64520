// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! QR payloads.
//!
//! This module provides:
//! - Lookup URL derivation from a song id
//! - QR rendering to SVG and terminal text
//! - SVG export of a rendered code

pub mod render;

pub use render::{GraphicStore, QrRenderer, RenderedGraphic, QR_EC_LEVEL, QR_SIZE_PX};

use std::path::PathBuf;

use crate::collection::{Song, SongId};
use crate::error::ExportError;
use crate::ports::{ExportFile, FileSaver, GraphicSource, Notifier};

/// MIME type of exported graphics
pub const SVG_MIME: &str = "image/svg+xml;charset=utf-8";
/// Shown after a QR code was exported
pub const MSG_QR_DOWNLOADED: &str = "QR code downloaded!";
/// Shown when export is attempted before the code was drawn
pub const MSG_QR_NOT_READY: &str = "QR code is not ready yet";

/// Build `<origin>/song/<id>`. The origin is used as given.
pub fn lookup_url(origin: &str, song_id: &SongId) -> String {
    format!("{}/song/{}", origin, song_id)
}

/// File name offered for a song's QR code
pub fn export_file_name(song: &Song) -> String {
    format!("{}-qr.svg", song.title())
}

/// Turns song ids into lookup URLs and exports their QR codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadEncoder {
    origin: String,
}

impl PayloadEncoder {
    /// Create an encoder for the origin the app is served from
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    /// Serving origin
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// URL encoded into the song's QR code
    pub fn derive_lookup_url(&self, song_id: &SongId) -> String {
        lookup_url(&self.origin, song_id)
    }

    /// Save the QR code currently rendered for `song` as `<title>-qr.svg`.
    ///
    /// Fails with [`ExportError::GraphicNotReady`] when `graphics` has
    /// nothing for the song. Both outcomes are reported to `notifier`.
    pub fn export_graphic(
        &self,
        song: &Song,
        graphics: &dyn GraphicSource,
        saver: &mut dyn FileSaver,
        notifier: &mut dyn Notifier,
    ) -> Result<PathBuf, ExportError> {
        let Some(graphic) = graphics.resolve(song.id()) else {
            tracing::warn!(song_id = %song.id(), "export requested before QR code was rendered");
            notifier.error(MSG_QR_NOT_READY);
            return Err(ExportError::GraphicNotReady {
                song_id: song.id().clone(),
            });
        };

        let file = ExportFile {
            file_name: export_file_name(song),
            mime: SVG_MIME,
            bytes: graphic.svg().as_bytes().to_vec(),
        };

        match saver.save(file) {
            Ok(path) => {
                tracing::info!(song_id = %song.id(), path = %path.display(), "QR code exported");
                notifier.success(MSG_QR_DOWNLOADED);
                Ok(path)
            }
            Err(err) => {
                tracing::error!(song_id = %song.id(), error = %err, "QR export failed");
                notifier.error(&format!("Could not save QR code: {}", err));
                Err(err.into())
            }
        }
    }
}
