// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the song collection and QR export.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::collection::{DraftField, SongId};

/// A draft was submitted with one or more empty fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    /// Fields that were empty, in form order
    pub missing: Vec<DraftField>,
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(DraftField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure to turn a lookup URL into a QR graphic
#[derive(Debug, Error)]
pub enum RenderError {
    /// Payload does not fit in a QR code at the configured level
    #[error("cannot encode payload as QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Failure to hand an exported file to the user
#[derive(Debug, Error)]
pub enum SaveError {
    /// File name was empty after sanitizing
    #[error("export file name is empty")]
    EmptyFileName,
    /// Writing the file failed
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of the QR export operation
#[derive(Debug, Error)]
pub enum ExportError {
    /// No rendered graphic exists for the song yet
    #[error("QR code for song {song_id} has not been rendered yet")]
    GraphicNotReady { song_id: SongId },
    /// The file saver rejected the export
    #[error(transparent)]
    Save(#[from] SaveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = ValidationError {
            missing: vec![DraftField::Title, DraftField::Story],
        };
        assert_eq!(err.to_string(), "missing required fields: Title, Story");
    }

    #[test]
    fn test_not_ready_message() {
        let err = ExportError::GraphicNotReady {
            song_id: SongId::from("abc"),
        };
        assert!(err.to_string().contains("abc"));
    }
}
