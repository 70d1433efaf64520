// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song collection.
//!
//! This module provides:
//! - Songs and the form draft they are built from
//! - Id generation
//! - The collection manager with its selection state

pub mod ids;
pub mod manager;
pub mod song;

pub use ids::SongIdGenerator;
pub use manager::{CollectionManager, Selection, MSG_FILL_ALL_FIELDS, MSG_SONG_ADDED};
pub use song::{DraftField, Song, SongDraft, SongId};
