// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! SongQR keeps a collection of songs with the stories behind them and
//! hands out a QR code for each song that links to its story page.

pub mod collection;
pub mod config;
pub mod error;
pub mod payload;
pub mod ports;
pub mod session;

pub use collection::{CollectionManager, Selection, Song, SongDraft, SongId};
pub use config::AppConfig;
pub use error::{ExportError, RenderError, SaveError, ValidationError};
pub use payload::{lookup_url, PayloadEncoder, QrRenderer};
pub use session::Session;
