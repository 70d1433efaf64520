// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! QR rendering.

use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};

use crate::collection::SongId;
use crate::error::RenderError;
use crate::ports::{GraphicRenderer, GraphicSource};

/// Minimum edge length of the SVG graphic in pixels
pub const QR_SIZE_PX: u32 = 240;
/// Error correction level for every code
pub const QR_EC_LEVEL: EcLevel = EcLevel::H;

/// A QR code drawn for one payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGraphic {
    payload: String,
    svg: String,
    preview: String,
    modules: usize,
}

impl RenderedGraphic {
    /// The encoded text
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Standalone SVG document
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Text rendering using half-block characters, for terminals
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Modules per side, without quiet zone
    pub fn modules(&self) -> usize {
        self.modules
    }
}

/// Renders payloads as QR codes at level H with a quiet zone
#[derive(Debug, Clone, Copy, Default)]
pub struct QrRenderer;

impl QrRenderer {
    /// Create a renderer
    pub fn new() -> Self {
        QrRenderer
    }
}

impl GraphicRenderer for QrRenderer {
    fn render(&mut self, payload: &str) -> Result<RenderedGraphic, RenderError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), QR_EC_LEVEL)?;

        let svg = code
            .render::<svg::Color>()
            .min_dimensions(QR_SIZE_PX, QR_SIZE_PX)
            .quiet_zone(true)
            .build();

        // Terminal text is light on dark, so the colours are swapped
        let preview = code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .quiet_zone(true)
            .build();

        tracing::debug!(payload, modules = code.width(), "rendered QR code");
        Ok(RenderedGraphic {
            payload: payload.to_string(),
            svg,
            preview,
            modules: code.width(),
        })
    }
}

/// Holds the graphic of the song currently on screen.
///
/// Only one graphic exists at a time; showing another song replaces it.
#[derive(Debug, Clone, Default)]
pub struct GraphicStore {
    current: Option<(SongId, RenderedGraphic)>,
}

impl GraphicStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `graphic` the one on screen for `song_id`
    pub fn show(&mut self, song_id: SongId, graphic: RenderedGraphic) {
        self.current = Some((song_id, graphic));
    }

    /// Drop the graphic on screen
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Graphic on screen and the song it belongs to
    pub fn current(&self) -> Option<(&SongId, &RenderedGraphic)> {
        self.current.as_ref().map(|(id, graphic)| (id, graphic))
    }
}

impl GraphicSource for GraphicStore {
    fn resolve(&self, song_id: &SongId) -> Option<&RenderedGraphic> {
        match &self.current {
            Some((id, graphic)) if id == song_id => Some(graphic),
            _ => None,
        }
    }
}
