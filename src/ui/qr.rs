// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! QR code display widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use songqr::payload::RenderedGraphic;
use songqr::Song;

/// Shows the selected song's QR code, title, artist and URL
pub struct QrWidget<'a> {
    song: Option<&'a Song>,
    graphic: Option<&'a RenderedGraphic>,
    url: Option<&'a str>,
    export_ready: bool,
    block: Option<Block<'a>>,
}

impl<'a> QrWidget<'a> {
    /// Create a widget for the selected song and its graphic
    pub fn new(song: Option<&'a Song>, graphic: Option<&'a RenderedGraphic>) -> Self {
        Self {
            song,
            graphic,
            url: None,
            export_ready: false,
            block: None,
        }
    }

    /// Set the lookup URL shown under the code
    pub fn url(mut self, url: Option<&'a str>) -> Self {
        self.url = url;
        self
    }

    /// Enable the export hint
    pub fn export_ready(mut self, ready: bool) -> Self {
        self.export_ready = ready;
        self
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for QrWidget<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block.take() {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        let Some(song) = self.song else {
            Paragraph::new("Select a song to see its QR code")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        };

        let mut lines: Vec<Line> = match self.graphic {
            Some(graphic) => graphic.preview().lines().map(Line::from).collect(),
            None => vec![Line::styled("QR code unavailable", Style::default().fg(Color::Red))],
        };

        lines.push(Line::from(Span::styled(
            song.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(song.artist(), Style::default().fg(Color::Gray))));
        if let Some(url) = self.url {
            lines.push(Line::from(Span::styled(url, Style::default().fg(Color::Cyan))));
        }

        let hint_style = if self.export_ready {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        lines.push(Line::from(Span::styled("Ctrl+S: save QR code as SVG", hint_style)));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
