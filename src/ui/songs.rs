// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Collection list widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use songqr::{Song, SongId};

/// Longest story excerpt shown in a row
const STORY_EXCERPT_CHARS: usize = 60;

/// Songs, newest first, with the selected one marked
pub struct SongListWidget<'a> {
    songs: &'a [Song],
    selected: Option<&'a SongId>,
    cursor: Option<usize>,
    block: Option<Block<'a>>,
}

impl<'a> SongListWidget<'a> {
    /// Create a list over `songs`
    pub fn new(songs: &'a [Song]) -> Self {
        Self {
            songs,
            selected: None,
            cursor: None,
            block: None,
        }
    }

    /// Mark the selected song
    pub fn selected(mut self, id: Option<&'a SongId>) -> Self {
        self.selected = id;
        self
    }

    /// Highlight the row under the cursor (list focused)
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn row(&self, index: usize, song: &'a Song) -> Line<'a> {
        let is_selected = self.selected == Some(song.id());
        let (marker, marker_style) = if is_selected {
            ("✓ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            ("▦ ", Style::default().fg(Color::DarkGray))
        };

        let mut line = Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(song.title(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" - {}  ", song.artist()), Style::default().fg(Color::Gray)),
            Span::styled(excerpt(song.story()), Style::default().fg(Color::DarkGray)),
        ]);

        if self.cursor == Some(index) {
            line = line.style(Style::default().bg(Color::DarkGray));
        }
        line
    }
}

/// First line of the story, shortened
fn excerpt(story: &str) -> String {
    let first = story.lines().next().unwrap_or_default();
    if first.chars().count() > STORY_EXCERPT_CHARS {
        let cut: String = first.chars().take(STORY_EXCERPT_CHARS - 1).collect();
        format!("{}…", cut)
    } else {
        first.to_string()
    }
}

impl Widget for SongListWidget<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block.take() {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if self.songs.is_empty() {
            Paragraph::new("Nothing here yet. Add your first song!")
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        // Scroll so the cursor row stays visible
        let height = area.height.max(1) as usize;
        let offset = self
            .cursor
            .map(|cursor| cursor.saturating_sub(height - 1))
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .songs
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(index, song)| self.row(index, song))
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
