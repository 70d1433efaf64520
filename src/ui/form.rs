// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song form widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use songqr::collection::{DraftField, SongDraft};

/// Placeholder shown in an empty field
fn placeholder(field: DraftField) -> &'static str {
    match field {
        DraftField::Title => "e.g. Bohemian Rhapsody",
        DraftField::Artist => "e.g. Queen",
        DraftField::Story => "What does this song mean to you?",
    }
}

/// Form with title, artist and story fields
pub struct FormWidget<'a> {
    draft: &'a SongDraft,
    focus: Option<DraftField>,
    block: Option<Block<'a>>,
}

impl<'a> FormWidget<'a> {
    /// Create a form showing `draft`
    pub fn new(draft: &'a SongDraft) -> Self {
        Self {
            draft,
            focus: None,
            block: None,
        }
    }

    /// Set the focused field
    pub fn focus(mut self, field: Option<DraftField>) -> Self {
        self.focus = field;
        self
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn field_lines(&self, field: DraftField) -> Vec<Line<'a>> {
        let focused = self.focus == Some(field);
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut lines = vec![Line::from(Span::styled(field.label(), label_style))];
        let value = self.draft.field(field);
        if value.is_empty() {
            lines.push(Line::from(Span::styled(
                placeholder(field),
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            // Story may span several lines
            lines.extend(value.split('\n').map(Line::raw));
        }
        if focused {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled("▏", Style::default().fg(Color::Cyan)));
            }
        }
        lines
    }
}

impl Widget for FormWidget<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block.take() {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Artist
                Constraint::Min(3),    // Story
            ])
            .split(area);

        for (field, chunk) in DraftField::ALL.into_iter().zip(chunks.iter()) {
            Paragraph::new(self.field_lines(field))
                .wrap(Wrap { trim: false })
                .render(*chunk, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_lines() {
        let draft = SongDraft::new("Imagine", "John Lennon", "First\nSecond");
        let form = FormWidget::new(&draft).focus(Some(DraftField::Story));

        let lines = form.field_lines(DraftField::Story);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].to_string(), "First");
        assert_eq!(lines[2].to_string(), "Second▏");
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let draft = SongDraft::default();
        let form = FormWidget::new(&draft);

        let lines = form.field_lines(DraftField::Artist);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].to_string(), "e.g. Queen");
    }
}
