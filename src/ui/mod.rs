// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Terminal UI for SongQR.
//!
//! Provides a ratatui-based interface with the song form, the collection
//! list, the QR code of the selected song and a status bar for
//! notifications.

mod form;
mod qr;
mod songs;

pub use form::FormWidget;
pub use qr::QrWidget;
pub use songs::SongListWidget;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use songqr::collection::DraftField;
use songqr::ports::{DirectorySaver, Notification, Notifier, TracingNotifier};
use songqr::Session;

/// How long a notification stays in the status bar
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Shows the latest notification in the status bar and logs every one
#[derive(Debug, Default)]
pub struct StatusLine {
    log: TracingNotifier,
    current: Option<(Notification, Instant)>,
}

impl StatusLine {
    /// Create an empty status line
    pub fn new() -> Self {
        Self::default()
    }

    /// Notification currently shown
    pub fn message(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }

    /// Clear expired notification
    pub fn clear_expired(&mut self) {
        if let Some((_, time)) = &self.current {
            if time.elapsed() > STATUS_TTL {
                self.current = None;
            }
        }
    }
}

impl Notifier for StatusLine {
    fn success(&mut self, message: &str) {
        self.log.success(message);
        self.current = Some((Notification::Success(message.to_string()), Instant::now()));
    }

    fn error(&mut self, message: &str) {
        self.log.error(message);
        self.current = Some((Notification::Error(message.to_string()), Instant::now()));
    }
}

/// Session type driven by the terminal UI
pub type AppSession = Session<StatusLine, DirectorySaver>;

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A form field
    Field(DraftField),
    /// The collection list
    Songs,
}

impl Focus {
    /// Next pane in tab order
    pub fn next(self) -> Self {
        match self {
            Focus::Field(DraftField::Title) => Focus::Field(DraftField::Artist),
            Focus::Field(DraftField::Artist) => Focus::Field(DraftField::Story),
            Focus::Field(DraftField::Story) => Focus::Songs,
            Focus::Songs => Focus::Field(DraftField::Title),
        }
    }

    /// Previous pane in tab order
    pub fn prev(self) -> Self {
        match self {
            Focus::Field(DraftField::Title) => Focus::Songs,
            Focus::Field(DraftField::Artist) => Focus::Field(DraftField::Title),
            Focus::Field(DraftField::Story) => Focus::Field(DraftField::Artist),
            Focus::Songs => Focus::Field(DraftField::Story),
        }
    }
}

/// Key event result
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Move focus forward
    NextFocus,
    /// Move focus back
    PrevFocus,
    /// Type a character into the focused field
    Input(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Enter: next field, line break in Story, or select
    Confirm,
    /// Add the drafted song
    Submit,
    /// Move list cursor up
    CursorUp,
    /// Move list cursor down
    CursorDown,
    /// Save the selected QR code
    Export,
    /// Toggle help
    ToggleHelp,
}

/// Terminal-independent UI state and event handling
pub struct Controller {
    session: AppSession,
    focus: Focus,
    cursor: usize,
    show_help: bool,
    running: bool,
}

impl Controller {
    /// Create a controller for a session
    pub fn new(session: AppSession) -> Self {
        Self {
            session,
            focus: Focus::Field(DraftField::Title),
            cursor: 0,
            show_help: false,
            running: true,
        }
    }

    /// Session
    pub fn session(&self) -> &AppSession {
        &self.session
    }

    /// Focused pane
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// List cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Map a key to an action
    pub fn handle_key(&self, code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        match (code, modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => KeyAction::Quit,
            (KeyCode::Char('s'), KeyModifiers::CONTROL) | (KeyCode::F(2), _) => KeyAction::Export,
            (KeyCode::F(1), _) => KeyAction::ToggleHelp,
            (KeyCode::Enter, KeyModifiers::ALT)
            | (KeyCode::Enter, KeyModifiers::CONTROL)
            | (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::Submit,
            (KeyCode::Tab, _) => KeyAction::NextFocus,
            (KeyCode::BackTab, _) => KeyAction::PrevFocus,
            (KeyCode::Enter, _) => KeyAction::Confirm,
            (KeyCode::Up, _) => KeyAction::CursorUp,
            (KeyCode::Down, _) => KeyAction::CursorDown,
            (KeyCode::Backspace, _) => KeyAction::Backspace,
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                KeyAction::Input(c)
            }
            _ => KeyAction::None,
        }
    }

    /// Apply an action to the UI state and session
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.running = false,
            KeyAction::NextFocus => self.focus = self.focus.next(),
            KeyAction::PrevFocus => self.focus = self.focus.prev(),
            KeyAction::ToggleHelp => self.show_help = !self.show_help,
            KeyAction::Input(c) => {
                if let Focus::Field(field) = self.focus {
                    self.session.collection_mut().draft_mut().field_mut(field).push(c);
                }
            }
            KeyAction::Backspace => {
                if let Focus::Field(field) = self.focus {
                    self.session.collection_mut().draft_mut().field_mut(field).pop();
                }
            }
            KeyAction::Confirm => self.confirm(),
            KeyAction::Submit => {
                if matches!(self.focus, Focus::Field(_)) {
                    self.submit();
                }
            }
            KeyAction::CursorUp => {
                if self.focus == Focus::Songs {
                    self.cursor = self.cursor.saturating_sub(1);
                }
            }
            KeyAction::CursorDown => {
                let len = self.session.collection().len();
                if self.focus == Focus::Songs && self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyAction::Export => {
                // Disabled until the selected song's QR code exists
                if self.session.export_ready() {
                    // Errors are already reported through the status line
                    let _ = self.session.export_selected();
                }
            }
        }
    }

    fn submit(&mut self) {
        if self.session.submit().is_ok() {
            // New songs go on top; keep the cursor on the same song
            let len = self.session.collection().len();
            if len > 1 {
                self.cursor = (self.cursor + 1).min(len - 1);
            }
            self.focus = Focus::Field(DraftField::Title);
        }
    }

    fn confirm(&mut self) {
        match self.focus {
            Focus::Field(DraftField::Story) => {
                self.session
                    .collection_mut()
                    .draft_mut()
                    .field_mut(DraftField::Story)
                    .push('\n');
            }
            Focus::Field(_) => self.focus = self.focus.next(),
            Focus::Songs => {
                let id = self
                    .session
                    .collection()
                    .songs()
                    .get(self.cursor)
                    .map(|song| song.id().clone());
                if let Some(id) = id {
                    self.session.select(&id);
                }
            }
        }
    }

    /// Drop status messages that have been shown long enough
    pub fn tick(&mut self) {
        self.session.notifier_mut().clear_expired();
    }
}

/// Terminal UI application
pub struct App {
    /// Terminal handle
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Event poll interval
    poll_interval: Duration,
}

impl App {
    /// Take over the terminal
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            poll_interval: Duration::from_millis(250),
        })
    }

    /// Run until the controller stops
    pub fn run(&mut self, controller: &mut Controller) -> io::Result<()> {
        while controller.is_running() {
            controller.tick();
            self.terminal.draw(|frame| draw(frame, controller))?;

            if event::poll(self.poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let action = controller.handle_key(key.code, key.modifiers);
                        controller.apply(action);
                    }
                }
            }
        }
        Ok(())
    }

    /// Restore the terminal
    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

/// Draw the whole screen
pub fn draw(frame: &mut Frame, controller: &Controller) {
    let area = frame.area();
    let session = controller.session();

    // Main layout: top row, collection, status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),    // Form + QR
            Constraint::Min(6),     // Collection
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let field_focus = match controller.focus() {
        Focus::Field(field) => Some(field),
        Focus::Songs => None,
    };

    frame.render_widget(
        FormWidget::new(session.collection().draft())
            .focus(field_focus)
            .block(pane_block(" Add a song ", field_focus.is_some())),
        top[0],
    );

    let url = session.selected_url();
    frame.render_widget(
        QrWidget::new(session.selected(), session.selected_graphic())
            .url(url.as_deref())
            .export_ready(session.export_ready())
            .block(pane_block(" QR code ", false)),
        top[1],
    );

    let songs_focused = controller.focus() == Focus::Songs;
    frame.render_widget(
        SongListWidget::new(session.collection().songs())
            .selected(session.collection().selection().song_id())
            .cursor(songs_focused.then_some(controller.cursor()))
            .block(pane_block(" Your collection ", songs_focused)),
        rows[1],
    );

    render_status_bar(frame, rows[2], session.notifier());

    if controller.show_help {
        render_help_overlay(frame, area);
    }
}

/// Render status bar
fn render_status_bar(frame: &mut Frame, area: Rect, status: &StatusLine) {
    let text = match status.message() {
        Some(Notification::Success(msg)) => Span::styled(msg.as_str(), Style::default().fg(Color::Green)),
        Some(Notification::Error(msg)) => Span::styled(msg.as_str(), Style::default().fg(Color::Red)),
        None => Span::styled(
            " Tab: Next pane | Alt+Enter: Add song | Enter: Select | Ctrl+S: Save QR | F1: Help | Esc: Quit",
            Style::default().fg(Color::DarkGray),
        ),
    };

    frame.render_widget(Paragraph::new(text), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let width = 50.min(area.width.saturating_sub(4));
    let height = 16.min(area.height.saturating_sub(4));
    let x = (area.width - width) / 2;
    let y = (area.height - height) / 2;
    let help_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let help_text = vec![
        Line::from(Span::styled("Form", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Enter       Next field, new line in Story"),
        Line::from("  Alt+Enter   Add song (also Ctrl+D)"),
        Line::from("  Backspace   Delete character"),
        Line::from(""),
        Line::from(Span::styled("Collection", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Up/Down     Move"),
        Line::from("  Enter       Show QR code"),
        Line::from("  Ctrl+S, F2  Save QR code as SVG"),
        Line::from(""),
        Line::from(Span::styled("Other", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Tab         Next pane"),
        Line::from("  F1          Toggle help"),
        Line::from("  Esc/Ctrl+c  Quit"),
    ];

    frame.render_widget(Paragraph::new(help_text), inner);
}
