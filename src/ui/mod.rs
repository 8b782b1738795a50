// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Terminal UI for the step grid.
//!
//! Provides a ratatui-based view of the element tree: one row per track,
//! one cell per step, with keys standing in for mouse clicks.

mod grid;
mod session;

pub use grid::GridWidget;
pub use session::Session;

use std::io::{self, Stdout};
use std::time::Duration;

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
use tracing::warn;

/// One track as drawn by the grid widget
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRow {
    /// Track name
    pub name: String,
    /// Mute flag of the track
    pub mute: bool,
    /// Solo flag of the track
    pub solo: bool,
    /// Step cells in order
    pub steps: Vec<StepCell>,
}

/// Class membership of one step cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepCell {
    /// `active` class present
    pub active: bool,
    /// `mute` class present
    pub mute: bool,
    /// `solo` class present
    pub solo: bool,
}

/// Key event result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Cursor to previous track
    MoveUp,
    /// Cursor to next track
    MoveDown,
    /// Cursor to previous step
    MoveLeft,
    /// Cursor to next step
    MoveRight,
    /// Click the step under the cursor
    ToggleStep,
    /// Click the current track's mute button
    ToggleMute,
    /// Click the current track's solo button
    ToggleSolo,
    /// Append a new track
    AddTrack,
    /// Toggle help
    ToggleHelp,
}

/// Map a key press to an action
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
    match (code, modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

        // Cursor
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
        (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::MoveLeft,
        (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::MoveRight,

        // Clicks
        (KeyCode::Char(' '), KeyModifiers::NONE) | (KeyCode::Enter, _) => KeyAction::ToggleStep,
        (KeyCode::Char('m'), KeyModifiers::NONE) => KeyAction::ToggleMute,
        (KeyCode::Char('s'), KeyModifiers::NONE) => KeyAction::ToggleSolo,

        // Tracks
        (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::AddTrack,

        // Help
        (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,

        _ => KeyAction::None,
    }
}

/// Terminal UI application
pub struct App {
    /// Grid state and sequencer
    session: Session,
    /// Terminal handle
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Target frame rate
    frame_rate: u32,
}

impl App {
    /// Take over the terminal for a session
    pub fn new(session: Session) -> io::Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            session,
            terminal,
            frame_rate: 30,
        })
    }

    /// Run until the user quits
    pub fn run(&mut self) -> io::Result<()> {
        while self.session.is_running() {
            self.session.clear_expired_status();
            self.draw()?;

            if let Some(Event::Key(key)) = self.poll_event()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = map_key(key.code, key.modifiers);
                if let Err(e) = self.session.apply(action) {
                    warn!(error = %e, ?action, "key action failed");
                    self.session.set_status(format!("Error: {}", e));
                }
            }
        }
        Ok(())
    }

    /// Poll for events with timeout
    fn poll_event(&self) -> io::Result<Option<Event>> {
        let timeout = Duration::from_millis(1000 / self.frame_rate as u64);
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Draw the UI
    fn draw(&mut self) -> io::Result<()> {
        let session = &self.session;
        self.terminal.draw(|frame| render(frame, session))?;
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

/// Draw a whole frame for a session
pub fn render(frame: &mut Frame, session: &Session) {
    let area = frame.area();

    // Main layout: grid, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let rows = session.rows();
    let grid = GridWidget::new(&rows)
        .cursor(Some(session.cursor()))
        .block(Block::default().borders(Borders::ALL).title(" Sequencer "));
    frame.render_widget(grid, chunks[0]);

    render_status_bar(frame, chunks[1], session);

    if session.show_help() {
        render_help_overlay(frame, area);
    }
}

/// Render status bar
fn render_status_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let text = if let Some(msg) = session.status_message() {
        Span::styled(msg.to_string(), Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            " Arrows: Move | Space: Step | m: Mute | s: Solo | a: Add track | ?: Help | q: Quit",
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(text), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    // Calculate centered area
    let width = 44.min(area.width.saturating_sub(4));
    let height = 13.min(area.height.saturating_sub(2));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let help_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let help_text = vec![
        Line::from(Span::styled("Grid", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Arrows/hjkl  Move cursor"),
        Line::from("  Space/Enter  Toggle step"),
        Line::from(""),
        Line::from(Span::styled("Tracks", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  m            Toggle mute"),
        Line::from("  s            Toggle solo"),
        Line::from("  a            Add track"),
        Line::from(""),
        Line::from(Span::styled("Other", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  ?            Toggle help"),
        Line::from("  q/Ctrl+c     Quit"),
    ];

    frame.render_widget(Paragraph::new(help_text), inner);
}
