// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Track × step grid widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph, Widget},
};

use super::{StepCell, TrackRow};

const INDEX_WIDTH: u16 = 3;
const NAME_WIDTH: u16 = 12;
const FLAG_WIDTH: u16 = 3;
const CELL_WIDTH: u16 = 3;

/// Widget drawing every track as a row of step cells
pub struct GridWidget<'a> {
    rows: &'a [TrackRow],
    cursor: Option<(usize, usize)>,
    block: Option<Block<'a>>,
}

impl<'a> GridWidget<'a> {
    /// Create a new grid widget
    pub fn new(rows: &'a [TrackRow]) -> Self {
        Self {
            rows,
            cursor: None,
            block: None,
        }
    }

    /// Highlight the cell at (track, step), both 0-based
    pub fn cursor(mut self, cursor: Option<(usize, usize)>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.rows.is_empty() {
            Paragraph::new("No tracks configured")
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let step_count = self.rows.iter().map(|r| r.steps.len()).max().unwrap_or(0);
        render_header(area, buf, step_count);

        for (i, row) in self.rows.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.bottom() {
                break;
            }
            let cursor_step = match self.cursor {
                Some((track, step)) if track == i => Some(step),
                _ => None,
            };
            render_row(area, y, buf, i, row, cursor_step);
        }
    }
}

/// Write `text` at (x, y) without running past the right edge of `area`
fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    if x >= area.right() || y >= area.bottom() {
        return;
    }
    let room = (area.right() - x) as usize;
    buf.set_stringn(x, y, text, room, style);
}

fn render_header(area: Rect, buf: &mut Buffer, step_count: usize) {
    let style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    let mut x = area.x;
    put(buf, area, x, area.y, "#", style);
    x += INDEX_WIDTH;
    put(buf, area, x, area.y, "Name", style);
    x += NAME_WIDTH;
    put(buf, area, x, area.y, "M", style);
    x += FLAG_WIDTH;
    put(buf, area, x, area.y, "S", style);
    x += FLAG_WIDTH;

    for step in 1..=step_count {
        put(buf, area, x, area.y, &format!("{:>2}", step), style);
        x = x.saturating_add(CELL_WIDTH);
    }
}

fn render_row(area: Rect, y: u16, buf: &mut Buffer, index: usize, row: &TrackRow, cursor: Option<usize>) {
    let mut x = area.x;

    // Selection indicator / index
    let selected = cursor.is_some();
    let (idx_text, idx_style) = if selected {
        (
            format!(">{}", index + 1),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        (format!(" {}", index + 1), Style::default().fg(Color::DarkGray))
    };
    put(buf, area, x, y, &idx_text, idx_style);
    x += INDEX_WIDTH;

    // Name
    let name_style = if row.solo {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if row.mute {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let name: String = row.name.chars().take(NAME_WIDTH as usize - 1).collect();
    put(buf, area, x, y, &name, name_style);
    x += NAME_WIDTH;

    // Mute indicator
    let (mute_text, mute_style) = if row.mute {
        ("M", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    } else {
        ("·", Style::default().fg(Color::DarkGray))
    };
    put(buf, area, x, y, mute_text, mute_style);
    x += FLAG_WIDTH;

    // Solo indicator
    let (solo_text, solo_style) = if row.solo {
        ("S", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("·", Style::default().fg(Color::DarkGray))
    };
    put(buf, area, x, y, solo_text, solo_style);
    x += FLAG_WIDTH;

    for (step, cell) in row.steps.iter().enumerate() {
        let mut style = cell_style(cell);
        if cursor == Some(step) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        put(buf, area, x, y, cell_symbol(cell), style);
        x = x.saturating_add(CELL_WIDTH);
    }
}

/// Text for a step cell
fn cell_symbol(cell: &StepCell) -> &'static str {
    if cell.active {
        " ■"
    } else {
        " ·"
    }
}

/// Colour for a step cell; mute wins over solo, solo over active
fn cell_style(cell: &StepCell) -> Style {
    if cell.mute {
        Style::default().fg(Color::DarkGray)
    } else if cell.solo {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if cell.active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    }
}
