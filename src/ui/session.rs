// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Terminal-independent UI state.
//!
//! A session owns the document and the sequencer and turns key actions
//! into clicks on the document, so everything the terminal does goes
//! through the same listeners a pointer click would.

use std::time::{Duration, Instant};

use tracing::debug;

use super::{KeyAction, StepCell, TrackRow};
use crate::dom::{Document, VisualElement, CLASS_ACTIVE, CLASS_MUTE, CLASS_SOLO};
use crate::error::Result;
use crate::sequencer::{markup, Sequencer};

/// How long a status message stays visible
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// UI state plus the sequencer it drives
pub struct Session {
    document: Document,
    sequencer: Sequencer,
    cursor_track: usize,
    cursor_step: usize,
    show_help: bool,
    running: bool,
    status_message: Option<String>,
    status_time: Option<Instant>,
}

impl Session {
    /// Create a session over a built document and sequencer
    pub fn new(document: Document, sequencer: Sequencer) -> Self {
        Self {
            document,
            sequencer,
            cursor_track: 0,
            cursor_step: 0,
            show_help: false,
            running: true,
            status_message: None,
            status_time: None,
        }
    }

    /// The document being drawn
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The sequencer being driven
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Cursor as (track, step), both 0-based
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_track, self.cursor_step)
    }

    /// Whether the help overlay is visible
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the app should keep running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current status message, if any
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Set a status message that will be displayed temporarily
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_time = Some(Instant::now());
    }

    /// Clear expired status message
    pub fn clear_expired_status(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() > STATUS_TIMEOUT {
                self.status_message = None;
                self.status_time = None;
            }
        }
    }

    /// Read the grid back out of the element tree
    pub fn rows(&self) -> Vec<TrackRow> {
        let step_count = self.sequencer.step_count();
        self.sequencer
            .tracks()
            .iter()
            .map(|track| {
                let steps = (1..=step_count)
                    .map(|step| {
                        self.sequencer
                            .step_element(track.name(), step)
                            .map(|el| StepCell {
                                active: el.has_class(CLASS_ACTIVE),
                                mute: el.has_class(CLASS_MUTE),
                                solo: el.has_class(CLASS_SOLO),
                            })
                            .unwrap_or_default()
                    })
                    .collect();
                TrackRow {
                    name: track.name().to_string(),
                    mute: track.is_mute(),
                    solo: track.is_solo(),
                    steps,
                }
            })
            .collect()
    }

    /// Apply a key action
    pub fn apply(&mut self, action: KeyAction) -> Result<()> {
        debug!(?action, "key action");
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.running = false,
            KeyAction::ToggleHelp => self.show_help = !self.show_help,
            KeyAction::MoveUp => self.cursor_track = self.cursor_track.saturating_sub(1),
            KeyAction::MoveDown => {
                let last = self.sequencer.tracks().len().saturating_sub(1);
                self.cursor_track = (self.cursor_track + 1).min(last);
            }
            KeyAction::MoveLeft => self.cursor_step = self.cursor_step.saturating_sub(1),
            KeyAction::MoveRight => {
                let last = self.sequencer.step_count().saturating_sub(1);
                self.cursor_step = (self.cursor_step + 1).min(last);
            }
            KeyAction::ToggleStep => {
                let Some(name) = self.current_track_name() else {
                    return Ok(());
                };
                let step = self.cursor_step + 1;
                self.document.click(&markup::step_id(&name, step))?;
                let on = self.sequencer.step_element(&name, step)?.has_class(CLASS_ACTIVE);
                self.set_status(format!("{} step {} {}", name, step, on_off(on)));
            }
            KeyAction::ToggleMute => {
                let Some(name) = self.current_track_name() else {
                    return Ok(());
                };
                self.document.click(&markup::mute_button_id(&name))?;
                let muted = self.sequencer.track(&name).map(|t| t.is_mute()).unwrap_or(false);
                self.set_status(format!("{} mute {}", name, on_off(muted)));
            }
            KeyAction::ToggleSolo => {
                let Some(name) = self.current_track_name() else {
                    return Ok(());
                };
                self.document.click(&markup::solo_button_id(&name))?;
                let soloed = self.sequencer.track(&name).map(|t| t.is_solo()).unwrap_or(false);
                self.set_status(format!("{} solo {}", name, on_off(soloed)));
            }
            KeyAction::AddTrack => {
                let name = self.next_track_name();
                self.sequencer.add_new_track(name.clone())?;
                self.cursor_track = self.sequencer.tracks().len() - 1;
                self.set_status(format!("Added track {}", name));
            }
        }
        Ok(())
    }

    fn current_track_name(&self) -> Option<String> {
        self.sequencer
            .tracks()
            .get(self.cursor_track)
            .map(|t| t.name().to_string())
    }

    /// First `trackN` name not already taken
    fn next_track_name(&self) -> String {
        let taken = self.sequencer.track_names();
        (taken.len() + 1..)
            .map(|n| format!("track{}", n))
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or_else(|| "track".to_string())
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}
