// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Step sequencer grid built on the observer primitives.
//!
//! This module provides:
//! - Markup and id conventions for tracks and steps
//! - `Track`, the subject driven by mute/solo buttons
//! - `Step`, the observer that reflects its track's state
//! - `Sequencer`, which renders the grid and wires tracks to steps

pub mod markup;
pub mod step;
pub mod track;

pub use step::Step;
pub use track::Track;

use std::fmt;
use std::rc::Rc;

use tracing::{info, warn};

use crate::dom::Element;
use crate::error::{Result, SequencerError};

/// Default number of steps per track
pub const DEFAULT_STEP_COUNT: usize = 8;

/// Default track names
pub const DEFAULT_TRACKS: [&str; 4] = ["kick", "snare", "hi-hat", "crash"];

/// Which track button produced a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Mute button
    Mute,
    /// Solo button
    Solo,
}

impl Button {
    /// Name used in notifications and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Button::Mute => "mute",
            Button::Solo => "solo",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload a track sends to its steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationContext {
    /// Button that was pressed
    pub button: Button,
    /// New state of that button's flag
    pub status: bool,
}

/// Check that a name can be embedded in element ids
pub fn validate_track_name(name: &str) -> Result<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(SequencerError::InvalidTrackName(name.to_string()));
    }
    Ok(())
}

/// Composition root: renders tracks and steps under a root element and
/// registers every step on its track.
///
/// The setup calls are meant to run in this order:
/// `render_html_tracks`, `render_html_steps`, `create_concrete_subjects`,
/// `create_concrete_observers`. `init` does exactly that. Tracks can be
/// appended afterwards with `add_new_track`.
pub struct Sequencer {
    root: Element,
    step_count: usize,
    track_names: Vec<String>,
    registered_tracks: Vec<Rc<Track>>,
}

impl Sequencer {
    /// Create a sequencer; nothing is rendered yet
    pub fn new<I, S>(root: Element, step_count: usize, track_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if step_count == 0 {
            return Err(SequencerError::InvalidStepCount(step_count));
        }

        let mut names: Vec<String> = Vec::new();
        for name in track_names {
            let name = name.into();
            validate_track_name(&name)?;
            if names.contains(&name) {
                return Err(SequencerError::DuplicateTrack(name));
            }
            names.push(name);
        }

        Ok(Self {
            root,
            step_count,
            track_names: names,
            registered_tracks: Vec::new(),
        })
    }

    /// Append one track container per track name to the root
    pub fn render_html_tracks(&self) {
        for name in &self.track_names {
            self.root.append_child(&markup::render_track(name));
        }
    }

    /// Fill every track's steps container with step cells
    pub fn render_html_steps(&self) -> Result<()> {
        for name in &self.track_names {
            let container = self.find(&markup::steps_container_id(name))?;
            markup::render_steps(&container, name, self.step_count);
        }
        Ok(())
    }

    /// Create one `Track` per rendered track container
    pub fn create_concrete_subjects(&mut self) -> Result<()> {
        for name in &self.track_names {
            let element = self.find(&markup::track_id(name))?;
            self.registered_tracks.push(Track::new(name.clone(), element));
        }
        info!(tracks = self.registered_tracks.len(), "tracks created");
        Ok(())
    }

    /// Create one `Step` per cell and register it on its track
    pub fn create_concrete_observers(&self) -> Result<()> {
        for track in &self.registered_tracks {
            self.attach_steps(track)?;
        }
        Ok(())
    }

    /// Render, wire up and remember a new track
    pub fn add_new_track(&mut self, name: impl Into<String>) -> Result<Rc<Track>> {
        let name = name.into();
        if let Err(e) = self.check_new_name(&name) {
            warn!(track = %name, error = %e, "rejected new track");
            return Err(e);
        }

        // Wired while detached; appended to the root only on success
        let container = markup::render_track(&name);
        let steps = find_in(&container, &markup::steps_container_id(&name))?;
        markup::render_steps(&steps, &name, self.step_count);

        let track = Track::new(name.clone(), container.clone());
        self.attach_steps(&track)?;

        self.root.append_child(&container);
        self.track_names.push(name.clone());
        self.registered_tracks.push(Rc::clone(&track));
        info!(track = %name, steps = self.step_count, "track added");
        Ok(track)
    }

    fn check_new_name(&self, name: &str) -> Result<()> {
        validate_track_name(name)?;
        if self.track_names.iter().any(|n| n == name) {
            return Err(SequencerError::DuplicateTrack(name.to_string()));
        }
        Ok(())
    }

    /// Register a `Step` for every cell under the track's own container
    fn attach_steps(&self, track: &Track) -> Result<()> {
        let elements = (1..=self.step_count)
            .map(|step| find_in(track.element(), &markup::step_id(track.name(), step)))
            .collect::<Result<Vec<_>>>()?;
        for element in elements {
            track.add_observer(Step::new(element));
        }
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Element> {
        find_in(&self.root, id)
    }

    /// Root element the grid is rendered into
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Steps per track
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Track names in display order
    pub fn track_names(&self) -> &[String] {
        &self.track_names
    }

    /// Tracks created so far, in display order
    pub fn tracks(&self) -> &[Rc<Track>] {
        &self.registered_tracks
    }

    /// Look up a track by name
    pub fn track(&self, name: &str) -> Option<&Rc<Track>> {
        self.registered_tracks.iter().find(|t| t.name() == name)
    }

    /// Step cell of a track; `step` is 1-based
    pub fn step_element(&self, track: &str, step: usize) -> Result<Element> {
        self.find(&markup::step_id(track, step))
    }
}

fn find_in(scope: &Element, id: &str) -> Result<Element> {
    scope
        .get_element_by_id(id)
        .ok_or_else(|| SequencerError::ElementNotFound(id.to_string()))
}

/// Build a fully wired sequencer under `root`
pub fn init<I, S>(root: Element, step_count: usize, track_names: I) -> Result<Sequencer>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut sequencer = Sequencer::new(root, step_count, track_names)?;
    sequencer.render_html_tracks();
    sequencer.render_html_steps()?;
    sequencer.create_concrete_subjects()?;
    sequencer.create_concrete_observers()?;
    Ok(sequencer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{VisualElement, CLASS_ACTIVE, CLASS_MUTE, CLASS_SOLO};

    fn root() -> Element {
        Element::new("div").with_id("sequencer")
    }

    #[test]
    fn test_button_display() {
        assert_eq!(Button::Mute.to_string(), "mute");
        assert_eq!(Button::Solo.as_str(), "solo");
    }

    #[test]
    fn test_validate_track_name() {
        assert!(validate_track_name("hi-hat").is_ok());
        assert!(validate_track_name("").is_err());
        assert!(validate_track_name("open hat").is_err());
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert_eq!(
            Sequencer::new(root(), 0, ["kick"]).err(),
            Some(SequencerError::InvalidStepCount(0))
        );
        assert_eq!(
            Sequencer::new(root(), 8, ["kick", "kick"]).err(),
            Some(SequencerError::DuplicateTrack("kick".to_string()))
        );
        assert_eq!(
            Sequencer::new(root(), 8, [""]).err(),
            Some(SequencerError::InvalidTrackName(String::new()))
        );
    }

    #[test]
    fn test_render_order() {
        let sequencer = Sequencer::new(root(), 4, ["kick", "snare"]).unwrap();
        sequencer.render_html_tracks();
        assert_eq!(sequencer.root().child_count(), 2);

        sequencer.render_html_steps().unwrap();
        let steps = sequencer.root().get_element_by_id("snareTrackSteps").unwrap();
        assert_eq!(steps.child_count(), 4);
    }

    #[test]
    fn test_steps_before_tracks_is_an_error() {
        let sequencer = Sequencer::new(root(), 4, ["kick"]).unwrap();
        assert_eq!(
            sequencer.render_html_steps(),
            Err(SequencerError::ElementNotFound("kickTrackSteps".to_string()))
        );
    }

    #[test]
    fn test_subjects_before_render_is_an_error() {
        let mut sequencer = Sequencer::new(root(), 4, ["kick"]).unwrap();
        assert_eq!(
            sequencer.create_concrete_subjects(),
            Err(SequencerError::ElementNotFound("kickTrack".to_string()))
        );
    }

    #[test]
    fn test_init_registers_steps() {
        let sequencer = init(root(), 8, DEFAULT_TRACKS).unwrap();
        assert_eq!(sequencer.tracks().len(), 4);
        for track in sequencer.tracks() {
            assert_eq!(track.observer_count(), 8);
        }
        assert_eq!(sequencer.track_names(), &["kick", "snare", "hi-hat", "crash"]);
    }

    #[test]
    fn test_mute_reaches_only_own_steps() {
        let sequencer = init(root(), 8, ["kick", "snare"]).unwrap();
        sequencer
            .root()
            .get_element_by_id("kickMuteBtn")
            .unwrap()
            .click();

        for step in 1..=8 {
            assert!(sequencer.step_element("kick", step).unwrap().has_class(CLASS_MUTE));
            assert!(!sequencer.step_element("snare", step).unwrap().has_class(CLASS_MUTE));
        }
        assert!(sequencer.track("kick").unwrap().is_mute());
        assert!(!sequencer.track("snare").unwrap().is_mute());
    }

    #[test]
    fn test_step_click_does_not_touch_track() {
        let sequencer = init(root(), 8, ["kick"]).unwrap();
        let cell = sequencer.step_element("kick", 3).unwrap();
        cell.click();

        assert!(cell.has_class(CLASS_ACTIVE));
        assert!(!sequencer.step_element("kick", 2).unwrap().has_class(CLASS_ACTIVE));
        let track = sequencer.track("kick").unwrap();
        assert!(!track.is_mute());
        assert!(!track.is_solo());
    }

    #[test]
    fn test_add_new_track() {
        let mut sequencer = init(root(), 8, ["kick", "snare"]).unwrap();
        let bell = sequencer.add_new_track("bell").unwrap();

        assert_eq!(bell.observer_count(), 8);
        assert_eq!(sequencer.tracks().len(), 3);
        assert_eq!(sequencer.root().children().len(), 3);
        assert_eq!(sequencer.track_names().last().map(String::as_str), Some("bell"));

        sequencer
            .root()
            .get_element_by_id("bellSoloBtn")
            .unwrap()
            .click();
        assert!(bell.is_solo());
        assert!(sequencer.step_element("bell", 8).unwrap().has_class(CLASS_SOLO));
    }

    #[test]
    fn test_add_new_track_rejects_duplicates() {
        let mut sequencer = init(root(), 8, ["kick"]).unwrap();
        assert_eq!(
            sequencer.add_new_track("kick").err(),
            Some(SequencerError::DuplicateTrack("kick".to_string()))
        );
        assert_eq!(
            sequencer.add_new_track("two words").err(),
            Some(SequencerError::InvalidTrackName("two words".to_string()))
        );
        // Nothing was rendered for the rejected names
        assert_eq!(sequencer.root().child_count(), 1);
    }

    #[test]
    fn test_add_new_track_wires_its_own_cells() {
        let mut sequencer = init(root(), 4, ["kick"]).unwrap();
        let stray = Element::new("div").with_id("bellTrackstep1");
        sequencer.root().append_child(&stray);

        let bell = sequencer.add_new_track("bell").unwrap();
        assert_eq!(bell.observer_count(), 4);
        assert_eq!(sequencer.root().child_count(), 3);

        bell.element()
            .get_element_by_id("bellMuteBtn")
            .unwrap()
            .click();
        let cell = bell.element().get_element_by_id("bellTrackstep1").unwrap();
        assert!(cell.has_class(CLASS_MUTE));
        assert!(!stray.has_class(CLASS_MUTE));
    }

    #[test]
    fn test_attach_steps_missing_cell_is_an_error() {
        let sequencer = Sequencer::new(root(), 4, ["kick"]).unwrap();
        let container = markup::render_track("kick");
        let steps = container.get_element_by_id("kickTrackSteps").unwrap();
        markup::render_steps(&steps, "kick", 3);
        let track = Track::new("kick", container);

        assert_eq!(
            sequencer.attach_steps(&track),
            Err(SequencerError::ElementNotFound("kickTrackstep4".to_string()))
        );
        // No partial registration
        assert_eq!(track.observer_count(), 0);
        assert_eq!(sequencer.root().child_count(), 0);
    }
}
