// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Element ids and markup for tracks and steps.
//!
//! For a track named `kick` with two steps the produced tree is:
//!
//! ```text
//! div.track#kickTrack
//!   div.track-controls
//!     p.track-name                  "kick"
//!     button.mute-button#kickMuteBtn  "M"
//!     button.solo-button#kickSoloBtn  "S"
//!   div.track-steps#kickTrackSteps
//!     div.step#kickTrackstep1
//!     div.step#kickTrackstep2
//! ```

use crate::dom::Element;

/// Class of a track container
pub const TRACK_CLASS: &str = "track";
/// Class of the controls row
pub const TRACK_CONTROLS_CLASS: &str = "track-controls";
/// Class of the track name label
pub const TRACK_NAME_CLASS: &str = "track-name";
/// Class of the steps container
pub const TRACK_STEPS_CLASS: &str = "track-steps";
/// Class of a mute button
pub const MUTE_BUTTON_CLASS: &str = "mute-button";
/// Class of a solo button
pub const SOLO_BUTTON_CLASS: &str = "solo-button";
/// Class of a step cell
pub const STEP_CLASS: &str = "step";

/// Id of the track container
pub fn track_id(track: &str) -> String {
    format!("{}Track", track)
}

/// Id of the mute button
pub fn mute_button_id(track: &str) -> String {
    format!("{}MuteBtn", track)
}

/// Id of the solo button
pub fn solo_button_id(track: &str) -> String {
    format!("{}SoloBtn", track)
}

/// Id of the steps container
pub fn steps_container_id(track: &str) -> String {
    format!("{}TrackSteps", track)
}

/// Id of a step cell; `step` is 1-based
pub fn step_id(track: &str, step: usize) -> String {
    format!("{}step{}", track_id(track), step)
}

/// Build the container, controls and (empty) steps container for a track
pub fn render_track(track: &str) -> Element {
    let controls = Element::new("div").with_class(TRACK_CONTROLS_CLASS);
    controls.append_child(
        &Element::new("p")
            .with_class(TRACK_NAME_CLASS)
            .with_text(track),
    );
    controls.append_child(
        &Element::new("button")
            .with_id(mute_button_id(track))
            .with_class(MUTE_BUTTON_CLASS)
            .with_text("M"),
    );
    controls.append_child(
        &Element::new("button")
            .with_id(solo_button_id(track))
            .with_class(SOLO_BUTTON_CLASS)
            .with_text("S"),
    );

    let steps = Element::new("div")
        .with_id(steps_container_id(track))
        .with_class(TRACK_STEPS_CLASS);

    let container = Element::new("div")
        .with_id(track_id(track))
        .with_class(TRACK_CLASS);
    container.append_child(&controls);
    container.append_child(&steps);
    container
}

/// Append `count` step cells (numbered from 1) to a steps container
pub fn render_steps(container: &Element, track: &str, count: usize) {
    for step in 1..=count {
        container.append_child(
            &Element::new("div")
                .with_id(step_id(track, step))
                .with_class(STEP_CLASS),
        );
    }
}
