// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! STEPGRID - a step sequencer grid wired with the observer pattern.
//!
//! Tracks are subjects: their mute and solo buttons notify the track's
//! steps, which are observers that update their classes in response.

pub mod config;
pub mod dom;
pub mod error;
pub mod observer;
pub mod sequencer;
pub mod ui;

pub use config::SequencerConfig;
pub use dom::{ClickEvent, Document, Element, VisualElement};
pub use error::{Result, SequencerError};
pub use observer::{Observer, ObserverHandle, ObserverList, Subject};
pub use sequencer::{init, Button, NotificationContext, Sequencer, Step, Track};
