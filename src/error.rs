// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the sequencer core.

use thiserror::Error;

/// Errors raised while wiring tracks and steps together
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    /// An element id was looked up but is not in the tree
    #[error("element not found: #{0}")]
    ElementNotFound(String),

    /// `remove_observer` was called with an observer that was never added
    #[error("observer is not registered on this subject")]
    ObserverNotRegistered,

    /// A track with this name already exists
    #[error("track already exists: {0}")]
    DuplicateTrack(String),

    /// Track names must be non-empty and free of whitespace
    #[error("invalid track name: {0:?}")]
    InvalidTrackName(String),

    /// A sequencer needs at least one step per track
    #[error("invalid step count: {0}")]
    InvalidStepCount(usize),
}

/// Result alias for sequencer operations
pub type Result<T> = std::result::Result<T, SequencerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SequencerError::ElementNotFound("kickTrack".to_string()).to_string(),
            "element not found: #kickTrack"
        );
        assert_eq!(
            SequencerError::DuplicateTrack("bell".to_string()).to_string(),
            "track already exists: bell"
        );
        assert_eq!(
            SequencerError::InvalidTrackName(String::new()).to_string(),
            "invalid track name: \"\""
        );
    }
}
