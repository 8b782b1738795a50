// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the sequencer grid.
//!
//! A config names the initial tracks, the tracks appended after startup
//! and the number of steps per track. Files are YAML unless the path
//! ends in `.toml`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::dom::{Document, Element};
use crate::sequencer::{self, validate_track_name, Sequencer, DEFAULT_STEP_COUNT, DEFAULT_TRACKS};

/// Id of the element the grid is rendered into
pub const ROOT_ID: &str = "sequencer";

/// Grid configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SequencerConfig {
    /// Steps per track
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Tracks rendered at startup
    #[serde(default = "default_tracks")]
    pub tracks: Vec<String>,
    /// Tracks appended with `add_new_track` once startup is done
    #[serde(default = "default_add_tracks")]
    pub add_tracks: Vec<String>,
}

fn default_steps() -> usize {
    DEFAULT_STEP_COUNT
}
fn default_tracks() -> Vec<String> {
    DEFAULT_TRACKS.iter().map(|s| s.to_string()).collect()
}
fn default_add_tracks() -> Vec<String> {
    vec!["bell".to_string()]
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            tracks: default_tracks(),
            add_tracks: default_add_tracks(),
        }
    }
}

impl SequencerConfig {
    /// Load from a YAML or TOML file, chosen by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = if is_toml(path) {
            Self::from_toml(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Write to a file, format chosen by extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = if is_toml(path) {
            self.to_toml()?
        } else {
            self.to_yaml()?
        };
        fs::write(path, text).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Check step count and track names
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            bail!("steps must be at least 1");
        }

        let mut seen = HashSet::new();
        for name in self.tracks.iter().chain(&self.add_tracks) {
            validate_track_name(name)?;
            if !seen.insert(name.as_str()) {
                bail!("duplicate track name: {}", name);
            }
        }
        Ok(())
    }

    /// Build a document holding a fully wired sequencer.
    ///
    /// The grid is rendered into a `div#sequencer` inside the body, then
    /// every entry of `add_tracks` is appended.
    pub fn build(&self) -> Result<(Document, Sequencer)> {
        self.validate()?;

        let document = Document::new();
        let root = Element::new("div").with_id(ROOT_ID);
        document.body().append_child(&root);

        let mut sequencer = sequencer::init(root, self.steps, self.tracks.iter().cloned())
            .context("Failed to initialize sequencer")?;
        for name in &self.add_tracks {
            sequencer
                .add_new_track(name.clone())
                .with_context(|| format!("Failed to add track {:?}", name))?;
        }
        Ok((document, sequencer))
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = SequencerConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SequencerConfig::default());
        assert_eq!(config.steps, 8);
        assert_eq!(config.tracks, vec!["kick", "snare", "hi-hat", "crash"]);
        assert_eq!(config.add_tracks, vec!["bell"]);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
steps: 16
tracks:
  - kick
  - clap
add_tracks: []
"#;

        let config = SequencerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.steps, 16);
        assert_eq!(config.tracks, vec!["kick", "clap"]);
        assert!(config.add_tracks.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
steps = 4
tracks = ["kick"]
add_tracks = ["cowbell"]
"#;

        let config = SequencerConfig::from_toml(text).unwrap();
        assert_eq!(config.steps, 4);
        assert_eq!(config.tracks, vec!["kick"]);
        assert_eq!(config.add_tracks, vec!["cowbell"]);
    }

    #[test]
    fn test_validate() {
        let mut config = SequencerConfig::default();
        assert!(config.validate().is_ok());

        config.steps = 0;
        assert!(config.validate().is_err());

        config.steps = 8;
        config.add_tracks = vec!["kick".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate track name"));

        config.add_tracks = vec!["open hat".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_and_save_by_extension() {
        let dir = tempdir().unwrap();
        let config = SequencerConfig {
            steps: 12,
            tracks: vec!["kick".to_string(), "snare".to_string()],
            add_tracks: Vec::new(),
        };

        for file in ["grid.yaml", "grid.toml"] {
            let path = dir.path().join(file);
            config.save(&path).unwrap();
            assert_eq!(SequencerConfig::load(&path).unwrap(), config);
        }

        let toml_text = fs::read_to_string(dir.path().join("grid.toml")).unwrap();
        assert!(toml_text.contains("steps = 12"));
    }

    #[test]
    fn test_load_rejects_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "steps: 0\n").unwrap();
        assert!(SequencerConfig::load(&path).is_err());

        assert!(SequencerConfig::load(dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_build() {
        let (document, sequencer) = SequencerConfig::default().build().unwrap();
        assert_eq!(sequencer.tracks().len(), 5);
        assert!(document.get_element_by_id("bellTrack").is_some());
        assert!(document.get_element_by_id("crashTrackstep8").is_some());
        assert!(document.get_element_by_id(ROOT_ID).unwrap().ptr_eq(sequencer.root()));
    }
}
