//! Effect settings
//!
//! Parsed once from the canvas `data-settings` attribute. Never
//! persisted; the page author owns the configuration.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
}

impl Quality {
    /// Bubble budget for this preset
    pub fn bubble_budget(&self) -> usize {
        match self {
            Quality::Low => 24,
            Quality::Medium => DEFAULT_BUBBLE_COUNT,
            Quality::High => 96,
        }
    }

    /// Whether specular highlight discs draw
    pub fn specular_enabled(&self) -> bool {
        match self {
            Quality::Low => false,
            Quality::Medium | Quality::High => true,
        }
    }
}

/// Page-supplied effect settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: Quality,
    /// Minimize movement: no pointer repulsion, no parallax, no trails
    pub reduced_motion: bool,
    /// Explicit bubble count, overriding the preset budget
    pub bubble_count: Option<usize>,
    /// Fixed RNG seed for reproducible fields
    pub seed: Option<u64>,
    /// Alpha of the per-frame fade rectangle
    pub trail_alpha: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: Quality::Medium,
            reduced_motion: false,
            bubble_count: None,
            seed: None,
            trail_alpha: DEFAULT_TRAIL_ALPHA,
        }
    }
}

impl Settings {
    /// Parse the `data-settings` attribute value. Absent attribute or
    /// malformed JSON falls back to defaults.
    pub fn from_attr(attr: Option<&str>) -> Self {
        let Some(json) = attr else {
            return Self::default();
        };
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("ignoring malformed data-settings ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Bubble count after applying an explicit override
    pub fn effective_bubble_count(&self) -> usize {
        self.bubble_count.unwrap_or(self.quality.bubble_budget())
    }

    /// Pointer repulsion strength (respects reduced_motion)
    pub fn effective_repulsion_strength(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { POINTER_STRENGTH }
    }

    /// Parallax gain (respects reduced_motion)
    pub fn effective_parallax_gain(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { PARALLAX_GAIN }
    }

    /// Fade alpha; reduced motion degenerates the trail to a hard clear
    pub fn effective_trail_alpha(&self) -> f32 {
        if self.reduced_motion { 1.0 } else { self.trail_alpha }
    }

    pub fn specular_enabled(&self) -> bool {
        self.quality.specular_enabled()
    }
}
