//! Light configuration — controller endpoint and color policy, loaded from
//! ~/.lumisynth/lights.yaml.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// What to do when a note falls outside the themed ranges (`note / 24 > 4`).
///
/// The controller still expects a command (the light must go dark), but the
/// hue/saturation fed to the color conversion is a policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutOfRangePolicy {
    /// Reuse the hue/saturation from the last themed note (starting from
    /// h=0, s=0). Matches the behavior of older controller firmware setups.
    HoldLast,
    /// Use h=0, s=0 — a defined neutral, dark-white on the wire.
    Neutral,
    /// Return an error to the caller instead of sending anything.
    Reject,
}

/// Light configuration loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightConfig {
    /// Destination address of the light controller.
    #[serde(default = "default_target")]
    pub target: String,
    /// Policy for notes above the themed ranges.
    #[serde(default = "default_policy")]
    pub out_of_range: OutOfRangePolicy,
}

fn default_target() -> String {
    "192.168.3.2:9909".to_string()
}

fn default_policy() -> OutOfRangePolicy {
    OutOfRangePolicy::Neutral
}

impl LightConfig {
    /// Load config from the standard path (~/.lumisynth/lights.yaml).
    /// Returns None if the file doesn't exist (graceful fallback).
    pub fn load() -> Option<Self> {
        let home = dirs::home_dir()?;
        let path = home.join(".lumisynth").join("lights.yaml");
        Self::load_from(&path)
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        serde_yaml::from_str(&content).ok()
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            out_of_range: default_policy(),
        }
    }
}
