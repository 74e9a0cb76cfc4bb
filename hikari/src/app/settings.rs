use crate::{denoise::DenoiseSettings, gbuffer::GBufferView, math::Vec2, scene::BuiltinScene};
use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

/// Settings for a headless render, usually read from a YAML file.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    pub scene: BuiltinScene,
    pub width: u32,
    pub height: u32,
    pub iterations: u32,
    /// Overrides the scene's own trace depth
    pub trace_depth: Option<u32>,
    /// Number of worker threads, all logical cores if unset
    pub threads: Option<usize>,
    pub denoise: DenoiseSettings,
    pub output_dir: PathBuf,
    /// Also write the given G-buffer channel as an image
    pub gbuffer_view: Option<GBufferView>,
    /// Also write the unnormalized accumulation as EXR
    pub write_exr: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scene: BuiltinScene::default(),
            width: 800,
            height: 800,
            iterations: 64,
            trace_depth: None,
            threads: None,
            denoise: DenoiseSettings::default(),
            output_dir: PathBuf::from("."),
            gbuffer_view: None,
            write_exr: false,
        }
    }
}

impl RenderSettings {
    /// Reads settings from the YAML file at `path`. Missing fields are defaulted.
    pub fn load(path: &Path) -> Result<Self, String> {
        let file = std::fs::File::open(path)
            .map_err(|why| format!("Failed to open '{}': {}", path.to_string_lossy(), why))?;
        serde_yaml::from_reader(file)
            .map_err(|why| format!("Failed to parse '{}': {}", path.to_string_lossy(), why))
    }

    /// Parses settings from YAML. Missing fields are defaulted.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|why| format!("Failed to parse settings: {}", why))
    }

    pub fn resolution(&self) -> Vec2<u32> {
        Vec2::new(self.width, self.height)
    }
}
