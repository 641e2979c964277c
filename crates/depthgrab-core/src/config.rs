use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::SNAPSHOT_PREFIX;
use crate::error::Result;
use crate::frame::ReliableRange;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub depth: DepthRangeConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the three snapshot artifacts land in.
    pub directory: PathBuf,
    /// Filename prefix shared by the artifacts.
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("KinectData"),
            prefix: SNAPSHOT_PREFIX.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DepthRangeConfig {
    /// Near bound of the reliable band, sensor units.
    pub min_reliable: u16,
    /// Far bound override. Absent means widened to the full representable
    /// range so far-field samples still render.
    pub max_reliable: Option<u16>,
}

impl Default for DepthRangeConfig {
    fn default() -> Self {
        Self {
            min_reliable: 0,
            max_reliable: None,
        }
    }
}

impl CaptureConfig {
    pub fn from_toml(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn reliable_range(&self) -> ReliableRange {
        match self.depth.max_reliable {
            Some(max) => ReliableRange::new(self.depth.min_reliable, max),
            None => ReliableRange::widened(self.depth.min_reliable),
        }
    }
}
