//! Waveform layout parameters
//!
//! Every field has a default, so a TOML file only needs the values it changes:
//!
//! ```toml
//! bar_width = 3.0
//! downsample = "stride"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{WavePeaksError, WavePeaksResult};
use super::resample::DownsampleMethod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformConfig {
    pub bar_width: f64,
    pub bar_gap: f64,
    /// Bars are never drawn shorter than this, so silence stays visible
    pub min_bar_height: f64,
    /// Space reserved on each side of the bars
    pub padding: f64,
    pub downsample: DownsampleMethod,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        WaveformConfig {
            bar_width: 2.0,
            bar_gap: 2.0,
            min_bar_height: 2.0,
            padding: 0.0,
            downsample: DownsampleMethod::Lttb,
        }
    }
}

impl WaveformConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> WavePeaksResult<Self> {
        let config: WaveformConfig = toml::from_str(toml_str)
            .map_err(|e| WavePeaksError::Config(format!("failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WavePeaksResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WavePeaksError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        debug!("loaded waveform config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> WavePeaksResult<()> {
        let sizes = [
            ("bar_width", self.bar_width),
            ("bar_gap", self.bar_gap),
            ("min_bar_height", self.min_bar_height),
            ("padding", self.padding),
        ];
        for &(name, value) in sizes.iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(WavePeaksError::Config(
                    format!("{} must be a finite, non-negative number, got {}", name, value)));
            }
        }
        if self.bar_width + self.bar_gap <= 0.0 {
            return Err(WavePeaksError::Config("bar_width and bar_gap cannot both be zero".into()));
        }
        Ok(())
    }

    /// Number of bars that fit in `width`.
    ///
    /// The last bar needs no trailing gap, hence the extra `bar_gap` in the numerator.
    pub fn bar_count(&self, width: f64) -> usize {
        let usable = width - 2.0 * self.padding;
        if !(usable > 0.0) {
            warn!("no room for waveform bars in width {}", width);
            return 0;
        }
        let count = ((usable + self.bar_gap) / (self.bar_width + self.bar_gap)).floor();
        if !count.is_finite() || count < 0.0 {
            warn!("bar size {} + {} gives no usable bar count", self.bar_width, self.bar_gap);
            return 0;
        }
        count as usize
    }
}
