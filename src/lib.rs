//! Resampling of waveform peak arrays.
//!
//! `upsample_array` stretches a sequence by linear interpolation, `downsample_array` and
//! `decimate_array` shrink it by selecting original points. `Waveform` ties them to a bar layout.

extern crate num;
extern crate serde;
extern crate thiserror;
extern crate toml;
#[macro_use]
extern crate log;

// Declare local mods
pub mod config;
pub mod error;
pub mod resample;
pub mod waves;

pub use config::WaveformConfig;
pub use error::{WavePeaksError, WavePeaksResult};
pub use resample::{decimate_array, downsample_array, resample_array, resample_array_with,
                   upsample_array, DownsampleMethod, Resample};
pub use waves::{Max, Normalize, Waveform};
