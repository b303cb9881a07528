use std::cmp::Ordering::*;

use num::{Float, NumCast};

use super::config::WaveformConfig;
use super::error::{WavePeaksError, WavePeaksResult};
use super::resample::resample_array_with;

pub trait Max<T> {
    fn max(&self) -> Option<T>;
}

impl<T: Copy + PartialOrd<T>> Max<T> for [T] {
    fn max(&self) -> Option<T> {
        let mut iter = self.iter();
        let mut max = *iter.next()?;
        for &elem in iter {
            max = match elem.partial_cmp(&max).unwrap_or(Equal) {
                Less | Equal => max,
                Greater => elem,
            };
        }
        Some(max)
    }
}

/// Scales a slice so its largest magnitude becomes one.
///
/// All-zero and empty slices are left untouched.
pub trait Normalize<T> {
    fn normalize(&mut self);
}

impl<T: Float> Normalize<T> for [T] {
    fn normalize(&mut self) {
        let peak = self.iter().fold(T::zero(), |acc, v| acc.max(v.abs()));
        if peak == T::zero() {
            return;
        }
        for v in self.iter_mut() {
            *v = *v / peak;
        }
    }
}

/// Peak amplitudes of an audio track, one per slice of its duration
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform<T> {
    peaks: Vec<T>,
}

impl<T: Float> Waveform<T> {
    pub fn new(peaks: Vec<T>) -> Waveform<T> {
        Waveform { peaks: peaks }
    }

    pub fn peaks(&self) -> &[T] {
        &self.peaks
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Peaks stretched or thinned to exactly `count` points
    pub fn fit(&self, count: usize, config: &WaveformConfig) -> WavePeaksResult<Vec<T>> {
        debug!("fitting {} peaks to {} points", self.peaks.len(), count);
        resample_array_with(&self.peaks, count, config.downsample)
    }

    /// Heights of the bars that fit a `width` x `height` box.
    ///
    /// Peaks are expected in `0..=1`. Each bar is `peak * height`, raised to `min_bar_height` and
    /// capped at `height`.
    pub fn bars(&self, width: f64, height: f64, config: &WaveformConfig) -> WavePeaksResult<Vec<T>> {
        config.validate()?;
        if !width.is_finite() || !height.is_finite() {
            return Err(WavePeaksError::Config(
                format!("waveform box must be finite, got {} x {}", width, height)));
        }
        let count = config.bar_count(width);
        if count == 0 {
            return Ok(Vec::new());
        }

        let cast = |v: f64| <T as NumCast>::from(v)
            .ok_or(WavePeaksError::NumericCast("bar height does not fit sample type"));
        let height = cast(height)?;
        let floor = cast(config.min_bar_height)?.min(height);

        let bars = self.fit(count, config)?
            .into_iter()
            .map(|peak| (peak * height).max(floor).min(height))
            .collect();
        Ok(bars)
    }
}

impl<T: Float> From<Vec<T>> for Waveform<T> {
    fn from(peaks: Vec<T>) -> Self {
        Waveform::new(peaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::resample::DownsampleMethod;

    #[test]
    fn test_max() {
        let data = [0.2f64, 0.9, 0.4];
        assert_eq!(data.max(), Some(0.9));
        let empty: [f64; 0] = [];
        assert_eq!(empty.max(), None);
    }

    #[test]
    fn test_normalize() {
        let mut data = vec![0.5f64, -2.0, 1.0];
        data.normalize();
        assert_eq!(data, vec![0.25, -1.0, 0.5]);

        let mut silent = vec![0f64; 4];
        silent.normalize();
        assert_eq!(silent, vec![0f64; 4]);
    }

    #[test]
    fn test_fit_both_ways() {
        let config = WaveformConfig::default();
        let wave = Waveform::new(vec![5f64, 10.0, 15.0, 10.0, 5.0, 0.0, 5.0]);
        assert_eq!(wave.fit(4, &config).unwrap(), vec![5f64, 15.0, 0.0, 5.0]);
        assert_eq!(wave.fit(13, &config).unwrap().len(), 13);
        assert_eq!(wave.fit(7, &config).unwrap(), wave.peaks().to_vec());

        let stride = WaveformConfig { downsample: DownsampleMethod::Stride, ..config };
        assert_eq!(wave.fit(4, &stride).unwrap(), vec![5f64, 15.0, 5.0, 5.0]);
    }

    #[test]
    fn test_fit_empty() {
        let wave: Waveform<f64> = Waveform::new(Vec::new());
        assert!(wave.is_empty());
        assert_eq!(wave.fit(10, &WaveformConfig::default()), Err(WavePeaksError::EmptyInput));
    }

    #[test]
    fn test_bars() {
        let config = WaveformConfig::default();
        let wave = Waveform::from(vec![0f64, 0.5, 1.0]);
        // width 18 fits 5 bars
        let bars = wave.bars(18.0, 40.0, &config).unwrap();
        assert_eq!(bars, vec![2.0, 10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_bars_without_room() {
        let wave = Waveform::from(vec![0.3f32, 0.6]);
        assert!(wave.bars(1.0, 40.0, &WaveformConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_bars_rejects_unvalidated_config() {
        let wave = Waveform::from(vec![0.1f64, 0.5, 0.9]);
        let flat = WaveformConfig { bar_width: 0.0, bar_gap: 0.0, ..WaveformConfig::default() };
        match wave.bars(10.0, 40.0, &flat) {
            Err(WavePeaksError::Config(_)) => {}
            other => panic!("expected a config error, got {:?}", other),
        }
        let negative = WaveformConfig { min_bar_height: -1.0, ..WaveformConfig::default() };
        assert!(wave.bars(10.0, 40.0, &negative).is_err());
    }

    #[test]
    fn test_bars_rejects_unbounded_box() {
        let wave = Waveform::from(vec![0.1f64, 0.5, 0.9]);
        let config = WaveformConfig::default();
        assert!(wave.bars(std::f64::INFINITY, 40.0, &config).is_err());
        assert!(wave.bars(10.0, std::f64::NAN, &config).is_err());
        // finite but far too wide to allocate
        assert_eq!(wave.bars(1e300, 40.0, &config),
                   Err(WavePeaksError::Allocation(std::usize::MAX)));
    }
}
