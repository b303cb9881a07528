use std::cmp;

use num::{Float, NumCast, ToPrimitive};
use serde::{Deserialize, Serialize};

use super::error::{WavePeaksError, WavePeaksResult};

/// Selection used when a sequence has to shrink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownsampleMethod {
    /// Largest-Triangle-Three-Buckets, keeps the visually significant points
    Lttb,
    /// Uniform index stride, rounded half-up
    Stride,
}

impl Default for DownsampleMethod {
    fn default() -> Self {
        DownsampleMethod::Lttb
    }
}

fn check_args<T>(input: &[T], target_len: usize) -> WavePeaksResult<()> {
    if input.is_empty() {
        return Err(WavePeaksError::EmptyInput);
    }
    if target_len == 0 {
        return Err(WavePeaksError::ZeroTargetLength);
    }
    Ok(())
}

fn check_selection<T>(input: &[T], target_len: usize) -> WavePeaksResult<()> {
    check_args(input, target_len)?;
    if target_len > input.len() {
        return Err(WavePeaksError::TargetExceedsInput { len: input.len(), target: target_len });
    }
    Ok(())
}

fn cast<T: NumCast, V: ToPrimitive>(v: V) -> WavePeaksResult<T> {
    <T as NumCast>::from(v).ok_or(WavePeaksError::NumericCast("value does not fit sample type"))
}

/// Stretches `input` to `target_len` points by linear interpolation.
///
/// Output index `i` maps to source position `i * (N - 1) / (M - 1)`. The position is kept as an
/// integer quotient and remainder, so the first and last outputs are exactly `input[0]` and
/// `input[N - 1]`, and every output that lands on a whole source index copies it verbatim.
///
/// A `target_len` below `input.len()` is accepted and thins the sequence by interpolation; use
/// `downsample_array` to select original points instead.
pub fn upsample_array<T: Float>(input: &[T], target_len: usize) -> WavePeaksResult<Vec<T>> {
    check_args(input, target_len)?;
    if target_len == 1 {
        return Ok(vec![input[0]]);
    }

    let span = input.len() - 1;
    let steps = target_len - 1;
    let denom: T = cast(steps)?;

    let mut resampled = Vec::<T>::new();
    resampled.try_reserve_exact(target_len)
        .map_err(|_| WavePeaksError::Allocation(target_len))?;
    for i in 0..target_len {
        let scaled = i.checked_mul(span)
            .ok_or(WavePeaksError::NumericCast("source position overflows usize"))?;
        let lo = scaled / steps;
        let rem = scaled % steps;
        if rem == 0 {
            resampled.push(input[lo]);
            continue;
        }
        let hi = cmp::min(lo + 1, span);
        let frac = cast::<T, _>(rem)? / denom;
        resampled.push(input[lo] * (T::one() - frac) + input[hi] * frac);
    }
    Ok(resampled)
}

/// Shrinks `input` to `target_len` points with Largest-Triangle-Three-Buckets selection.
///
/// The first and last samples are always kept. The interior is split into `target_len - 2`
/// buckets of `(N - 2) / (M - 2)` samples; from each bucket the sample forming the largest
/// triangle with the previously kept sample and the mean of the following bucket is kept.
/// Every output value is an input value, in input order.
pub fn downsample_array<T: Float>(input: &[T], target_len: usize) -> WavePeaksResult<Vec<T>> {
    check_selection(input, target_len)?;
    let len = input.len();
    let last = len - 1;
    if target_len == len {
        return Ok(input.to_vec());
    }
    match target_len {
        1 => return Ok(vec![input[0]]),
        2 => return Ok(vec![input[0], input[last]]),
        _ => {}
    }

    let buckets = target_len - 2;
    // first index of bucket `b`; bound(buckets) is always `last`
    let bound = |b: usize| b * (len - 2) / buckets + 1;

    let mut sampled = Vec::<T>::with_capacity(target_len);
    sampled.push(input[0]);

    let mut a = 0;
    for b in 0..buckets {
        let start = bound(b);
        let end = bound(b + 1);
        let (avg_x, avg_y) = centroid(input, end, cmp::min(bound(b + 2), len))?;

        let ax: T = cast(a)?;
        let ay = input[a];
        let mut next_a = start;
        let mut max_area: Option<T> = None;
        for j in start..end {
            let jx: T = cast(j)?;
            // twice the triangle area, which orders candidates the same way
            let area = ((ax - avg_x) * (input[j] - ay) - (ax - jx) * (avg_y - ay)).abs();
            if max_area.map_or(true, |max| area > max) {
                max_area = Some(area);
                next_a = j;
            }
        }

        sampled.push(input[next_a]);
        a = next_a;
    }

    sampled.push(input[last]);
    Ok(sampled)
}

/// Mean index and mean value of `input[from..to]`
fn centroid<T: Float>(input: &[T], from: usize, to: usize) -> WavePeaksResult<(T, T)> {
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    for (i, v) in input[from..to].iter().enumerate() {
        sum_x = sum_x + cast::<T, _>(from + i)?;
        sum_y = sum_y + *v;
    }
    let count: T = cast(to - from)?;
    Ok((sum_x / count, sum_y / count))
}

/// Shrinks `input` to `target_len` points by uniform index stride.
///
/// Output `i` is `input[round(i * (N - 1) / (M - 1))]`, with ties rounded half-up. The rounding is
/// done in integer arithmetic, so the selection is exact for any length.
pub fn decimate_array<T: Copy>(input: &[T], target_len: usize) -> WavePeaksResult<Vec<T>> {
    check_selection(input, target_len)?;
    if target_len == 1 {
        return Ok(vec![input[0]]);
    }

    let span = input.len() - 1;
    let steps = target_len - 1;
    let mut sampled = Vec::<T>::with_capacity(target_len);
    for i in 0..target_len {
        let twice = i.checked_mul(span)
            .and_then(|p| p.checked_mul(2))
            .and_then(|p| p.checked_add(steps))
            .ok_or(WavePeaksError::NumericCast("source index overflows usize"))?;
        sampled.push(input[twice / (2 * steps)]);
    }
    Ok(sampled)
}

/// Resamples `input` to `target_len` points in whichever direction is needed, shrinking with
/// LTTB selection.
pub fn resample_array<T: Float>(input: &[T], target_len: usize) -> WavePeaksResult<Vec<T>> {
    resample_array_with(input, target_len, DownsampleMethod::default())
}

/// Like `resample_array`, shrinking with the given selection method.
pub fn resample_array_with<T: Float>(
    input: &[T],
    target_len: usize,
    method: DownsampleMethod,
) -> WavePeaksResult<Vec<T>> {
    check_args(input, target_len)?;
    let len = input.len();
    match target_len.cmp(&len) {
        cmp::Ordering::Greater => {
            trace!("upsampling {} samples to {}", len, target_len);
            upsample_array(input, target_len)
        }
        cmp::Ordering::Less => {
            trace!("downsampling {} samples to {} ({:?})", len, target_len, method);
            match method {
                DownsampleMethod::Lttb => downsample_array(input, target_len),
                DownsampleMethod::Stride => decimate_array(input, target_len),
            }
        }
        cmp::Ordering::Equal => Ok(input.to_vec()),
    }
}

pub trait Resample<T> {
    fn upsample(&self, target_len: usize) -> WavePeaksResult<Vec<T>>;
    fn downsample(&self, target_len: usize) -> WavePeaksResult<Vec<T>>;
    fn decimate(&self, target_len: usize) -> WavePeaksResult<Vec<T>>;
    fn resample(&self, target_len: usize) -> WavePeaksResult<Vec<T>>;
    fn resample_with(&self, target_len: usize, method: DownsampleMethod) -> WavePeaksResult<Vec<T>>;
}

impl<T: Float> Resample<T> for [T] {
    fn upsample(&self, target_len: usize) -> WavePeaksResult<Vec<T>> {
        upsample_array(self, target_len)
    }

    fn downsample(&self, target_len: usize) -> WavePeaksResult<Vec<T>> {
        downsample_array(self, target_len)
    }

    fn decimate(&self, target_len: usize) -> WavePeaksResult<Vec<T>> {
        decimate_array(self, target_len)
    }

    fn resample(&self, target_len: usize) -> WavePeaksResult<Vec<T>> {
        resample_array(self, target_len)
    }

    fn resample_with(&self, target_len: usize, method: DownsampleMethod) -> WavePeaksResult<Vec<T>> {
        resample_array_with(self, target_len, method)
    }
}
