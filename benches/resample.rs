#![cfg(feature = "nightly")]
#![feature(test)]

extern crate test;
extern crate wavepeaks;

use wavepeaks::*;

fn peaks(len: usize) -> Vec<f64> {
    (0..len).map(|i| ((i as f64) * 0.01).sin().abs()).collect()
}

#[bench]
fn bench_upsample(b: &mut test::Bencher) {
    let data = peaks(256);
    b.iter(|| upsample_array(&data, 2048));
}

#[bench]
fn bench_downsample_lttb(b: &mut test::Bencher) {
    let data = peaks(8192);
    b.iter(|| downsample_array(&data, 512));
}

#[bench]
fn bench_decimate(b: &mut test::Bencher) {
    let data = peaks(8192);
    b.iter(|| decimate_array(&data, 512));
}
