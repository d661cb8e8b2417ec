use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use texcodec_hdr::decode_hdr;
use texcodec_texture_common::SliceSource;

const WIDTH: usize = 1024;
const HEIGHT: usize = 1024;

fn header() -> Vec<u8> {
    format!("#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n-Y {HEIGHT} +X {WIDTH}\n").into_bytes()
}

// Literal pixels only, no pixel ever looks like a run marker.
fn flat_image() -> Vec<u8> {
    let mut data = header();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            data.extend_from_slice(&[(x % 250) as u8 + 3, (y % 250) as u8 + 3, 100, 130]);
        }
    }
    data
}

// Per-channel encoding alternating 64-byte literal spans and 63-pixel runs.
fn channel_run_image() -> Vec<u8> {
    let mut data = header();
    for y in 0..HEIGHT {
        data.extend_from_slice(&[2, 2, (WIDTH >> 8) as u8, WIDTH as u8]);
        for channel in 0..4u8 {
            let mut x = 0;
            while x < WIDTH {
                let literal = 64.min(WIDTH - x);
                data.push(literal as u8);
                data.extend((0..literal).map(|i| (i as u8) ^ channel ^ (y as u8)));
                x += literal;

                let run = 63.min(WIDTH - x);
                if run > 0 {
                    data.push(0x80 | run as u8);
                    data.push(channel.wrapping_mul(40));
                    x += run;
                }
            }
        }
    }
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("HDR Decode");
    group.throughput(criterion::Throughput::Elements((WIDTH * HEIGHT) as u64));

    let flat = flat_image();
    group.bench_function("flat_pixels", |b| {
        b.iter(|| decode_hdr(&mut SliceSource::new(black_box(&flat))))
    });

    let channel_runs = channel_run_image();
    group.bench_function("channel_runs", |b| {
        b.iter(|| decode_hdr(&mut SliceSource::new(black_box(&channel_runs))))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
