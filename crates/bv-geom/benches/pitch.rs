use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use bv_core::braille::braille_char;
use bv_core::config::{ConvertConfig, PitchMode};
use bv_geom::pipeline::convert_text;

fn synthetic_art(cols: usize, rows: usize) -> String {
    (0..rows)
        .map(|y| {
            let mut line: String = (0..cols)
                .map(|x| braille_char(((x * 7 + y * 13) % 256) as u8))
                .collect();
            line.push('\n');
            line
        })
        .collect()
}

fn bench_convert(c: &mut Criterion) {
    let text = synthetic_art(120, 40);

    let uniform = ConvertConfig::default();
    c.bench_function("convert_uniform_120x40", |b| {
        b.iter(|| convert_text(black_box(&text), &uniform));
    });

    let asymmetric = ConvertConfig {
        pitch_mode: PitchMode::Asymmetric,
        ..ConvertConfig::default()
    };
    c.bench_function("convert_asymmetric_120x40", |b| {
        b.iter(|| convert_text(black_box(&text), &asymmetric));
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
