use std::io::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heightfield::HeightField;
use tempfile::TempDir;

const SAMPLES: usize = 1025;

/// Create a synthetic 16-bit RAW heightmap with a simple gradient.
fn create_raw(dir: &std::path::Path, filename: &str) -> std::path::PathBuf {
    let mut data = vec![0u8; SAMPLES * SAMPLES * 2];
    for row in 0..SAMPLES {
        for col in 0..SAMPLES {
            let value = ((row * 37 + col * 11) % 65536) as u16;
            let offset = (row * SAMPLES + col) * 2;
            data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
        }
    }
    let path = dir.join(filename);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&data).unwrap();
    path
}

fn bench_load_raw16(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    let path = create_raw(tmp.path(), "terrain.raw");

    c.bench_function("load_raw16_1025", |b| {
        b.iter(|| {
            let field = HeightField::from_raw(black_box(&path), SAMPLES, SAMPLES, 0.0, 500.0);
            black_box(field.unwrap());
        });
    });
}

fn bench_single_sample(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    let path = create_raw(tmp.path(), "terrain.raw");
    let field = HeightField::from_raw(&path, SAMPLES, SAMPLES, 0.0, 500.0).unwrap();

    c.bench_function("single_bilinear_sample", |b| {
        b.iter(|| {
            black_box(field.height(black_box(512.37), black_box(100.81)));
        });
    });
}

fn bench_sample_sweep(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    let path = create_raw(tmp.path(), "terrain.raw");
    let field = HeightField::from_raw(&path, SAMPLES, SAMPLES, 0.0, 500.0).unwrap();

    // 1000 points along the diagonal, running past both edges
    let coords: Vec<(f32, f32)> = (0..1000)
        .map(|i| {
            let t = i as f32 / 1000.0;
            (-10.0 + t * 1050.0, 1040.0 - t * 1050.0)
        })
        .collect();

    c.bench_function("sample_sweep_1000", |b| {
        b.iter(|| {
            for &(column, row) in black_box(&coords) {
                black_box(field.height(column, row));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_load_raw16,
    bench_single_sample,
    bench_sample_sweep,
);
criterion_main!(benches);
