//! Benchmarks for okgamut conversions and gamut mapping.
//!
//! Run with: `cargo bench -p okgamut-bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use okgamut_color::{
    MappingMode, batch, device_to_oklab, map_to_gamut_linear, oklab_to_device,
    oklab_to_device_with,
};
use okgamut_core::{DisplayP3, Oklab, P3, Srgb, Triplet};
use okgamut_math::Vec3;
use okgamut_transfer::srgb;

/// Every 5th level per channel: 52^3 P3 colors, most of them outside sRGB.
fn p3_cube() -> Vec<P3> {
    let levels: Vec<i32> = (0..=255).step_by(5).collect();
    let mut cube = Vec::with_capacity(levels.len().pow(3));
    for &r in &levels {
        for &g in &levels {
            for &b in &levels {
                cube.push(Triplet::new(r, g, b));
            }
        }
    }
    cube
}

/// Benchmark transfer function EOTF/OETF operations.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_eotf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::eotf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::oetf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_eotf_rgb", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| srgb::eotf_rgb(Vec3::splat(black_box(x))))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark device <-> Oklab chains without mapping.
fn bench_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("chains");
    let colors = p3_cube();
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("p3_to_oklab_f64", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|&c| device_to_oklab::<DisplayP3, f64>(black_box(c)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("p3_to_oklab_f32", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|&c| device_to_oklab::<DisplayP3, f32>(black_box(c)))
                .collect::<Vec<_>>()
        })
    });

    let labs: Vec<Triplet<Oklab, f64>> = colors.iter().map(|&c| device_to_oklab(c)).collect();
    group.bench_function("oklab_to_srgb_unmapped", |b| {
        b.iter(|| {
            labs.iter()
                .map(|&l| oklab_to_device_with::<Srgb, f64>(black_box(l), MappingMode::Unmapped))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark gamut mapping modes on P3 colors targeting sRGB.
fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");
    let labs: Vec<Triplet<Oklab, f64>> =
        p3_cube().iter().map(|&c| device_to_oklab::<DisplayP3, f64>(c)).collect();
    group.throughput(Throughput::Elements(labs.len() as u64));

    for mode in MappingMode::ALL {
        group.bench_with_input(BenchmarkId::new("p3_to_srgb", mode), &labs, |b, labs| {
            b.iter(|| {
                labs.iter()
                    .map(|&l| oklab_to_device_with::<Srgb, f64>(black_box(l), mode))
                    .collect::<Vec<_>>()
            })
        });
    }

    // Worst case: saturated primaries always run the full bisection
    let primaries: Vec<Triplet<Oklab, f64>> = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 0]]
        .iter()
        .map(|&rgb| device_to_oklab::<DisplayP3, f64>(Triplet::from_array(rgb)))
        .collect();
    group.bench_function("css4_primaries_linear", |b| {
        b.iter(|| {
            primaries
                .iter()
                .map(|&l| map_to_gamut_linear::<Srgb, f64>(black_box(l)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark sequential vs rayon batch conversion.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let labs: Vec<Triplet<Oklab, f64>> =
        p3_cube().iter().map(|&c| device_to_oklab::<DisplayP3, f64>(c)).collect();
    group.throughput(Throughput::Elements(labs.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            labs.iter()
                .map(|&l| oklab_to_device::<Srgb, f64>(l))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("rayon", |b| {
        b.iter(|| batch::oklab_to_device_par::<Srgb, f64>(black_box(&labs)))
    });

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_chains, bench_mapping, bench_batch);
criterion_main!(benches);
