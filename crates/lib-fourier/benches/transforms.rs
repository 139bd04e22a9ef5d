//! Transform and convolution performance benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lib_fourier::convolution::direct_circular_convolve;
use lib_fourier::{complex_fft, dual_real_fft, real_fft, ConvolutionEngine, Direction};

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    for n in [256usize, 1024, 4096, 16384].iter() {
        let signal: Vec<f64> = (0..*n).map(|i| (i as f64 * 0.01).sin()).collect();
        let interleaved: Vec<f64> = signal.iter().flat_map(|&v| [v, 0.0]).collect();

        group.bench_with_input(BenchmarkId::new("complex", n), &interleaved, |b, data| {
            b.iter(|| {
                let mut buffer = data.clone();
                complex_fft(black_box(&mut buffer), Direction::Forward);
                buffer
            });
        });

        group.bench_with_input(BenchmarkId::new("real", n), &signal, |b, data| {
            b.iter(|| {
                let mut buffer = data.clone();
                real_fft(black_box(&mut buffer), Direction::Forward);
                buffer
            });
        });

        group.bench_with_input(BenchmarkId::new("dual_real", n), &signal, |b, data| {
            let mut fft1 = vec![0.0; 2 * data.len()];
            let mut fft2 = vec![0.0; 2 * data.len()];
            b.iter(|| dual_real_fft(black_box(data), black_box(data), &mut fft1, &mut fft2));
        });
    }

    group.finish();
}

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolution");
    let taps: Vec<f64> = (0..63).map(|i| (-(i as f64) * 0.1).exp()).collect();

    for n in [1024usize, 4096, 16384].iter() {
        let signal: Vec<f64> = (0..*n).map(|i| (i as f64 * 0.01).sin()).collect();

        // Only benchmark direct convolution for small sizes
        if *n <= 4096 {
            group.bench_with_input(BenchmarkId::new("direct", n), &signal, |b, s| {
                b.iter(|| direct_circular_convolve(black_box(s), black_box(&taps)));
            });
        }

        let engine = ConvolutionEngine::new(*n).unwrap();
        group.bench_with_input(BenchmarkId::new("engine", n), &signal, |b, s| {
            b.iter(|| engine.convolve(black_box(s), black_box(&taps)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transforms, bench_convolution);
criterion_main!(benches);
