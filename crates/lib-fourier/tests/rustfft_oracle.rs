//! Cross-checks against rustfft as an independent implementation.
//!
//! `Direction::Forward` uses the `exp(+2πi·jk/N)` kernel, which is what
//! rustfft calls the (unnormalised) inverse transform.

use lib_fourier::fft::{deinterleave, interleave};
use lib_fourier::real::rfft;
use lib_fourier::{complex_fft, ConvolutionConfig, ConvolutionEngine, Direction};
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn test_signal(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Complex64::new(
                (2.0 * PI * 3.0 * t).sin() + 0.25 * t,
                (2.0 * PI * 7.0 * t).cos() - 0.5,
            )
        })
        .collect()
}

#[test]
fn test_forward_matches_rustfft_inverse() {
    let mut planner = FftPlanner::<f64>::new();

    for n in [1usize, 2, 4, 8, 64, 512, 4096] {
        let signal = test_signal(n);

        let mut expected = signal.clone();
        planner.plan_fft_inverse(n).process(&mut expected);

        let mut data = interleave(&signal);
        complex_fft(&mut data, Direction::Forward);
        let actual = deinterleave(&data);

        for (k, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!(
                (a - e).norm() < 1e-9 * n as f64,
                "N = {}, bin {}: {} vs {}",
                n, k, a, e
            );
        }
    }
}

#[test]
fn test_inverse_matches_rustfft_forward() {
    let mut planner = FftPlanner::<f64>::new();
    let n = 256;
    let signal = test_signal(n);

    let mut expected = signal.clone();
    planner.plan_fft_forward(n).process(&mut expected);

    let mut data = interleave(&signal);
    complex_fft(&mut data, Direction::Inverse);

    for (a, e) in deinterleave(&data).iter().zip(expected.iter()) {
        assert!((a - e).norm() < 1e-9);
    }
}

#[test]
fn test_ramp_matches_rustfft() {
    // N = 8 ramp through the complex kernel.
    let signal: Vec<Complex64> = (1..=8).map(|v| Complex64::new(v as f64, 0.0)).collect();

    let mut expected = signal.clone();
    FftPlanner::<f64>::new()
        .plan_fft_inverse(8)
        .process(&mut expected);

    let mut data = interleave(&signal);
    complex_fft(&mut data, Direction::Forward);

    for (a, e) in deinterleave(&data).iter().zip(expected.iter()) {
        assert!((a - e).norm() < 1e-12, "{} vs {}", a, e);
    }
}

#[test]
fn test_rfft_matches_rustfft_half_spectrum() {
    let n = 128;
    let signal: Vec<f64> = test_signal(n).iter().map(|c| c.re).collect();

    let mut expected: Vec<Complex64> = signal.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    FftPlanner::<f64>::new()
        .plan_fft_inverse(n)
        .process(&mut expected);

    let actual = rfft(&signal).unwrap();
    assert_eq!(actual.len(), n / 2 + 1);

    for (k, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!((a - e).norm() < 1e-10, "bin {}: {} vs {}", k, a, e);
    }
}

#[test]
fn test_engine_from_json_config_matches_rustfft_convolution() {
    init_tracing();

    let config: ConvolutionConfig = serde_json::from_str(r#"{ "len": 64 }"#).unwrap();
    let engine = ConvolutionEngine::from_config(&config).unwrap();

    let data: Vec<f64> = (0..64).map(|i| (i as f64 * 0.2).sin()).collect();
    let taps = vec![0.6, 0.3, 0.1, 0.05, 0.2];
    let result = engine.apply(&data, &taps).unwrap();

    // Same circular convolution through rustfft: lags -2..=2 in a window of 64.
    let mut window = vec![Complex64::new(0.0, 0.0); 64];
    window[0] = Complex64::new(taps[0], 0.0);
    window[1] = Complex64::new(taps[1], 0.0);
    window[2] = Complex64::new(taps[2], 0.0);
    window[62] = Complex64::new(taps[3], 0.0);
    window[63] = Complex64::new(taps[4], 0.0);

    let mut signal: Vec<Complex64> = data.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(64);
    let inverse = planner.plan_fft_inverse(64);
    forward.process(&mut signal);
    forward.process(&mut window);
    for (s, w) in signal.iter_mut().zip(window.iter()) {
        *s *= *w;
    }
    inverse.process(&mut signal);

    for (i, (r, e)) in result.iter().zip(signal.iter()).enumerate() {
        assert!((r - e.re / 64.0).abs() < 1e-10, "index {}: {} vs {}", i, r, e.re / 64.0);
    }
}
