//! Common test utilities for integration tests
//!
//! This module provides:
//! - Raw ADC code generators for a photocell divider
//! - A reference moving average to check the ring buffer against
//! - Float comparison helpers

#![allow(dead_code)]

use ldr_core::CalibrationParameters;

/// Relative tolerance for comparing running-sum averages with a fresh sum
pub const AVERAGE_TOLERANCE: f32 = 1e-4;

/// Raw code that makes the divider read a given photocell resistance
///
/// Inverse of `CalibrationParameters::raw_to_resistance`, rounded to the
/// nearest code and kept inside `[1, full_scale]`.
pub fn raw_for_resistance(cal: &CalibrationParameters, resistance: f32) -> u32 {
    let full_scale = cal.full_scale() as f32;
    let ratio = if cal.photocell_grounded {
        cal.reference_resistor_ohms / resistance
    } else {
        resistance / cal.reference_resistor_ohms
    };

    let raw = (full_scale / (ratio + 1.0)).round() as u32;
    raw.clamp(1, cal.full_scale())
}

/// Deterministic pseudo-random raw codes, as a noisy ADC would produce
pub struct RawCodeGenerator {
    seed: u32,
    center: u32,
    spread: u32,
    full_scale: u32,
}

impl RawCodeGenerator {
    /// Codes around `center` within ±`spread`, never 0 or above full scale
    pub fn new(center: u32, spread: u32, full_scale: u32) -> Self {
        Self {
            seed: 42,
            center,
            spread,
            full_scale,
        }
    }

    /// Next raw code
    pub fn next_code(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let offset = self.seed % (2 * self.spread + 1);
        (self.center + offset)
            .saturating_sub(self.spread)
            .clamp(1, self.full_scale)
    }

    /// Collect `count` codes
    pub fn take(&mut self, count: usize) -> Vec<u32> {
        (0..count).map(|_| self.next_code()).collect()
    }
}

/// Moving average recomputed from scratch over the last `window` samples
pub fn reference_average(samples: &[f32], window: usize) -> f32 {
    if window == 0 {
        return *samples.last().expect("at least one sample");
    }
    let start = samples.len().saturating_sub(window);
    let tail = &samples[start..];
    tail.iter().sum::<f32>() / tail.len() as f32
}

/// Assert two floats agree within a relative tolerance
pub fn assert_relative_eq(actual: f32, expected: f32, tolerance: f32) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance * scale,
        "expected {} (±{} relative), got {}",
        expected,
        tolerance,
        actual
    );
}
