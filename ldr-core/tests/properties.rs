//! Property tests for the calibration model, unit conversion and smoothing

mod common;

use ldr_core::{
    foot_candles_to_lux, lux_to_foot_candles, CalibrationParameters, SmoothingBuffer,
};
use proptest::prelude::*;

use common::reference_average;

/// Largest sample fed to the smoothing property.
const MAX_SAMPLE: f32 = 10_000.0;

/// Running-sum drift allowed against a fresh sum, relative to `MAX_SAMPLE`.
const DRIFT_TOLERANCE: f32 = 1e-4 * MAX_SAMPLE;

proptest! {
    #[test]
    fn illuminance_decreases_with_resistance(
        multiplier in 1.0e3f32..1.0e9,
        exponent in 0.5f32..3.0,
        resistance in 1.0f32..1.0e5,
        factor in 1.01f32..10.0,
    ) {
        let mut cal = CalibrationParameters::default();
        cal.update(multiplier, exponent);

        let darker = cal.resistance_to_illuminance(resistance * factor);
        let brighter = cal.resistance_to_illuminance(resistance);
        prop_assert!(darker < brighter, "{} !< {}", darker, brighter);
        prop_assert!(darker > 0.0);
    }

    #[test]
    fn lux_round_trip(lux in 0.0f32..200_000.0) {
        let back = lux_to_foot_candles(foot_candles_to_lux(lux));
        prop_assert!((back - lux).abs() <= lux * 1e-6 + 1e-6);

        let back = foot_candles_to_lux(lux_to_foot_candles(lux));
        prop_assert!((back - lux).abs() <= lux * 1e-6 + 1e-6);
    }

    #[test]
    fn full_scale_matches_one_below(bits in 2u8..=16, grounded in any::<bool>()) {
        let mut cal = CalibrationParameters::default();
        cal.adc_resolution_bits = bits;
        cal.photocell_grounded = grounded;

        let full_scale = cal.full_scale();
        prop_assert_eq!(cal.raw_to_resistance(full_scale), cal.raw_to_resistance(full_scale - 1));
    }

    #[test]
    fn moving_average_matches_reference(
        window in 1usize..=16,
        samples in prop::collection::vec(0.0f32..MAX_SAMPLE, 1..64),
    ) {
        let mut buffer = SmoothingBuffer::<16>::new(window);

        for (i, &sample) in samples.iter().enumerate() {
            let average = buffer.push(sample);
            let expected = reference_average(&samples[..=i], window);
            prop_assert!(
                (average - expected).abs() <= DRIFT_TOLERANCE,
                "window {} step {}: {} vs {}", window, i, average, expected
            );
        }
        prop_assert_eq!(buffer.len(), samples.len().min(window));
    }
}
