//! Lux ↔ footcandle conversion
//!
//! Both directions use [`LUX_PER_FOOT_CANDLE`] as written: divide one way,
//! multiply the other. Stored footcandle readings from older firmware were
//! produced with exactly this pair, so do not swap in a reciprocal constant.

use crate::constants::LUX_PER_FOOT_CANDLE;

/// Convert an illuminance in lux to footcandles
#[inline]
pub fn lux_to_foot_candles(lux: f32) -> f32 {
    lux / LUX_PER_FOOT_CANDLE
}

/// Convert an illuminance in footcandles to lux
#[inline]
pub fn foot_candles_to_lux(foot_candles: f32) -> f32 {
    LUX_PER_FOOT_CANDLE * foot_candles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_foot_candle() {
        assert_eq!(foot_candles_to_lux(1.0), 10.764);
        assert_eq!(lux_to_foot_candles(10.764), 1.0);
    }

    #[test]
    fn zero_maps_to_zero() {
        assert_eq!(lux_to_foot_candles(0.0), 0.0);
        assert_eq!(foot_candles_to_lux(0.0), 0.0);
    }

    #[test]
    fn office_lighting() {
        // 500 lux office ≈ 46.45 fc
        let fc = lux_to_foot_candles(500.0);
        assert!((fc - 46.451133).abs() < 1e-3);
    }
}
