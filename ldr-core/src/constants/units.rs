//! Photometric Unit Factors

/// Lux per footcandle.
///
/// 1 fc = 1 lm/ft² ≈ 10.764 lm/m². This exact literal is used in both
/// directions of the conversion.
pub const LUX_PER_FOOT_CANDLE: f32 = 10.764;
