//! Smoothing History Sizes
//!
//! The smoothing history is a fixed array; these constants bound its size.

/// Structural maximum of the smoothing history.
///
/// - 100 samples × 4 bytes/sample = 400 bytes
/// - Requests above this are clamped at configuration time
pub const MAX_SMOOTHING_HISTORY: usize = 100;

/// Default smoothing history.
///
/// 10 samples trades roughly one second of lag at 10 Hz sampling for a
/// visible drop in flicker noise.
pub const DEFAULT_SMOOTHING_HISTORY: usize = 10;

/// History size that disables smoothing entirely.
pub const SMOOTHING_DISABLED: usize = 0;
