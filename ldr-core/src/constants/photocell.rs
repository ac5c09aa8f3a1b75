//! Photocell Fit Parameters
//!
//! Each GL55xx part is modelled as `I[lux] = MULT / R[Ω]^POW`. The pairs below
//! come from fitting a straight line through two points of the datasheet's
//! log-log resistance curve and solving for the power-law form.
//!
//! Worked example for the GL5528:
//! ```text
//! Datasheet points:   55000 Ω -> 1 lux,   3000 Ω -> 100 lux
//! Log-linear fit:     log(R) = -0.6316 * log(I) + 4.7404
//! Solved for I:       I ~= 32017200 / R^1.5832
//! ```
//!
//! Values assume the part is at roughly 25°C.

// ===== GL5516 =====

/// GL5516 multiplier.
pub const GL5516_MULTIPLIER: f32 = 29_634_400.0;

/// GL5516 exponent.
pub const GL5516_EXPONENT: f32 = 1.6689;

// ===== GL5528 =====

/// GL5528 multiplier.
///
/// The GL5528 is the default part: it is the one most hobby kits ship with.
pub const GL5528_MULTIPLIER: f32 = 32_017_200.0;

/// GL5528 exponent.
pub const GL5528_EXPONENT: f32 = 1.5832;

// ===== GL5537 =====

/// GL5537-1 multiplier.
pub const GL5537_1_MULTIPLIER: f32 = 32_435_800.0;

/// GL5537-1 exponent.
pub const GL5537_1_EXPONENT: f32 = 1.4899;

/// GL5537-2 multiplier.
pub const GL5537_2_MULTIPLIER: f32 = 2_801_820.0;

/// GL5537-2 exponent.
pub const GL5537_2_EXPONENT: f32 = 1.1772;

// ===== GL5539 =====

/// GL5539 multiplier.
pub const GL5539_MULTIPLIER: f32 = 208_510_000.0;

/// GL5539 exponent.
pub const GL5539_EXPONENT: f32 = 1.4850;

// ===== GL5549 =====

/// GL5549 multiplier.
pub const GL5549_MULTIPLIER: f32 = 44_682_100.0;

/// GL5549 exponent.
pub const GL5549_EXPONENT: f32 = 1.2750;
