//! Constants for LDR Core
//!
//! Every numeric value the conversion and smoothing code relies on is defined
//! here with its unit and origin. Nothing in the rest of the crate should carry
//! a bare magic number.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Photocell**: Power-law fit parameters for the supported GL55xx parts
//! - **ADC**: Divider and converter defaults
//! - **Units**: Photometric unit conversion factors
//! - **Buffers**: Smoothing history sizes

/// Power-law fit parameters for known photocell parts.
pub mod photocell;

/// Voltage divider and ADC defaults.
pub mod adc;

/// Photometric unit conversion factors.
pub mod units;

/// Smoothing history sizes and limits.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use adc::{
    DEFAULT_ADC_RESOLUTION_BITS, DEFAULT_REFERENCE_RESISTOR_OHMS,
    MAX_ADC_RESOLUTION_BITS, MIN_ADC_RESOLUTION_BITS,
};

pub use units::LUX_PER_FOOT_CANDLE;

pub use buffers::{DEFAULT_SMOOTHING_HISTORY, MAX_SMOOTHING_HISTORY};
