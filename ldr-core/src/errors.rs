//! Error Types for Strict Conversions
//!
//! ## Two Policies
//!
//! The conversion code has two entry points for every operation:
//!
//! 1. **Lenient** (`current_lux`, `SensorConfigBuilder::build`, ...): never
//!    fails. Out-of-domain raw codes propagate whatever IEEE result falls out
//!    of the arithmetic, unknown preset ids fall back to the GL5528, and
//!    oversized settings are clamped.
//!
//! 2. **Strict** (`try_current_lux`, `SensorConfigBuilder::try_build`, ...):
//!    returns an [`LdrError`] for the same conditions so firmware that prefers
//!    fail-fast behavior can act on them.
//!
//! Errors are `Copy` and carry only inline data, so they can be returned from
//! interrupt context or stored in a queue without allocation.
//!
//! ```rust
//! use ldr_core::{LdrError, LightDependentResistor, SensorConfig};
//!
//! let ldr = LightDependentResistor::new(SensorConfig::default());
//!
//! match ldr.try_current_lux(0) {
//!     Ok(_) => unreachable!(),
//!     Err(LdrError::ZeroRawCode) => {
//!         // ADC pin floating or shorted: skip this sample
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for strict conversion and configuration operations
pub type LdrResult<T> = Result<T, LdrError>;

/// Conversion and configuration errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LdrError {
    /// Raw code of zero: the divider ratio is undefined
    #[error("Raw ADC code 0 is outside the measurable range")]
    ZeroRawCode,

    /// Raw code larger than the converter can produce
    #[error("Raw ADC code {raw} exceeds full scale {full_scale}")]
    RawCodeOutOfRange {
        /// The offending raw code
        raw: u32,
        /// `2^adc_resolution_bits`
        full_scale: u32,
    },

    /// Preset id not in the known photocell table
    #[error("Unknown photocell model id {id}")]
    UnknownModel {
        /// The offending id
        id: u8,
    },

    /// Requested smoothing history larger than the fixed buffer
    #[error("Smoothing history {requested} exceeds maximum {max}")]
    CapacityExceeded {
        /// Requested number of samples
        requested: usize,
        /// Structural maximum
        max: usize,
    },

    /// ADC resolution outside the supported range
    #[error("ADC resolution {bits} bits outside [{min}, {max}]")]
    InvalidResolution {
        /// Requested resolution
        bits: u8,
        /// Smallest supported resolution
        min: u8,
        /// Largest supported resolution
        max: u8,
    },

    /// Calibration parameter not strictly positive and finite
    #[error("Calibration parameter {name} must be positive, got {value}")]
    InvalidCalibration {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f32,
    },

    /// Conversion produced NaN or infinity
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for LdrError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroRawCode =>
                defmt::write!(fmt, "Raw code 0"),
            Self::RawCodeOutOfRange { raw, full_scale } =>
                defmt::write!(fmt, "Raw code {} > {}", raw, full_scale),
            Self::UnknownModel { id } =>
                defmt::write!(fmt, "Unknown model {}", id),
            Self::CapacityExceeded { requested, max } =>
                defmt::write!(fmt, "History {} > {}", requested, max),
            Self::InvalidResolution { bits, min, max } =>
                defmt::write!(fmt, "Resolution {} outside [{}, {}]", bits, min, max),
            Self::InvalidCalibration { name, value } =>
                defmt::write!(fmt, "Calibration {}: {}", name, value),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_small() {
        assert!(core::mem::size_of::<LdrError>() <= 24);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_includes_context() {
        let err = LdrError::RawCodeOutOfRange { raw: 5000, full_scale: 4096 };
        assert_eq!(err.to_string(), "Raw ADC code 5000 exceeds full scale 4096");
    }
}
