//! Sensor configuration
//!
//! Everything the host decides once (or occasionally) about a photocell
//! channel: which part is fitted, how it is wired, the converter resolution
//! and how much smoothing to apply. Configuration is in-memory only; the host
//! re-supplies it on every boot.
//!
//! ```rust
//! use ldr_core::{PhotocellModel, SensorConfig};
//!
//! let config = SensorConfig::builder()
//!     .model(PhotocellModel::Gl5539)
//!     .reference_resistor_ohms(10_000.0)
//!     .adc_resolution_bits(10)
//!     .photocell_grounded(true)
//!     .smoothing_history(20)
//!     .build();
//!
//! assert_eq!(config.smoothing_history, 20);
//! ```

use crate::{
    calibration::{CalibrationParameters, PhotocellModel},
    constants::{
        adc::DEFAULT_PHOTOCELL_GROUNDED,
        buffers::SMOOTHING_DISABLED,
        DEFAULT_ADC_RESOLUTION_BITS, DEFAULT_REFERENCE_RESISTOR_OHMS,
        DEFAULT_SMOOTHING_HISTORY, MAX_ADC_RESOLUTION_BITS, MAX_SMOOTHING_HISTORY,
        MIN_ADC_RESOLUTION_BITS,
    },
    errors::{LdrError, LdrResult},
};

/// Configuration for one photocell channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    /// Fitted part; selects the power-law parameters
    pub model: PhotocellModel,

    /// Fixed divider resistor in ohms
    pub reference_resistor_ohms: f32,

    /// ADC resolution in bits
    pub adc_resolution_bits: u8,

    /// True if the photocell is the lower (ground) leg of the divider
    pub photocell_grounded: bool,

    /// Moving-average window; 0 disables smoothing
    pub smoothing_history: usize,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            model: PhotocellModel::default(),
            reference_resistor_ohms: DEFAULT_REFERENCE_RESISTOR_OHMS,
            adc_resolution_bits: DEFAULT_ADC_RESOLUTION_BITS,
            photocell_grounded: DEFAULT_PHOTOCELL_GROUNDED,
            smoothing_history: DEFAULT_SMOOTHING_HISTORY,
        }
    }
}

impl SensorConfig {
    /// Start a builder from the defaults
    pub fn builder() -> SensorConfigBuilder {
        SensorConfigBuilder::new()
    }

    /// Default configuration for a given part
    pub fn for_model(model: PhotocellModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    /// Check every field against the supported ranges
    pub fn validate(&self) -> LdrResult<()> {
        if !(MIN_ADC_RESOLUTION_BITS..=MAX_ADC_RESOLUTION_BITS).contains(&self.adc_resolution_bits) {
            return Err(LdrError::InvalidResolution {
                bits: self.adc_resolution_bits,
                min: MIN_ADC_RESOLUTION_BITS,
                max: MAX_ADC_RESOLUTION_BITS,
            });
        }

        if self.smoothing_history > MAX_SMOOTHING_HISTORY {
            return Err(LdrError::CapacityExceeded {
                requested: self.smoothing_history,
                max: MAX_SMOOTHING_HISTORY,
            });
        }

        if !(self.reference_resistor_ohms.is_finite() && self.reference_resistor_ohms > 0.0) {
            return Err(LdrError::InvalidCalibration {
                name: "reference_resistor_ohms",
                value: self.reference_resistor_ohms,
            });
        }

        Ok(())
    }

    /// Bring out-of-range fields back into range
    ///
    /// Resolution is clamped to `[MIN_ADC_RESOLUTION_BITS,
    /// MAX_ADC_RESOLUTION_BITS]` and smoothing history to
    /// `MAX_SMOOTHING_HISTORY`. The reference resistor is left alone.
    pub fn clamped(mut self) -> Self {
        let bits = self
            .adc_resolution_bits
            .clamp(MIN_ADC_RESOLUTION_BITS, MAX_ADC_RESOLUTION_BITS);
        if bits != self.adc_resolution_bits {
            log_warn!("ADC resolution {} clamped to {}", self.adc_resolution_bits, bits);
            self.adc_resolution_bits = bits;
        }

        if self.smoothing_history > MAX_SMOOTHING_HISTORY {
            log_warn!(
                "Smoothing history {} clamped to {}",
                self.smoothing_history,
                MAX_SMOOTHING_HISTORY
            );
            self.smoothing_history = MAX_SMOOTHING_HISTORY;
        }

        self
    }

    /// Calibration parameters implied by this configuration
    pub fn calibration(&self) -> CalibrationParameters {
        let (multiplier, exponent) = self.model.parameters();
        CalibrationParameters {
            multiplier,
            exponent,
            reference_resistor_ohms: self.reference_resistor_ohms,
            adc_resolution_bits: self.adc_resolution_bits,
            photocell_grounded: self.photocell_grounded,
        }
    }
}

/// Builder for [`SensorConfig`]
#[derive(Debug, Clone, Default)]
pub struct SensorConfigBuilder {
    config: SensorConfig,
}

impl SensorConfigBuilder {
    /// Create a builder seeded with [`SensorConfig::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted photocell part
    pub fn model(mut self, model: PhotocellModel) -> Self {
        self.config.model = model;
        self
    }

    /// Fitted photocell part by numeric id, falling back to the GL5528
    pub fn model_id(mut self, id: u8) -> Self {
        self.config.model = PhotocellModel::from_id(id);
        self
    }

    /// Divider reference resistor in ohms
    pub fn reference_resistor_ohms(mut self, ohms: f32) -> Self {
        self.config.reference_resistor_ohms = ohms;
        self
    }

    /// ADC resolution in bits
    pub fn adc_resolution_bits(mut self, bits: u8) -> Self {
        self.config.adc_resolution_bits = bits;
        self
    }

    /// Photocell on the ground leg (`true`) or the supply leg (`false`)
    pub fn photocell_grounded(mut self, grounded: bool) -> Self {
        self.config.photocell_grounded = grounded;
        self
    }

    /// Moving-average window in samples
    pub fn smoothing_history(mut self, samples: usize) -> Self {
        self.config.smoothing_history = samples;
        self
    }

    /// Turn smoothing off; smoothed reads return instantaneous values
    pub fn without_smoothing(self) -> Self {
        self.smoothing_history(SMOOTHING_DISABLED)
    }

    /// Finish, clamping out-of-range settings
    pub fn build(self) -> SensorConfig {
        self.config.clamped()
    }

    /// Finish, rejecting out-of-range settings
    pub fn try_build(self) -> LdrResult<SensorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
