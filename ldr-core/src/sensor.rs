//! Photocell sensor: calibration plus smoothing
//!
//! [`LightDependentResistor`] is the value the host firmware keeps for each
//! photocell channel. It owns its calibration and its smoothing history, so
//! several channels can run side by side and tests need no global reset.
//!
//! ```rust
//! use ldr_core::{LightDependentResistor, PhotocellModel, SensorConfig};
//!
//! let mut ldr = LightDependentResistor::new(SensorConfig::for_model(PhotocellModel::Gl5516));
//!
//! // The host reads the ADC and hands the raw code over
//! let raw = 2048;
//! let instant = ldr.current_lux(raw);
//! let smoothed = ldr.smoothed_lux(raw);
//!
//! // First smoothed read is the instantaneous value
//! assert_eq!(instant, smoothed);
//! ```

use crate::{
    buffer::{SmoothingBuffer, SmoothingPhase},
    calibration::{CalibrationParameters, PhotocellModel},
    config::SensorConfig,
    constants::MAX_SMOOTHING_HISTORY,
    errors::LdrResult,
    traits::LightSensor,
    units::lux_to_foot_candles,
};

/// One photocell channel
#[derive(Debug, Clone)]
pub struct LightDependentResistor {
    /// Configuration restored on every re-initialization
    config: SensorConfig,

    /// Live calibration; reconfigurable at any time
    calibration: CalibrationParameters,

    /// Moving-average history
    smoothing: SmoothingBuffer<MAX_SMOOTHING_HISTORY>,
}

impl Default for LightDependentResistor {
    fn default() -> Self {
        Self::new(SensorConfig::default())
    }
}

impl LightDependentResistor {
    /// Create a sensor from a configuration
    ///
    /// Out-of-range settings are clamped the same way
    /// [`SensorConfigBuilder::build`](crate::SensorConfigBuilder::build) does.
    pub fn new(config: SensorConfig) -> Self {
        let config = config.clamped();
        Self {
            config,
            calibration: config.calibration(),
            smoothing: SmoothingBuffer::new(config.smoothing_history),
        }
    }

    /// Create a sensor, rejecting out-of-range settings
    pub fn try_new(config: SensorConfig) -> LdrResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Start a fresh acquisition session with a known part
    ///
    /// Loads the part's fit parameters, restores the configured wiring and
    /// empties the smoothing history.
    pub fn init(&mut self, model: PhotocellModel) {
        self.config.model = model;
        self.calibration.set_model(model);
        self.calibration.photocell_grounded = self.config.photocell_grounded;
        self.reset_smoothing();
    }

    /// Start a fresh acquisition session with explicit fit parameters
    ///
    /// Same as [`init`](Self::init) but for a part outside the preset table.
    pub fn init_with_parameters(&mut self, multiplier: f32, exponent: f32) {
        self.calibration = self.config.calibration();
        self.calibration.update(multiplier, exponent);
        self.reset_smoothing();
    }

    /// Select wiring orientation; applies from the next conversion
    pub fn set_photocell_on_ground(&mut self, on_ground: bool) {
        self.calibration.photocell_grounded = on_ground;
    }

    /// Replace the fit parameters without touching the smoothing history
    ///
    /// No validation. See [`try_update_parameters`](Self::try_update_parameters).
    pub fn update_parameters(&mut self, multiplier: f32, exponent: f32) {
        self.calibration.update(multiplier, exponent);
    }

    /// Replace the fit parameters, rejecting non-positive or non-finite values
    pub fn try_update_parameters(&mut self, multiplier: f32, exponent: f32) -> LdrResult<()> {
        self.calibration.try_update(multiplier, exponent)
    }

    /// Live calibration parameters
    pub fn calibration(&self) -> &CalibrationParameters {
        &self.calibration
    }

    /// Configuration restored by [`init`](Self::init)
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Smoothing history
    pub fn smoothing(&self) -> &SmoothingBuffer<MAX_SMOOTHING_HISTORY> {
        &self.smoothing
    }

    /// Current smoothing phase
    pub fn smoothing_phase(&self) -> SmoothingPhase {
        self.smoothing.phase()
    }

    /// Empty the smoothing history, keeping the calibration
    pub fn reset_smoothing(&mut self) {
        self.smoothing.reset();
    }

    /// Photocell resistance (Ω) for a raw ADC code
    pub fn raw_to_resistance(&self, raw: u32) -> f32 {
        self.calibration.raw_to_resistance(raw)
    }

    /// Illuminance (lux) for a photocell resistance
    pub fn resistance_to_illuminance(&self, resistance: f32) -> f32 {
        self.calibration.resistance_to_illuminance(resistance)
    }

    /// Instantaneous illuminance (lux)
    ///
    /// `raw` must be at least 1; see [`try_current_lux`](Self::try_current_lux).
    pub fn current_lux(&self, raw: u32) -> f32 {
        self.calibration.raw_to_lux(raw)
    }

    /// Instantaneous illuminance (footcandles)
    pub fn current_foot_candles(&self, raw: u32) -> f32 {
        lux_to_foot_candles(self.current_lux(raw))
    }

    /// Moving-average illuminance (lux)
    ///
    /// Pushes the instantaneous value into the smoothing history and returns
    /// the new average. With smoothing disabled this is `current_lux`.
    ///
    /// Raw code 0 on a grounded divider converts to infinite lux, and that
    /// value enters the history like any other. The average stays infinite
    /// while it is in the window and reads NaN for up to one more window
    /// after it is evicted. Use [`try_smoothed_lux`](Self::try_smoothed_lux)
    /// to keep such codes out of the history.
    pub fn smoothed_lux(&mut self, raw: u32) -> f32 {
        let lux = self.current_lux(raw);
        self.smoothing.push(lux)
    }

    /// Moving-average illuminance (footcandles)
    pub fn smoothed_foot_candles(&mut self, raw: u32) -> f32 {
        lux_to_foot_candles(self.smoothed_lux(raw))
    }

    /// Instantaneous illuminance (lux), rejecting invalid raw codes
    pub fn try_current_lux(&self, raw: u32) -> LdrResult<f32> {
        self.calibration.try_raw_to_lux(raw)
    }

    /// Instantaneous illuminance (footcandles), rejecting invalid raw codes
    pub fn try_current_foot_candles(&self, raw: u32) -> LdrResult<f32> {
        self.try_current_lux(raw).map(lux_to_foot_candles)
    }

    /// Moving-average illuminance (lux), rejecting invalid raw codes
    ///
    /// A rejected sample never enters the smoothing history.
    pub fn try_smoothed_lux(&mut self, raw: u32) -> LdrResult<f32> {
        let lux = self.try_current_lux(raw)?;
        Ok(self.smoothing.push(lux))
    }

    /// Moving-average illuminance (footcandles), rejecting invalid raw codes
    pub fn try_smoothed_foot_candles(&mut self, raw: u32) -> LdrResult<f32> {
        self.try_smoothed_lux(raw).map(lux_to_foot_candles)
    }
}

impl LightSensor for LightDependentResistor {
    fn read_lux(&mut self, raw: u32) -> f32 {
        self.smoothed_lux(raw)
    }
}
