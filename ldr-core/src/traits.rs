//! Core traits for light sensors
//!
//! Keep them simple - embedded devices don't need complex abstractions.

use crate::units::lux_to_foot_candles;

/// A light sensor fed with raw ADC codes by the host firmware
///
/// The host owns the converter: it performs the hardware read and hands the
/// code over. Implementors turn that code into the reading the application
/// should act on.
pub trait LightSensor {
    /// Reading (lux) for a raw ADC code
    fn read_lux(&mut self, raw: u32) -> f32;

    /// Reading (footcandles) for a raw ADC code
    fn read_foot_candles(&mut self, raw: u32) -> f32 {
        lux_to_foot_candles(self.read_lux(raw))
    }
}

/// Trait for values that can be checked for numeric validity
pub trait Validatable {
    /// Check if the value is a usable number (not NaN or infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
