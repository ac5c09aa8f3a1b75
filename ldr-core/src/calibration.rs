//! Resistor-to-Illuminance Calibration Model
//!
//! ## Physics Background
//!
//! A photoresistor's resistance falls as light rises. Over its useful range a
//! GL55xx cell follows an inverse power law closely enough to be modelled as:
//!
//! ```text
//! I[lux] = multiplier / R[Ω]^exponent
//! ```
//!
//! The resistance itself is recovered from the divider voltage. With an
//! N-bit converter reading code `raw` out of `full_scale = 2^N`:
//!
//! ```text
//! ratio = full_scale / raw - 1
//!
//! photocell on ground:   R = R_ref / ratio
//! photocell on supply:   R = R_ref * ratio
//! ```
//!
//! ## Domain Boundaries
//!
//! - `raw == full_scale` cannot come out of an N-bit converter but shows up
//!   when an upstream stage clamps to `2^N`. It is treated as `full_scale - 1`
//!   so the divider ratio stays non-zero.
//! - `raw == 0` makes the ratio infinite. The lenient conversions return the
//!   resulting IEEE value (infinity or NaN) untouched; use the `try_` variants
//!   to get an [`LdrError`] instead.

use crate::{
    constants::{
        adc::DEFAULT_PHOTOCELL_GROUNDED,
        photocell::*,
        DEFAULT_ADC_RESOLUTION_BITS, DEFAULT_REFERENCE_RESISTOR_OHMS,
    },
    errors::{LdrError, LdrResult},
    traits::Validatable,
};

/// Known photocell parts
///
/// Each part maps to a fixed `(multiplier, exponent)` pair fitted from its
/// datasheet curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhotocellModel {
    /// GL5516
    Gl5516,
    /// GL5528, the fallback for unknown ids
    #[default]
    Gl5528,
    /// GL5537-1
    Gl5537A,
    /// GL5537-2
    Gl5537B,
    /// GL5539
    Gl5539,
    /// GL5549
    Gl5549,
}

impl PhotocellModel {
    /// All known parts, in id order
    pub const ALL: [PhotocellModel; 6] = [
        Self::Gl5516,
        Self::Gl5528,
        Self::Gl5537A,
        Self::Gl5537B,
        Self::Gl5539,
        Self::Gl5549,
    ];

    /// Fitted `(multiplier, exponent)` pair for this part
    pub const fn parameters(self) -> (f32, f32) {
        match self {
            Self::Gl5516 => (GL5516_MULTIPLIER, GL5516_EXPONENT),
            Self::Gl5528 => (GL5528_MULTIPLIER, GL5528_EXPONENT),
            Self::Gl5537A => (GL5537_1_MULTIPLIER, GL5537_1_EXPONENT),
            Self::Gl5537B => (GL5537_2_MULTIPLIER, GL5537_2_EXPONENT),
            Self::Gl5539 => (GL5539_MULTIPLIER, GL5539_EXPONENT),
            Self::Gl5549 => (GL5549_MULTIPLIER, GL5549_EXPONENT),
        }
    }

    /// Numeric id, as used in host configuration tables
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Datasheet part name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gl5516 => "GL5516",
            Self::Gl5528 => "GL5528",
            Self::Gl5537A => "GL5537-1",
            Self::Gl5537B => "GL5537-2",
            Self::Gl5539 => "GL5539",
            Self::Gl5549 => "GL5549",
        }
    }

    /// Look up a part by id, falling back to the GL5528
    ///
    /// Unknown ids are not an error here: firmware that reads the id from a
    /// jumper or EEPROM keeps running with the most common part. Use
    /// `PhotocellModel::try_from(id)` to reject them instead.
    pub fn from_id(id: u8) -> Self {
        Self::try_from(id).unwrap_or_else(|_| {
            log_warn!("Unknown photocell model id {}, using GL5528", id);
            Self::default()
        })
    }
}

impl TryFrom<u8> for PhotocellModel {
    type Error = LdrError;

    fn try_from(id: u8) -> LdrResult<Self> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(LdrError::UnknownModel { id })
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PhotocellModel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

/// Calibration state for one photocell and its divider
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationParameters {
    /// Scale constant in `multiplier / R^exponent`
    pub multiplier: f32,

    /// Power-law exponent
    pub exponent: f32,

    /// Fixed divider resistor in ohms
    pub reference_resistor_ohms: f32,

    /// ADC resolution; full scale is `2^adc_resolution_bits`
    pub adc_resolution_bits: u8,

    /// True if the photocell is the lower (ground) leg of the divider
    pub photocell_grounded: bool,
}

impl Default for CalibrationParameters {
    fn default() -> Self {
        Self::from_model(PhotocellModel::default())
    }
}

impl CalibrationParameters {
    /// Parameters for a known part with the default divider and ADC
    pub fn from_model(model: PhotocellModel) -> Self {
        let (multiplier, exponent) = model.parameters();
        Self {
            multiplier,
            exponent,
            reference_resistor_ohms: DEFAULT_REFERENCE_RESISTOR_OHMS,
            adc_resolution_bits: DEFAULT_ADC_RESOLUTION_BITS,
            photocell_grounded: DEFAULT_PHOTOCELL_GROUNDED,
        }
    }

    /// Replace the fit parameters with those of a known part
    pub fn set_model(&mut self, model: PhotocellModel) {
        let (multiplier, exponent) = model.parameters();
        self.multiplier = multiplier;
        self.exponent = exponent;
    }

    /// Replace the fit parameters
    ///
    /// No validation: the caller owns the physics. See
    /// [`try_update`](Self::try_update).
    pub fn update(&mut self, multiplier: f32, exponent: f32) {
        self.multiplier = multiplier;
        self.exponent = exponent;
    }

    /// Replace the fit parameters, rejecting non-positive or non-finite values
    pub fn try_update(&mut self, multiplier: f32, exponent: f32) -> LdrResult<()> {
        check_positive("multiplier", multiplier)?;
        check_positive("exponent", exponent)?;
        self.update(multiplier, exponent);
        Ok(())
    }

    /// Full-scale code `2^adc_resolution_bits`
    pub fn full_scale(&self) -> u32 {
        1u32.checked_shl(u32::from(self.adc_resolution_bits))
            .unwrap_or(u32::MAX)
    }

    /// Photocell resistance (Ω) for a raw ADC code
    ///
    /// `raw == full_scale` is read as `full_scale - 1`. `raw` must be at least
    /// 1; zero yields infinity or NaN (see module docs).
    pub fn raw_to_resistance(&self, raw: u32) -> f32 {
        let full_scale = self.full_scale();
        let raw = if raw == full_scale { raw - 1 } else { raw };

        let ratio = full_scale as f32 / raw as f32 - 1.0;

        if self.photocell_grounded {
            self.reference_resistor_ohms / ratio
        } else {
            self.reference_resistor_ohms * ratio
        }
    }

    /// Like [`raw_to_resistance`](Self::raw_to_resistance), but rejects codes
    /// outside `[1, full_scale]`
    pub fn try_raw_to_resistance(&self, raw: u32) -> LdrResult<f32> {
        self.check_raw(raw)?;
        Ok(self.raw_to_resistance(raw))
    }

    /// Illuminance (lux) for a photocell resistance: `multiplier / R^exponent`
    ///
    /// Strictly decreasing in `resistance` for positive parameters. The caller
    /// must pass `resistance > 0`.
    pub fn resistance_to_illuminance(&self, resistance: f32) -> f32 {
        self.multiplier / libm::powf(resistance, self.exponent)
    }

    /// Instantaneous illuminance (lux) for a raw ADC code
    pub fn raw_to_lux(&self, raw: u32) -> f32 {
        self.resistance_to_illuminance(self.raw_to_resistance(raw))
    }

    /// Like [`raw_to_lux`](Self::raw_to_lux), but rejects out-of-range codes
    /// and non-finite results
    pub fn try_raw_to_lux(&self, raw: u32) -> LdrResult<f32> {
        let resistance = self.try_raw_to_resistance(raw)?;
        let lux = self.resistance_to_illuminance(resistance);
        if !lux.is_valid() {
            return Err(LdrError::InvalidValue);
        }
        Ok(lux)
    }

    fn check_raw(&self, raw: u32) -> LdrResult<()> {
        let full_scale = self.full_scale();
        if raw == 0 {
            Err(LdrError::ZeroRawCode)
        } else if raw > full_scale {
            Err(LdrError::RawCodeOutOfRange { raw, full_scale })
        } else {
            Ok(())
        }
    }
}

fn check_positive(name: &'static str, value: f32) -> LdrResult<()> {
    if value.is_valid() && value > 0.0 {
        Ok(())
    } else {
        Err(LdrError::InvalidCalibration { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} ± {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    #[test]
    fn gl5528_reference_points() {
        let cal = CalibrationParameters::default();

        // Datasheet points the fit was derived from
        assert_close(cal.resistance_to_illuminance(3000.0), 100.0, 1.0);
        assert_close(cal.resistance_to_illuminance(55_000.0), 1.0, 0.05);
    }

    #[test]
    fn mid_scale_is_reference_resistance() {
        let mut cal = CalibrationParameters::default();
        assert_eq!(cal.raw_to_resistance(2048), 3300.0);

        cal.photocell_grounded = true;
        assert_eq!(cal.raw_to_resistance(2048), 3300.0);
    }

    #[test]
    fn wiring_orientation() {
        let mut cal = CalibrationParameters::default();

        // ratio = 4096 / 1024 - 1 = 3
        cal.photocell_grounded = false;
        assert_eq!(cal.raw_to_resistance(1024), 9900.0);

        cal.photocell_grounded = true;
        assert_eq!(cal.raw_to_resistance(1024), 1100.0);
    }

    #[test]
    fn full_scale_code_is_decremented() {
        let cal = CalibrationParameters::default();
        assert_eq!(cal.full_scale(), 4096);

        let at_full_scale = cal.raw_to_resistance(4096);
        assert!(at_full_scale.is_finite());
        assert_eq!(at_full_scale, cal.raw_to_resistance(4095));
        assert_eq!(cal.try_raw_to_resistance(4096), Ok(at_full_scale));
    }

    #[test]
    fn zero_code_propagates_on_lenient_path() {
        let cal = CalibrationParameters::default();

        // Supply-side photocell: ratio = +inf, so R = +inf
        assert!(cal.raw_to_resistance(0).is_infinite());
        assert_eq!(cal.try_raw_to_lux(0), Err(LdrError::ZeroRawCode));
    }

    #[test]
    fn out_of_range_code_rejected() {
        let cal = CalibrationParameters::default();
        assert_eq!(
            cal.try_raw_to_lux(5000),
            Err(LdrError::RawCodeOutOfRange { raw: 5000, full_scale: 4096 })
        );
    }

    #[test]
    fn raw_to_lux_composes() {
        let cal = CalibrationParameters::default();
        for raw in [1, 100, 2048, 4000, 4096] {
            let expected = cal.resistance_to_illuminance(cal.raw_to_resistance(raw));
            assert_eq!(cal.raw_to_lux(raw), expected);
        }
    }

    #[test]
    fn preset_table() {
        assert_eq!(PhotocellModel::Gl5516.parameters(), (29_634_400.0, 1.6689));
        assert_eq!(PhotocellModel::Gl5528.parameters(), (32_017_200.0, 1.5832));
        assert_eq!(PhotocellModel::Gl5537A.parameters(), (32_435_800.0, 1.4899));
        assert_eq!(PhotocellModel::Gl5537B.parameters(), (2_801_820.0, 1.1772));
        assert_eq!(PhotocellModel::Gl5539.parameters(), (208_510_000.0, 1.4850));
        assert_eq!(PhotocellModel::Gl5549.parameters(), (44_682_100.0, 1.2750));
    }

    #[test]
    fn ids_round_trip() {
        for model in PhotocellModel::ALL {
            assert_eq!(PhotocellModel::from_id(model.id()), model);
        }
    }

    #[test]
    fn unknown_id_falls_back_to_gl5528() {
        assert_eq!(PhotocellModel::from_id(42), PhotocellModel::Gl5528);
        assert_eq!(
            PhotocellModel::try_from(42),
            Err(LdrError::UnknownModel { id: 42 })
        );
    }

    #[test]
    fn try_update_rejects_bad_parameters() {
        let mut cal = CalibrationParameters::default();

        assert!(matches!(
            cal.try_update(-1.0, 1.5),
            Err(LdrError::InvalidCalibration { name: "multiplier", .. })
        ));
        assert!(matches!(
            cal.try_update(1.0e6, f32::NAN),
            Err(LdrError::InvalidCalibration { name: "exponent", .. })
        ));

        // Rejected updates leave the old fit in place
        assert_eq!((cal.multiplier, cal.exponent), PhotocellModel::Gl5528.parameters());

        cal.try_update(1.0e6, 1.2).unwrap();
        assert_eq!((cal.multiplier, cal.exponent), (1.0e6, 1.2));
    }

    #[test]
    fn set_model_replaces_fit_only() {
        let mut cal = CalibrationParameters {
            reference_resistor_ohms: 10_000.0,
            adc_resolution_bits: 10,
            photocell_grounded: true,
            ..CalibrationParameters::default()
        };

        cal.set_model(PhotocellModel::Gl5537B);
        assert_eq!((cal.multiplier, cal.exponent), PhotocellModel::Gl5537B.parameters());
        assert_eq!(cal.reference_resistor_ohms, 10_000.0);
        assert_eq!(cal.adc_resolution_bits, 10);
        assert!(cal.photocell_grounded);
    }
}
