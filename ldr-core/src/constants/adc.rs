//! Voltage Divider and ADC Defaults
//!
//! The photocell sits in a two-resistor divider:
//!
//! ```text
//!                           ^
//!            _____      ___/___
//!    Vcc |--|_____|----|__/____|--| GND      (photocell on ground)
//!          Reference      /
//!          resistor    Photocell
//! ```
//!
//! Swapping the two legs puts the photocell on the supply side, which is the
//! default wiring.

/// Fixed divider resistor (Ω).
///
/// 3.3 kΩ keeps the divider mid-scale around indoor light levels for GL55xx
/// parts.
pub const DEFAULT_REFERENCE_RESISTOR_OHMS: f32 = 3300.0;

/// Default ADC resolution (bits).
///
/// Matches the 12-bit SAR converters found on STM32, ESP32 and RP2040 parts.
pub const DEFAULT_ADC_RESOLUTION_BITS: u8 = 12;

/// Smallest accepted ADC resolution (bits).
pub const MIN_ADC_RESOLUTION_BITS: u8 = 1;

/// Largest accepted ADC resolution (bits).
///
/// `2^24` is the largest full-scale code that `f32` still represents exactly.
pub const MAX_ADC_RESOLUTION_BITS: u8 = 24;

/// Default wiring: photocell between supply and the ADC pin.
pub const DEFAULT_PHOTOCELL_GROUNDED: bool = false;
