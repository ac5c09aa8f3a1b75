//! Photoresistor illuminance engine for LDR Core
//!
//! Turns raw ADC codes from a photocell voltage divider into calibrated
//! illuminance (lux or footcandles), with optional moving-average smoothing.
//! Designed for microcontrollers with limited resources.
//!
//! Key constraints:
//! - No heap allocation; smoothing history is a fixed array
//! - No float library beyond `powf` (via `libm`)
//! - No panics on any input, including a raw code of 0
//!
//! ```no_run
//! use ldr_core::{LightDependentResistor, SensorConfig, PhotocellModel};
//!
//! let mut ldr = LightDependentResistor::new(
//!     SensorConfig::builder()
//!         .model(PhotocellModel::Gl5528)
//!         .smoothing_history(16)
//!         .build(),
//! );
//!
//! # fn read_adc() -> u32 { 2048 }
//! // Host firmware performs the hardware read
//! let lux = ldr.smoothed_lux(read_adc());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod buffer;
pub mod calibration;
pub mod config;
pub mod constants;
pub mod errors;
pub mod sensor;
pub mod traits;
pub mod units;

// Public API
pub use buffer::{SmoothingBuffer, SmoothingPhase};
pub use calibration::{CalibrationParameters, PhotocellModel};
pub use config::{SensorConfig, SensorConfigBuilder};
pub use errors::{LdrError, LdrResult};
pub use sensor::LightDependentResistor;
pub use traits::{LightSensor, Validatable};
pub use units::{foot_candles_to_lux, lux_to_foot_candles};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
