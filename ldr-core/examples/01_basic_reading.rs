//! Basic Photocell Reading Example
//!
//! Converts a handful of raw ADC codes into lux and footcandles for each
//! supported photocell part.
//!
//! ## What You'll Learn
//!
//! - Choosing a photocell preset
//! - Converting raw codes through the divider model
//! - Strict conversions that reject impossible codes
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_reading
//! ```

use ldr_core::{LdrError, LightDependentResistor, PhotocellModel, SensorConfig};

fn main() {
    println!("LDR Core Basic Reading Example");
    println!("==============================\n");

    // Codes from a 12-bit ADC, dark to bright with the photocell on the
    // supply side of the divider
    let raw_codes = [200u32, 800, 2048, 3500, 4000];

    for model in PhotocellModel::ALL {
        let ldr = LightDependentResistor::new(SensorConfig::for_model(model));
        let (multiplier, exponent) = model.parameters();

        println!("{} (I = {} / R^{})", model.name(), multiplier, exponent);
        for raw in raw_codes {
            println!(
                "  raw {:4}: R = {:8.0} Ω  {:9.2} lux  {:8.2} fc",
                raw,
                ldr.raw_to_resistance(raw),
                ldr.current_lux(raw),
                ldr.current_foot_candles(raw),
            );
        }
        println!();
    }

    // Strict path: a floating ADC pin reads 0
    let ldr = LightDependentResistor::default();
    match ldr.try_current_lux(0) {
        Ok(lux) => println!("Unexpected reading: {} lux", lux),
        Err(LdrError::ZeroRawCode) => println!("Raw code 0 rejected: check the divider wiring"),
        Err(e) => println!("Rejected: {}", e),
    }
}
