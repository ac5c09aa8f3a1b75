//! Smoothed Photocell Reading Example
//!
//! Feeds a noisy stream of raw codes through the moving-average buffer and
//! shows the Filling → Steady transition, then re-initializes the sensor for a
//! new session.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_smoothed_reading
//! ```

use ldr_core::{LightDependentResistor, PhotocellModel, SensorConfig};

fn main() {
    println!("LDR Core Smoothed Reading Example");
    println!("=================================\n");

    let mut ldr = LightDependentResistor::new(
        SensorConfig::builder()
            .model(PhotocellModel::Gl5528)
            .photocell_grounded(true)
            .smoothing_history(5)
            .build(),
    );

    // Mains flicker on top of a steady indoor level
    let raw_codes = [1900u32, 2150, 1880, 2210, 1950, 2080, 1920, 2190, 1990, 2040];

    println!(" step   raw   instant lux   smoothed lux   phase");
    for (step, raw) in raw_codes.into_iter().enumerate() {
        let instant = ldr.current_lux(raw);
        let smoothed = ldr.smoothed_lux(raw);
        println!(
            " {:4}  {:4}  {:12.2}  {:13.2}   {:?}",
            step,
            raw,
            instant,
            smoothed,
            ldr.smoothing_phase()
        );
    }

    // A new session with a different part starts from an empty history
    ldr.init(PhotocellModel::Gl5549);
    println!("\nAfter init({}): {:?}", PhotocellModel::Gl5549.name(), ldr.smoothing_phase());
    println!("First reading: {:.2} fc", ldr.smoothed_foot_candles(2000));
}
