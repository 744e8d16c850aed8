//! lib.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Joystick canvas: a micro:bit v2 control loop that reads a dual-axis analog joystick,
//! dims two PWM LEDs in proportion to stick deflection and draws a marker inside a
//! selectable border on an SSD1306 OLED.
//!
//! This library holds everything that does not touch a register: calibration, the
//! debounced input monitor, the interrupt-shared state, the brightness and cursor
//! mappers, the frame renderer and the control loop itself. The hardware primitives
//! are traits (`AnalogSource`, `PwmOutput`, `IndicatorOutput`, `FrameSink`,
//! `InterruptAck`) implemented by the firmware binary in `main.rs`.
//!
//! Run the host tests with `cargo test`. The firmware builds with
//! `cargo build --release --features embedded --target thumbv7em-none-eabihf`.

// no_std on target; tests need std for the harness
#![cfg_attr(not(test), no_std)]

/// Per-cycle tracing over RTT, compiled out unless `debug-output` is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug-output")]
        rtt_target::rprintln!($($arg)*);
    };
}

pub mod config;
pub mod error;
pub mod utils;

pub use error::Error;
