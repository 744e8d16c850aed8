//! error.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Crate-wide error type. Variants carry no data so the enum stays `Copy` and can be
//! handed across the interrupt/main-loop boundary or logged without allocation.

use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The analog converter did not return a sample.
    Adc,
    /// A display bus transfer failed. The frame is dropped and redrawn next cycle.
    Display,
    /// Peripheral bring-up failed. Only raised before the control loop starts.
    Config,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::Adc => "analog read failed",
            Error::Display => "display transfer failed",
            Error::Config => "peripheral configuration failed",
        };
        f.write_str(msg)
    }
}
