//! brightness.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Deflection to PWM duty. The further the stick is from center on an axis, the
//! brighter that axis's LED.

use crate::config::PwmConfig;
use crate::utils::analog::{AnalogSample, deviation};

/// Duty values for the two deflection LEDs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DutyPair {
    pub x: u16,
    pub y: u16,
}

/// `|deviation| * gain`, capped at the PWM period.
pub fn duty_for_deviation(deviation: i16, config: &PwmConfig) -> u16 {
    let scaled = u32::from(deviation.unsigned_abs()) * u32::from(config.gain);
    scaled.min(u32::from(config.period)) as u16
}

/// Duty for a raw reading relative to `center`.
pub fn duty(sample: u16, center: u16, config: &PwmConfig) -> u16 {
    duty_for_deviation(deviation(sample, center), config)
}

pub fn duties(sample: &AnalogSample, center: u16, config: &PwmConfig) -> DutyPair {
    DutyPair {
        x: duty_for_deviation(sample.dx(center), config),
        y: duty_for_deviation(sample.dy(center), config),
    }
}
