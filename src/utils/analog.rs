//! analog.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Joystick sampling. Both axes are read back to back, Y then X, once per cycle and
//! frozen into an `AnalogSample` so the LEDs and the cursor are driven by the same
//! reading. The sample carries the signed deflection of each axis from the calibrated
//! center.

use crate::config::ADC_MAX;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Raw converter access for one joystick axis.
///
/// Implementations select the channel for `axis` and return the conversion as the
/// converter reports it, which on real silicon can dip slightly below zero.
pub trait AnalogSource {
    fn read(&mut self, axis: Axis) -> Result<i16, Error>;
}

/// One reading of both axes, each within `0..=ADC_MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalogSample {
    pub x: u16,
    pub y: u16,
}

impl AnalogSample {
    pub const CENTERED: Self = AnalogSample::new(2048, 2048);

    /// Values above full scale are clamped.
    pub const fn new(x: u16, y: u16) -> Self {
        AnalogSample {
            x: if x > ADC_MAX { ADC_MAX } else { x },
            y: if y > ADC_MAX { ADC_MAX } else { y },
        }
    }

    /// Signed X deflection from `center`.
    pub fn dx(&self, center: u16) -> i16 {
        deviation(self.x, center)
    }

    /// Signed Y deflection from `center`.
    pub fn dy(&self, center: u16) -> i16 {
        deviation(self.y, center)
    }
}

/// Signed distance of `raw` from `center`, both taken within `0..=ADC_MAX`.
pub fn deviation(raw: u16, center: u16) -> i16 {
    raw.min(ADC_MAX) as i16 - center.min(ADC_MAX) as i16
}

/// Clamp a converter result into the 12-bit range.
fn to_counts(raw: i16) -> u16 {
    raw.clamp(0, ADC_MAX as i16) as u16
}

/// Sequential two-channel reader. The SAADC scan mode could convert both channels in
/// one task, but two single conversions keep the channel order explicit.
pub struct AnalogSampler<S> {
    source: S,
}

impl<S: AnalogSource> AnalogSampler<S> {
    pub fn new(source: S) -> Self {
        AnalogSampler { source }
    }

    /// Read Y then X and return the pair.
    pub fn sample(&mut self) -> Result<AnalogSample, Error> {
        let y = to_counts(self.source.read(Axis::Y)?);
        let x = to_counts(self.source.read(Axis::X)?);
        Ok(AnalogSample { x, y })
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
