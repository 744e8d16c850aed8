//! led_control.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Owns the PWM peripheral and the indicator LED on behalf of the main loop. The
//! interrupt handler only flips flags in SystemState; LedController notices the change on
//! the next cycle and forwards it to the hardware exactly once.

use crate::config::PwmConfig;
use crate::utils::brightness::DutyPair;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedChannel {
    /// Brightness follows X deflection.
    X,
    /// Brightness follows Y deflection.
    Y,
}

/// PWM slice driving both deflection LEDs.
pub trait PwmOutput {
    /// Set the counter wrap value.
    fn configure(&mut self, period: u16);
    fn set_duty(&mut self, channel: LedChannel, duty: u16);
    /// Start or stop the counter. Stopping keeps the programmed duties.
    fn set_enabled(&mut self, enabled: bool);
}

/// Plain on/off LED.
pub trait IndicatorOutput {
    fn set(&mut self, on: bool);
}

pub struct LedController<P, I> {
    pwm: P,
    indicator: I,
    config: PwmConfig,
    pwm_enabled: bool,
    indicator_on: bool,
    duties: DutyPair,
}

impl<P: PwmOutput, I: IndicatorOutput> LedController<P, I> {
    /// Program the period, zero both duties, start the counter and switch the
    /// indicator off.
    pub fn new(mut pwm: P, mut indicator: I, config: PwmConfig) -> Self {
        pwm.configure(config.period);
        pwm.set_duty(LedChannel::X, 0);
        pwm.set_duty(LedChannel::Y, 0);
        pwm.set_enabled(true);
        indicator.set(false);

        LedController {
            pwm,
            indicator,
            config,
            pwm_enabled: true,
            indicator_on: false,
            duties: DutyPair::default(),
        }
    }

    /// Forward a change of the enable flag. Returns true if the peripheral was touched.
    pub fn sync_enabled(&mut self, enabled: bool) -> bool {
        if enabled == self.pwm_enabled {
            return false;
        }
        trace!("pwm enabled: {}", enabled);
        self.pwm.set_enabled(enabled);
        self.pwm_enabled = enabled;
        true
    }

    /// Forward a change of the indicator flag. Returns true if the pin was touched.
    pub fn sync_indicator(&mut self, on: bool) -> bool {
        if on == self.indicator_on {
            return false;
        }
        self.indicator.set(on);
        self.indicator_on = on;
        true
    }

    pub fn apply_duties(&mut self, duties: DutyPair) {
        let x = duties.x.min(self.config.period);
        let y = duties.y.min(self.config.period);
        self.pwm.set_duty(LedChannel::X, x);
        self.pwm.set_duty(LedChannel::Y, y);
        self.duties = DutyPair { x, y };
    }

    /// Last duties written to the peripheral.
    pub fn duties(&self) -> DutyPair {
        self.duties
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }
}
