//! system_state.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! The state shared between the button interrupt and the control loop. Every field is
//! a single atomic word, written only from the interrupt handler, so the main loop can
//! read it at any point without a lock. A read may return the value from just before
//! an edge was accepted; the change then takes effect on the following cycle.

use core::sync::atomic::{
    AtomicBool, AtomicU8,
    Ordering::{Acquire, Release},
};

/// Border pattern drawn around the cursor area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BorderStyle {
    /// One outline at the panel edge.
    #[default]
    Solid = 0,
    /// Two concentric outlines.
    Double = 1,
    /// Three concentric outlines.
    Spaced = 2,
}

impl BorderStyle {
    pub const COUNT: u8 = 3;
    pub const ALL: [BorderStyle; 3] = [BorderStyle::Solid, BorderStyle::Double, BorderStyle::Spaced];

    /// Any index maps onto a style, wrapping modulo the style count.
    pub const fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => BorderStyle::Solid,
            1 => BorderStyle::Double,
            _ => BorderStyle::Spaced,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Number of concentric outlines drawn for this style.
    pub const fn outlines(self) -> i32 {
        match self {
            BorderStyle::Solid => 1,
            BorderStyle::Double => 2,
            BorderStyle::Spaced => 3,
        }
    }

    /// Pixels taken off the cursor region's width and height.
    pub const fn inset(self) -> i32 {
        match self {
            BorderStyle::Solid => 0,
            BorderStyle::Double => 4,
            BorderStyle::Spaced => 6,
        }
    }
}

/// A copy of the shared flags taken once per cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateSnapshot {
    pub pwm_enabled: bool,
    pub indicator_led: bool,
    pub border_style: BorderStyle,
}

/// Process-wide flags. Lives in a `static` for the whole run.
pub struct SystemState {
    pwm_enabled: AtomicBool,
    indicator_led: AtomicBool,
    border_style: AtomicU8,
}

impl SystemState {
    /// Power-on state: LEDs dimming, indicator off, solid border.
    pub const fn new() -> Self {
        SystemState {
            pwm_enabled: AtomicBool::new(true),
            indicator_led: AtomicBool::new(false),
            border_style: AtomicU8::new(BorderStyle::Solid.index()),
        }
    }

    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Acquire)
    }

    pub fn indicator_led(&self) -> bool {
        self.indicator_led.load(Acquire)
    }

    pub fn border_style(&self) -> BorderStyle {
        BorderStyle::from_index(self.border_style.load(Acquire))
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            pwm_enabled: self.pwm_enabled(),
            indicator_led: self.indicator_led(),
            border_style: self.border_style(),
        }
    }

    /// Flip the PWM enable flag and return the new value.
    ///
    /// Only the button interrupt writes these fields, so load-then-store cannot
    /// lose an update.
    pub fn toggle_pwm(&self) -> bool {
        let enabled = !self.pwm_enabled.load(Acquire);
        self.pwm_enabled.store(enabled, Release);
        enabled
    }

    /// Flip the indicator LED flag and return the new value.
    pub fn toggle_indicator(&self) -> bool {
        let on = !self.indicator_led.load(Acquire);
        self.indicator_led.store(on, Release);
        on
    }

    /// Advance to the next border style, wrapping after `Spaced`.
    pub fn cycle_border(&self) -> BorderStyle {
        let next = self.border_style().next();
        self.border_style.store(next.index(), Release);
        next
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_state() {
        let state = SystemState::new();
        assert_eq!(
            state.snapshot(),
            StateSnapshot {
                pwm_enabled: true,
                indicator_led: false,
                border_style: BorderStyle::Solid,
            }
        );
    }

    #[test]
    fn border_cycles_and_wraps() {
        let state = SystemState::new();
        assert_eq!(state.cycle_border(), BorderStyle::Double);
        assert_eq!(state.cycle_border(), BorderStyle::Spaced);
        assert_eq!(state.cycle_border(), BorderStyle::Solid);
    }

    #[test]
    fn toggles_return_new_value() {
        let state = SystemState::new();
        assert!(!state.toggle_pwm());
        assert!(!state.pwm_enabled());
        assert!(state.toggle_pwm());
        assert!(state.toggle_indicator());
        assert!(state.indicator_led());
    }

    #[test]
    fn out_of_range_index_wraps() {
        assert_eq!(BorderStyle::from_index(3), BorderStyle::Solid);
        assert_eq!(BorderStyle::from_index(7), BorderStyle::Double);
        for style in BorderStyle::ALL {
            assert_eq!(BorderStyle::from_index(style.index()), style);
        }
    }
}
