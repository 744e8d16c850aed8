//! config.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Compile-time configuration. Timing, display geometry, PWM scaling and the joystick
//! calibration all live here so they can be tuned in one place. The relationships the
//! rest of the crate depends on are checked with `const` assertions, so a bad edit
//! fails the build instead of misbehaving on the bench.

/// Full-scale reading of a 12-bit conversion.
pub const ADC_MAX: u16 = 4095;

// Display

pub const DISPLAY_WIDTH: i32 = 128;
pub const DISPLAY_HEIGHT: i32 = 64;
/// 7-bit I²C address of the SSD1306.
pub const DISPLAY_ADDRESS: u8 = 0x3C;
/// Side length of the filled cursor square, in pixels.
pub const CURSOR_SIZE: i32 = 8;
/// Inset between consecutive border outlines.
pub const BORDER_SPACING: i32 = 2;

// Timing

/// Minimum spacing between two accepted edges from the same button.
pub const DEBOUNCE_MS: u32 = 200;
/// Delay between control loop cycles. Any value below `DEBOUNCE_MS` works.
pub const LOOP_PERIOD_MS: u32 = 50;
/// Resolution of the millisecond clock.
pub const TICK_MS: u32 = 1;
/// Tick timer runs at 1 MHz.
pub const TIMER_TICKS_PER_MS: u32 = 1_000_000 / 1000;

/// Mapping from raw joystick counts to screen pixels.
///
/// The usable ranges are narrower than the converter's: the reference stick saturates
/// mechanically well before 0/4095 on X and only sweeps roughly 1200..2900 on Y. The
/// step sizes spread those ranges over the 128×64 panel and `y_mirror` flips the
/// vertical axis so pushing the stick up moves the marker up. These numbers were
/// measured on one unit and should be re-measured for a different joystick.
///
/// All counts assume a 12-bit conversion referenced to the supply rail, so a stick
/// resting at VDD/2 reads mid-scale whatever the exact supply voltage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JoystickCalibration {
    /// Resting reading of both axes.
    pub center: u16,
    pub x_min: u16,
    pub x_max: u16,
    pub y_min: u16,
    pub y_max: u16,
    /// Raw counts per horizontal pixel.
    pub x_counts_per_px: f32,
    /// Raw counts per vertical pixel.
    pub y_counts_per_px: f32,
    /// Vertical step count that lands on the top row after mirroring.
    pub y_mirror: i32,
    /// Added to both axes after scaling.
    pub screen_offset: i32,
}

impl JoystickCalibration {
    pub const DEFAULT: Self = Self {
        center: 2048,
        x_min: 176,
        x_max: 3920,
        y_min: 1218,
        y_max: 2878,
        x_counts_per_px: 32.5,
        y_counts_per_px: 33.0,
        y_mirror: 50,
        screen_offset: 3,
    };
}

impl Default for JoystickCalibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// PWM scaling for the two deflection LEDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PwmConfig {
    /// Counter wrap value; a duty equal to this is fully on.
    pub period: u16,
    /// Duty counts per count of deflection from center.
    pub gain: u16,
}

impl PwmConfig {
    pub const DEFAULT: Self = Self {
        period: 8196,
        gain: 4,
    };

    /// Largest duty the mapper can produce for a stick centered at `center`.
    pub const fn max_duty(&self, center: u16) -> u32 {
        let above = (ADC_MAX - center) as u32;
        let below = center as u32;
        let widest = if above > below { above } else { below };
        widest * self.gain as u32
    }
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const _: () = assert!(
    PwmConfig::DEFAULT.max_duty(JoystickCalibration::DEFAULT.center)
        <= PwmConfig::DEFAULT.period as u32,
    "full deflection must not exceed the PWM period"
);
const _: () = assert!(
    JoystickCalibration::DEFAULT.x_min < JoystickCalibration::DEFAULT.x_max
        && JoystickCalibration::DEFAULT.y_min < JoystickCalibration::DEFAULT.y_max,
    "usable joystick range is empty"
);
const _: () = assert!(
    DEBOUNCE_MS > LOOP_PERIOD_MS,
    "an accepted button event must be visible to the next loop cycle"
);
const _: () = assert!(JoystickCalibration::DEFAULT.center <= ADC_MAX);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pwm_leaves_headroom() {
        let cfg = PwmConfig::DEFAULT;
        assert_eq!(cfg.max_duty(2048), 8192);
        assert!(cfg.max_duty(2048) <= u32::from(cfg.period));
    }

    #[test]
    fn max_duty_uses_wider_side_of_center() {
        let cfg = PwmConfig { period: 10_000, gain: 1 };
        assert_eq!(cfg.max_duty(1000), 3095);
        assert_eq!(cfg.max_duty(3500), 3500);
    }

    #[test]
    fn calibration_center_is_supply_midpoint() {
        // VDD/2 on a supply-referenced 12-bit conversion
        assert_eq!(JoystickCalibration::DEFAULT.center, (ADC_MAX + 1) / 2);
        assert!(JoystickCalibration::DEFAULT.x_max <= ADC_MAX);
        assert!(JoystickCalibration::DEFAULT.y_max <= ADC_MAX);
    }
}
