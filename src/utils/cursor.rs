//! cursor.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Raw joystick counts to the top-left corner of the cursor square.
//!
//! Each axis is clamped to the calibrated usable range, scaled to pixels, offset, and
//! (for Y) mirrored so the marker follows the stick. The result is then kept inside the
//! border region of the current style so the square never overlaps the far border.

use crate::config::{CURSOR_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH, JoystickCalibration};
use crate::utils::analog::AnalogSample;
use crate::utils::system_state::BorderStyle;

const _: () = assert!(
    CURSOR_SIZE <= DISPLAY_WIDTH - BorderStyle::Spaced.inset()
        && CURSOR_SIZE <= DISPLAY_HEIGHT - BorderStyle::Spaced.inset(),
    "cursor must fit inside the smallest border region"
);

/// Screen area the cursor may occupy for a given border style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderRegion {
    pub width: i32,
    pub height: i32,
}

impl BorderRegion {
    pub const fn for_style(style: BorderStyle) -> Self {
        BorderRegion {
            width: DISPLAY_WIDTH - style.inset(),
            height: DISPLAY_HEIGHT - style.inset(),
        }
    }

    /// Largest legal cursor x.
    pub const fn max_x(&self, cursor_size: i32) -> i32 {
        self.width - cursor_size
    }

    /// Largest legal cursor y.
    pub const fn max_y(&self, cursor_size: i32) -> i32 {
        self.height - cursor_size
    }

    pub fn contains(&self, pos: CursorPosition, cursor_size: i32) -> bool {
        (0..=self.max_x(cursor_size)).contains(&pos.x)
            && (0..=self.max_y(cursor_size)).contains(&pos.y)
    }
}

/// Top-left corner of the cursor square, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorMapper {
    calibration: JoystickCalibration,
    cursor_size: i32,
}

impl CursorMapper {
    pub const fn new(calibration: JoystickCalibration) -> Self {
        Self::with_cursor_size(calibration, CURSOR_SIZE)
    }

    pub const fn with_cursor_size(calibration: JoystickCalibration, cursor_size: i32) -> Self {
        CursorMapper {
            calibration,
            cursor_size,
        }
    }

    pub fn map(&self, sample: AnalogSample, region: BorderRegion) -> CursorPosition {
        CursorPosition {
            x: self.fit(self.screen_x(sample.x), region.width),
            y: self.fit(self.screen_y(sample.y), region.height),
        }
    }

    /// Horizontal pixel before border clamping.
    pub fn screen_x(&self, raw: u16) -> i32 {
        let cal = &self.calibration;
        let steps = scaled_steps(raw, cal.x_min, cal.x_max, cal.x_counts_per_px);
        steps + cal.screen_offset
    }

    /// Vertical pixel before border clamping. Mirrored: high readings move the cursor up.
    pub fn screen_y(&self, raw: u16) -> i32 {
        let cal = &self.calibration;
        let steps = scaled_steps(raw, cal.y_min, cal.y_max, cal.y_counts_per_px);
        (steps - cal.y_mirror).abs() + cal.screen_offset
    }

    fn fit(&self, coord: i32, extent: i32) -> i32 {
        let max = (extent - self.cursor_size).max(0);
        coord.clamp(0, max)
    }
}

impl Default for CursorMapper {
    fn default() -> Self {
        Self::new(JoystickCalibration::DEFAULT)
    }
}

/// Whole pixel steps of `raw` above `min`, after clamping to `min..=max`.
fn scaled_steps(raw: u16, min: u16, max: u16, counts_per_px: f32) -> i32 {
    let clamped = raw.max(min).min(max);
    // non-negative, so truncation is floor
    (f32::from(clamped.saturating_sub(min)) / counts_per_px) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> CursorMapper {
        CursorMapper::default()
    }

    #[test]
    fn centered_stick_lands_on_center_cell() {
        let pos = mapper().map(AnalogSample::CENTERED, BorderRegion::for_style(BorderStyle::Solid));
        assert_eq!(pos, CursorPosition { x: 60, y: 28 });
    }

    #[test]
    fn x_range_is_calibrated() {
        let m = mapper();
        assert_eq!(m.screen_x(0), 3);
        assert_eq!(m.screen_x(176), 3);
        assert_eq!(m.screen_x(176 + 65), 5);
        assert_eq!(m.screen_x(3920), 118);
        assert_eq!(m.screen_x(4095), 118);
    }

    #[test]
    fn y_axis_is_mirrored() {
        let m = mapper();
        // bottom of the usable range is the bottom of the screen
        assert_eq!(m.screen_y(0), 53);
        assert_eq!(m.screen_y(1218), 53);
        assert_eq!(m.screen_y(1218 + 33), 52);
        assert_eq!(m.screen_y(2878), 3);
        assert_eq!(m.screen_y(4095), 3);
    }

    #[test]
    fn regions_shrink_with_style() {
        assert_eq!(BorderRegion::for_style(BorderStyle::Solid), BorderRegion { width: 128, height: 64 });
        assert_eq!(BorderRegion::for_style(BorderStyle::Double), BorderRegion { width: 124, height: 60 });
        assert_eq!(BorderRegion::for_style(BorderStyle::Spaced), BorderRegion { width: 122, height: 58 });
    }

    #[test]
    fn far_corner_is_clamped_per_style() {
        let m = mapper();
        let corner = AnalogSample::new(4095, 0);

        let solid = m.map(corner, BorderRegion::for_style(BorderStyle::Solid));
        assert_eq!(solid, CursorPosition { x: 118, y: 53 });

        let double = m.map(corner, BorderRegion::for_style(BorderStyle::Double));
        assert_eq!(double, CursorPosition { x: 116, y: 52 });

        let spaced = m.map(corner, BorderRegion::for_style(BorderStyle::Spaced));
        assert_eq!(spaced, CursorPosition { x: 114, y: 50 });
    }

    #[test]
    fn oversized_cursor_pins_to_origin() {
        let m = CursorMapper::with_cursor_size(JoystickCalibration::DEFAULT, 200);
        let pos = m.map(AnalogSample::new(4095, 4095), BorderRegion::for_style(BorderStyle::Solid));
        assert_eq!(pos, CursorPosition { x: 0, y: 0 });
    }

    #[test]
    fn region_contains_bounds() {
        let region = BorderRegion::for_style(BorderStyle::Solid);
        assert!(region.contains(CursorPosition { x: 0, y: 0 }, 8));
        assert!(region.contains(CursorPosition { x: 120, y: 56 }, 8));
        assert!(!region.contains(CursorPosition { x: 121, y: 0 }, 8));
        assert!(!region.contains(CursorPosition { x: 0, y: -1 }, 8));
    }
}
