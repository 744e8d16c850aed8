//! Property tests over the full 12-bit analog domain.

use joystick_canvas::config::{ADC_MAX, CURSOR_SIZE, JoystickCalibration, PwmConfig};
use joystick_canvas::utils::brightness::duty;
use joystick_canvas::utils::{AnalogSample, BorderRegion, BorderStyle, CursorMapper};
use proptest::prelude::*;

fn style() -> impl Strategy<Value = BorderStyle> {
    prop::sample::select(BorderStyle::ALL.to_vec())
}

proptest! {
    #[test]
    fn cursor_stays_inside_border_region(x in 0u16..=ADC_MAX, y in 0u16..=ADC_MAX, style in style()) {
        let mapper = CursorMapper::default();
        let region = BorderRegion::for_style(style);
        let pos = mapper.map(AnalogSample::new(x, y), region);
        prop_assert!(region.contains(pos, CURSOR_SIZE), "{:?} outside {:?}", pos, region);
    }

    #[test]
    fn duty_never_exceeds_period(raw in 0u16..=ADC_MAX) {
        let cfg = PwmConfig::DEFAULT;
        prop_assert!(duty(raw, JoystickCalibration::DEFAULT.center, &cfg) <= cfg.period);
    }

    #[test]
    fn duty_is_symmetric_about_center(offset in 0u16..=2047) {
        let cfg = PwmConfig::DEFAULT;
        let center = JoystickCalibration::DEFAULT.center;
        prop_assert_eq!(duty(center + offset, center, &cfg), duty(center - offset, center, &cfg));
    }

    #[test]
    fn x_mapping_is_monotonic(a in 0u16..=ADC_MAX, b in 0u16..=ADC_MAX) {
        let mapper = CursorMapper::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(mapper.screen_x(lo) <= mapper.screen_x(hi));
        // y is mirrored
        prop_assert!(mapper.screen_y(lo) >= mapper.screen_y(hi));
    }
}

/// The two axes map independently, so sweeping each axis across every raw value
/// covers the whole 4096 x 4096 input square.
#[test]
fn every_raw_value_lands_inside_every_region() {
    let mapper = CursorMapper::default();
    for style in BorderStyle::ALL {
        let region = BorderRegion::for_style(style);
        for raw in 0..=ADC_MAX {
            let across = mapper.map(AnalogSample::new(raw, 2048), region);
            let down = mapper.map(AnalogSample::new(2048, raw), region);
            assert!(region.contains(across, CURSOR_SIZE), "{style:?} x={raw} -> {across:?}");
            assert!(region.contains(down, CURSOR_SIZE), "{style:?} y={raw} -> {down:?}");
        }
    }
}
