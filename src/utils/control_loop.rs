//! control_loop.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! The main loop. Each cycle samples the joystick once, drives the LEDs and maps the
//! cursor from that one sample, then redraws the display. The display and the PWM
//! peripheral are only ever touched from here, never from interrupt context.

use embedded_hal::delay::DelayNs;

use crate::config::{JoystickCalibration, PwmConfig};
use crate::error::Error;
use crate::utils::analog::{AnalogSample, AnalogSampler, AnalogSource};
use crate::utils::border_display::FrameRenderer;
use crate::utils::brightness::{self, DutyPair};
use crate::utils::cursor::{BorderRegion, CursorMapper, CursorPosition};
use crate::utils::frame::{Frame, FrameSink};
use crate::utils::led_control::{IndicatorOutput, LedController, PwmOutput};
use crate::utils::system_state::{BorderStyle, SystemState};

/// Why a cycle stopped early, tagged with the stage that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleError {
    /// No sample this cycle; outputs were left untouched.
    Sampling(Error),
    /// LEDs were updated but the frame did not reach the panel.
    Rendering(Error),
}

impl CycleError {
    pub fn error(&self) -> Error {
        match self {
            CycleError::Sampling(e) | CycleError::Rendering(e) => *e,
        }
    }
}

/// What one completed cycle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleReport {
    pub sample: AnalogSample,
    /// Duties written this cycle; `None` while PWM is disabled.
    pub duties: Option<DutyPair>,
    pub cursor: CursorPosition,
    pub border: BorderStyle,
}

pub struct ControlLoop<'a, S, P, I, D> {
    state: &'a SystemState,
    sampler: AnalogSampler<S>,
    leds: LedController<P, I>,
    mapper: CursorMapper,
    renderer: FrameRenderer,
    display: D,
    center: u16,
    pwm_config: PwmConfig,
}

impl<'a, S, P, I, D> ControlLoop<'a, S, P, I, D>
where
    S: AnalogSource,
    P: PwmOutput,
    I: IndicatorOutput,
    D: FrameSink,
{
    pub fn new(state: &'a SystemState, adc: S, pwm: P, indicator: I, display: D) -> Self {
        Self::with_config(
            state,
            adc,
            pwm,
            indicator,
            display,
            JoystickCalibration::DEFAULT,
            PwmConfig::DEFAULT,
        )
    }

    pub fn with_config(
        state: &'a SystemState,
        adc: S,
        pwm: P,
        indicator: I,
        display: D,
        calibration: JoystickCalibration,
        pwm_config: PwmConfig,
    ) -> Self {
        ControlLoop {
            state,
            sampler: AnalogSampler::new(adc),
            leds: LedController::new(pwm, indicator, pwm_config),
            mapper: CursorMapper::new(calibration),
            renderer: FrameRenderer::new(),
            display,
            center: calibration.center,
            pwm_config,
        }
    }

    /// Run one sample → map → render pass.
    ///
    /// A sampling error aborts the cycle before any output changes. A display error is
    /// returned after the LEDs have been updated; the next cycle redraws from scratch.
    pub fn cycle(&mut self) -> Result<CycleReport, CycleError> {
        let sample = self.sampler.sample().map_err(CycleError::Sampling)?;
        let snapshot = self.state.snapshot();

        self.leds.sync_enabled(snapshot.pwm_enabled);
        self.leds.sync_indicator(snapshot.indicator_led);
        let duties = snapshot
            .pwm_enabled
            .then(|| brightness::duties(&sample, self.center, &self.pwm_config));
        if let Some(duties) = duties {
            self.leds.apply_duties(duties);
        }

        let region = BorderRegion::for_style(snapshot.border_style);
        let cursor = self.mapper.map(sample, region);

        self.renderer
            .render(snapshot.border_style, cursor, &mut self.display)
            .map_err(CycleError::Rendering)?;

        trace!(
            "x={} y={} duty={:?} cursor=({}, {}) border={:?}",
            sample.x, sample.y, duties, cursor.x, cursor.y, snapshot.border_style
        );

        Ok(CycleReport {
            sample,
            duties,
            cursor,
            border: snapshot.border_style,
        })
    }

    /// Cycle forever, sleeping `period_ms` between cycles. Errors go to `on_error` and
    /// the loop carries on.
    pub fn run<T, F>(&mut self, delay: &mut T, period_ms: u32, mut on_error: F) -> !
    where
        T: DelayNs,
        F: FnMut(CycleError),
    {
        loop {
            if let Err(err) = self.cycle() {
                on_error(err);
            }
            delay.delay_ms(period_ms);
        }
    }

    pub fn frame(&self) -> &Frame {
        self.renderer.frame()
    }

    pub fn leds(&self) -> &LedController<P, I> {
        &self.leds
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn adc_mut(&mut self) -> &mut S {
        self.sampler.source_mut()
    }
}
