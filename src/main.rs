//! main.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Firmware entry for the micro:bit v2.
//!
//! Wiring
//!     Joystick VRx to P1, VRy to P2, SW to P12
//!     LED (X deflection) to P8
//!     LED (Y deflection) to P16
//!     Indicator LED to P9
//!     SSD1306 128x64 OLED on the external I2C pins (SCL P19, SDA P20)
//!
//! Button A toggles the deflection LEDs. Pressing the joystick toggles the indicator LED
//! and cycles the border style.

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use core::sync::atomic::{
    AtomicU32,
    Ordering::{Acquire, Release},
};

use cortex_m_rt::entry;
use critical_section_lock_mut::LockMut;
use embedded_graphics::prelude::*;
use embedded_hal::digital::OutputPin;
use microbit::{
    board::Board,
    hal::{
        Timer,
        gpio::{
            Floating, Input, Level, Output, Pin, PushPull,
            p0::{P0_03, P0_04},
        },
        gpiote::Gpiote,
        pwm::{self, Pwm},
        saadc::{self, Saadc, SaadcConfig},
        twim::Twim,
    },
    pac::{Interrupt, NVIC, PWM0, TIMER0, TWIM0, interrupt, twim0::frequency::FREQUENCY_A},
};
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

use joystick_canvas::{
    Error,
    config::{DISPLAY_ADDRESS, LOOP_PERIOD_MS, TICK_MS, TIMER_TICKS_PER_MS},
    utils::{
        AnalogSource, Axis, Button, ControlLoop, DebouncedInputMonitor, Frame, FrameSink,
        IndicatorOutput, InterruptAck, LedChannel, PwmOutput, SystemState,
    },
};

/// types
type XAxisPin = P0_03<Input<Floating>>; //e01
type YAxisPin = P0_04<Input<Floating>>; //e02
type OledDisplay = Ssd1306<
    I2CInterface<Twim<TWIM0>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// globals
const TICK_PERIOD_TICKS: u32 = TIMER_TICKS_PER_MS * TICK_MS;

static STATE: SystemState = SystemState::new();
static MILLIS: AtomicU32 = AtomicU32::new(0);
static TICK_TIMER: LockMut<Timer<TIMER0>> = LockMut::new();
static BUTTONS: LockMut<ButtonIrq> = LockMut::new();

/// GPIOTE channel 0 watches button A, channel 1 the joystick switch.
struct ButtonEvents {
    gpiote: Gpiote,
}

impl ButtonEvents {
    fn pending(&self) -> Option<Button> {
        if self.gpiote.channel0().is_event_triggered() {
            Some(Button::A)
        } else if self.gpiote.channel1().is_event_triggered() {
            Some(Button::Joystick)
        } else {
            None
        }
    }
}

impl InterruptAck for ButtonEvents {
    fn acknowledge(&mut self, button: Button) {
        match button {
            Button::A => self.gpiote.channel0().reset_events(),
            Button::Joystick => self.gpiote.channel1().reset_events(),
        }
    }
}

struct ButtonIrq {
    events: ButtonEvents,
    monitor: DebouncedInputMonitor<'static>,
}

struct JoystickAdc {
    adc: Saadc,
    x: XAxisPin,
    y: YAxisPin,
}

impl AnalogSource for JoystickAdc {
    fn read(&mut self, axis: Axis) -> Result<i16, Error> {
        let raw = match axis {
            Axis::X => self.adc.read_channel(&mut self.x),
            Axis::Y => self.adc.read_channel(&mut self.y),
        };
        raw.map_err(|_| Error::Adc)
    }
}

struct LedPwm(Pwm<PWM0>);

impl PwmOutput for LedPwm {
    fn configure(&mut self, period: u16) {
        // 16 MHz / 16 = 1 MHz counter
        self.0
            .set_prescaler(pwm::Prescaler::Div16)
            .set_counter_mode(pwm::CounterMode::Up)
            .set_load_mode(pwm::LoadMode::Individual)
            .set_max_duty(period);
    }

    fn set_duty(&mut self, channel: LedChannel, duty: u16) {
        let channel = match channel {
            LedChannel::X => pwm::Channel::C0,
            LedChannel::Y => pwm::Channel::C1,
        };
        self.0.set_duty_on(channel, duty);
    }

    fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.0.enable();
        } else {
            self.0.disable();
        }
    }
}

struct IndicatorLed(Pin<Output<PushPull>>);

impl IndicatorOutput for IndicatorLed {
    fn set(&mut self, on: bool) {
        if on {
            self.0.set_high().ok();
        } else {
            self.0.set_low().ok();
        }
    }
}

struct Oled(OledDisplay);

impl FrameSink for Oled {
    fn flush(&mut self, frame: &Frame) -> Result<(), Error> {
        self.0
            .draw_iter(frame.pixels())
            .map_err(|_| Error::Display)?;
        self.0.flush().map_err(|_| Error::Display)
    }
}

/// Millisecond clock
#[interrupt]
fn TIMER0() {
    TICK_TIMER.with_lock(|tick_timer| {
        tick_timer.reset_event();
        tick_timer.start(TICK_PERIOD_TICKS);
    });
    MILLIS.fetch_add(TICK_MS, Release);
}

/// Buttons event handler. Only touches SystemState and the GPIOTE events.
#[interrupt]
fn GPIOTE() {
    let now = MILLIS.load(Acquire);
    BUTTONS.with_lock(|buttons| {
        let ButtonIrq { events, monitor } = buttons;
        while let Some(button) = events.pending() {
            monitor.on_interrupt(button, now, events);
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("joystick-canvas: starting");

    let board = Board::take().unwrap();

    // millisecond clock
    let mut tick_timer = Timer::new(board.TIMER0);
    tick_timer.enable_interrupt();
    tick_timer.reset_event();
    tick_timer.start(TICK_PERIOD_TICKS);
    TICK_TIMER.init(tick_timer);

    let mut loop_delay = Timer::new(board.TIMER1);

    // deflection LEDs on PWM0, indicator as plain output
    let x_led = board.edge.e08.into_push_pull_output(Level::Low).degrade();
    let y_led = board.edge.e16.into_push_pull_output(Level::Low).degrade();
    let indicator = board.edge.e09.into_push_pull_output(Level::Low).degrade();
    let pwm = Pwm::new(board.PWM0);
    pwm.set_output_pin(pwm::Channel::C0, x_led)
        .set_output_pin(pwm::Channel::C1, y_led);

    // joystick axes
    // VDD/4 reference with 1/4 gain: full scale tracks the 3.3 V rail the stick sits on
    let adc_config = SaadcConfig {
        resolution: saadc::Resolution::_12BIT,
        reference: saadc::Reference::VDD1_4,
        gain: saadc::Gain::GAIN1_4,
        ..Default::default()
    };
    let joystick = JoystickAdc {
        adc: Saadc::new(board.ADC, adc_config),
        x: board.edge.e01.into_floating_input(),
        y: board.edge.e02.into_floating_input(),
    };

    // OLED; a panel that will not initialise is a wiring fault, so stop here
    let i2c = Twim::new(board.TWIM0, board.i2c_external.into(), FREQUENCY_A::K400);
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_ADDRESS);
    let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if let Err(err) = oled.init() {
        panic!("{}: display init {:?}", Error::Config, err);
    }
    rprintln!("display ready at {:#04x}", DISPLAY_ADDRESS);

    // setup gpiote interupts
    let a_btn = board.buttons.button_a.into_floating_input().degrade();
    let joy_btn = board.edge.e12.into_pullup_input().degrade();
    let gpiote = Gpiote::new(board.GPIOTE);
    let channel0 = gpiote.channel0(); //a_btn
    let channel1 = gpiote.channel1(); //joy_btn
    channel0.input_pin(&a_btn).hi_to_lo().enable_interrupt();
    channel0.reset_events();
    channel1.input_pin(&joy_btn).hi_to_lo().enable_interrupt();
    channel1.reset_events();

    BUTTONS.init(ButtonIrq {
        events: ButtonEvents { gpiote },
        monitor: DebouncedInputMonitor::new(&STATE),
    });

    let mut control = ControlLoop::new(
        &STATE,
        joystick,
        LedPwm(pwm),
        IndicatorLed(indicator),
        Oled(oled),
    );

    // Set up the NVIC to handle interrupts.
    unsafe {
        NVIC::unmask(Interrupt::GPIOTE); // btns
        NVIC::unmask(Interrupt::TIMER0); // millisecond clock
    };
    NVIC::unpend(Interrupt::GPIOTE);
    NVIC::unpend(Interrupt::TIMER0);

    rprintln!("entering control loop, period {} ms", LOOP_PERIOD_MS);
    control.run(&mut loop_delay, LOOP_PERIOD_MS, |err| {
        rprintln!("cycle skipped: {:?}", err);
    })
}
