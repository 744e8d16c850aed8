//! input_monitor.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Debounced button handling. The GPIOTE interrupt calls `on_interrupt` for every
//! falling edge it sees; the monitor drops edges that arrive within the debounce window
//! of the last accepted edge from the same button, applies the accepted ones to
//! `SystemState`, and always acknowledges the event so the interrupt does not re-fire.

use crate::config::DEBOUNCE_MS;
use crate::utils::system_state::SystemState;

/// Monitored buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// Toggles PWM output.
    A,
    /// Joystick press: toggles the indicator LED and cycles the border style.
    Joystick,
}

impl Button {
    const fn slot(self) -> usize {
        match self {
            Button::A => 0,
            Button::Joystick => 1,
        }
    }
}

/// Clears a button's pending interrupt event.
pub trait InterruptAck {
    fn acknowledge(&mut self, button: Button);
}

/// Timestamp of the last accepted edge for one button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebounceRecord {
    last_accepted_ms: u32,
}

impl DebounceRecord {
    pub const fn new() -> Self {
        DebounceRecord { last_accepted_ms: 0 }
    }

    pub fn last_accepted_ms(&self) -> u32 {
        self.last_accepted_ms
    }

    /// Accept the edge if more than `window_ms` has passed since the last accepted one.
    /// The clock is allowed to wrap.
    pub fn accept(&mut self, now_ms: u32, window_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_accepted_ms) > window_ms {
            self.last_accepted_ms = now_ms;
            true
        } else {
            false
        }
    }
}

pub struct DebouncedInputMonitor<'a> {
    state: &'a SystemState,
    records: [DebounceRecord; 2],
    window_ms: u32,
}

impl<'a> DebouncedInputMonitor<'a> {
    pub const fn new(state: &'a SystemState) -> Self {
        Self::with_window(state, DEBOUNCE_MS)
    }

    pub const fn with_window(state: &'a SystemState, window_ms: u32) -> Self {
        DebouncedInputMonitor {
            state,
            records: [DebounceRecord::new(); 2],
            window_ms,
        }
    }

    pub fn record(&self, button: Button) -> DebounceRecord {
        self.records[button.slot()]
    }

    /// Apply a falling edge seen at `timestamp_ms`. Returns whether it was accepted.
    pub fn on_edge(&mut self, button: Button, timestamp_ms: u32) -> bool {
        if !self.records[button.slot()].accept(timestamp_ms, self.window_ms) {
            return false;
        }

        match button {
            Button::A => {
                self.state.toggle_pwm();
            }
            Button::Joystick => {
                self.state.toggle_indicator();
                self.state.cycle_border();
            }
        }
        true
    }

    /// Interrupt entry point: handle the edge, then acknowledge it whether or not it
    /// was accepted.
    pub fn on_interrupt<A: InterruptAck>(
        &mut self,
        button: Button,
        timestamp_ms: u32,
        ack: &mut A,
    ) -> bool {
        let accepted = self.on_edge(button, timestamp_ms);
        ack.acknowledge(button);
        accepted
    }
}
