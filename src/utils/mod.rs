//! mod.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.

pub mod analog;
pub mod border_display;
pub mod brightness;
pub mod control_loop;
pub mod cursor;
pub mod frame;
pub mod input_monitor;
pub mod led_control;
pub mod system_state;

pub use analog::{AnalogSample, AnalogSampler, AnalogSource, Axis};
pub use border_display::FrameRenderer;
pub use brightness::DutyPair;
pub use control_loop::{ControlLoop, CycleError, CycleReport};
pub use cursor::{BorderRegion, CursorMapper, CursorPosition};
pub use frame::{Frame, FrameSink};
pub use input_monitor::{Button, DebounceRecord, DebouncedInputMonitor, InterruptAck};
pub use led_control::{IndicatorOutput, LedChannel, LedController, PwmOutput};
pub use system_state::{BorderStyle, StateSnapshot, SystemState};
