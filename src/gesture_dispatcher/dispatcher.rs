use std::{thread, time::Duration};

use tracing::debug;

use super::device::{DeviceError, Swipe, SwipeDevice};
use crate::coordinate_mapper::Segment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Floor for every stroke, however short.
    pub min_duration_ms: u32,
    /// Device pixels covered per millisecond on top of the floor.
    pub speed: f64,
    /// Pause after each stroke so the device can settle.
    pub delay_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            min_duration_ms: 200,
            speed: 0.5,
            delay_ms: 25,
        }
    }
}

impl Timing {
    /// Saturates at `u32::MAX` for absurdly slow speeds.
    pub fn duration_for(&self, len: u32) -> u32 {
        let travel = (len as f64 / self.speed).round() as u32;
        self.min_duration_ms.saturating_add(travel)
    }
}

/// Calibration test line, drawn as two swipes fanning out from its middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Vertical line at `x` spanning `y_start..=y_end`.
    Vertical { x: i32, y_start: i32, y_end: i32 },
    /// Horizontal line at `y` spanning `x_start..=x_end`.
    Horizontal { y: i32, x_start: i32, x_end: i32 },
}

impl Probe {
    /// The two center-out halves of the line.
    pub fn halves(&self, duration_ms: u32) -> [Swipe; 2] {
        match *self {
            Probe::Vertical { x, y_start, y_end } => {
                let mid = (y_start + y_end).div_euclid(2);
                [
                    Swipe { x1: x, y1: mid, x2: x, y2: y_start, duration_ms },
                    Swipe { x1: x, y1: mid, x2: x, y2: y_end, duration_ms },
                ]
            }
            Probe::Horizontal { y, x_start, x_end } => {
                let mid = (x_start + x_end).div_euclid(2);
                [
                    Swipe { x1: mid, y1: y, x2: x_start, y2: y, duration_ms },
                    Swipe { x1: mid, y1: y, x2: x_end, y2: y, duration_ms },
                ]
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeTiming {
    pub duration_ms: u32,
    pub settle_ms: u64,
}

impl Default for ProbeTiming {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            settle_ms: 100,
        }
    }
}

/// Owns the device for the whole session and feeds it one stroke at a time.
pub struct Dispatcher<D> {
    device: D,
    timing: Timing,
    probe_timing: ProbeTiming,
}

impl<D: SwipeDevice> Dispatcher<D> {
    pub fn new(device: D, timing: Timing) -> Self {
        Self {
            device,
            timing,
            probe_timing: ProbeTiming::default(),
        }
    }

    pub fn with_probe_timing(mut self, probe_timing: ProbeTiming) -> Self {
        self.probe_timing = probe_timing;
        self
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }

    /// Sends one horizontal stroke, then waits out the inter-gesture delay.
    pub fn dispatch(&mut self, segment: Segment) -> Result<Swipe, DeviceError> {
        let swipe = Swipe {
            x1: segment.start_x,
            y1: segment.y,
            x2: segment.end_x,
            y2: segment.y,
            duration_ms: self.timing.duration_for(segment.len()),
        };
        self.device.send_swipe(&swipe)?;
        sleep_ms(self.timing.delay_ms);
        Ok(swipe)
    }

    pub fn draw_probe(&mut self, probe: Probe) -> Result<(), DeviceError> {
        debug!(?probe, "drawing probe line");
        let [first, second] = probe.halves(self.probe_timing.duration_ms);
        self.device.send_swipe(&first)?;
        sleep_ms(self.probe_timing.settle_ms);
        self.device.send_swipe(&second)
    }
}

fn sleep_ms(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}
