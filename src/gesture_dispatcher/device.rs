use std::fmt;

use thiserror::Error;

/// One single-finger drag, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swipe {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub duration_ms: u32,
}

impl fmt::Display for Swipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {}) in {}ms",
            self.x1, self.y1, self.x2, self.y2, self.duration_ms
        )
    }
}

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("failed to launch `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("no device connected")]
    NoDevice,
    #[error("device `{0}` is not connected")]
    NotFound(String),
}

/// 触摸注入的出口
///
/// Implementations must finish (or at least enqueue) the gesture before
/// returning: the caller issues the next one right after its own delay.
pub trait SwipeDevice {
    fn send_swipe(&mut self, swipe: &Swipe) -> Result<(), DeviceError>;
}

impl<T: SwipeDevice + ?Sized> SwipeDevice for &mut T {
    fn send_swipe(&mut self, swipe: &Swipe) -> Result<(), DeviceError> {
        (**self).send_swipe(swipe)
    }
}
