/// `adb` 命令行实现
pub mod adb;
mod device;
mod dispatcher;
mod dry_run;

pub use device::{DeviceError, Swipe, SwipeDevice};
pub use dispatcher::{Dispatcher, Probe, ProbeTiming, Timing};
pub use dry_run::DryRunDevice;
