//! Interactive discovery of the drawable [`Region`](crate::region_model::Region).
//!
//! Every boundary is found by bisection: a probe line is drawn at the middle
//! of the current interval and a person says whether it showed up inside the
//! usable area. [`BoundarySearch`] holds the interval, [`Calibrator`] draws
//! the probes and sequences the eight searches, and [`Feedback`] is whoever
//! answers.

mod boundary;
mod search;
mod session;
/// 终端交互
pub mod terminal;

pub use boundary::{Answer, Axis, Boundary, Corner, Role};
pub use search::{BoundarySearch, Step};
pub use session::{CalibrationError, CalibrationHints, Calibrator, Feedback, FeedbackError};
