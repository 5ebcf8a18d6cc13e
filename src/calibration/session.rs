use thiserror::Error;
use tracing::{debug, info};

use super::boundary::{Answer, Axis, Boundary, Corner};
use super::search::{BoundarySearch, Step};
use crate::gesture_dispatcher::{DeviceError, Dispatcher, Probe, SwipeDevice};
use crate::region_model::Region;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("failed to read the answer")]
    Io(#[from] std::io::Error),
    #[error("input closed")]
    Closed,
    #[error("interrupted")]
    Interrupted,
}

#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("probe could not be drawn")]
    Device(#[from] DeviceError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

/// 人类观察者
///
/// Only has to produce answers; re-prompting on garbage input is the
/// implementation's business.
pub trait Feedback {
    /// Called right after the probe at `at` has been drawn.
    fn answer(&mut self, boundary: Boundary, at: i32) -> Result<Answer, FeedbackError>;

    fn corner_cut_off(&mut self, corner: Corner) -> Result<bool, FeedbackError>;

    /// Informational, called whenever the search interval changes.
    fn narrowed(&mut self, _boundary: Boundary, _low: i32, _high: i32) {}
}

/// Starting point for a calibration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationHints {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Rough drawable area, only used as the span of the first probes.
    pub reference: Region,
}

pub struct Calibrator<'a, D, F> {
    dispatcher: &'a mut Dispatcher<D>,
    feedback: F,
}

impl<'a, D: SwipeDevice, F: Feedback> Calibrator<'a, D, F> {
    pub fn new(dispatcher: &'a mut Dispatcher<D>, feedback: F) -> Self {
        Self {
            dispatcher,
            feedback,
        }
    }

    pub fn into_feedback(self) -> F {
        self.feedback
    }

    /// Rectangle first against the reference span, then the corners against
    /// the rectangle just found.
    pub fn calibrate(&mut self, hints: &CalibrationHints) -> Result<Region, CalibrationError> {
        let (w, h) = (hints.screen_width, hints.screen_height);
        let span = hints.reference;

        let left = self.run(BoundarySearch::new(Boundary::Left, 0, w / 2), &span)?;
        let right = self.run(BoundarySearch::new(Boundary::Right, w / 2, w), &span)?;
        let top = self.run(BoundarySearch::new(Boundary::Top, 0, h / 2), &span)?;
        let bottom = self.run(BoundarySearch::new(Boundary::Bottom, h / 2, h), &span)?;
        let mut region = Region::new(left, right, top, bottom);
        info!(left, right, top, bottom, "main rectangle calibrated");

        let cut_tl = self.feedback.corner_cut_off(Corner::TopLeft)?;
        let cut_br = self.feedback.corner_cut_off(Corner::BottomRight)?;

        let mid_x = (left + right).div_euclid(2);
        let mid_y = (top + bottom).div_euclid(2);
        let rect = region;

        if cut_tl {
            let x = self.run(BoundarySearch::new(Boundary::CutoffTopLeftX, left, mid_x), &rect)?;
            let y = self.run(BoundarySearch::new(Boundary::CutoffTopLeftY, top, mid_y), &rect)?;
            region = region.with_top_left_cutoff(x, y);
        }
        if cut_br {
            let x = self.run(
                BoundarySearch::new(Boundary::CutoffBottomRightX, mid_x, right),
                &rect,
            )?;
            let y = self.run(
                BoundarySearch::new(Boundary::CutoffBottomRightY, mid_y, bottom),
                &rect,
            )?;
            region = region.with_bottom_right_cutoff(x, y);
        }

        info!(?region, "calibration finished");
        Ok(region)
    }

    /// Drives one search to completion, drawing probes across `span`.
    pub fn run(&mut self, mut search: BoundarySearch, span: &Region) -> Result<i32, CalibrationError> {
        let boundary = search.boundary();
        let (low, high) = search.interval();
        info!(%boundary, low, high, "calibrating");

        let value = loop {
            let at = match search.step() {
                Step::Done(value) => break value,
                Step::Probe(at) => at,
            };
            self.dispatcher.draw_probe(probe_at(boundary, at, span))?;
            let answer = self.feedback.answer(boundary, at)?;
            debug!(%boundary, at, ?answer, "answer");

            let before = search.interval();
            search.feed(answer);
            let (low, high) = search.interval();
            if (low, high) != before || answer == Answer::Restart {
                self.feedback.narrowed(boundary, low, high);
            }
        };
        info!(%boundary, value, "boundary found");
        Ok(value)
    }
}

fn probe_at(boundary: Boundary, at: i32, span: &Region) -> Probe {
    match boundary.axis() {
        Axis::X => Probe::Vertical {
            x: at,
            y_start: span.top,
            y_end: span.bottom,
        },
        Axis::Y => Probe::Horizontal {
            y: at,
            x_start: span.left,
            x_end: span.right,
        },
    }
}
