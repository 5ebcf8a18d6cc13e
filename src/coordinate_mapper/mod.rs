//! Image space → device space, then clipped against the drawable [`Region`].
//!
//! Clipping never splits a stroke: a run that still has an endpoint outside
//! the region after clamping is dropped as a whole.

use tracing::trace;

use crate::region_model::Region;
use crate::swipe_extractor::Run;

/// Where the image's bottom-left pixel lands and how big one pixel is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub origin_x: i32,
    pub origin_y: i32,
    pub scale: f64,
}

impl Placement {
    /// Anchors the image on the region's bottom-left corner.
    pub fn bottom_left(region: &Region, scale: f64) -> Self {
        Self {
            origin_x: region.left,
            origin_y: region.bottom,
            scale,
        }
    }

    /// Projects a run without any clipping. Image rows grow upwards,
    /// device rows grow downwards.
    pub fn project(&self, run: Run) -> Segment {
        let x = |col: usize| (self.origin_x as f64 + col as f64 * self.scale) as i32;
        Segment {
            start_x: x(run.start),
            end_x: x(run.end),
            y: (self.origin_y as f64 - run.row as f64 * self.scale) as i32,
        }
    }
}

/// Horizontal stroke in device pixels; `start_x > end_x` draws right to left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start_x: i32,
    pub end_x: i32,
    pub y: i32,
}

impl Segment {
    pub fn len(&self) -> u32 {
        self.start_x.abs_diff(self.end_x)
    }

    pub fn is_empty(&self) -> bool {
        self.start_x == self.end_x
    }
}

/// Clamps a segment into `region`, or rejects it.
///
/// The start is only ever raised and the end only ever lowered, so a
/// right-to-left stroke that pokes out of the region ends up rejected
/// by the endpoint check rather than flipped.
pub fn clip(region: &Region, segment: Segment) -> Option<Segment> {
    let Segment {
        mut start_x,
        mut end_x,
        y,
    } = segment;

    start_x = start_x.max(region.left);
    if y < region.cutoff_tl_y {
        start_x = start_x.max(region.cutoff_tl_x);
    }

    end_x = end_x.min(region.right);
    if y > region.cutoff_br_y {
        end_x = end_x.min(region.cutoff_br_x);
    }

    if start_x == end_x {
        return None;
    }
    if !region.allowed(start_x, y) || !region.allowed(end_x, y) {
        return None;
    }
    Some(Segment { start_x, end_x, y })
}

/// Runs the whole image → device transform for one region.
#[derive(Debug, Clone, Copy)]
pub struct Mapper {
    region: Region,
    placement: Placement,
}

impl Mapper {
    pub fn new(region: Region, placement: Placement) -> Self {
        Self { region, placement }
    }

    pub fn map(&self, run: Run) -> Option<Segment> {
        let projected = self.placement.project(run);
        let clipped = clip(&self.region, projected);
        if clipped.is_none() {
            trace!(?run, ?projected, "run dropped by bounds check");
        }
        clipped
    }
}
