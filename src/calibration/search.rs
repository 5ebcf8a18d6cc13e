use super::boundary::{Answer, Boundary, Role};

/// What the driver should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Draw a probe at this coordinate and ask again.
    Probe(i32),
    /// Search finished with this estimate.
    Done(i32),
}

/// 二分查找单条边界
///
/// Pure state: the caller draws the probe for [`Step::Probe`] and feeds back
/// whatever the observer answered. Searching stops once `high - low <= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySearch {
    boundary: Boundary,
    origin: (i32, i32),
    low: i32,
    high: i32,
}

impl BoundarySearch {
    /// Negative coordinates are never probed, so `min` is raised to 0.
    pub fn new(boundary: Boundary, min: i32, max: i32) -> Self {
        let low = min.max(0);
        Self {
            boundary,
            origin: (low, max),
            low,
            high: max,
        }
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn interval(&self) -> (i32, i32) {
        (self.low, self.high)
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub fn is_done(&self) -> bool {
        self.high - self.low <= 1
    }

    fn mid(&self) -> i32 {
        (self.low + self.high).div_euclid(2)
    }

    pub fn step(&self) -> Step {
        if self.is_done() {
            Step::Done(self.mid())
        } else {
            Step::Probe(self.mid())
        }
    }

    pub fn feed(&mut self, answer: Answer) -> Step {
        if self.is_done() {
            return self.step();
        }
        let mid = self.mid();
        match (answer, self.boundary.role()) {
            (Answer::Repeat, _) => {}
            (Answer::Restart, _) => {
                (self.low, self.high) = self.origin;
            }
            (Answer::Inside, Role::Leading) | (Answer::Outside, Role::Trailing) => self.high = mid,
            (Answer::Outside, Role::Leading) | (Answer::Inside, Role::Trailing) => self.low = mid,
        }
        self.step()
    }
}
