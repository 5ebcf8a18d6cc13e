use std::fmt;

use thiserror::Error;

/// 屏幕上可绘制的区域：主矩形加上两个被切掉的角
///
/// All values are device pixels. A cutoff equal to the matching rectangle
/// corner (`(left, top)` or `(right, bottom)`) excludes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    pub cutoff_tl_x: i32,
    pub cutoff_tl_y: i32,
    pub cutoff_br_x: i32,
    pub cutoff_br_y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error("empty rectangle: left={left} right={right} top={top} bottom={bottom}")]
    EmptyRectangle {
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
    },
    #[error("{corner} cutoff ({x}, {y}) lies outside the rectangle")]
    CutoffOutside {
        corner: &'static str,
        x: i32,
        y: i32,
    },
}

impl Region {
    /// A plain rectangle with no excluded corners.
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            cutoff_tl_x: left,
            cutoff_tl_y: top,
            cutoff_br_x: right,
            cutoff_br_y: bottom,
        }
    }

    pub fn with_top_left_cutoff(mut self, x: i32, y: i32) -> Self {
        self.cutoff_tl_x = x;
        self.cutoff_tl_y = y;
        self
    }

    pub fn with_bottom_right_cutoff(mut self, x: i32, y: i32) -> Self {
        self.cutoff_br_x = x;
        self.cutoff_br_y = y;
        self
    }

    pub fn validate(&self) -> Result<(), RegionError> {
        if self.left >= self.right || self.top >= self.bottom {
            return Err(RegionError::EmptyRectangle {
                left: self.left,
                right: self.right,
                top: self.top,
                bottom: self.bottom,
            });
        }
        let corners = [
            ("top-left", self.cutoff_tl_x, self.cutoff_tl_y),
            ("bottom-right", self.cutoff_br_x, self.cutoff_br_y),
        ];
        for (corner, x, y) in corners {
            if !(self.left..=self.right).contains(&x) || !(self.top..=self.bottom).contains(&y) {
                return Err(RegionError::CutoffOutside { corner, x, y });
            }
        }
        Ok(())
    }

    pub fn has_top_left_cutoff(&self) -> bool {
        self.cutoff_tl_x != self.left || self.cutoff_tl_y != self.top
    }

    pub fn has_bottom_right_cutoff(&self) -> bool {
        self.cutoff_br_x != self.right || self.cutoff_br_y != self.bottom
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// 判断一个点能不能画
    ///
    /// Rectangle edges are inclusive. Points strictly inside either excluded
    /// corner are rejected; the cutoff lines themselves stay drawable.
    pub fn allowed(&self, x: i32, y: i32) -> bool {
        if x < self.left || x > self.right {
            return false;
        }
        if y < self.top || y > self.bottom {
            return false;
        }
        if x < self.cutoff_tl_x && y < self.cutoff_tl_y {
            return false;
        }
        if x > self.cutoff_br_x && y > self.cutoff_br_y {
            return false;
        }
        true
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Main bounds: left={}, right={}, top={}, bottom={}",
            self.left, self.right, self.top, self.bottom
        )?;
        writeln!(
            f,
            "Top-left cutoff: x={}, y={}",
            self.cutoff_tl_x, self.cutoff_tl_y
        )?;
        write!(
            f,
            "Bottom-right cutoff: x={}, y={}",
            self.cutoff_br_x, self.cutoff_br_y
        )
    }
}
