use std::fmt;

use num_enum::TryFromPrimitive;

/// The eight values a calibration run discovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Left,
    Right,
    Top,
    Bottom,
    CutoffTopLeftX,
    CutoffTopLeftY,
    CutoffBottomRightX,
    CutoffBottomRightY,
}

/// Which way a visible probe moves the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Drawable side lies above the threshold (`left`, `top`, top-left cutoff).
    Leading,
    /// Drawable side lies below the threshold (`right`, `bottom`, bottom-right cutoff).
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Probed with a vertical line.
    X,
    /// Probed with a horizontal line.
    Y,
}

impl Boundary {
    pub const MAIN: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Top,
        Boundary::Bottom,
    ];

    pub fn role(self) -> Role {
        match self {
            Boundary::Left | Boundary::Top | Boundary::CutoffTopLeftX | Boundary::CutoffTopLeftY => {
                Role::Leading
            }
            Boundary::Right
            | Boundary::Bottom
            | Boundary::CutoffBottomRightX
            | Boundary::CutoffBottomRightY => Role::Trailing,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Boundary::Left
            | Boundary::Right
            | Boundary::CutoffTopLeftX
            | Boundary::CutoffBottomRightX => Axis::X,
            Boundary::Top
            | Boundary::Bottom
            | Boundary::CutoffTopLeftY
            | Boundary::CutoffBottomRightY => Axis::Y,
        }
    }

    /// Name used in prompts and in the config file.
    pub fn key(self) -> &'static str {
        match self {
            Boundary::Left => "left_x",
            Boundary::Right => "right_x",
            Boundary::Top => "top_y",
            Boundary::Bottom => "bottom_y",
            Boundary::CutoffTopLeftX => "cutoff_tl_x",
            Boundary::CutoffTopLeftY => "cutoff_tl_y",
            Boundary::CutoffBottomRightX => "cutoff_br_x",
            Boundary::CutoffBottomRightY => "cutoff_br_y",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    BottomRight,
}

impl Corner {
    /// `(x, y)` thresholds of the corner's cutoff.
    pub fn boundaries(self) -> (Boundary, Boundary) {
        match self {
            Corner::TopLeft => (Boundary::CutoffTopLeftX, Boundary::CutoffTopLeftY),
            Corner::BottomRight => (Boundary::CutoffBottomRightX, Boundary::CutoffBottomRightY),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Corner::TopLeft => "top-left",
            Corner::BottomRight => "bottom-right",
        })
    }
}

/// What the observer saw after a probe, keyed by the letter they typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum Answer {
    /// Probe visible, i.e. drawn inside the usable area.
    Inside = b'y',
    Outside = b'n',
    /// Draw the same probe again.
    Repeat = b'r',
    /// Throw away this boundary's progress.
    Restart = b's',
}

impl Answer {
    /// Case-insensitive; `None` for anything outside `y/n/r/s`.
    pub fn from_key(key: char) -> Option<Self> {
        let byte = u8::try_from(key.to_ascii_lowercase()).ok()?;
        Self::try_from(byte).ok()
    }
}
