use super::raster::BinaryRaster;

/// 一段连续的前景像素
///
/// `row` counts from the bottom of the image. On odd rows `start > end`,
/// so consecutive runs zig-zag instead of always travelling left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: usize,
    pub end: usize,
    pub row: usize,
}

impl Run {
    fn oriented(first: usize, last: usize, row: usize) -> Self {
        if row % 2 == 0 {
            Self {
                start: first,
                end: last,
                row,
            }
        } else {
            Self {
                start: last,
                end: first,
                row,
            }
        }
    }
}

/// Lazy bottom-to-top scan over a [`BinaryRaster`].
pub struct Runs<'a> {
    raster: &'a BinaryRaster,
    row: usize,
    col: usize,
}

impl<'a> Runs<'a> {
    pub fn new(raster: &'a BinaryRaster) -> Self {
        Self {
            raster,
            row: 0,
            col: 0,
        }
    }
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let width = self.raster.width();
        while self.row < self.raster.height() {
            let pixels = self.raster.row(self.raster.height() - 1 - self.row);

            if let Some(offset) = pixels[self.col..].iter().position(|&fg| fg) {
                let first = self.col + offset;
                let last = pixels[first..]
                    .iter()
                    .position(|&fg| !fg)
                    .map_or(width - 1, |len| first + len - 1);
                self.col = last + 1;
                return Some(Run::oriented(first, last, self.row));
            }

            self.row += 1;
            self.col = 0;
        }
        None
    }
}

/// Keeps every `step`-th row that produced runs, dropping the rest.
pub struct RowStep<I> {
    inner: I,
    step: usize,
    current_row: Option<usize>,
    rows_seen: usize,
}

impl<I: Iterator<Item = Run>> RowStep<I> {
    pub fn new(inner: I, step: usize) -> Self {
        Self {
            inner,
            step: step.max(1),
            current_row: None,
            rows_seen: 0,
        }
    }
}

impl<I: Iterator<Item = Run>> Iterator for RowStep<I> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        loop {
            let run = self.inner.next()?;
            if self.current_row != Some(run.row) {
                self.current_row = Some(run.row);
                self.rows_seen += 1;
            }
            if (self.rows_seen - 1) % self.step == 0 {
                return Some(run);
            }
        }
    }
}
