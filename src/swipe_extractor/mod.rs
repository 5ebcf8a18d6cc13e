mod raster;
mod runs;

pub use raster::{BinaryRaster, FOREGROUND_THRESHOLD, RasterError};
pub use runs::{RowStep, Run, Runs};

/// Every maximal horizontal foreground run, bottom row first, zig-zag ordered.
pub fn extract(raster: &BinaryRaster) -> Runs<'_> {
    Runs::new(raster)
}
