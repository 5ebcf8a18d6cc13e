//! raster → runs → segments → swipes, strictly in order.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::coordinate_mapper::Mapper;
use crate::gesture_dispatcher::{DeviceError, Dispatcher, SwipeDevice};
use crate::swipe_extractor::{BinaryRaster, RowStep, extract};

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("failed to load image {}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("run #{index} failed after {drawn} swipes were drawn")]
    Device {
        index: usize,
        drawn: usize,
        #[source]
        source: DeviceError,
    },
}

/// Counters for one drawing pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawReport {
    /// Runs left after row decimation.
    pub runs: usize,
    pub drawn: usize,
    /// Degenerate or out-of-region runs.
    pub dropped: usize,
}

/// Decodes any supported image file and binarizes its luma.
pub fn load_raster(path: &Path) -> Result<BinaryRaster, DrawError> {
    let img = image::open(path)
        .map_err(|source| DrawError::Image {
            path: path.to_owned(),
            source,
        })?
        .into_luma8();
    debug!(path = %path.display(), width = img.width(), height = img.height(), "image loaded");
    Ok(BinaryRaster::from_gray_image(&img))
}

/// Draws every run of `raster` that survives clipping, one swipe at a time.
///
/// The first device failure stops the drawing; whatever was already drawn
/// stays on screen.
pub fn extract_and_draw<D: SwipeDevice>(
    raster: &BinaryRaster,
    mapper: &Mapper,
    dispatcher: &mut Dispatcher<D>,
    row_step: usize,
) -> Result<DrawReport, DrawError> {
    let total = RowStep::new(extract(raster), row_step).count();
    info!(runs = total, row_step, "drawing");

    let mut report = DrawReport {
        runs: total,
        ..DrawReport::default()
    };
    let tick = (total / 20).max(1);

    for (index, run) in RowStep::new(extract(raster), row_step).enumerate() {
        match mapper.map(run) {
            Some(segment) => {
                let swipe = dispatcher.dispatch(segment).map_err(|source| DrawError::Device {
                    index,
                    drawn: report.drawn,
                    source,
                })?;
                let direction = if segment.start_x < segment.end_x { "→" } else { "←" };
                debug!(?run, %swipe, direction, "swipe");
                report.drawn += 1;
            }
            None => report.dropped += 1,
        }

        let done = index + 1;
        if done % tick == 0 || done == total {
            info!("{done}/{total} runs ({}%)", done * 100 / total);
        }
    }

    info!(drawn = report.drawn, dropped = report.dropped, "drawing completed");
    Ok(report)
}
