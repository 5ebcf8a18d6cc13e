use image::GrayImage;
use thiserror::Error;

/// Intensities below this are ink.
pub const FOREGROUND_THRESHOLD: u8 = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("raster is {width}x{height} but {len} samples were given")]
    SizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
}

/// Row-major foreground mask, physical row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryRaster {
    width: usize,
    height: usize,
    mask: Vec<bool>,
}

impl BinaryRaster {
    /// Binarize raw 8-bit intensities: dark pixels become foreground.
    pub fn from_intensity(width: usize, height: usize, data: &[u8]) -> Result<Self, RasterError> {
        Self::build(width, height, data, |v| v < FOREGROUND_THRESHOLD)
    }

    /// Wrap an already binarized grid; any non-zero sample is foreground.
    pub fn from_binarized(width: usize, height: usize, data: &[u8]) -> Result<Self, RasterError> {
        Self::build(width, height, data, |v| v != 0)
    }

    pub fn from_gray_image(img: &GrayImage) -> Self {
        let mask = img
            .as_raw()
            .iter()
            .map(|&v| v < FOREGROUND_THRESHOLD)
            .collect();
        Self {
            width: img.width() as usize,
            height: img.height() as usize,
            mask,
        }
    }

    fn build(
        width: usize,
        height: usize,
        data: &[u8],
        is_foreground: impl Fn(u8) -> bool,
    ) -> Result<Self, RasterError> {
        if data.len() != width * height {
            return Err(RasterError::SizeMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            mask: data.iter().map(|&v| is_foreground(v)).collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Physical row `y`, counted from the top.
    pub fn row(&self, y: usize) -> &[bool] {
        &self.mask[y * self.width..(y + 1) * self.width]
    }
}
