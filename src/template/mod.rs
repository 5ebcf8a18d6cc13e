//! Blank canvas matching the drawable area, for preparing images to draw.
//!
//! Template pixels map one-to-one onto image pixels, each `scale` device
//! pixels wide, so the template covers the region exactly.
//! Cutoff corners are painted mid-gray, which the binarization threshold
//! treats as background.

use image::{GrayImage, Luma};

use crate::config::Profile;

pub const DRAWABLE: Luma<u8> = Luma([255]);
pub const CUT_OFF: Luma<u8> = Luma([128]);

pub fn render(profile: &Profile) -> GrayImage {
    let region = &profile.region;
    let to_px = |device: i32| (device as f64 / profile.scale).max(0.0) as u32;

    let width = to_px(region.width());
    let height = to_px(region.height());
    let mut img = GrayImage::from_pixel(width, height, DRAWABLE);

    let tl_x = to_px(region.cutoff_tl_x - region.left).min(width);
    let tl_y = to_px(region.cutoff_tl_y - region.top).min(height);
    for y in 0..tl_y {
        for x in 0..tl_x {
            img.put_pixel(x, y, CUT_OFF);
        }
    }

    let br_x = to_px(region.cutoff_br_x - region.left);
    let br_y = to_px(region.cutoff_br_y - region.top);
    for y in br_y..height {
        for x in br_x..width {
            img.put_pixel(x, y, CUT_OFF);
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region_model::Region;
    use crate::swipe_extractor::{BinaryRaster, extract};

    fn profile() -> Profile {
        Profile {
            region: Region::new(100, 300, 50, 250)
                .with_top_left_cutoff(140, 90)
                .with_bottom_right_cutoff(260, 210),
            scale: 2.0,
        }
    }

    #[test]
    fn size_follows_region_and_scale() {
        let img = render(&profile());
        assert_eq!(img.dimensions(), (100, 100));
    }

    #[test]
    fn cutoffs_are_gray() {
        let img = render(&profile());
        assert_eq!(*img.get_pixel(0, 0), CUT_OFF);
        assert_eq!(*img.get_pixel(19, 19), CUT_OFF);
        assert_eq!(*img.get_pixel(20, 19), DRAWABLE);
        assert_eq!(*img.get_pixel(19, 20), DRAWABLE);
        assert_eq!(*img.get_pixel(80, 80), CUT_OFF);
        assert_eq!(*img.get_pixel(99, 99), CUT_OFF);
        assert_eq!(*img.get_pixel(79, 99), DRAWABLE);
        assert_eq!(*img.get_pixel(50, 50), DRAWABLE);
    }

    #[test]
    fn blank_template_draws_nothing() {
        let raster = BinaryRaster::from_gray_image(&render(&profile()));
        assert_eq!(extract(&raster).count(), 0);
    }

    #[test]
    fn no_cutoffs_means_all_white() {
        let plain = Profile {
            region: Region::new(0, 10, 0, 4),
            scale: 0.5,
        };
        let img = render(&plain);
        assert_eq!(img.dimensions(), (20, 8));
        assert!(img.pixels().all(|p| *p == DRAWABLE));
    }
}
