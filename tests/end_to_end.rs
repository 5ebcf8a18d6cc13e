use std::fs;

use image::{GrayImage, Luma};
use swipedraw::{
    ConfigStore, Dispatcher, Mapper, Timing,
    calibration::{Answer, Boundary, CalibrationHints, Calibrator, Corner, Feedback, FeedbackError, Role},
    config::{DEFAULT_FILE, USER_FILE},
    extract_and_draw,
    gesture_dispatcher::{DryRunDevice, ProbeTiming},
    pipeline, template,
};

const DEFAULTS: &str = "\
[bounds]
left_x = 100
right_x = 980
top_y = 300
bottom_y = 2100

[settings]
scale = 2.0
";

fn instant() -> Timing {
    Timing {
        delay_ms: 0,
        ..Timing::default()
    }
}

#[test]
fn draws_a_png_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(DEFAULT_FILE), DEFAULTS).expect("defaults");
    let store = ConfigStore::new(dir.path());
    let profile = store.load().expect("profile");

    // dark diagonal bar on white, two pixels thick
    let mut img = GrayImage::from_pixel(16, 8, Luma([255]));
    for y in 0..8u32 {
        img.put_pixel(y * 2, y, Luma([0]));
        img.put_pixel(y * 2 + 1, y, Luma([10]));
    }
    let path = dir.path().join("bar.png");
    img.save(&path).expect("save png");

    let raster = pipeline::load_raster(&path).expect("raster");
    let mapper = Mapper::new(profile.region, profile.placement());
    let mut dispatcher = Dispatcher::new(DryRunDevice::new(), instant());
    let report = extract_and_draw(&raster, &mapper, &mut dispatcher, 1).expect("draw");

    assert_eq!(report.runs, 8);
    assert_eq!(report.drawn, 8);
    let swipes = dispatcher.device().swipes();
    // bottom image row first, at the bottom of the region
    assert_eq!((swipes[0].x1, swipes[0].x2, swipes[0].y1), (128, 130, 2100));
    // second row runs right to left
    assert_eq!((swipes[1].x1, swipes[1].x2, swipes[1].y1), (126, 124, 2098));
    assert!(swipes.iter().all(|s| s.y1 == s.y2));
    assert!(swipes.windows(2).all(|w| w[0].y1 > w[1].y1));
}

#[test]
fn blank_template_round_trips_through_the_pipeline() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(DEFAULT_FILE), DEFAULTS).expect("defaults");
    fs::write(
        dir.path().join(USER_FILE),
        "[cutoff_top_left]\nx = 300\ny = 500\n",
    )
    .expect("user");
    let profile = ConfigStore::new(dir.path()).load().expect("profile");

    let path = dir.path().join("template.png");
    template::render(&profile).save(&path).expect("save template");
    let raster = pipeline::load_raster(&path).expect("raster");
    assert_eq!((raster.width(), raster.height()), (440, 900));

    let mapper = Mapper::new(profile.region, profile.placement());
    let mut dispatcher = Dispatcher::new(DryRunDevice::new(), instant());
    let report = extract_and_draw(&raster, &mapper, &mut dispatcher, 1).expect("draw");
    assert_eq!(report.runs, 0);
}

struct Observer {
    truth: [(Boundary, i32); 8],
}

impl Feedback for Observer {
    fn answer(&mut self, boundary: Boundary, at: i32) -> Result<Answer, FeedbackError> {
        let (_, t) = self
            .truth
            .iter()
            .find(|(b, _)| *b == boundary)
            .copied()
            .expect("known boundary");
        let visible = match boundary.role() {
            Role::Leading => at >= t,
            Role::Trailing => at <= t,
        };
        Ok(if visible { Answer::Inside } else { Answer::Outside })
    }

    fn corner_cut_off(&mut self, _: Corner) -> Result<bool, FeedbackError> {
        Ok(true)
    }
}

#[test]
fn calibrated_region_is_saved_and_used_for_drawing() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(DEFAULT_FILE), DEFAULTS).expect("defaults");
    let store = ConfigStore::new(dir.path());
    let reference = store.load().expect("reference");

    let truth = [
        (Boundary::Left, 40),
        (Boundary::Right, 1040),
        (Boundary::Top, 120),
        (Boundary::Bottom, 2280),
        (Boundary::CutoffTopLeftX, 160),
        (Boundary::CutoffTopLeftY, 260),
        (Boundary::CutoffBottomRightX, 920),
        (Boundary::CutoffBottomRightY, 2150),
    ];
    let mut dispatcher = Dispatcher::new(DryRunDevice::new(), instant()).with_probe_timing(
        ProbeTiming {
            duration_ms: 500,
            settle_ms: 0,
        },
    );
    let region = Calibrator::new(&mut dispatcher, Observer { truth })
        .calibrate(&CalibrationHints {
            screen_width: 1080,
            screen_height: 2400,
            reference: reference.region,
        })
        .expect("calibrate");

    store.save(&region, reference.scale).expect("save");
    let reloaded = store.load().expect("reload");
    assert_eq!(reloaded.region, region);
    assert!(reloaded.region.has_top_left_cutoff());
    assert!(reloaded.region.has_bottom_right_cutoff());

    // a full-width bottom row is clipped by the bottom-right cutoff
    let raster = swipedraw::BinaryRaster::from_binarized(600, 1, &[1; 600]).expect("raster");
    let mapper = Mapper::new(reloaded.region, reloaded.placement());
    let mut draw = Dispatcher::new(DryRunDevice::new(), instant());
    extract_and_draw(&raster, &mapper, &mut draw, 1).expect("draw");
    let swipe = draw.device().swipes()[0];
    assert_eq!(swipe.x1, reloaded.region.left);
    assert_eq!(swipe.x2, reloaded.region.cutoff_br_x);
}
