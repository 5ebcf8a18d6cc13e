use proptest::prelude::*;

use super::*;

fn cut_corners() -> Region {
    Region::new(0, 100, 0, 100)
        .with_top_left_cutoff(20, 20)
        .with_bottom_right_cutoff(80, 80)
}

#[test]
fn points_inside_cutoffs_are_rejected() {
    let region = cut_corners();
    assert!(!region.allowed(10, 10), "inside top-left cutoff");
    assert!(region.allowed(10, 90), "outside both cutoffs");
    assert!(!region.allowed(90, 90), "inside bottom-right cutoff");
}

#[test]
fn rectangle_edges_and_cutoff_lines_are_drawable() {
    let region = cut_corners();
    assert!(region.allowed(0, 20));
    assert!(region.allowed(20, 0));
    assert!(region.allowed(100, 80));
    assert!(region.allowed(80, 100));
    assert!(!region.allowed(-1, 50));
    assert!(!region.allowed(50, 101));
}

#[test]
fn plain_rectangle_has_no_cutoffs() {
    let region = Region::new(10, 20, 30, 40);
    assert!(!region.has_top_left_cutoff());
    assert!(!region.has_bottom_right_cutoff());
    assert!(region.allowed(10, 30));
    assert!(region.allowed(20, 40));
    assert_eq!(region.validate(), Ok(()));
}

#[test]
fn validate_rejects_bad_geometry() {
    assert!(matches!(
        Region::new(10, 10, 0, 5).validate(),
        Err(RegionError::EmptyRectangle { .. })
    ));
    assert!(matches!(
        Region::new(0, 10, 0, 10)
            .with_bottom_right_cutoff(11, 5)
            .validate(),
        Err(RegionError::CutoffOutside {
            corner: "bottom-right",
            ..
        })
    ));
}

#[test]
fn display_lists_all_eight_values_even_when_invalid() {
    // right <= left, as inconsistent calibration answers can produce
    let region = Region::new(540, 539, 80, 2300).with_top_left_cutoff(540, 80);
    assert!(region.validate().is_err());
    assert_eq!(
        region.to_string(),
        "Main bounds: left=540, right=539, top=80, bottom=2300\n\
         Top-left cutoff: x=540, y=80\n\
         Bottom-right cutoff: x=539, y=2300"
    );
}

prop_compose! {
    /// A region plus a second one that is at least as restrictive.
    fn nested_regions()(
        l in 0i32..50, w in 10i32..100, t in 0i32..50, h in 10i32..100,
        tl in (0.0f64..1.0, 0.0f64..1.0), br in (0.0f64..1.0, 0.0f64..1.0),
        shrink in (0i32..5, 0i32..5, 0i32..5, 0i32..5),
        grow_tl in (0i32..10, 0i32..10), grow_br in (0i32..10, 0i32..10),
    ) -> (Region, Region) {
        let outer_tl = (l + (tl.0 * w as f64 / 2.0) as i32, t + (tl.1 * h as f64 / 2.0) as i32);
        let outer_br = (l + w - (br.0 * w as f64 / 2.0) as i32, t + h - (br.1 * h as f64 / 2.0) as i32);
        let outer = Region::new(l, l + w, t, t + h)
            .with_top_left_cutoff(outer_tl.0, outer_tl.1)
            .with_bottom_right_cutoff(outer_br.0, outer_br.1);
        let inner = Region::new(l + shrink.0, l + w - shrink.1, t + shrink.2, t + h - shrink.3)
            .with_top_left_cutoff(outer_tl.0 + grow_tl.0, outer_tl.1 + grow_tl.1)
            .with_bottom_right_cutoff(outer_br.0 - grow_br.0, outer_br.1 - grow_br.1);
        (outer, inner)
    }
}

proptest! {
    #[test]
    fn shrinking_a_region_never_admits_new_points(
        (outer, inner) in nested_regions(),
        x in -10i32..220,
        y in -10i32..220,
    ) {
        if inner.allowed(x, y) {
            prop_assert!(outer.allowed(x, y), "({x}, {y}) allowed by {inner:?} but not {outer:?}");
        }
    }
}
