use std::fs;

use tempfile::TempDir;

use super::*;
use crate::region_model::Region;

const DEFAULTS: &str = "\
[bounds]
left_x = 40
right_x = 1040
top_y = 200
bottom_y = 2200

[cutoff_top_left]
x = 120
y = 320

[settings]
scale = 0.5
";

fn store_with(default: Option<&str>, user: Option<&str>) -> (TempDir, ConfigStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    if let Some(body) = default {
        fs::write(dir.path().join(DEFAULT_FILE), body).expect("write defaults");
    }
    if let Some(body) = user {
        fs::write(dir.path().join(USER_FILE), body).expect("write user");
    }
    let store = ConfigStore::new(dir.path());
    (dir, store)
}

#[test]
fn missing_defaults_are_fatal() {
    let (_dir, store) = store_with(None, Some(DEFAULTS));
    assert!(matches!(store.load(), Err(ConfigError::Missing(_))));
}

#[test]
fn defaults_alone_resolve_with_absent_cutoff() {
    let (_dir, store) = store_with(Some(DEFAULTS), None);
    let profile = store.load().expect("load");
    assert_eq!(
        profile.region,
        Region::new(40, 1040, 200, 2200).with_top_left_cutoff(120, 320)
    );
    assert!(!profile.region.has_bottom_right_cutoff());
    assert_eq!(profile.scale, 0.5);

    let placement = profile.placement();
    assert_eq!((placement.origin_x, placement.origin_y), (40, 2200));
}

#[test]
fn user_file_overrides_key_by_key() {
    let user = "\
[bounds]
right_x = 1000

[cutoff_bottom_right]
x = 900
y = 2000

[settings]
scale = 1
";
    let (_dir, store) = store_with(Some(DEFAULTS), Some(user));
    let profile = store.load().expect("load");
    assert_eq!(
        profile.region,
        Region::new(40, 1000, 200, 2200)
            .with_top_left_cutoff(120, 320)
            .with_bottom_right_cutoff(900, 2000)
    );
    assert_eq!(profile.scale, 1.0);
}

#[test]
fn incomplete_configuration_is_reported() {
    let (_dir, store) = store_with(Some("[bounds]\nleft_x = 1\nright_x = 2\ntop_y = 0\n"), None);
    assert!(matches!(
        store.load(),
        Err(ConfigError::Incomplete("bounds.bottom_y"))
    ));
}

#[test]
fn invalid_geometry_is_rejected() {
    let (_dir, store) = store_with(
        Some("[bounds]\nleft_x = 10\nright_x = 5\ntop_y = 0\nbottom_y = 9\n[settings]\nscale = 1.0\n"),
        None,
    );
    assert!(matches!(store.load(), Err(ConfigError::InvalidRegion(_))));

    let (_dir, store) = store_with(Some(&DEFAULTS.replace("0.5", "0.0")), None);
    assert!(matches!(store.load(), Err(ConfigError::InvalidScale(_))));
}

#[test]
fn parse_errors_name_the_file() {
    let (_dir, store) = store_with(Some(DEFAULTS), Some("[bounds\n"));
    let err = store.load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(USER_FILE));
}

#[test]
fn saved_region_loads_back() {
    let (dir, store) = store_with(Some(DEFAULTS), None);
    let region = Region::new(12, 1070, 90, 2350)
        .with_top_left_cutoff(12, 90)
        .with_bottom_right_cutoff(980, 2250);
    let path = store.save(&region, 0.4).expect("save");
    assert_eq!(path, dir.path().join(USER_FILE));

    let written = fs::read_to_string(&path).expect("read back");
    assert!(written.starts_with("# Drawing area configuration"));
    for section in ["[bounds]", "[cutoff_top_left]", "[cutoff_bottom_right]", "[settings]"] {
        assert!(written.contains(section), "missing {section}");
    }
    assert!(written.contains("left_x = 12"));

    let profile = store.load().expect("load");
    assert_eq!(profile.region, region);
    assert_eq!(profile.scale, 0.4);
}

#[test]
fn save_refuses_invalid_region() {
    let (_dir, store) = store_with(Some(DEFAULTS), None);
    let err = store.save(&Region::new(5, 5, 0, 10), 0.4).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRegion(_)));
    assert!(!store.user_path().exists());
}
