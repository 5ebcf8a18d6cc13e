use serde::{Deserialize, Serialize};

use crate::region_model::Region;

/// One TOML file as written on disk. Every key is optional so that a user
/// override can change a single value.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff_top_left: Option<Cutoff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff_bottom_right: Option<Cutoff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Bounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_y: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Cutoff {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl ConfigFile {
    /// Fully populated file for a calibrated region.
    pub fn from_region(region: &Region, scale: f64) -> Self {
        Self {
            bounds: Some(Bounds {
                left_x: Some(region.left),
                right_x: Some(region.right),
                top_y: Some(region.top),
                bottom_y: Some(region.bottom),
            }),
            cutoff_top_left: Some(Cutoff {
                x: region.cutoff_tl_x,
                y: region.cutoff_tl_y,
            }),
            cutoff_bottom_right: Some(Cutoff {
                x: region.cutoff_br_x,
                y: region.cutoff_br_y,
            }),
            settings: Some(Settings { scale: Some(scale) }),
        }
    }

    /// `other` wins wherever it sets a value. Cutoff sections are replaced
    /// as a whole, bounds and settings key by key.
    pub fn overlay(self, other: ConfigFile) -> ConfigFile {
        let bounds = match (self.bounds, other.bounds) {
            (Some(base), Some(top)) => Some(Bounds {
                left_x: top.left_x.or(base.left_x),
                right_x: top.right_x.or(base.right_x),
                top_y: top.top_y.or(base.top_y),
                bottom_y: top.bottom_y.or(base.bottom_y),
            }),
            (base, top) => top.or(base),
        };
        let settings = match (self.settings, other.settings) {
            (Some(base), Some(top)) => Some(Settings {
                scale: top.scale.or(base.scale),
            }),
            (base, top) => top.or(base),
        };
        ConfigFile {
            bounds,
            cutoff_top_left: other.cutoff_top_left.or(self.cutoff_top_left),
            cutoff_bottom_right: other.cutoff_bottom_right.or(self.cutoff_bottom_right),
            settings,
        }
    }
}
