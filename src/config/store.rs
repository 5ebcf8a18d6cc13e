use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use super::file::ConfigFile;
use crate::coordinate_mapper::Placement;
use crate::region_model::{Region, RegionError};

pub const DEFAULT_FILE: &str = "config.default.toml";
pub const USER_FILE: &str = "config.toml";

const HEADER: &str = "\
# Drawing area configuration
# [bounds] is the main rectangle, the cutoff sections are excluded corners.
";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("base configuration {} not found", .0.display())]
    Missing(PathBuf),
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("configuration does not set `{0}`")]
    Incomplete(&'static str),
    #[error("invalid drawing region")]
    InvalidRegion(#[from] RegionError),
    #[error("scale must be positive, got {0}")]
    InvalidScale(f64),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),
}

/// Everything drawing needs from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub region: Region,
    pub scale: f64,
}

impl Profile {
    pub fn placement(&self) -> Placement {
        Placement::bottom_left(&self.region, self.scale)
    }

    fn resolve(file: &ConfigFile) -> Result<Self, ConfigError> {
        let bounds = file.bounds.unwrap_or_default();
        let left = bounds.left_x.ok_or(ConfigError::Incomplete("bounds.left_x"))?;
        let right = bounds.right_x.ok_or(ConfigError::Incomplete("bounds.right_x"))?;
        let top = bounds.top_y.ok_or(ConfigError::Incomplete("bounds.top_y"))?;
        let bottom = bounds.bottom_y.ok_or(ConfigError::Incomplete("bounds.bottom_y"))?;
        let scale = file
            .settings
            .and_then(|s| s.scale)
            .ok_or(ConfigError::Incomplete("settings.scale"))?;

        let mut region = Region::new(left, right, top, bottom);
        if let Some(c) = file.cutoff_top_left {
            region = region.with_top_left_cutoff(c.x, c.y);
        }
        if let Some(c) = file.cutoff_bottom_right {
            region = region.with_bottom_right_cutoff(c.x, c.y);
        }
        region.validate()?;
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ConfigError::InvalidScale(scale));
        }
        Ok(Self { region, scale })
    }
}

/// `config.default.toml` plus an optional `config.toml` in one directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn default_path(&self) -> PathBuf {
        self.dir.join(DEFAULT_FILE)
    }

    pub fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    /// Defaults are required; the user file only overrides what it sets.
    pub fn load(&self) -> Result<Profile, ConfigError> {
        let default_path = self.default_path();
        if !default_path.exists() {
            return Err(ConfigError::Missing(default_path));
        }
        let mut merged = read_file(&default_path)?;
        debug!(path = %default_path.display(), "loaded defaults");

        let user_path = self.user_path();
        if user_path.exists() {
            merged = merged.overlay(read_file(&user_path)?);
            debug!(path = %user_path.display(), "applied user overrides");
        }
        Profile::resolve(&merged)
    }

    /// Writes a calibrated region to the user file.
    pub fn save(&self, region: &Region, scale: f64) -> Result<PathBuf, ConfigError> {
        region.validate()?;
        let body = toml::to_string(&ConfigFile::from_region(region, scale))?;
        let path = self.user_path();
        fs::write(&path, format!("{HEADER}{body}")).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "configuration saved");
        Ok(path)
    }
}

fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}
