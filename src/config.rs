use std::{fs, io, path::Path};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::SketchError;

pub const DEFAULT_CONFIG_PATH: &str = "sketch.toml";

pub const CANVAS_WIDTH: u32 = 1920;
pub const CANVAS_HEIGHT: u32 = 1080;
/// Spokes in the starburst
pub const WALL_COUNT: usize = 50;
/// Angle increment between emitted rays, in degrees
pub const RAY_STEP_DEGREES: f64 = 1.0;
/// Unused: nothing in the scene rotates.
pub const ROTATION_SPEED: f64 = 0.01;

pub const SPHERE_DIAMETER: f64 = 400.0;
pub const PULSE_RING_COUNT: usize = 5;
pub const PULSE_SPEED: f64 = 0.05;
pub const PULSE_AMPLITUDE: f64 = 10.0;
pub const PARTICLE_DIAMETER: f64 = 4.0;
pub const RAY_TICK_LENGTH: f64 = 10.0;

/// Upper bounds on configurable sizes
pub const MAX_RAYS: usize = 36_000;
pub const MAX_WALL_COUNT: usize = 10_000;
pub const MAX_CANVAS_DIMENSION: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SketchConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub wall_count: usize,
    pub ray_step_degrees: f64,
    pub rotation_speed: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            wall_count: WALL_COUNT,
            ray_step_degrees: RAY_STEP_DEGREES,
            rotation_speed: ROTATION_SPEED,
        }
    }
}

impl SketchConfig {
    /// Load from `sketch.toml` in the working directory.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load from an explicit path, falling back to defaults when the file is
    /// missing or cannot be parsed.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn validate(&self) -> Result<(), SketchError> {
        check_wall_count(self.wall_count)?;
        check_ray_step(self.ray_step_degrees)?;
        let dims = 1..=MAX_CANVAS_DIMENSION;
        if !dims.contains(&self.canvas_width) || !dims.contains(&self.canvas_height) {
            return Err(SketchError::InvalidConfiguration(format!(
                "canvas must be between 1x1 and {MAX_CANVAS_DIMENSION}x{MAX_CANVAS_DIMENSION}, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_wall_count(wall_count: usize) -> Result<(), SketchError> {
    if wall_count == 0 || wall_count > MAX_WALL_COUNT {
        return Err(SketchError::InvalidConfiguration(format!(
            "wall_count must be in 1..={MAX_WALL_COUNT}, got {wall_count}"
        )));
    }
    Ok(())
}

/// Step must be positive and yield at most `MAX_RAYS` rays per revolution
pub(crate) fn check_ray_step(step_degrees: f64) -> Result<(), SketchError> {
    let min_step = 360.0 / MAX_RAYS as f64;
    if !(step_degrees.is_finite() && step_degrees >= min_step) {
        return Err(SketchError::InvalidConfiguration(format!(
            "ray_step_degrees must be a number >= {min_step}, got {step_degrees}"
        )));
    }
    Ok(())
}
