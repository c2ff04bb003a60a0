//! Starburst Rays: a starburst of walls lit by a pointer-driven particle and
//! a fixed central sphere, both casting rays every frame.
//!
//! - `scene`: wall and ray-direction generation
//! - `caster`: nearest ray/wall intersection
//! - `renderer`: per-frame drawing onto a software `canvas`

pub mod canvas;
pub mod caster;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod particle;
pub mod renderer;
pub mod scaler;
pub mod scene;

pub use caster::{Hit, cast_fan, cast_ray, intersect};
pub use config::SketchConfig;
pub use error::SketchError;
pub use geometry::{Point2D, Ray, Segment};
pub use particle::Particle;
pub use scene::{Scene, build_ray_directions, build_walls};
