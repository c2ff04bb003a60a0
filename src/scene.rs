use std::f64::consts::TAU;

use log::info;

use crate::config::{SketchConfig, check_ray_step, check_wall_count};
use crate::error::SketchError;
use crate::geometry::{Point2D, Segment};

/// Static geometry for one canvas size. Built once, read-only while casting.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub center: Point2D,
    pub walls: Vec<Segment>,
    /// Directions emitted by the background sphere at `center`
    pub background_rays: Vec<Point2D>,
}

impl Scene {
    pub fn new(config: &SketchConfig) -> Result<Self, SketchError> {
        config.validate()?;

        let width = config.canvas_width as f64;
        let height = config.canvas_height as f64;
        let center = Point2D::new(width / 2.0, height / 2.0);

        let walls = build_walls(center.x, center.y, width, height, config.wall_count)?;
        let background_rays = build_ray_directions(config.ray_step_degrees)?;

        info!(
            "Scene {}x{}: {} walls, {} background rays",
            width,
            height,
            walls.len(),
            background_rays.len()
        );

        Ok(Self {
            width,
            height,
            center,
            walls,
            background_rays,
        })
    }
}

/// Starburst spokes from the centre out to an ellipse of radii (width/4, height/4),
/// followed by the four canvas border edges.
pub fn build_walls(
    center_x: f64,
    center_y: f64,
    width: f64,
    height: f64,
    wall_count: usize,
) -> Result<Vec<Segment>, SketchError> {
    check_wall_count(wall_count)?;

    let mut walls = Vec::with_capacity(wall_count + 4);
    let step = TAU / wall_count as f64;
    for i in 0..wall_count {
        let angle = step * i as f64;
        let x2 = center_x + angle.cos() * width / 4.0;
        let y2 = center_y + angle.sin() * height / 4.0;
        walls.push(Segment::new(center_x, center_y, x2, y2));
    }

    // Border, top and left edges sit one unit outside the canvas
    walls.push(Segment::new(-1.0, -1.0, width, -1.0));
    walls.push(Segment::new(width, -1.0, width, height));
    walls.push(Segment::new(width, height, -1.0, height));
    walls.push(Segment::new(-1.0, height, -1.0, -1.0));

    Ok(walls)
}

/// One unit direction per `step_degrees`, starting at 0 and stopping before 360.
pub fn build_ray_directions(step_degrees: f64) -> Result<Vec<Point2D>, SketchError> {
    check_ray_step(step_degrees)?;

    let mut dirs = Vec::with_capacity((360.0 / step_degrees).ceil() as usize);
    let mut angle = 0.0;
    while angle < 360.0 {
        dirs.push(Point2D::from_angle(f64::to_radians(angle)));
        angle += step_degrees;
    }
    Ok(dirs)
}
