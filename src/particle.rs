use crate::caster::cast_fan;
use crate::error::SketchError;
use crate::geometry::{Point2D, Segment};
use crate::scene::build_ray_directions;

/// Pointer-driven ray emitter
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Point2D,
    pub rays: Vec<Point2D>,
}

impl Particle {
    pub fn new(start: Point2D, step_degrees: f64) -> Result<Self, SketchError> {
        Ok(Self {
            pos: start,
            rays: build_ray_directions(step_degrees)?,
        })
    }

    #[inline]
    pub fn update(&mut self, x: f64, y: f64) {
        self.pos = Point2D::new(x, y);
    }

    /// Nearest hit per ray from the current position, in ray order
    pub fn look(&self, walls: &[Segment]) -> Vec<Option<Point2D>> {
        cast_fan(self.pos, &self.rays, walls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::build_walls;

    #[test]
    fn test_new_builds_rays() {
        let p = Particle::new(Point2D::new(960.0, 540.0), 1.0).unwrap();
        assert_eq!(p.pos, Point2D::new(960.0, 540.0));
        assert_eq!(p.rays.len(), 360);
    }

    #[test]
    fn test_new_rejects_bad_step() {
        assert!(Particle::new(Point2D::default(), 0.0).is_err());
    }

    #[test]
    fn test_update_overwrites_position() {
        let mut p = Particle::new(Point2D::new(1.0, 1.0), 45.0).unwrap();
        p.update(300.0, 20.5);
        assert_eq!(p.pos, Point2D::new(300.0, 20.5));
        assert_eq!(p.rays.len(), 8);
    }

    #[test]
    fn test_look_inside_border_hits_every_ray() {
        // Off the spokes and inside the border, every ray must land somewhere
        let walls = build_walls(960.0, 540.0, 1920.0, 1080.0, 50).unwrap();
        let mut p = Particle::new(Point2D::default(), 1.0).unwrap();
        p.update(100.0, 130.0);

        let hits = p.look(&walls);
        assert_eq!(hits.len(), 360);
        assert!(hits.iter().all(Option::is_some));
    }
}
