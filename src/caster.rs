use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::geometry::{Point2D, Ray, Segment};

/// Single ray/wall intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub point: Point2D,
    /// Position along the wall, strictly inside (0, 1)
    pub t: f64,
    /// Position along the ray in units of `dir`, strictly positive
    pub u: f64,
}

/// Intersect the half-line `origin + u * dir` with `wall`.
///
/// Parallel and coincident lines (`den == 0`, exact comparison) never hit.
/// Touching a wall exactly at an endpoint, or behind the origin, is a miss.
#[inline]
pub fn intersect(origin: Point2D, dir: Point2D, wall: &Segment) -> Option<Hit> {
    let (x1, y1) = (wall.a.x, wall.a.y);
    let (x2, y2) = (wall.b.x, wall.b.y);
    let (x3, y3) = (origin.x, origin.y);
    let (x4, y4) = (origin.x + dir.x, origin.y + dir.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;
    if t > 0.0 && t < 1.0 && u > 0.0 {
        let point = Point2D::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1));
        Some(Hit { point, t, u })
    } else {
        None
    }
}

/// Nearest hit of one ray against every wall.
///
/// Equal distances keep the wall that comes first in `walls`.
pub fn cast_ray(origin: Point2D, dir: Point2D, walls: &[Segment]) -> Option<Point2D> {
    let mut closest = None;
    let mut record = f64::INFINITY;
    for wall in walls {
        if let Some(hit) = intersect(origin, dir, wall) {
            let d = origin.dist(hit.point);
            if d < record {
                record = d;
                closest = Some(hit.point);
            }
        }
    }
    closest
}

impl Ray {
    pub fn cast(&self, walls: &[Segment]) -> Option<Point2D> {
        cast_ray(self.origin, self.dir, walls)
    }
}

/// Cast every direction from a shared origin. Output order matches `dirs`.
pub fn cast_fan(origin: Point2D, dirs: &[Point2D], walls: &[Segment]) -> Vec<Option<Point2D>> {
    dirs.par_iter()
        .map(|&dir| cast_ray(origin, dir, walls))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Segment {
        Segment::new(0.0, 0.0, 100.0, 0.0)
    }

    #[test]
    fn test_hit_straight_down() {
        let hit = intersect(Point2D::new(50.0, -50.0), Point2D::new(0.0, 1.0), &floor()).unwrap();
        assert_eq!(hit.point, Point2D::new(50.0, 0.0));
        assert_eq!(hit.t, 0.5);
        assert_eq!(hit.u, 50.0);

        let pt = cast_ray(Point2D::new(50.0, -50.0), Point2D::new(0.0, 1.0), &[floor()]);
        assert_eq!(pt, Some(Point2D::new(50.0, 0.0)));
    }

    #[test]
    fn test_pointing_away_misses() {
        let pt = cast_ray(Point2D::new(50.0, 10.0), Point2D::new(0.0, 1.0), &[floor()]);
        assert_eq!(pt, None);
    }

    #[test]
    fn test_parallel_wall_misses() {
        let wall = floor();
        let pt = cast_ray(Point2D::new(-20.0, 5.0), wall.direction(), &[wall]);
        assert_eq!(pt, None);
    }

    #[test]
    fn test_collinear_wall_misses() {
        let pt = cast_ray(Point2D::new(-20.0, 0.0), Point2D::new(1.0, 0.0), &[floor()]);
        assert_eq!(pt, None);
    }

    #[test]
    fn test_endpoint_is_excluded() {
        // Passes exactly through a = (0, 0): t == 0
        assert_eq!(
            intersect(Point2D::new(0.0, -10.0), Point2D::new(0.0, 1.0), &floor()),
            None
        );
        // Passes exactly through b = (100, 0): t == 1
        assert_eq!(
            intersect(Point2D::new(100.0, -10.0), Point2D::new(0.0, 1.0), &floor()),
            None
        );
    }

    #[test]
    fn test_origin_on_wall_is_excluded() {
        // u == 0
        assert_eq!(
            intersect(Point2D::new(50.0, 0.0), Point2D::new(0.0, 1.0), &floor()),
            None
        );
    }

    #[test]
    fn test_direction_length_does_not_matter() {
        let origin = Point2D::new(30.0, -7.0);
        let a = cast_ray(origin, Point2D::new(0.0, 1.0), &[floor()]);
        let b = cast_ray(origin, Point2D::new(0.0, 250.0), &[floor()]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_nearest_wall_wins_regardless_of_order() {
        let far = Segment::new(0.0, 100.0, 100.0, 100.0);
        let near = Segment::new(0.0, 40.0, 100.0, 40.0);
        let origin = Point2D::new(50.0, 0.0);
        let dir = Point2D::new(0.0, 1.0);

        assert_eq!(cast_ray(origin, dir, &[far, near]), Some(Point2D::new(50.0, 40.0)));
        assert_eq!(cast_ray(origin, dir, &[near, far]), Some(Point2D::new(50.0, 40.0)));
    }

    #[test]
    fn test_tie_keeps_first_wall() {
        // Two walls crossing at (50, 40); both hit the same point at equal distance
        let first = Segment::new(0.0, 40.0, 100.0, 40.0);
        let second = Segment::new(0.0, 0.0, 100.0, 80.0);
        let origin = Point2D::new(50.0, 0.0);
        let dir = Point2D::new(0.0, 1.0);

        let h1 = intersect(origin, dir, &first).unwrap();
        let h2 = intersect(origin, dir, &second).unwrap();
        assert_eq!(h1.point, h2.point);
        assert_eq!(cast_ray(origin, dir, &[first, second]), Some(h1.point));
    }

    #[test]
    fn test_ray_cast_from_angle() {
        let ray = Ray::new(Point2D::new(50.0, -50.0), std::f64::consts::FRAC_PI_2);
        let pt = ray.cast(&[floor()]).unwrap();
        assert!((pt.x - 50.0).abs() < 1e-9);
        assert_eq!(pt.y, 0.0);
    }

    #[test]
    fn test_no_walls() {
        assert_eq!(cast_ray(Point2D::default(), Point2D::new(1.0, 0.0), &[]), None);
    }

    #[test]
    fn test_cast_fan_matches_sequential() {
        let walls = vec![
            Segment::new(-10.0, -10.0, 10.0, -10.0),
            Segment::new(10.0, -10.0, 10.0, 10.0),
            Segment::new(10.0, 10.0, -10.0, 10.0),
        ];
        let dirs: Vec<Point2D> = (0..360)
            .map(|deg| Point2D::from_angle(f64::to_radians(deg as f64)))
            .collect();
        let origin = Point2D::new(0.5, -0.25);

        let fan = cast_fan(origin, &dirs, &walls);
        assert_eq!(fan.len(), dirs.len());
        for (dir, got) in dirs.iter().zip(&fan) {
            assert_eq!(*got, cast_ray(origin, *dir, &walls));
        }
        // Open side (x = -10) lets some rays escape
        assert!(fan.iter().any(Option::is_none));
        assert!(fan.iter().any(Option::is_some));
    }
}
