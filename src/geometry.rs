use std::ops::{Add, Mul, Sub};

/// 2D point or direction in canvas space (x right, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn dist(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Wall: a fixed segment from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point2D,
    pub b: Point2D,
}

impl Segment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            a: Point2D::new(x1, y1),
            b: Point2D::new(x2, y2),
        }
    }

    #[inline]
    pub fn direction(&self) -> Point2D {
        self.b - self.a
    }
}

/// Half-line probe. Only the direction of `dir` matters to the caster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point2D,
    pub dir: Point2D,
}

impl Ray {
    pub fn new(origin: Point2D, angle: f64) -> Self {
        Self {
            origin,
            dir: Point2D::from_angle(angle),
        }
    }

    pub fn with_direction(origin: Point2D, dir: Point2D) -> Self {
        Self { origin, dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_from_angle_is_unit_length() {
        for deg in [0.0_f64, 33.0, 90.0, 181.0, 359.0] {
            let v = Point2D::from_angle(deg.to_radians());
            assert!((v.dot(v) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_from_angle_quarter_turn_points_down() {
        // y grows downward on the canvas
        let v = Point2D::from_angle(FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dist() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.dist(b), 5.0);
        assert_eq!(b.dist(a), 5.0);
    }

    #[test]
    fn test_operators() {
        let a = Point2D::new(1.0, 2.0);
        let b = Point2D::new(4.0, -1.0);
        assert_eq!(a + b, Point2D::new(5.0, 1.0));
        assert_eq!(b - a, Point2D::new(3.0, -3.0));
        assert_eq!(a * 2.0, Point2D::new(2.0, 4.0));
    }

    #[test]
    fn test_segment_direction() {
        let s = Segment::new(10.0, 10.0, 20.0, 5.0);
        assert_eq!(s.direction(), Point2D::new(10.0, -5.0));
    }
}
