#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, distance: f64, direction: f64) -> Self {
        let (sin, cos) = direction.sin_cos();
        Self {
            x: self.x + distance * sin,
            y: self.y - distance * cos,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: Point::new(x1, y1),
            p2: Point::new(x2, y2),
        }
    }

    pub fn between(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Proper crossing test. Parallel and collinear segments never intersect,
    /// and touching at an endpoint is a miss.
    pub fn intersects(&self, other: &LineSegment) -> bool {
        let (a1, a2) = (self.p1, self.p2);
        let (b1, b2) = (other.p1, other.p2);

        let det = (a2.x - a1.x) * (b2.y - b1.y) - (b2.x - b1.x) * (a2.y - a1.y);
        if det == 0. {
            return false;
        }

        let lambda = ((b2.y - b1.y) * (b2.x - a1.x) + (b1.x - b2.x) * (b2.y - a1.y)) / det;
        let gamma = ((a1.y - a2.y) * (b2.x - a1.x) + (a2.x - a1.x) * (b2.y - a1.y)) / det;

        (0. < lambda && lambda < 1.) && (0. < gamma && gamma < 1.)
    }
}

/// Anything that can be drawn and collided as a list of line segments.
pub trait HasSegments {
    fn segments(&self) -> &[LineSegment];
}

pub fn objects_intersect<A, B>(a: &A, b: &B) -> bool
where
    A: HasSegments + ?Sized,
    B: HasSegments + ?Sized,
{
    a.segments()
        .iter()
        .any(|s1| b.segments().iter().any(|s2| s1.intersects(s2)))
}

impl HasSegments for [LineSegment] {
    fn segments(&self) -> &[LineSegment] {
        self
    }
}

impl HasSegments for Vec<LineSegment> {
    fn segments(&self) -> &[LineSegment] {
        self
    }
}

#[cfg(test)]
mod geometry_tests {
    use super::*;

    fn seg(((x1, y1), (x2, y2)): ((f64, f64), (f64, f64))) -> LineSegment {
        LineSegment::new(x1, y1, x2, y2)
    }

    fn check(a: ((f64, f64), (f64, f64)), b: ((f64, f64), (f64, f64))) -> bool {
        seg(a).intersects(&seg(b))
    }

    #[test]
    fn not_parallel_disjoint() {
        assert!(!check(((-1., -3.), (-5., -4.)), ((1., 1.), (5., 1.))));
    }

    #[test]
    fn parallel_disjoint() {
        assert!(!check(((1., 3.), (6., 3.)), ((1., 1.), (5., 1.))));
    }

    #[test]
    fn collinear_overlapping_is_a_miss() {
        assert!(!check(((-2., 1.), (2., 1.)), ((1., 1.), (3., 1.))));
        assert!(!check(((-2., 1.), (5., 1.)), ((1., 1.), (3., 1.))));
    }

    #[test]
    fn identical_is_a_miss() {
        assert!(!check(((0., 0.), (3., 3.)), ((0., 0.), (3., 3.))));
    }

    #[test]
    fn touching_endpoint_is_a_miss() {
        assert!(!check(((1., 5.), (2., 2.)), ((0., 0.), (3., 3.))));
        assert!(!check(((2., 2.), (1., 5.)), ((0., 0.), (3., 3.))));
        // shared vertex of a polyline
        assert!(!check(((0., 0.), (1., 1.)), ((1., 1.), (2., 0.))));
    }

    #[test]
    fn crossing() {
        assert!(check(((2., 5.), (2., -2.)), ((0., 0.), (3., 3.))));
    }

    #[test]
    fn direction_independent() {
        let a = ((2., 5.), (2., -2.));
        let a_rev = ((2., -2.), (2., 5.));
        let b = ((0., 0.), (3., 3.));
        let b_rev = ((3., 3.), (0., 0.));
        for (x, y) in [(a, b), (a, b_rev), (a_rev, b), (a_rev, b_rev)] {
            assert!(check(x, y));
            assert!(check(y, x));
        }
    }

    #[test]
    fn symmetric_on_misses() {
        let cases = [
            (((0., 0.), (1., 0.)), ((2., -1.), (2., 1.))),
            (((0., 0.), (4., 4.)), ((0., 4.), (1., 3.))),
            (((0., 0.), (4., 0.)), ((4., 0.), (4., 4.))),
        ];
        for (a, b) in cases {
            assert_eq!(check(a, b), check(b, a));
            assert!(!check(a, b));
        }
    }

    #[test]
    fn objects_short_circuit_on_any_hit() {
        let square = vec![
            seg(((0., 0.), (10., 0.))),
            seg(((10., 0.), (10., 10.))),
            seg(((10., 10.), (0., 10.))),
            seg(((0., 10.), (0., 0.))),
        ];
        let poking = vec![seg(((5., 5.), (15., 5.)))];
        let inside = vec![seg(((2., 2.), (8., 8.)))];

        assert!(objects_intersect(&square, &poking));
        assert!(objects_intersect(&poking, &square));
        assert!(!objects_intersect(&square, &inside));
    }

    #[test]
    fn offset_points_up_at_zero_direction() {
        let p = Point::new(10., 10.).offset(5., 0.);
        assert_eq!(p.x, 10.);
        assert_eq!(p.y, 5.);
    }
}
