use super::{HasSegments, LineSegment, Point};

#[derive(Debug, Clone)]
pub struct BoundingBox {
    line_segments: [LineSegment; 4],
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            line_segments: [
                LineSegment::new(x, y, x + width, y),
                LineSegment::new(x + width, y, x + width, y + height),
                LineSegment::new(x + width, y + height, x, y + height),
                LineSegment::new(x, y + height, x, y),
            ],
        }
    }

    pub fn around(game_size: Point) -> Self {
        Self::new(0., 0., game_size.x, game_size.y)
    }
}

impl HasSegments for BoundingBox {
    fn segments(&self) -> &[LineSegment] {
        &self.line_segments
    }
}

/// A thin rectangle sitting just above the flat terrain column it was
/// placed in. Only `x` is known at construction, the terrain generator
/// fills in the rest through [`LandingPad::place`].
#[derive(Debug, Clone)]
pub struct LandingPad {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    line_segments: Vec<LineSegment>,
}

impl LandingPad {
    pub fn new(x: f64) -> Self {
        Self {
            x,
            y: 0.,
            width: 0.,
            height: 0.,
            line_segments: Vec::new(),
        }
    }

    pub fn place(&mut self, y: f64, width: f64, height: f64) {
        self.y = y;
        self.width = width;
        self.height = height;
        self.calculate_line_segments();
    }

    pub fn is_placed(&self) -> bool {
        !self.line_segments.is_empty()
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.
    }

    fn calculate_line_segments(&mut self) {
        let Self {
            x,
            y,
            width,
            height,
            ..
        } = *self;
        self.line_segments = vec![
            LineSegment::new(x, y, x, y - height),
            LineSegment::new(x, y - height, x + width, y - height),
            LineSegment::new(x + width, y - height, x + width, y),
            LineSegment::new(x + width, y, x, y),
        ];
    }
}

impl HasSegments for LandingPad {
    fn segments(&self) -> &[LineSegment] {
        &self.line_segments
    }
}

#[derive(Debug, Clone)]
pub struct TerrainSegment {
    line_segment: [LineSegment; 1],
}

impl TerrainSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            line_segment: [LineSegment::new(x1, y1, x2, y2)],
        }
    }

    pub fn start(&self) -> Point {
        self.line_segment[0].p1
    }

    pub fn end(&self) -> Point {
        self.line_segment[0].p2
    }
}

impl HasSegments for TerrainSegment {
    fn segments(&self) -> &[LineSegment] {
        &self.line_segment
    }
}
