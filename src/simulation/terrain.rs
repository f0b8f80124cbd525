use log::debug;
use rand::Rng;

use super::{LandingPad, Point, TerrainSegment};
use crate::Error;

mod defaults {
    pub const COLUMNS: usize = 12;
    pub const BAND_TOP: f64 = 0.8;
    pub const BAND_BOTTOM_MARGIN: f64 = 20.;
    pub const DELTA_DIVISOR: f64 = 20.;
    pub const PAD_MARGIN: f64 = 4.;
    pub const PAD_LIFT: f64 = 2.;
    pub const PAD_HEIGHT: f64 = 3.;
}

/// Vertical range every terrain point stays within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.min && y <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    columns: usize,
    band_top: f64,
    band_bottom_margin: f64,
    delta_divisor: f64,
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self {
            columns: defaults::COLUMNS,
            band_top: defaults::BAND_TOP,
            band_bottom_margin: defaults::BAND_BOTTOM_MARGIN,
            delta_divisor: defaults::DELTA_DIVISOR,
        }
    }
}

impl TerrainGenerator {
    pub fn with_columns(self, columns: usize) -> Self {
        assert!(columns > 0);
        Self { columns, ..self }
    }

    pub fn with_band_top(self, band_top: f64) -> Self {
        Self { band_top, ..self }
    }

    pub fn with_band_bottom_margin(self, band_bottom_margin: f64) -> Self {
        Self {
            band_bottom_margin,
            ..self
        }
    }

    pub fn with_delta_divisor(self, delta_divisor: f64) -> Self {
        assert!(delta_divisor > 0.);
        Self {
            delta_divisor,
            ..self
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn step(&self, game_size: Point) -> f64 {
        game_size.x / self.columns as f64
    }

    pub fn band(&self, game_size: Point) -> Band {
        Band {
            min: game_size.y * self.band_top,
            max: game_size.y - self.band_bottom_margin,
        }
    }

    /// Pad x on the column grid, never in the two leftmost or the last column.
    pub fn pad_position(&self, game_size: Point, rng: &mut impl Rng) -> f64 {
        let last = self.columns.saturating_sub(4) as f64;
        let column = 2. + (rng.gen::<f64>() * last).round();
        column * self.step(game_size) + defaults::PAD_MARGIN / 2.
    }

    /// Builds the terrain polyline left to right and places `landing_pad` on
    /// the column containing its `x`. Fails when the band is empty or no
    /// column strictly contains the pad.
    pub fn generate(
        &self,
        game_size: Point,
        landing_pad: &mut LandingPad,
        rng: &mut impl Rng,
    ) -> Result<Vec<TerrainSegment>, Error> {
        let invalid_canvas = Error::InvalidCanvas {
            width: game_size.x,
            height: game_size.y,
        };
        let step = self.step(game_size);
        let band = self.band(game_size);
        if band.is_empty() {
            return Err(invalid_canvas);
        }
        let delta = game_size.y / self.delta_divisor;

        let mut y = band.min + rng.gen::<f64>() * (band.max - band.min);
        let mut surface = Vec::with_capacity(self.columns);

        for column in 0..self.columns {
            let (x, xnext) = (column as f64 * step, (column + 1) as f64 * step);
            let ynext = if landing_pad.x > x && landing_pad.x < xnext {
                landing_pad.place(
                    y - defaults::PAD_LIFT,
                    step - defaults::PAD_MARGIN,
                    defaults::PAD_HEIGHT,
                );
                y
            } else {
                loop {
                    let candidate = next_height(y, delta, rng.gen());
                    if band.contains(candidate) {
                        break candidate;
                    }
                }
            };
            surface.push(TerrainSegment::new(x, y, xnext, ynext));
            y = ynext;
        }

        debug!(
            "Generated {} terrain segments, landing pad at x={:.1} y={:.1}",
            surface.len(),
            landing_pad.x,
            landing_pad.y
        );
        if !landing_pad.is_placed() {
            return Err(invalid_canvas);
        }
        Ok(surface)
    }
}

fn next_height(y: f64, delta: f64, r: f64) -> f64 {
    if r < 0.2 {
        y + 3. * delta
    } else if r < 0.4 {
        y + delta
    } else if r < 0.6 {
        y - delta
    } else if r < 0.8 {
        y + 3. * delta
    } else {
        y
    }
}

#[cfg(test)]
mod terrain_tests {
    use super::*;
    use crate::HasSegments;
    use rand::{rngs::StdRng, SeedableRng};

    fn generate(game_size: Point, seed: u64) -> (Vec<TerrainSegment>, LandingPad) {
        let mut rng = StdRng::seed_from_u64(seed);
        let generator = TerrainGenerator::default();
        let mut pad = LandingPad::new(generator.pad_position(game_size, &mut rng));
        let surface = generator.generate(game_size, &mut pad, &mut rng).unwrap();
        (surface, pad)
    }

    #[test]
    fn height_quantiles() {
        assert_eq!(next_height(100., 10., 0.1), 130.);
        assert_eq!(next_height(100., 10., 0.3), 110.);
        assert_eq!(next_height(100., 10., 0.5), 90.);
        assert_eq!(next_height(100., 10., 0.7), 130.);
        assert_eq!(next_height(100., 10., 0.9), 100.);
    }

    #[test]
    fn stays_within_band() {
        for (size, seed) in [
            (Point::new(800., 600.), 1),
            (Point::new(1024., 768.), 2),
            (Point::new(300., 120.), 3),
            (Point::new(1920., 1080.), 4),
        ] {
            let band = TerrainGenerator::default().band(size);
            let (surface, _) = generate(size, seed);
            for segment in &surface {
                assert!(band.contains(segment.start().y), "{:?}", segment);
                assert!(band.contains(segment.end().y), "{:?}", segment);
            }
        }
    }

    #[test]
    fn continuous_left_to_right() {
        let size = Point::new(800., 600.);
        let (surface, _) = generate(size, 7);
        assert_eq!(surface.len(), 12);
        assert_eq!(surface[0].start().x, 0.);
        assert!((surface[11].end().x - 800.).abs() < 1e-9);
        for pair in surface.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
    }

    #[test]
    fn pad_sits_on_flat_column() {
        for seed in 0..50 {
            let size = Point::new(960., 640.);
            let (surface, pad) = generate(size, seed);
            let step = 80.;

            assert!(pad.is_placed());
            assert_eq!(pad.width, step - 4.);
            assert_eq!(pad.height, 3.);
            assert_eq!(pad.segments().len(), 4);

            let column = surface
                .iter()
                .find(|s| s.start().x < pad.x && pad.x < s.end().x)
                .unwrap();
            assert_eq!(column.start().y, column.end().y);
            assert_eq!(pad.y, column.start().y - 2.);
            assert!(pad.x >= 2. * step && pad.x < 11. * step);
        }
    }

    #[test]
    fn pad_on_a_column_edge_is_rejected() {
        // step is 2, so the pad lands exactly on the boundary between columns
        let size = Point::new(24., 600.);
        let mut pad = LandingPad::new(3. * 2. + 2.);
        let result =
            TerrainGenerator::default().generate(size, &mut pad, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(Error::InvalidCanvas { .. })));
        assert!(!pad.is_placed());
    }

    #[test]
    fn empty_band_is_rejected() {
        let size = Point::new(800., 90.);
        let mut pad = LandingPad::new(402.);
        let result =
            TerrainGenerator::default().generate(size, &mut pad, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(Error::InvalidCanvas { .. })));
    }
}
