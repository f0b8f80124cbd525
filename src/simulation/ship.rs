use std::f64::consts::PI;

use log::debug;
use rand::Rng;

use super::{HasSegments, InputSource, LandingPad, LineSegment, Physics, Point, ShipState};

mod defaults {
    pub const MAX_FUEL: f64 = crate::simulation::physics::defaults::MAX_FUEL;
    pub const SPAWN_HEIGHT: f64 = 30.;
    pub const SPAWN_BAND_START: f64 = 0.2;
    pub const SPAWN_BAND_WIDTH: f64 = 0.6;
    pub const MIN_PAD_DISTANCE: f64 = 50.;
    pub const FLARE_SCALE: f64 = 150.;
    pub const HULL_LENGTH: f64 = 10.;
    pub const NOSE_LENGTH: f64 = 5.;
}

#[derive(Debug, Clone)]
pub struct ShipSettings {
    pub max_fuel: f64,
    pub spawn_height: f64,
    pub min_pad_distance: f64,
    pub flare_scale: f64,
}

impl Default for ShipSettings {
    fn default() -> Self {
        Self {
            max_fuel: defaults::MAX_FUEL,
            spawn_height: defaults::SPAWN_HEIGHT,
            min_pad_distance: defaults::MIN_PAD_DISTANCE,
            flare_scale: defaults::FLARE_SCALE,
        }
    }
}

impl ShipSettings {
    pub fn with_max_fuel(self, max_fuel: f64) -> Self {
        assert!(max_fuel > 0.);
        Self { max_fuel, ..self }
    }

    pub fn with_spawn_height(self, spawn_height: f64) -> Self {
        Self {
            spawn_height,
            ..self
        }
    }

    pub fn with_min_pad_distance(self, min_pad_distance: f64) -> Self {
        Self {
            min_pad_distance,
            ..self
        }
    }

    pub fn with_flare_scale(self, flare_scale: f64) -> Self {
        Self {
            flare_scale,
            ..self
        }
    }
}

pub struct Ship {
    state: ShipState,
    max_fuel: f64,
    flare_scale: f64,
    hull: Vec<LineSegment>,
    flare: Vec<LineSegment>,
}

impl Ship {
    pub fn new(state: ShipState, settings: &ShipSettings) -> Self {
        let mut ship = Self {
            state,
            max_fuel: settings.max_fuel,
            flare_scale: settings.flare_scale,
            hull: Vec::with_capacity(6),
            flare: Vec::with_capacity(3),
        };
        ship.calculate_line_segments();
        ship
    }

    /// Whether the spawn band has room for a ship clear of the pad.
    pub fn can_spawn(game_size: Point, landing_pad: &LandingPad, settings: &ShipSettings) -> bool {
        let start = game_size.x * defaults::SPAWN_BAND_START;
        let end = start + game_size.x * defaults::SPAWN_BAND_WIDTH;
        let centre = landing_pad.center_x();
        (centre - start).max(end - centre) > settings.min_pad_distance
    }

    /// Places a fresh ship somewhere across the middle of the canvas, keeping
    /// clear of the landing pad horizontally.
    pub fn spawn(
        game_size: Point,
        landing_pad: &LandingPad,
        settings: &ShipSettings,
        rng: &mut impl Rng,
    ) -> Self {
        let x = loop {
            let x = game_size.x * defaults::SPAWN_BAND_START
                + rng.gen::<f64>() * game_size.x * defaults::SPAWN_BAND_WIDTH;
            if (x - landing_pad.center_x()).abs() >= settings.min_pad_distance {
                break x;
            }
        };
        debug!("Spawning ship at x={x:.1}, pad centre at {:.1}", landing_pad.center_x());

        let state = ShipState::default()
            .with_position(x, settings.spawn_height)
            .with_fuel(settings.max_fuel);
        Self::new(state, settings)
    }

    pub fn state(&self) -> &ShipState {
        &self.state
    }

    pub fn max_fuel(&self) -> f64 {
        self.max_fuel
    }

    pub fn flare_segments(&self) -> &[LineSegment] {
        &self.flare
    }

    /// Hull followed by the flare, in drawing order.
    pub fn render_segments(&self) -> impl Iterator<Item = &LineSegment> + '_ {
        self.hull.iter().chain(self.flare.iter())
    }

    pub fn update(&mut self, physics: &Physics, input: &impl InputSource) {
        self.state = physics.iterate(self.state.clone(), input);
        self.calculate_line_segments();
    }

    fn calculate_line_segments(&mut self) {
        let ShipState {
            position, angle, ..
        } = self.state;

        let p1 = position;
        let p2 = p1.offset(defaults::HULL_LENGTH, -angle);
        let p3 = p2.offset(defaults::NOSE_LENGTH, -angle + PI / 4.);
        let p4 = p3.offset(defaults::NOSE_LENGTH, -angle + PI * 3. / 4.);
        let p5 = p4.offset(defaults::HULL_LENGTH, -angle + PI);

        self.hull.clear();
        self.hull.extend([
            LineSegment::between(p1, p2),
            LineSegment::between(p2, p3),
            LineSegment::between(p3, p4),
            LineSegment::between(p2, p4),
            LineSegment::between(p4, p5),
            LineSegment::between(p5, p1),
        ]);

        self.flare.clear();
        if self.state.thrust > 0. {
            let flare_size = self.state.thrust * self.flare_scale;
            let along = |p: Point, distance: f64, direction: f64| {
                Point::new(
                    p.x + distance * direction.sin(),
                    p.y + distance * direction.cos(),
                )
            };

            let f1 = along(position, 1., angle + PI / 4.);
            let f2 = along(f1, 6., angle + PI / 2.);
            let f3 = along(along(f1, 3., angle + PI / 2.), -flare_size, angle + PI);
            self.flare.extend([
                LineSegment::between(f1, f2),
                LineSegment::between(f2, f3),
                LineSegment::between(f3, f1),
            ]);
        }
    }
}

impl HasSegments for Ship {
    fn segments(&self) -> &[LineSegment] {
        &self.hull
    }
}
