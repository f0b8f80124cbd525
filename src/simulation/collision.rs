use std::fmt::Display;

use super::{objects_intersect, BoundingBox, HasSegments, LandingPad, ShipState, TerrainSegment};

mod defaults {
    pub const MAX_LANDING_SPEED: f64 = 0.8;
    pub const MAX_LANDING_ANGLE: f64 = std::f64::consts::PI / 180. * 8.;
    pub const CRATER_DIVISOR: f64 = 1.7;
}

/// Ways a flight can end badly.
#[derive(Debug, Clone, PartialEq)]
pub enum Crash {
    TooFast,
    BadAngle,
    OffIntoSpace,
    Crater { width_km: f64 },
    Crashed,
}

impl Display for Crash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Crash::TooFast => write!(f, "You came down too fast"),
            Crash::BadAngle => write!(f, "Your landing angle was bad"),
            Crash::OffIntoSpace => write!(f, "You went off into space"),
            Crash::Crater { width_km } => {
                write!(f, "You crashed, causing a crater {width_km} km wide.")
            }
            Crash::Crashed => write!(f, "You crashed."),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Won,
    Lost(Crash),
}

/// Static geometry the ship can run into.
pub struct Surroundings<'a> {
    pub landing_pad: &'a LandingPad,
    pub bounding_box: &'a BoundingBox,
    pub surface: &'a [TerrainSegment],
}

#[derive(Debug, Clone)]
pub struct CollisionChecker {
    max_landing_speed: f64,
    max_landing_angle: f64,
    crater_divisor: f64,
}

impl Default for CollisionChecker {
    fn default() -> Self {
        Self {
            max_landing_speed: defaults::MAX_LANDING_SPEED,
            max_landing_angle: defaults::MAX_LANDING_ANGLE,
            crater_divisor: defaults::CRATER_DIVISOR,
        }
    }
}

impl CollisionChecker {
    pub fn with_max_landing_speed(self, max_landing_speed: f64) -> Self {
        assert!(max_landing_speed > 0.);
        Self {
            max_landing_speed,
            ..self
        }
    }

    pub fn with_max_landing_angle(self, max_landing_angle: f64) -> Self {
        assert!(max_landing_angle >= 0.);
        Self {
            max_landing_angle,
            ..self
        }
    }

    pub fn with_crater_divisor(self, crater_divisor: f64) -> Self {
        assert!(crater_divisor > 0.);
        Self {
            crater_divisor,
            ..self
        }
    }

    pub fn touching_landing_pad(&self, ship: &impl HasSegments, pad: &LandingPad) -> bool {
        objects_intersect(ship, pad)
    }

    pub fn out_of_bounds(&self, ship: &impl HasSegments, bounding_box: &BoundingBox) -> bool {
        objects_intersect(ship, bounding_box)
    }

    pub fn touching_surface(&self, ship: &impl HasSegments, surface: &[TerrainSegment]) -> bool {
        surface
            .iter()
            .any(|surface_segment| objects_intersect(surface_segment, ship))
    }

    /// Resolves this tick's contacts. A rejected landing ends the check
    /// straight away; otherwise every test runs and the first outcome sticks.
    pub fn check(
        &self,
        hull: &impl HasSegments,
        state: &ShipState,
        surroundings: &Surroundings,
    ) -> Option<Outcome> {
        let mut outcome = None;

        if self.touching_landing_pad(hull, surroundings.landing_pad) {
            if state.speed.y > self.max_landing_speed {
                return Some(Outcome::Lost(Crash::TooFast));
            }
            if state.angle.abs() > self.max_landing_angle {
                return Some(Outcome::Lost(Crash::BadAngle));
            }
            outcome = Some(Outcome::Won);
        }
        if self.out_of_bounds(hull, surroundings.bounding_box) {
            outcome.get_or_insert(Outcome::Lost(Crash::OffIntoSpace));
        }
        if self.touching_surface(hull, surroundings.surface) {
            outcome.get_or_insert(Outcome::Lost(self.surface_crash(state.fuel)));
        }
        outcome
    }

    fn surface_crash(&self, fuel: f64) -> Crash {
        if fuel > 0. {
            Crash::Crater {
                width_km: (fuel / self.crater_divisor).round(),
            }
        } else {
            Crash::Crashed
        }
    }
}

#[cfg(test)]
mod collision_checker_tests {
    use super::*;
    use crate::{LineSegment, Point};

    fn pad() -> LandingPad {
        let mut pad = LandingPad::new(100.);
        pad.place(400., 46., 3.);
        pad
    }

    fn surface() -> Vec<TerrainSegment> {
        vec![
            TerrainSegment::new(0., 402., 100., 402.),
            TerrainSegment::new(100., 402., 150., 402.),
            TerrainSegment::new(150., 402., 800., 450.),
        ]
    }

    fn bounding_box() -> BoundingBox {
        BoundingBox::around(Point::new(800., 600.))
    }

    /// A short vertical stick standing on `(x, y)`.
    fn stick(x: f64, y: f64) -> Vec<LineSegment> {
        vec![LineSegment::new(x, y, x, y - 10.)]
    }

    fn check(hull: &Vec<LineSegment>, state: &ShipState) -> Option<Outcome> {
        let (pad, bounding_box, surface) = (pad(), bounding_box(), surface());
        CollisionChecker::default().check(
            hull,
            state,
            &Surroundings {
                landing_pad: &pad,
                bounding_box: &bounding_box,
                surface: &surface,
            },
        )
    }

    #[test]
    fn still_in_flight() {
        assert_eq!(check(&stick(300., 100.), &ShipState::default()), None);
    }

    #[test]
    fn soft_landing() {
        let state = ShipState::default().with_speed(0., 0.5);
        assert_eq!(check(&stick(120., 398.), &state), Some(Outcome::Won));
    }

    #[test]
    fn landing_speed_limit_is_inclusive() {
        let state = ShipState::default().with_speed(0., 0.8);
        assert_eq!(check(&stick(120., 398.), &state), Some(Outcome::Won));
    }

    #[test]
    fn too_fast() {
        let state = ShipState::default().with_speed(0., 1.2);
        assert_eq!(
            check(&stick(120., 398.), &state),
            Some(Outcome::Lost(Crash::TooFast))
        );
    }

    #[test]
    fn speed_is_checked_before_angle() {
        let state = ShipState::default()
            .with_speed(0., 1.2)
            .with_angle_degrees(-30.);
        assert_eq!(
            check(&stick(120., 398.), &state),
            Some(Outcome::Lost(Crash::TooFast))
        );
    }

    #[test]
    fn bad_angle() {
        let state = ShipState::default()
            .with_speed(0., 0.5)
            .with_angle_degrees(-9.);
        assert_eq!(
            check(&stick(120., 398.), &state),
            Some(Outcome::Lost(Crash::BadAngle))
        );
    }

    #[test]
    fn rejected_landing_skips_surface() {
        // crosses both the pad and the ground under it
        let hull = vec![LineSegment::new(120., 405., 120., 390.)];
        let state = ShipState::default().with_speed(0., 2.);
        assert_eq!(check(&hull, &state), Some(Outcome::Lost(Crash::TooFast)));
    }

    #[test]
    fn win_sticks_over_later_contacts() {
        let hull = vec![LineSegment::new(120., 405., 120., 390.)];
        let state = ShipState::default().with_speed(0., 0.3);
        assert_eq!(check(&hull, &state), Some(Outcome::Won));
    }

    #[test]
    fn crater() {
        let state = ShipState::default().with_fuel(17.);
        let outcome = check(&stick(500., 430.), &state).unwrap();
        assert_eq!(outcome, Outcome::Lost(Crash::Crater { width_km: 10. }));
        if let Outcome::Lost(crash) = outcome {
            assert_eq!(
                crash.to_string(),
                "You crashed, causing a crater 10 km wide."
            );
        }
    }

    #[test]
    fn crashed_without_fuel() {
        let state = ShipState::default().with_fuel(0.);
        assert_eq!(
            check(&stick(500., 430.), &state),
            Some(Outcome::Lost(Crash::Crashed))
        );
    }

    #[test]
    fn off_into_space() {
        let state = ShipState::default();
        assert_eq!(
            check(&stick(300., 5.), &state),
            Some(Outcome::Lost(Crash::OffIntoSpace))
        );
        // fully outside never crosses an edge
        assert_eq!(check(&stick(-30., 300.), &state), None);
    }

    #[test]
    fn off_into_space_beats_surface() {
        let hull = vec![LineSegment::new(790., 455., 810., 440.)];
        let state = ShipState::default().with_fuel(0.);
        assert_eq!(
            check(&hull, &state),
            Some(Outcome::Lost(Crash::OffIntoSpace))
        );
    }

    #[test]
    fn messages() {
        assert_eq!(Crash::TooFast.to_string(), "You came down too fast");
        assert_eq!(Crash::BadAngle.to_string(), "Your landing angle was bad");
        assert_eq!(Crash::OffIntoSpace.to_string(), "You went off into space");
        assert_eq!(Crash::Crashed.to_string(), "You crashed.");
    }
}
