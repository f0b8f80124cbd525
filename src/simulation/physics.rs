use std::f64::consts::PI;

use super::{InputSource, Key, Point};

pub(crate) mod defaults {
    use std::f64::consts::PI;

    pub const GRAVITY: f64 = 0.01;
    pub const ROTATION_STEP: f64 = PI / 180. * 2.;
    pub const ANGLE_LIMIT: f64 = PI * 3. / 4.;
    pub const THRUST_STEP: f64 = 0.0021;
    pub const THRUST_MAX: f64 = 0.05;
    pub const THRUST_RELEASE: f64 = -0.0017;
    pub const FUEL_BURN: f64 = 7.;
    pub const MAX_FUEL: f64 = 100.;
}

/// Kinematic state of the ship. Angles are radians, counter-clockwise
/// positive, zero pointing up; y grows downwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipState {
    pub position: Point,
    pub speed: Point,
    pub angle: f64,
    pub thrust: f64,
    pub fuel: f64,
}

impl Default for ShipState {
    fn default() -> Self {
        Self {
            position: Point::default(),
            speed: Point::default(),
            angle: 0.,
            thrust: 0.,
            fuel: defaults::MAX_FUEL,
        }
    }
}

impl ShipState {
    pub fn with_position(self, x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            ..self
        }
    }

    pub fn with_speed(self, x: f64, y: f64) -> Self {
        Self {
            speed: Point::new(x, y),
            ..self
        }
    }

    pub fn with_angle(self, angle: f64) -> Self {
        Self { angle, ..self }
    }

    pub fn with_angle_degrees(self, degrees: f64) -> Self {
        self.with_angle(degrees.to_radians())
    }

    pub fn with_thrust(self, thrust: f64) -> Self {
        Self { thrust, ..self }
    }

    pub fn with_fuel(self, fuel: f64) -> Self {
        Self { fuel, ..self }
    }
}

#[derive(Debug, Clone)]
pub struct Physics {
    gravity: f64,
    rotation_step: f64,
    angle_limit: f64,
    thrust_step: f64,
    thrust_max: f64,
    thrust_release: f64,
    fuel_burn: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: defaults::GRAVITY,
            rotation_step: defaults::ROTATION_STEP,
            angle_limit: defaults::ANGLE_LIMIT,
            thrust_step: defaults::THRUST_STEP,
            thrust_max: defaults::THRUST_MAX,
            thrust_release: defaults::THRUST_RELEASE,
            fuel_burn: defaults::FUEL_BURN,
        }
    }
}

impl Physics {
    pub fn with_gravity(self, gravity: f64) -> Self {
        Self { gravity, ..self }
    }
    pub fn with_rotation_step(self, rotation_step: f64) -> Self {
        Self {
            rotation_step,
            ..self
        }
    }
    pub fn with_angle_limit(self, angle_limit: f64) -> Self {
        assert!(angle_limit > 0. && angle_limit <= PI);
        Self {
            angle_limit,
            ..self
        }
    }
    pub fn with_thrust_step(self, thrust_step: f64) -> Self {
        Self {
            thrust_step,
            ..self
        }
    }
    pub fn with_thrust_max(self, thrust_max: f64) -> Self {
        assert!(thrust_max >= 0.);
        Self { thrust_max, ..self }
    }
    pub fn with_thrust_release(self, thrust_release: f64) -> Self {
        Self {
            thrust_release,
            ..self
        }
    }
    pub fn with_fuel_burn(self, fuel_burn: f64) -> Self {
        Self { fuel_burn, ..self }
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn angle_limit(&self) -> f64 {
        self.angle_limit
    }

    /// Advances the ship by one tick.
    pub fn iterate(&self, mut ship: ShipState, input: &impl InputSource) -> ShipState {
        // steer and throttle
        if ship.fuel > 0. {
            if input.is_down(Key::RotateLeft) {
                ship.angle += self.rotation_step;
            }
            if input.is_down(Key::RotateRight) {
                ship.angle -= self.rotation_step;
            }
            ship.angle = ship.angle.clamp(-self.angle_limit, self.angle_limit);

            ship.thrust = if input.is_down(Key::Thrust) {
                (ship.thrust + self.thrust_step).min(self.thrust_max)
            } else {
                self.thrust_release.max(0.)
            };
        } else {
            ship.thrust = 0.;
        }

        // consume fuel
        ship.fuel = (ship.fuel - ship.thrust * self.fuel_burn).max(0.);

        // update velocity
        let (sin, cos) = ship.angle.sin_cos();
        ship.speed.x -= ship.thrust * sin;
        ship.speed.y -= ship.thrust * cos;
        ship.speed.y += self.gravity;

        // update position
        ship.position.x += ship.speed.x;
        ship.position.y += ship.speed.y;

        ship
    }
}
