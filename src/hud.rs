use crate::simulation::*;

pub(crate) mod defaults {
    pub const MARGIN: f64 = 4.;
    pub const GAUGE_WIDTH_FRACTION: f64 = 0.25;
    pub const FUEL_LABEL: &str = "Fuel:";
}

/// Readouts shown while flying.
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub thrust: f64,
    pub angle_degrees: f64,
    pub fuel: f64,
    pub fuel_fraction: f64,
    pub vertical_speed: f64,
}

impl Hud {
    pub fn from_ship(ship: &Ship) -> Self {
        let state = ship.state();
        Self {
            thrust: state.thrust,
            angle_degrees: state.angle.to_degrees(),
            fuel: state.fuel,
            fuel_fraction: (state.fuel / ship.max_fuel()).clamp(0., 1.),
            vertical_speed: state.speed.y,
        }
    }
}

/// Fuel bar laid out next to its label in the top left corner. Text metrics
/// come from the renderer.
#[derive(Debug, Clone)]
pub struct FuelGauge {
    pub label: &'static str,
    pub label_position: Point,
    pub bar_position: Point,
    pub bar_size: Point,
    outline: [LineSegment; 4],
}

impl FuelGauge {
    pub fn new(game_size: Point, label_width: f64, text_height: f64) -> Self {
        let label_position = Point::new(defaults::MARGIN, defaults::MARGIN + text_height);
        let bar_position = Point::new(
            label_position.x + label_width + defaults::MARGIN,
            label_position.y - text_height,
        );
        let bar_size = Point::new(game_size.x * defaults::GAUGE_WIDTH_FRACTION, text_height);

        let (x, y, w, h) = (bar_position.x, bar_position.y, bar_size.x, bar_size.y);
        Self {
            label: defaults::FUEL_LABEL,
            label_position,
            bar_position,
            bar_size,
            outline: [
                LineSegment::new(x, y, x, y + h),
                LineSegment::new(x, y + h, x + w, y + h),
                LineSegment::new(x + w, y + h, x + w, y),
                LineSegment::new(x + w, y, x, y),
            ],
        }
    }

    pub fn fill_width(&self, hud: &Hud) -> f64 {
        self.bar_size.x * hud.fuel_fraction
    }
}

impl HasSegments for FuelGauge {
    fn segments(&self) -> &[LineSegment] {
        &self.outline
    }
}
