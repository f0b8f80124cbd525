use json::JsonValue;

use super::{Point, ShipState};

/// Per-tick telemetry of one flight, stored column-wise.
#[derive(Clone, Debug, Default)]
pub struct ShipHistory {
    x: Vec<f64>,
    y: Vec<f64>,
    vx: Vec<f64>,
    vy: Vec<f64>,
    angle: Vec<f64>,
    thrust: Vec<f64>,
    fuel: Vec<f64>,
}

impl ShipHistory {
    pub fn with_initial_state(state: &ShipState) -> Self {
        let mut history = Self::default();
        history.append_ship_state(state);
        history
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn append_ship_state(&mut self, state: &ShipState) {
        self.x.push(state.position.x);
        self.y.push(state.position.y);
        self.vx.push(state.speed.x);
        self.vy.push(state.speed.y);
        self.angle.push(state.angle);
        self.thrust.push(state.thrust);
        self.fuel.push(state.fuel);
    }

    pub fn iter_history(&self) -> impl Iterator<Item = ShipState> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.vx)
            .zip(&self.vy)
            .zip(&self.angle)
            .zip(&self.thrust)
            .zip(&self.fuel)
            .map(|((((((x, y), vx), vy), angle), thrust), fuel)| ShipState {
                position: Point::new(*x, *y),
                speed: Point::new(*vx, *vy),
                angle: *angle,
                thrust: *thrust,
                fuel: *fuel,
            })
    }

    pub fn pretty_to_string(&self) -> String {
        self.iter_history().fold(
            format!(
                "{:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
                "X", "Y", "VX", "VY", "ANGLE", "THRUST", "FUEL"
            ),
            |out,
             ShipState {
                 position,
                 speed,
                 angle,
                 thrust,
                 fuel,
             }| {
                out + &format!(
                    "\n{:8.2} {:8.2} {:8.3} {:8.3} {:8.1} {:8.4} {:8.2}",
                    position.x,
                    position.y,
                    speed.x,
                    speed.y,
                    angle.to_degrees(),
                    thrust,
                    fuel
                )
            },
        )
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(
            self.iter_history()
                .map(|state| {
                    let mut entry = JsonValue::new_object();
                    entry["X"] = state.position.x.into();
                    entry["Y"] = state.position.y.into();
                    entry["HSpeed"] = state.speed.x.into();
                    entry["VSpeed"] = state.speed.y.into();
                    entry["Angle"] = state.angle.to_degrees().into();
                    entry["Thrust"] = state.thrust.into();
                    entry["Fuel"] = state.fuel.into();
                    entry
                })
                .collect(),
        )
    }
}
