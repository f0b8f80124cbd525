use std::time::Duration;

use crate::simulation::*;

pub(crate) mod defaults {
    pub const WIDTH: f64 = 800.;
    pub const HEIGHT: f64 = 600.;
    pub const RESTART_DELAY_MS: u64 = 1500;
}

/// Everything tunable about a session.
#[derive(Debug, Clone)]
pub struct Settings {
    pub game_size: Point,
    pub restart_delay: Duration,
    pub rules: Rules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_size: Point::new(defaults::WIDTH, defaults::HEIGHT),
            restart_delay: Duration::from_millis(defaults::RESTART_DELAY_MS),
            rules: Rules::default(),
        }
    }
}

impl Settings {
    pub fn with_game_size(self, width: f64, height: f64) -> Self {
        Self {
            game_size: Point::new(width, height),
            ..self
        }
    }

    pub fn with_restart_delay(self, restart_delay: Duration) -> Self {
        Self {
            restart_delay,
            ..self
        }
    }

    pub fn with_rules(self, rules: Rules) -> Self {
        Self { rules, ..self }
    }
}
