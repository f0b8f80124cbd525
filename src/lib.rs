mod app;
mod error;
pub mod hud;
pub mod init;
mod settings;
mod simulation;

pub use app::*;
pub use error::Error;
pub use hud::{FuelGauge, Hud};
