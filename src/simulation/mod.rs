mod collision;
mod entities;
mod game;
mod geometry;
mod history;
mod input;
mod physics;
mod ship;
mod terrain;

pub use collision::*;
pub use entities::*;
pub use game::*;
pub use geometry::*;
pub use history::*;
pub use input::*;
pub use physics::*;
pub use ship::*;
pub use terrain::*;
