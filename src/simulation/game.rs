use log::{info, trace};
use rand::Rng;

use super::{
    BoundingBox, CollisionChecker, Crash, HasSegments, InputSource, LandingPad, Outcome, Physics,
    Point, Ship, ShipSettings, Surroundings, TerrainGenerator, TerrainSegment,
};
use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    Playing,
    Won,
    Lost(Crash),
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Playing)
    }

    /// Lines shown once the game is over.
    pub fn messages(&self) -> Vec<String> {
        match self {
            GameState::Playing => Vec::new(),
            GameState::Won => vec!["YOU WIN!".to_owned()],
            GameState::Lost(crash) => vec!["GAME OVER".to_owned(), crash.to_string()],
        }
    }
}

impl From<Outcome> for GameState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => GameState::Won,
            Outcome::Lost(crash) => GameState::Lost(crash),
        }
    }
}

/// Everything a single game needs besides its randomly generated world.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    pub physics: Physics,
    pub collision_checker: CollisionChecker,
    pub terrain_generator: TerrainGenerator,
    pub ship: ShipSettings,
}

pub struct Game {
    game_size: Point,
    bounding_box: BoundingBox,
    landing_pad: LandingPad,
    surface: Vec<TerrainSegment>,
    ship: Ship,
    physics: Physics,
    collision_checker: CollisionChecker,
    state: GameState,
    ticks: u64,
}

impl Game {
    pub fn try_new(game_size: Point, rules: &Rules, rng: &mut impl Rng) -> Result<Self, Error> {
        let generator = &rules.terrain_generator;
        let invalid_canvas = Error::InvalidCanvas {
            width: game_size.x,
            height: game_size.y,
        };
        if !(game_size.x > 0.) || generator.band(game_size).is_empty() {
            return Err(invalid_canvas);
        }

        let mut landing_pad = LandingPad::new(generator.pad_position(game_size, rng));
        let surface = generator.generate(game_size, &mut landing_pad, rng)?;
        if !Ship::can_spawn(game_size, &landing_pad, &rules.ship) {
            return Err(invalid_canvas);
        }
        let ship = Ship::spawn(game_size, &landing_pad, &rules.ship, rng);

        info!(
            "New game {}x{}, pad at x={:.1}",
            game_size.x, game_size.y, landing_pad.x
        );
        Self::from_parts(
            game_size,
            surface,
            landing_pad,
            ship,
            rules.physics.clone(),
            rules.collision_checker.clone(),
        )
    }

    /// Assembles a game from hand-placed parts. The pad must already be
    /// placed.
    pub fn from_parts(
        game_size: Point,
        surface: Vec<TerrainSegment>,
        landing_pad: LandingPad,
        ship: Ship,
        physics: Physics,
        collision_checker: CollisionChecker,
    ) -> Result<Self, Error> {
        if !landing_pad.is_placed() {
            return Err(Error::UnplacedLandingPad { x: landing_pad.x });
        }
        Ok(Self {
            game_size,
            bounding_box: BoundingBox::around(game_size),
            landing_pad,
            surface,
            ship,
            physics,
            collision_checker,
            state: GameState::Playing,
            ticks: 0,
        })
    }

    pub fn game_size(&self) -> Point {
        self.game_size
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn landing_pad(&self) -> &LandingPad {
        &self.landing_pad
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn surface(&self) -> &[TerrainSegment] {
        &self.surface
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Every static entity in drawing order; the ship is drawn separately
    /// because its flare is not part of its collision outline.
    pub fn scenery(&self) -> impl Iterator<Item = &dyn HasSegments> + '_ {
        std::iter::once(&self.bounding_box as &dyn HasSegments)
            .chain(std::iter::once(&self.landing_pad as &dyn HasSegments))
            .chain(self.surface.iter().map(|s| s as &dyn HasSegments))
    }

    /// One tick: physics, then collision resolution. A finished game is left
    /// untouched.
    pub fn tick(&mut self, input: &impl InputSource) -> &GameState {
        if self.state.is_terminal() {
            return &self.state;
        }

        self.ship.update(&self.physics, input);
        self.ticks += 1;

        let surroundings = Surroundings {
            landing_pad: &self.landing_pad,
            bounding_box: &self.bounding_box,
            surface: &self.surface,
        };
        if let Some(outcome) =
            self.collision_checker
                .check(&self.ship, self.ship.state(), &surroundings)
        {
            self.state = outcome.into();
            info!("Game over after {} ticks: {:?}", self.ticks, self.state);
        } else {
            trace!("tick {}: {:?}", self.ticks, self.ship.state());
        }
        &self.state
    }
}
