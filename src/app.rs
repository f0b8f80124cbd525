use std::time::{Duration, Instant};

use log::info;
use rand::Rng;

use crate::hud::{FuelGauge, Hud};
pub use crate::settings::Settings;
pub use crate::simulation::*;
use crate::Error;

pub const RESTART_PROMPT: &str = "Press any key to play again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    InProgress,
    /// The game is over and the restart prompt is not shown yet.
    Finished,
    AwaitingRestart,
    Restarted,
}

/// Drawing surface supplied by the host.
pub trait Renderer {
    fn clear(&mut self, game_size: Point);
    /// Strokes every segment as a separate line.
    fn stroke(&mut self, segments: &[LineSegment]);
    /// Width and height of `text` as it would be drawn.
    fn measure_text(&self, text: &str) -> (f64, f64);
    fn draw_hud(&mut self, hud: &Hud, gauge: &FuelGauge);
    /// Terminal messages, centred on the canvas.
    fn draw_messages(&mut self, lines: &[String]);
    fn draw_prompt(&mut self, prompt: &str);
}

/// Host display refresh. `None` once the host stops producing frames.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Instant>;
}

/// Frames on a fixed cadence from a simulated clock, for headless runs.
pub struct FixedRateFrames {
    now: Instant,
    period: Duration,
    remaining: usize,
}

impl FixedRateFrames {
    pub fn new(period: Duration, frames: usize) -> Self {
        Self {
            now: Instant::now(),
            period,
            remaining: frames,
        }
    }
}

impl FrameSource for FixedRateFrames {
    fn next_frame(&mut self) -> Option<Instant> {
        self.remaining = self.remaining.checked_sub(1)?;
        self.now += self.period;
        Some(self.now)
    }
}

pub struct App<R: Rng> {
    settings: Settings,
    rng: R,
    game: Game,
    history: ShipHistory,
    finished_at: Option<Instant>,
    games_played: usize,
}

impl<R: Rng> App<R> {
    pub fn try_new(settings: Settings, mut rng: R) -> Result<Self, Error> {
        let game = Game::try_new(settings.game_size, &settings.rules, &mut rng)?;
        let history = ShipHistory::with_initial_state(game.ship().state());
        Ok(Self {
            settings,
            rng,
            game,
            history,
            finished_at: None,
            games_played: 1,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn history(&self) -> &ShipHistory {
        &self.history
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Replaces the finished game with a freshly generated one.
    pub fn restart(&mut self) -> Result<(), Error> {
        self.game = Game::try_new(self.settings.game_size, &self.settings.rules, &mut self.rng)?;
        self.history = ShipHistory::with_initial_state(self.game.ship().state());
        self.finished_at = None;
        self.games_played += 1;
        info!("Restarted, game #{}", self.games_played);
        Ok(())
    }

    /// Advances the session by one display frame.
    pub fn frame(&mut self, keyboard: &Keyboard, now: Instant) -> Result<ExecutionStatus, Error> {
        if !self.game.is_over() {
            let input = keyboard.snapshot();
            self.game.tick(&input);
            self.history.append_ship_state(self.game.ship().state());
            if !self.game.is_over() {
                return Ok(ExecutionStatus::InProgress);
            }
            // presses made while flying do not count towards a restart
            keyboard.take_any_key();
            self.finished_at = Some(now);
            return Ok(ExecutionStatus::Finished);
        }

        let finished_at = *self.finished_at.get_or_insert(now);
        if now.saturating_duration_since(finished_at) < self.settings.restart_delay {
            // presses before the prompt shows do not count
            keyboard.take_any_key();
            return Ok(ExecutionStatus::Finished);
        }
        if keyboard.take_any_key() {
            self.restart()?;
            return Ok(ExecutionStatus::Restarted);
        }
        Ok(ExecutionStatus::AwaitingRestart)
    }

    pub fn render(&self, renderer: &mut impl Renderer, status: ExecutionStatus) {
        let game_size = self.game.game_size();
        renderer.clear(game_size);
        for entity in self.game.scenery() {
            renderer.stroke(entity.segments());
        }
        let ship = self.game.ship();
        renderer.stroke(ship.segments());
        renderer.stroke(ship.flare_segments());

        let (label_width, text_height) = renderer.measure_text(crate::hud::defaults::FUEL_LABEL);
        let gauge = FuelGauge::new(game_size, label_width, text_height);
        renderer.stroke(gauge.segments());
        renderer.draw_hud(&Hud::from_ship(ship), &gauge);

        if self.game.is_over() {
            renderer.draw_messages(&self.game.state().messages());
        }
        if status == ExecutionStatus::AwaitingRestart {
            renderer.draw_prompt(RESTART_PROMPT);
        }
    }

    /// Plays the current game to its end, rendering every frame.
    pub fn run_game(
        &mut self,
        keyboard: &Keyboard,
        renderer: &mut impl Renderer,
        frames: &mut impl FrameSource,
    ) -> Result<ExecutionStatus, Error> {
        let mut status = ExecutionStatus::InProgress;
        while status == ExecutionStatus::InProgress {
            let Some(now) = frames.next_frame() else {
                break;
            };
            status = self.frame(keyboard, now)?;
            self.render(renderer, status);
        }
        Ok(status)
    }

    /// Keeps playing, restarting on request, for as long as the host
    /// produces frames.
    pub fn run(
        &mut self,
        keyboard: &Keyboard,
        renderer: &mut impl Renderer,
        frames: &mut impl FrameSource,
    ) -> Result<(), Error> {
        while let Some(now) = frames.next_frame() {
            let status = self.frame(keyboard, now)?;
            self.render(renderer, status);
        }
        Ok(())
    }
}
