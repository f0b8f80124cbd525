use std::{path::PathBuf, time::Duration};

use clap::Parser;
use lander::{
    hud::FuelGauge, App, ExecutionStatus, FixedRateFrames, FrameSource, Game, Hud, Key, Keyboard,
    LineSegment, Point, Renderer, Settings,
};
use rand::{rngs::StdRng, SeedableRng};

/// Plays one game headless with a simple autopilot and prints the flight.
#[derive(Parser)]
struct Args {
    /// Json file overriding the default settings
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Seed for terrain, pad and spawn
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Give up after this many frames
    #[arg(long, default_value_t = 20_000)]
    max_frames: usize,
    /// Print the flight history as json instead of a table
    #[arg(long)]
    json: bool,
}

/// Tilts towards the pad, levels out over it and brakes when falling fast.
struct Autopilot {
    descent_speed: f64,
}

impl Autopilot {
    fn steer(&self, game: &Game, keyboard: &Keyboard) {
        let state = game.ship().state();
        let pad = game.landing_pad();
        let to_pad = pad.center_x() - state.position.x;

        let over_pad = to_pad.abs() < pad.width / 4.;
        let wanted_speed_x = if over_pad { 0. } else { to_pad.signum() * 1.5 };
        let wanted_angle = ((state.speed.x - wanted_speed_x) * 0.3).clamp(-0.5, 0.5);
        let wanted_angle = if over_pad && state.speed.x.abs() < 0.1 {
            0.
        } else {
            wanted_angle
        };

        set(keyboard, Key::RotateLeft, state.angle < wanted_angle - 0.02);
        set(keyboard, Key::RotateRight, state.angle > wanted_angle + 0.02);
        set(keyboard, Key::Thrust, state.speed.y > self.descent_speed);
    }
}

fn set(keyboard: &Keyboard, key: Key, down: bool) {
    if down {
        keyboard.press(key);
    } else {
        keyboard.release(key);
    }
}

/// Logs what would be drawn; only the final frame is printed.
#[derive(Default)]
struct TextRenderer {
    segments: usize,
    messages: Vec<String>,
}

impl Renderer for TextRenderer {
    fn clear(&mut self, _: Point) {
        self.segments = 0;
        self.messages.clear();
    }

    fn stroke(&mut self, segments: &[LineSegment]) {
        self.segments += segments.len();
    }

    fn measure_text(&self, text: &str) -> (f64, f64) {
        (text.chars().count() as f64 * 7., 12.)
    }

    fn draw_hud(&mut self, hud: &Hud, gauge: &FuelGauge) {
        log::trace!(
            "{} {:.1} thrust {:.4} angle {:.1} vspeed {:.3} ({} segments)",
            gauge.label,
            hud.fuel,
            hud.thrust,
            hud.angle_degrees,
            hud.vertical_speed,
            self.segments
        );
    }

    fn draw_messages(&mut self, lines: &[String]) {
        self.messages = lines.to_vec();
    }

    fn draw_prompt(&mut self, prompt: &str) {
        println!("{prompt}");
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let rng = StdRng::seed_from_u64(args.seed);
    let mut app = match &args.settings {
        Some(path) => App::try_from_file(path, rng)?,
        None => App::try_new(Settings::default(), rng)?,
    };

    let autopilot = Autopilot { descent_speed: 0.6 };
    let keyboard = Keyboard::new();
    let mut renderer = TextRenderer::default();
    let mut frames = FixedRateFrames::new(Duration::from_micros(16_667), args.max_frames);

    let now = std::time::Instant::now();
    let mut status = ExecutionStatus::InProgress;
    while status == ExecutionStatus::InProgress {
        let Some(frame) = frames.next_frame() else {
            break;
        };
        autopilot.steer(app.game(), &keyboard);
        status = app.frame(&keyboard, frame)?;
        app.render(&mut renderer, status);
    }
    let elapsed = now.elapsed();

    if args.json {
        println!("{}", app.history().to_json().pretty(2));
    } else {
        println!("{}", app.history().pretty_to_string());
    }
    println!(
        "Run ended after {} ticks with {:?} in {elapsed:?}",
        app.game().ticks(),
        app.game().state()
    );
    for line in &renderer.messages {
        println!("{line}");
    }
    Ok(())
}
