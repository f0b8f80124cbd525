use lander::{
    CollisionChecker, Crash, Game, GameState, InputSnapshot, LandingPad, Physics, Point, Ship,
    ShipSettings, ShipState, TerrainSegment,
};

const PAD_Y: f64 = 400.;
const GROUND_Y: f64 = 402.;

/// A flat world with the pad at x 100..146 and the ship placed so that one
/// idle tick brings it to `position` with a vertical speed of `vy`.
fn game_after_one_tick(position: (f64, f64), vy: f64, angle_degrees: f64, fuel: f64) -> Game {
    let gravity = Physics::default().gravity();
    let start_vy = vy - gravity;
    let state = ShipState::default()
        .with_position(position.0, position.1 - vy)
        .with_speed(0., start_vy)
        .with_angle_degrees(angle_degrees)
        .with_fuel(fuel);

    let mut pad = LandingPad::new(100.);
    pad.place(PAD_Y, 46., 3.);

    let mut game = Game::from_parts(
        Point::new(800., 600.),
        vec![
            TerrainSegment::new(0., GROUND_Y, 150., GROUND_Y),
            TerrainSegment::new(150., GROUND_Y, 400., 450.),
            TerrainSegment::new(400., 450., 800., 450.),
        ],
        pad,
        Ship::new(state, &ShipSettings::default()),
        Physics::default(),
        CollisionChecker::default(),
    )
    .unwrap();
    game.tick(&InputSnapshot::default());
    game
}

#[test]
fn soft_landing_wins() {
    let game = game_after_one_tick((120., 398.5), 0.5, 0., 50.);
    assert_eq!(*game.state(), GameState::Won);
    assert_eq!(game.state().messages(), vec!["YOU WIN!"]);
}

#[test]
fn too_fast_landing() {
    let game = game_after_one_tick((120., 398.5), 1.2, 0., 50.);
    assert_eq!(*game.state(), GameState::Lost(Crash::TooFast));
    assert_eq!(
        game.state().messages(),
        vec!["GAME OVER", "You came down too fast"]
    );
}

#[test]
fn tilted_landing() {
    let game = game_after_one_tick((120., 398.5), 0.5, 20., 50.);
    assert_eq!(
        game.state().messages(),
        vec!["GAME OVER", "Your landing angle was bad"]
    );
}

#[test]
fn slight_tilt_is_fine() {
    let game = game_after_one_tick((120., 398.5), 0.5, -6., 50.);
    assert_eq!(*game.state(), GameState::Won);
}

#[test]
fn crash_leaves_a_crater() {
    let game = game_after_one_tick((600., 452.), 0.5, 0., 17.);
    assert_eq!(
        game.state().messages(),
        vec!["GAME OVER", "You crashed, causing a crater 10 km wide."]
    );
}

#[test]
fn crash_on_empty_tank() {
    let game = game_after_one_tick((600., 452.), 0.5, 0., 0.);
    assert_eq!(*game.state(), GameState::Lost(Crash::Crashed));
}

#[test]
fn off_into_space_freezes_the_game() {
    let mut game = game_after_one_tick((-3., 300.), 0.5, 0., 50.);
    assert_eq!(
        game.state().messages(),
        vec!["GAME OVER", "You went off into space"]
    );

    let frozen = game.ship().state().clone();
    let segments = game.ship().render_segments().copied().collect::<Vec<_>>();
    for _ in 0..10 {
        let input = InputSnapshot::default()
            .with_thrust(true)
            .with_rotate_left(true);
        assert_eq!(*game.tick(&input), GameState::Lost(Crash::OffIntoSpace));
    }
    assert_eq!(*game.ship().state(), frozen);
    assert_eq!(game.ship().render_segments().copied().collect::<Vec<_>>(), segments);
    assert_eq!(game.ticks(), 1);
}

#[test]
fn hovering_keeps_playing() {
    let game = game_after_one_tick((300., 200.), 0.5, 0., 50.);
    assert_eq!(*game.state(), GameState::Playing);
    assert!(game.state().messages().is_empty());
}
