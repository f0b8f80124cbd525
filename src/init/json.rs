use crate::simulation::*;
use crate::Settings;
use json::{self, JsonValue};
use std::{fs::File, io::Read, path::Path, time::Duration};

/// Reads an optional number; missing keys leave the default alone.
macro_rules! get_json {
    ($json:ident, $($key:literal),+) => {
        optional_f64(&$json$([$key])+, concat!($("/", $key),+))?
    };
}

/// Applies `$with` when the key is present and the value passes `$valid`.
macro_rules! apply_json {
    ($target:ident.$with:ident, $json:ident, $($key:literal),+ $(; $valid:expr)?) => {
        if let Some(value) = get_json!($json, $($key),+) {
            #[allow(unused_variables)]
            let key_path = concat!($("/", $key),+);
            $(
                if !($valid)(value) {
                    return Err(format!("Value out of range at {key_path}: {value}"));
                }
            )?
            $target = $target.$with(value);
        }
    };
}

fn positive(value: f64) -> bool {
    value > 0.
}

fn non_negative(value: f64) -> bool {
    value >= 0.
}

pub fn parse_settings<P: AsRef<Path>>(settings_file_path: P) -> Result<Settings, String> {
    parse_from_string(&read_to_string(settings_file_path.as_ref())?)
}

pub fn parse_from_string(content: &str) -> Result<Settings, String> {
    let settings_json = json::parse(content).map_err(|e| format!("Json error: {e}"))?;
    parse_settings_json(&settings_json)
}

fn read_to_string(file_path: &Path) -> Result<String, String> {
    let mut file_content = String::new();
    let mut file = File::open(file_path)
        .map_err(|e| format!("Error while opening file {}: {e}", file_path.display()))?;

    file.read_to_string(&mut file_content)
        .map_err(|e| format!("Failed to read file: {e}"))?;
    Ok(file_content)
}

fn optional_f64(value: &JsonValue, key: &str) -> Result<Option<f64>, String> {
    if value.is_null() {
        Ok(None)
    } else {
        value
            .as_f64()
            .map(Some)
            .ok_or_else(|| format!("Expected a number at {key}"))
    }
}

fn parse_settings_json(json: &JsonValue) -> Result<Settings, String> {
    if !json.is_object() {
        return Err("Settings have to be a json object".to_owned());
    }

    let mut settings = Settings::default();
    let width = get_json!(json, "Canvas", "Width").unwrap_or(settings.game_size.x);
    let height = get_json!(json, "Canvas", "Height").unwrap_or(settings.game_size.y);
    settings = settings.with_game_size(width, height);

    if let Some(delay) = get_json!(json, "RestartDelayMs") {
        if !non_negative(delay) {
            return Err(format!("Value out of range at /RestartDelayMs: {delay}"));
        }
        settings = settings.with_restart_delay(Duration::from_secs_f64(delay / 1000.));
    }

    Ok(settings.with_rules(Rules {
        physics: parse_physics(json)?,
        collision_checker: parse_landing(json)?,
        terrain_generator: parse_terrain(json)?,
        ship: parse_ship(json)?,
    }))
}

fn parse_physics(json: &JsonValue) -> Result<Physics, String> {
    let mut physics = Physics::default();
    apply_json!(physics.with_gravity, json, "Physics", "Gravity");
    apply_json!(physics.with_thrust_step, json, "Physics", "ThrustStep"; non_negative);
    apply_json!(physics.with_thrust_max, json, "Physics", "ThrustMax"; non_negative);
    apply_json!(physics.with_thrust_release, json, "Physics", "ThrustRelease");
    apply_json!(physics.with_fuel_burn, json, "Physics", "FuelBurn"; non_negative);

    if let Some(step) = get_json!(json, "Physics", "RotationStepDeg") {
        physics = physics.with_rotation_step(step.to_radians());
    }
    if let Some(limit) = get_json!(json, "Physics", "AngleLimitDeg") {
        if !(positive(limit) && limit <= 180.) {
            return Err(format!("Value out of range at /Physics/AngleLimitDeg: {limit}"));
        }
        physics = physics.with_angle_limit(limit.to_radians());
    }
    Ok(physics)
}

fn parse_landing(json: &JsonValue) -> Result<CollisionChecker, String> {
    let mut checker = CollisionChecker::default();
    apply_json!(checker.with_max_landing_speed, json, "Landing", "MaxSpeed"; positive);
    apply_json!(checker.with_crater_divisor, json, "Landing", "CraterDivisor"; positive);

    if let Some(angle) = get_json!(json, "Landing", "MaxAngleDeg") {
        if !non_negative(angle) {
            return Err(format!("Value out of range at /Landing/MaxAngleDeg: {angle}"));
        }
        checker = checker.with_max_landing_angle(angle.to_radians());
    }
    Ok(checker)
}

fn parse_terrain(json: &JsonValue) -> Result<TerrainGenerator, String> {
    let mut generator = TerrainGenerator::default();
    apply_json!(generator.with_band_top, json, "Terrain", "BandTop"; non_negative);
    apply_json!(generator.with_band_bottom_margin, json, "Terrain", "BandBottomMargin"; non_negative);
    apply_json!(generator.with_delta_divisor, json, "Terrain", "DeltaDivisor"; positive);

    let columns = &json["Terrain"]["Columns"];
    if !columns.is_null() {
        let columns = columns
            .as_usize()
            .filter(|&c| c >= 4)
            .ok_or("Expected at least 4 columns at /Terrain/Columns")?;
        generator = generator.with_columns(columns);
    }
    Ok(generator)
}

fn parse_ship(json: &JsonValue) -> Result<ShipSettings, String> {
    let mut ship = ShipSettings::default();
    apply_json!(ship.with_max_fuel, json, "Ship", "MaxFuel"; positive);
    apply_json!(ship.with_spawn_height, json, "Ship", "SpawnHeight");
    apply_json!(ship.with_min_pad_distance, json, "Ship", "MinPadDistance"; non_negative);
    apply_json!(ship.with_flare_scale, json, "Ship", "FlareScale"; non_negative);
    Ok(ship)
}
