//! Lonely Highway entry point
//!
//! Headless demo driver: runs the fixed-timestep simulation with the
//! autopilot behind the wheel, logging the stats a HUD would display and
//! recording the run on the local leaderboard. A renderer would drive the
//! same `tick` loop from its frame callback instead.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use lonely_highway::consts::SIM_DT;
use lonely_highway::sim::{GameEvent, GameState, Level, autopilot_input, tick, visible_range};
use lonely_highway::{HighScores, Settings};

const SETTINGS_PATH: &str = "lonely_highway_settings.json";
const SCORES_PATH: &str = "lonely_highway_scores.json";

/// Seed for unseeded runs, taken from the wall clock so every run differs
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn parse_args() -> (Level, u64) {
    let mut level = Level::WindingRidge;
    let mut seed = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "straight" => level = Level::StraightSprint,
            "winding" => level = Level::WindingRidge,
            other => match other.parse::<u64>() {
                Ok(value) => seed = Some(value),
                Err(_) => {
                    eprintln!("usage: lonely-highway [straight|winding] [seed]");
                    std::process::exit(2);
                }
            },
        }
    }

    (level, seed.unwrap_or_else(time_seed))
}

fn main() {
    env_logger::init();

    let (level, seed) = parse_args();
    let settings = Settings::load(Path::new(SETTINGS_PATH));
    let mut scores = HighScores::load(Path::new(SCORES_PATH));

    let mut state = GameState::new(level, seed);
    log::info!(
        "level: {} (goal {} m), seed {seed}",
        state.config.label,
        state.config.distance_goal
    );
    log::info!("{} scenery items placed", state.scenery.len());
    if let Some(best) = scores.best(&state.config.label) {
        log::info!(
            "best so far: {:.0} m{}",
            best.best_distance,
            best.best_time
                .map(|t| format!(", fastest win {t:.1} s"))
                .unwrap_or_default()
        );
    }

    let event = loop {
        let input = autopilot_input(&state);
        let event = tick(&mut state, &input, SIM_DT);

        if state.time_ticks % 120 == 0 {
            let in_range = visible_range(
                &state.scenery,
                state.vehicle.distance,
                settings.draw_distance,
            )
            .count();
            log::info!(
                "t={:>4.0}s  distance={:>6.0}m  speed={:.2}  deviation={:+6.1}m  scenery in range: {in_range}",
                state.elapsed_secs(),
                state.distance_traveled,
                state.vehicle.speed,
                state.deviation(),
            );
        }

        if let Some(event) = event {
            break event;
        }
    };

    let completion = match event {
        GameEvent::Won => {
            log::info!(
                "made it: {:.0} m in {:.1} s",
                state.distance_traveled,
                state.elapsed_secs()
            );
            Some(state.elapsed_secs())
        }
        GameEvent::Failed(reason) => {
            log::info!(
                "run over ({}) after {:.0} m",
                reason.as_str(),
                state.distance_traveled
            );
            None
        }
    };

    if scores.record_run(&state.config.label, state.distance_traveled, completion) {
        log::info!("new personal best");
    }
    if let Err(err) = scores.save(Path::new(SCORES_PATH)) {
        log::warn!("could not save highscores: {err}");
    }
}
