//! Brick Break entry point
//!
//! The real front end plugs a renderer and input source into [`Nav`]
//! through the platform traits. This binary runs the whole stack headless
//! as a smoke check: load the store, start a session from the menu, run it
//! for a few seconds of simulated time, and quit.

use std::time::SystemTime;

use anyhow::{Context, Result};

use brickbreak::consts::TICK_RATE;
use brickbreak::frames::Nav;
use brickbreak::platform::{InputEvent, InputSource, Key, NullAudio, ScriptedInput};
use brickbreak::settings::Settings;
use brickbreak::store::Store;

const DATA_PATH: &str = "assets/data.json";

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Brick Break starting...");

    let store = Store::load(DATA_PATH)?;
    let seed = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .context("system clock is before the unix epoch")?
        .as_secs();
    let mut nav = Nav::new(store, Settings::default(), seed);
    log::info!("seed: {}", seed);

    // Start a game from the menu, hold the paddle right for two seconds,
    // then let it idle for three more.
    let mut script = vec![
        vec![InputEvent::KeyDown(Key::Enter)],
        vec![InputEvent::KeyDown(Key::Right)],
    ];
    script.resize(2 + 2 * TICK_RATE as usize, Vec::new());
    script.push(vec![InputEvent::KeyUp(Key::Right)]);
    script.resize(script.len() + 3 * TICK_RATE as usize, Vec::new());
    script.push(vec![InputEvent::Quit]);

    let mut input = ScriptedInput::new(script);
    let mut audio = NullAudio;
    let mut frames = 0u32;
    while !nav.should_quit() {
        let events = input.poll();
        nav.step(&events, &mut audio);
        nav.render();
        frames += 1;
    }
    println!("ran {} frames without incident", frames);
    Ok(())
}
