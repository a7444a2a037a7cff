use std::{env, fs, time::Instant};

use anyhow::{Context, Result};
use log::info;

mod script;

use script::Script;

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .context("Usage: tactile-replay <script.toml>")?;
    let source = fs::read_to_string(&path).with_context(|| format!("Failed to read `{path}`"))?;
    let script = Script::from_toml(&source).with_context(|| format!("Invalid script `{path}`"))?;
    info!("Replaying {} events from `{path}`", script.event.len());

    let replay = script.replay(Instant::now());
    for gesture in &replay.gestures {
        println!("{gesture}");
    }
    println!("final state: {}", replay.state);
    Ok(())
}
