//! Skyrunner entry point
//!
//! Headless demo driver: runs a scripted session against the endless
//! generator and prints the outcome. A real embedder supplies input intents
//! from its own event loop and draws from [`skyrunner::view::FrameView`].

use skyrunner::sim::{EndlessSource, Phase, TickInput, World, tick};
use skyrunner::view::HudView;
use skyrunner::{HighScores, Tuning};

/// Demo run length: five minutes of frames at 60 Hz
const MAX_TICKS: u32 = 5 * 60 * 60;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    log::info!("skyrunner starting with seed {seed}");

    let tuning = Tuning::load();
    let mut world = World::new(Box::new(EndlessSource::new(seed)), tuning);
    let mut scores = HighScores::new();

    // Scripted pilot: hold right, hop on a fixed cadence
    let mut input = TickInput::default();
    let mut ticks = 0;
    while ticks < MAX_TICKS && world.phase == Phase::Running {
        input.move_right = true;
        if ticks % 40 == 0 {
            input.jump = true;
        }
        tick(&mut world, &mut input);
        ticks += 1;
    }

    let hud = HudView::capture(&world);
    let rank = scores.add_score(hud.score, hud.distance);

    println!("seed:     {seed}");
    println!("ticks:    {ticks}");
    println!("distance: {}", hud.distance);
    println!("score:    {}", hud.score);
    println!("lives:    {}", hud.lives);
    println!(
        "outcome:  {}",
        if hud.game_over { "game over" } else { "survived" }
    );
    if let Some(rank) = rank {
        println!("rank:     #{rank}");
    }
    log::info!(
        "demo finished after {ticks} ticks at difficulty {}",
        world.difficulty()
    );
}
