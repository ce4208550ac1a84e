use std::{env, error::Error, fs};

use log::{error, info};

use arena_sim::scene::{build_arena, ArenaLayout};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    run().inspect_err(|err| error!("arena run failed: {err}"))
}

fn run() -> Result<(), Box<dyn Error>> {
    let layout = match env::args().nth(1) {
        Some(path) => {
            info!("loading arena layout from {path}");
            serde_json::from_str::<ArenaLayout>(&fs::read_to_string(&path)?)?
        }
        None => ArenaLayout::default(),
    };
    let mut arena = build_arena(&layout)?;

    let (mut hits, mut bricks_removed, mut balls_lost) = (0, 0, 0);
    while arena.simulation().tick_count() < layout.ticks && !arena.is_over() {
        let outcome = arena.tick();
        hits += outcome.hits.len();
        bricks_removed += outcome.bricks_removed;
        balls_lost += outcome.balls_lost;
    }

    info!(
        "finished after {} ticks: {hits} hits, {bricks_removed} bricks removed, {} bricks left, \
         {balls_lost} balls lost, {} balls left",
        arena.simulation().tick_count(),
        arena.remaining_bricks(),
        arena.remaining_balls()
    );
    Ok(())
}
