use lifegrid::LifeConfig;
use lifegrid::LifeEngine;
use lifegrid::utils::sim_rng;
use std::io::{self, Write};
use std::time::{Duration, Instant};

// Upper bound on how long the loop sleeps between accumulator checks.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

fn render(engine: &LifeEngine, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Generation {} | population {}",
        engine.generation(),
        engine.population()
    )?;
    write!(out, "{}", engine.grid())?;
    writeln!(out)?;
    out.flush()
}

// Checked before every step, so a limit of 0 never advances the board.
fn stop_reason(engine: &LifeEngine, max_generations: Option<u64>) -> Option<&'static str> {
    if engine.is_extinct() {
        Some("Board died out")
    } else if max_generations.is_some_and(|max| engine.generation() >= max) {
        Some("Reached generation limit")
    } else {
        None
    }
}

// --- Main Function ---
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = LifeConfig::from_env();
    let mut engine = LifeEngine::from_config(&config)?;
    let mut rng = sim_rng(config.seed);
    engine.randomize(&mut rng);
    log::info!(
        "Starting {}x{} board (seed {:?}), one generation every {:?}",
        config.rows,
        config.cols,
        config.seed,
        config.generation_interval
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&engine, &mut out)?;

    let step_interval = config.generation_interval.as_secs_f64();
    let mut last_update_time = Instant::now();
    let mut time_accumulator = 0.0;

    loop {
        let now = Instant::now();
        time_accumulator += now.duration_since(last_update_time).as_secs_f64();
        last_update_time = now;

        // A zero interval means "as fast as possible": one step per pass.
        while time_accumulator >= step_interval {
            if let Some(reason) = stop_reason(&engine, config.max_generations) {
                log::info!("{} at generation {}", reason, engine.generation());
                return Ok(());
            }

            engine.step();
            render(&engine, &mut out)?;
            log::info!(
                "Generation {}: {} alive",
                engine.generation(),
                engine.population()
            );

            if step_interval > 0.0 {
                time_accumulator -= step_interval;
            } else {
                time_accumulator = 0.0;
                break;
            }
        }

        std::thread::sleep(POLL_INTERVAL.min(config.generation_interval));
    }
}
