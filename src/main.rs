//! Predictive Aim entry point
//!
//! Headless harness: plays a seeded series of clicks against the turret with
//! a fixed-timestep loop and logs what happens.
//!
//! Usage: `predictive-aim [settings.json] [seed] [shots]`

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use predictive_aim::Settings;
use predictive_aim::consts::{HARNESS_DT, MAX_SUBSTEPS};
use predictive_aim::renderer::draw_list;
use predictive_aim::sim::{FireInput, SimEvent, SimState, TickInput, tick};

/// Give up on a volley after this many simulated seconds
const VOLLEY_TIMEOUT: f64 = 10.0;

#[derive(Debug, Default)]
struct Tally {
    fired: u32,
    answered: u32,
    unanswered: u32,
    shot_down: u32,
    escaped: u32,
}

/// Harness instance holding all state
struct Harness {
    state: SimState,
    accumulator: f64,
    input: TickInput,
    tally: Tally,
}

impl Harness {
    fn new(settings: Settings) -> Self {
        Self {
            state: SimState::new(settings),
            accumulator: 0.0,
            input: TickInput::default(),
            tally: Tally::default(),
        }
    }

    /// Queue a click for the next tick
    fn click(&mut self, fire: FireInput) {
        self.input.fire.push(fire);
    }

    /// Run simulation ticks for one frame of `dt` seconds
    fn update(&mut self, dt: f64) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= HARNESS_DT && substeps < MAX_SUBSTEPS {
            let input = std::mem::take(&mut self.input);
            tick(&mut self.state, &input, HARNESS_DT);
            self.accumulator -= HARNESS_DT;
            substeps += 1;
        }

        for event in self.state.drain_events() {
            self.record(event);
        }
        self.state.prune_disabled();
    }

    fn record(&mut self, event: SimEvent) {
        match event {
            SimEvent::ShooterFired { id, vel } => {
                self.tally.fired += 1;
                log::info!("Shot {} fired with velocity ({:.1}, {:.1})", id, vel.x, vel.y);
            }
            SimEvent::TurretFired {
                id,
                target,
                intercept,
                eta,
                ..
            } => {
                self.tally.answered += 1;
                log::info!(
                    "Turret fires {} at shot {}: meet at ({:.1}, {:.1}) in {:.2}s",
                    id,
                    target,
                    intercept.x,
                    intercept.y,
                    eta
                );
            }
            SimEvent::NoIntercept { target } => {
                self.tally.unanswered += 1;
                log::warn!("Turret cannot reach shot {}", target);
            }
            SimEvent::ShooterMoved { pos } => {
                log::info!("Shooter moved to ({:.1}, {:.1})", pos.x, pos.y);
            }
            SimEvent::OutOfBounds { id } => {
                self.tally.escaped += 1;
                log::debug!("Projectile {} left the arena", id);
            }
            SimEvent::Collision { a, b, pos } => {
                self.tally.shot_down += 1;
                log::info!("Projectiles {} and {} destroyed at ({:.1}, {:.1})", a, b, pos.x, pos.y);
            }
        }
    }
}

fn random_point(rng: &mut Pcg32, settings: &Settings) -> DVec2 {
    DVec2::new(
        rng.random_range(0.0..settings.arena_width),
        rng.random_range(0.0..settings.arena_height),
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345u64);
    let shots = args.next().and_then(|s| s.parse().ok()).unwrap_or(8u32);

    log::info!("Predictive Aim starting (seed {}, {} shots)", seed, shots);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut harness = Harness::new(settings.clone());

    for _ in 0..shots {
        if rng.random_bool(0.25) {
            harness.click(FireInput::secondary(random_point(&mut rng, &settings)));
        }
        harness.click(FireInput::primary(random_point(&mut rng, &settings)));

        let start = harness.state.time;
        loop {
            // Jittered frame times, as a browser would deliver them
            harness.update(rng.random_range(0.012..0.024));
            if harness.input.fire.is_empty() && harness.state.is_quiet() {
                break;
            }
            if harness.state.time - start > VOLLEY_TIMEOUT {
                log::warn!("Volley still in flight after {}s", VOLLEY_TIMEOUT);
                break;
            }
        }
        log::debug!("{} circles in final frame", draw_list(&harness.state).len());
    }

    let t = &harness.tally;
    println!(
        "fired {} | answered {} | unanswered {} | shot down {} | escaped {}",
        t.fired, t.answered, t.unanswered, t.shot_down, t.escaped
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless harness is native only
}
