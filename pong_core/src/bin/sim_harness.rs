//! Headless simulation harness.
//! Usage: PONG_FRAMES=3600 PONG_FPS=0 cargo run --bin sim_harness (needs the default `harness` feature)

use anyhow::Context;
use pong_core::{
    Color, Config, Events, Exit, FrameDriver, GameRng, GameState, IntervalTicker, Params, Side,
    Surface, Ticker, Unthrottled,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Harness settings, read from the environment
#[derive(Debug, Clone)]
struct HarnessConfig {
    seed: u64,
    frames: u64,
    /// 0 runs frames back to back
    fps: u32,
    /// Pointer sweep speed in units per frame
    sweep_speed: f32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            frames: 60 * Params::FRAME_RATE as u64,
            fps: 0,
            sweep_speed: 3.0,
        }
    }
}

impl HarnessConfig {
    /// Load config from environment or use defaults
    fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(seed) = std::env::var("PONG_SEED") {
            match seed.parse::<u64>() {
                Ok(parsed) => config.seed = parsed,
                Err(_) => warn!("Invalid PONG_SEED '{}', using default", seed),
            }
        }

        if let Ok(frames) = std::env::var("PONG_FRAMES") {
            match frames.parse::<u64>() {
                Ok(parsed) if parsed > 0 => config.frames = parsed,
                Ok(_) => warn!("PONG_FRAMES must be > 0, using default"),
                Err(_) => warn!("Invalid PONG_FRAMES '{}', using default", frames),
            }
        }

        if let Ok(fps) = std::env::var("PONG_FPS") {
            match fps.parse::<u32>() {
                Ok(parsed) if parsed <= 1000 => config.fps = parsed,
                Ok(_) => warn!("PONG_FPS must be 0-1000, using default"),
                Err(_) => warn!("Invalid PONG_FPS '{}', using default", fps),
            }
        }

        if let Ok(speed) = std::env::var("PONG_SWEEP_SPEED") {
            match speed.parse::<f32>() {
                Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => config.sweep_speed = parsed,
                _ => warn!("Invalid PONG_SWEEP_SPEED '{}', using default", speed),
            }
        }

        config
    }
}

/// Scripted pointer: sweeps up and down the field at a constant speed
struct PointerSweep {
    y: f32,
    step: f32,
    height: f32,
}

impl PointerSweep {
    fn new(height: f32, speed: f32) -> Self {
        Self {
            y: height / 2.0,
            step: speed,
            height,
        }
    }

    fn next_sample(&mut self) -> f32 {
        self.y += self.step;
        if self.y <= 0.0 || self.y >= self.height {
            self.step = -self.step;
            self.y = self.y.clamp(0.0, self.height);
        }
        self.y
    }
}

/// Surface that only counts draw calls
#[derive(Debug, Default)]
struct CountingSurface {
    frames: u64,
    rects: u64,
    discs: u64,
}

impl Surface for CountingSurface {
    fn clear(&mut self) {
        self.frames += 1;
    }

    fn draw_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {
        self.rects += 1;
    }

    fn draw_disc(&mut self, _cx: f32, _cy: f32, _radius: f32, _color: Color) {
        self.discs += 1;
    }
}

/// Running totals of frame events
#[derive(Debug, Default)]
struct Tally {
    wall_bounces: u64,
    human_hits: u64,
    opponent_hits: u64,
    passed_human: u64,
    passed_opponent: u64,
}

impl Tally {
    fn record(&mut self, events: &Events) {
        self.wall_bounces += events.wall_bounce as u64;
        self.human_hits += events.human_hit as u64;
        self.opponent_hits += events.opponent_hit as u64;
        match events.reset {
            Some(Exit::Left) => self.passed_human += 1,
            Some(Exit::Right) => self.passed_opponent += 1,
            None => {}
        }
    }
}

fn run<T: Ticker>(harness: &HarnessConfig, ticker: &mut T) -> anyhow::Result<()> {
    let config = Config::default();
    let mut rng = GameRng::new(harness.seed);
    let state = GameState::new(config.clone(), &mut rng).context("invalid game config")?;
    let mut driver = FrameDriver::new(state, rng);
    let stop = driver.stop_handle();

    let mut sweep = PointerSweep::new(config.field_height, harness.sweep_speed);
    let mut surface = CountingSurface::default();
    let mut tally = Tally::default();
    let mut frame = 0u64;

    driver.run_with(ticker, &mut surface, |state| {
        // Events still hold the previous frame's outcome
        tally.record(&state.events);
        state.set_paddle_target(Side::Human, sweep.next_sample());

        frame += 1;
        if frame >= harness.frames {
            stop.stop();
        }
    });
    tally.record(&driver.state().events);

    info!(
        frames = driver.frames(),
        rects = surface.rects,
        discs = surface.discs,
        painted = surface.frames,
        "run complete"
    );
    info!(
        wall_bounces = tally.wall_bounces,
        human_hits = tally.human_hits,
        opponent_hits = tally.opponent_hits,
        passed_human = tally.passed_human,
        passed_opponent = tally.passed_opponent,
        "rally summary"
    );

    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let harness = HarnessConfig::load_or_default();
    info!(
        seed = harness.seed,
        frames = harness.frames,
        fps = harness.fps,
        "starting headless Pong"
    );

    if harness.fps == 0 {
        run(&harness, &mut Unthrottled)
    } else {
        run(&harness, &mut IntervalTicker::per_second(harness.fps))
    }
}
