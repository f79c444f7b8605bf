//! Frame loop: step the simulation, then paint, once per tick

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{render, step_frame, GameState, RandomSource, Side, Surface};

/// Host-provided throttling between frames (vsync, timer, fixed interval)
pub trait Ticker {
    /// Block until the next frame is due
    fn wait(&mut self);
}

/// Ticker that never waits. Runs frames back to back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unthrottled;

impl Ticker for Unthrottled {
    fn wait(&mut self) {}
}

/// Fixed-interval ticker using the native clock
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct IntervalTicker {
    interval: std::time::Duration,
    next: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl IntervalTicker {
    pub fn new(interval: std::time::Duration) -> Self {
        Self {
            interval,
            next: std::time::Instant::now(),
        }
    }

    pub fn per_second(frames: u32) -> Self {
        Self::new(std::time::Duration::from_secs(1) / frames.max(1))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Ticker for IntervalTicker {
    fn wait(&mut self) {
        let now = std::time::Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
        }
        // No catch-up: a late frame pushes the schedule back
        self.next = self.next.max(now) + self.interval;
    }
}

/// Cloneable flag that ends [`FrameDriver::run`]
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Owns one game session and runs it frame by frame
pub struct FrameDriver<R: RandomSource> {
    state: GameState,
    rng: R,
    stop: StopHandle,
    frames: u64,
}

impl<R: RandomSource> FrameDriver<R> {
    pub fn new(state: GameState, rng: R) -> Self {
        Self {
            state,
            rng,
            stop: StopHandle::default(),
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Pointer input: center the human paddle on `y`
    pub fn set_human_paddle_target(&mut self, y: f32) {
        self.state.set_paddle_target(Side::Human, y);
    }

    /// Keyboard input: held direction for the human paddle
    pub fn set_human_intent(&mut self, dir: i8) {
        self.state.set_paddle_intent(Side::Human, dir);
    }

    /// Advance one frame and paint it
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        step_frame(&mut self.state, &mut self.rng);
        render(&self.state, surface);
        self.frames += 1;
    }

    /// Tick until the stop handle is raised; returns the frames run by this call
    pub fn run<T: Ticker, S: Surface + ?Sized>(&mut self, ticker: &mut T, surface: &mut S) -> u64 {
        self.run_with(ticker, surface, |_state| {})
    }

    /// Like [`FrameDriver::run`], calling `before_frame` ahead of every tick.
    /// This is where an input adapter writes the human paddle.
    pub fn run_with<T, S, F>(&mut self, ticker: &mut T, surface: &mut S, mut before_frame: F) -> u64
    where
        T: Ticker,
        S: Surface + ?Sized,
        F: FnMut(&mut GameState),
    {
        let start = self.frames;
        tracing::info!(start_frame = start, "frame loop started");

        while !self.stop.is_stopped() {
            ticker.wait();
            if self.stop.is_stopped() {
                break;
            }
            before_frame(&mut self.state);
            self.tick(surface);
        }

        let ran = self.frames - start;
        tracing::info!(frames = ran, "frame loop stopped");
        ran
    }
}
