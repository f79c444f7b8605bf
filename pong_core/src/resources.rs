use rand::Rng;

/// Source of uniform samples for serves and paddle-hit jitter
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// True with probability one half (strictly above the midpoint)
    fn coin_flip(&mut self) -> bool {
        self.next_unit() > 0.5
    }

    /// Uniform sample in `[-1, 1)`
    fn symmetric(&mut self) -> f32 {
        self.next_unit() * 2.0 - 1.0
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from the OS (or `crypto.getRandomValues` on wasm)
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

/// Replays a fixed cycle of samples. Used to make serves and hits deterministic.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f32>,
    next: usize,
}

impl SequenceRng {
    /// An empty sequence yields 0.5 forever
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, next: 0 }
    }

    /// How many samples have been drawn so far
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for SequenceRng {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Edge of the field the ball left through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Left,  // Passed the human paddle
    Right, // Passed the opponent paddle
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub wall_bounce: bool,
    pub human_hit: bool,
    pub opponent_hit: bool,
    pub reset: Option<Exit>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounce = false;
        self.human_hit = false;
        self.opponent_hit = false;
        self.reset = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_rng_is_deterministic_per_seed() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_game_rng_samples_in_unit_range() {
        let mut rng = GameRng::default();
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v), "sample {v} out of range");
            let s = rng.symmetric();
            assert!((-1.0..1.0).contains(&s), "symmetric sample {s} out of range");
        }
    }

    #[test]
    fn test_sequence_rng_cycles() {
        let mut rng = SequenceRng::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_sequence_rng_empty_yields_midpoint() {
        let mut rng = SequenceRng::new(Vec::new());
        assert_eq!(rng.next_unit(), 0.5);
        assert!(!rng.coin_flip());
        assert_eq!(rng.symmetric(), 0.0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.wall_bounce = true;
        events.human_hit = true;
        events.opponent_hit = true;
        events.reset = Some(Exit::Left);

        events.clear();

        assert_eq!(events, Events::default());
    }
}
