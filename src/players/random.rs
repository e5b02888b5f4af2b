use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::game::game::Game;
use crate::players::BasePlayer;

/// Answers with a uniformly random legal city.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BasePlayer for RandomPlayer {
    fn next_city(&mut self, game: &Game) -> Option<String> {
        let candidates: Vec<&str> = game.state.legal_candidates().collect();
        candidates.choose(&mut self.rng).map(|name| (*name).to_owned())
    }
}
