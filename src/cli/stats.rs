use std::collections::HashMap;
use std::time::Duration;

use crate::game::game::Game;
use crate::game::state::GameOutcome;

#[derive(Debug, Default, Clone)]
pub struct GameStats {
    pub outcomes: HashMap<GameOutcome, u32>,
    pub games: u32,
    pub human_wins: u32,
    pub total_turns: u64,
    pub total_chain: u64,
    pub total_duration: Duration,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_game(&mut self, game: &Game, duration: Duration) {
        self.games += 1;
        self.total_duration += duration;
        self.total_turns += game.state.turns() as u64;
        self.total_chain += game.state.chain().len() as u64;

        if let Some(outcome) = game.outcome() {
            *self.outcomes.entry(outcome).or_insert(0) += 1;
            if outcome.human_won() {
                self.human_wins += 1;
            }
        }
    }

    pub fn get_avg_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games as f64
    }

    pub fn get_avg_chain(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_chain as f64 / self.games as f64
    }

    pub fn get_avg_duration(&self) -> Duration {
        if self.games == 0 {
            return Duration::ZERO;
        }
        self.total_duration / self.games
    }

    pub fn human_win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        (self.human_wins as f64 / self.games as f64) * 100.0
    }
}

pub struct StatisticsAccumulator {
    pub stats: GameStats,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self {
            stats: GameStats::new(),
        }
    }

    pub fn after(&mut self, game: &Game, duration: Duration) {
        self.stats.record_game(game, duration);
    }
}
