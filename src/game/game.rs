use uuid::Uuid;

use crate::catalog::Catalog;
use crate::players::BasePlayer;

use super::state::{GameConfig, GameError, GameOutcome, GameState, StepOutcome};

pub struct Game {
    pub seed: u64,
    pub id: Uuid,
    pub state: GameState,
}

impl Game {
    pub fn new(catalog: &Catalog, config: GameConfig) -> Self {
        Self {
            seed: config.seed,
            id: Uuid::new_v4(),
            state: GameState::new(catalog, config),
        }
    }

    /// Run a full game: the computer opens, then `player` answers for the
    /// human seat until the game completes.
    pub fn play<P: BasePlayer>(&mut self, player: &mut P) -> Result<GameOutcome, GameError> {
        self.start()?;
        loop {
            if let Some(outcome) = self.state.outcome() {
                return Ok(outcome);
            }
            // An empty reply never matches a catalog city, so a player with
            // no answer loses the regular way.
            let name = player.next_city(self).unwrap_or_default();
            self.play_human_turn(&name)?;
        }
    }

    pub fn start(&mut self) -> Result<StepOutcome, GameError> {
        self.state.start()
    }

    pub fn play_human_turn(&mut self, name: &str) -> Result<StepOutcome, GameError> {
        self.state.play_human_turn(name)
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    pub fn copy(&self) -> Self {
        Self {
            seed: self.seed,
            id: self.id,
            state: self.state.clone(),
        }
    }
}
