use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::catalog::Catalog;

use super::letters;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GamePhase {
    NotStarted,
    AwaitingHuman,
    Completed { outcome: GameOutcome },
}

/// Terminal results. There is no separate "computer wins": the human's
/// defeat is the computer's win.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameOutcome {
    HumanLostUnknownCity,
    HumanLostRuleViolation,
    ComputerLostNoCity,
    HumanWonPoolExhausted,
}

impl GameOutcome {
    pub fn human_won(self) -> bool {
        matches!(
            self,
            GameOutcome::ComputerLostNoCity | GameOutcome::HumanWonPoolExhausted
        )
    }

    pub fn describe(self) -> &'static str {
        match self {
            GameOutcome::HumanLostUnknownCity => "human loses: city not found or already used",
            GameOutcome::HumanLostRuleViolation => "human loses: rule violation",
            GameOutcome::ComputerLostNoCity => "computer loses: no valid city",
            GameOutcome::HumanWonPoolExhausted => "human wins: pool exhausted",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    ComputerPlayed {
        name: String,
        required_letter: Option<char>,
    },
    HumanPlayed {
        name: String,
    },
    GameEnded {
        outcome: GameOutcome,
    },
}

#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub events: Vec<GameEvent>,
    pub done: bool,
}

impl StepOutcome {
    fn empty() -> Self {
        Self {
            events: Vec::new(),
            done: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("game already completed")]
    GameFinished,
    #[error("game has not been started")]
    NotStarted,
    #[error("game already started")]
    AlreadyStarted,
    #[error("no cities available to open the game")]
    EmptyCatalog,
}

/// The turn engine. Owns the pool of unused city names and is the only
/// writer to it; each operation resolves the chained computer response
/// before returning.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    remaining: Vec<String>,
    bad_letters: HashSet<char>,
    last_played: Option<String>,
    required_letter: Option<char>,
    phase: GamePhase,
    chain: Vec<String>,
    turns: u32,
    rng: StdRng,
}

impl GameState {
    pub fn new(catalog: &Catalog, config: GameConfig) -> Self {
        // Pool order is catalog order; response scans take the first match
        // in this order, which keeps candidate selection reproducible.
        let remaining: Vec<String> = catalog.names().map(str::to_owned).collect();
        let bad_letters = letters::compute_bad_letters(catalog.names());
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            remaining,
            bad_letters,
            last_played: None,
            required_letter: None,
            phase: GamePhase::NotStarted,
            chain: Vec::new(),
            turns: 0,
            rng,
        }
    }

    /// Opening computer move: uniform over the pool, literal last letter
    /// with no bad-letter adjustment. Transitions to `AwaitingHuman`.
    pub fn start(&mut self) -> Result<StepOutcome, GameError> {
        match self.phase {
            GamePhase::NotStarted => {}
            GamePhase::AwaitingHuman => return Err(GameError::AlreadyStarted),
            GamePhase::Completed { .. } => return Err(GameError::GameFinished),
        }
        if self.remaining.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        let mut outcome = StepOutcome::empty();
        let index = self.rng.gen_range(0..self.remaining.len());
        let name = self.remaining.remove(index);
        self.required_letter = letters::last_letter(&name);
        self.last_played = Some(name.clone());
        self.chain.push(name.clone());
        self.phase = GamePhase::AwaitingHuman;
        outcome.events.push(GameEvent::ComputerPlayed {
            name,
            required_letter: self.required_letter,
        });
        Ok(outcome)
    }

    pub fn play_human_turn(&mut self, name: &str) -> Result<StepOutcome, GameError> {
        match self.phase {
            GamePhase::AwaitingHuman => {}
            GamePhase::NotStarted => return Err(GameError::NotStarted),
            GamePhase::Completed { .. } => return Err(GameError::GameFinished),
        }
        let mut outcome = StepOutcome::empty();

        let Some(position) = self
            .remaining
            .iter()
            .position(|candidate| candidate.as_str() == name)
        else {
            self.finish(GameOutcome::HumanLostUnknownCity, &mut outcome);
            return Ok(outcome);
        };
        if let Some(required) = self.required_letter {
            if letters::first_letter(name) != Some(required) {
                self.finish(GameOutcome::HumanLostRuleViolation, &mut outcome);
                return Ok(outcome);
            }
        }

        let name = self.remaining.remove(position);
        self.last_played = Some(name.clone());
        self.chain.push(name.clone());
        outcome.events.push(GameEvent::HumanPlayed { name: name.clone() });

        self.respond(&name, &mut outcome);
        self.turns += 1;
        Ok(outcome)
    }

    /// Computer response to the human's `predecessor`: the first pool name
    /// starting with the predecessor's last letter, no ranking. An empty
    /// pool after the response outranks a failed scan.
    fn respond(&mut self, predecessor: &str, outcome: &mut StepOutcome) {
        let wanted = letters::last_letter(predecessor);
        let found = wanted.and_then(|letter| {
            self.remaining
                .iter()
                .position(|candidate| letters::first_letter(candidate) == Some(letter))
        });
        match found {
            Some(position) => {
                let name = self.remaining.remove(position);
                self.required_letter =
                    letters::effective_ending_letter(&name, &self.bad_letters);
                self.last_played = Some(name.clone());
                self.chain.push(name.clone());
                outcome.events.push(GameEvent::ComputerPlayed {
                    name,
                    required_letter: self.required_letter,
                });
                if self.remaining.is_empty() {
                    self.finish(GameOutcome::HumanWonPoolExhausted, outcome);
                }
            }
            None => {
                // The failed scan leaves the pool as is.
                if self.remaining.is_empty() {
                    self.finish(GameOutcome::HumanWonPoolExhausted, outcome);
                } else {
                    self.finish(GameOutcome::ComputerLostNoCity, outcome);
                }
            }
        }
    }

    fn finish(&mut self, result: GameOutcome, outcome: &mut StepOutcome) {
        self.phase = GamePhase::Completed { outcome: result };
        outcome.events.push(GameEvent::GameEnded { outcome: result });
        outcome.done = true;
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Completed { .. })
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::Completed { outcome } => Some(outcome),
            _ => None,
        }
    }

    /// Unused city names, in pool order.
    pub fn remaining(&self) -> impl Iterator<Item = &str> + '_ {
        self.remaining.iter().map(String::as_str)
    }

    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    pub fn bad_letters(&self) -> &HashSet<char> {
        &self.bad_letters
    }

    pub fn last_played(&self) -> Option<&str> {
        self.last_played.as_deref()
    }

    pub fn required_letter(&self) -> Option<char> {
        self.required_letter
    }

    /// The sequence of played names, oldest first.
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Completed human/computer exchanges.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Pool names a human turn could legally play right now, in pool order.
    pub fn legal_candidates(&self) -> impl Iterator<Item = &str> + '_ {
        let required = self.required_letter;
        self.remaining
            .iter()
            .map(String::as_str)
            .filter(move |candidate| match required {
                Some(letter) => letters::first_letter(candidate) == Some(letter),
                None => true,
            })
    }
}
