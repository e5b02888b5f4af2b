pub mod game;
pub mod letters;
pub mod state;

pub use game::Game;
pub use letters::{compute_bad_letters, effective_ending_letter, first_letter, last_letter};
pub use state::{
    GameConfig, GameError, GameEvent, GameOutcome, GamePhase, GameState, StepOutcome,
};
