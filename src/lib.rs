#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod catalog;
pub mod cli;
pub mod game;
pub mod players;

pub use catalog::{Catalog, CatalogError, City, Coords, RecordError, RejectedRecord};
pub use game::{
    Game, GameConfig, GameError, GameEvent, GameOutcome, GamePhase, GameState, StepOutcome,
};
pub use players::{BasePlayer, RandomPlayer, TrapPlayer};
