use std::io::{self, BufRead, Write};

use crate::game::game::Game;
use crate::players::BasePlayer;

/// Console seat: prompts on stdout and reads one city name per turn from
/// stdin. Returns `None` on EOF, which forfeits the game.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanPlayer;

impl BasePlayer for HumanPlayer {
    fn next_city(&mut self, game: &Game) -> Option<String> {
        match game.state.required_letter() {
            Some(letter) => print!("Your city (starts with '{letter}'): "),
            None => print!("Your city: "),
        }
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_owned()),
        }
    }
}
