use crate::game::game::Game;
use crate::game::letters;
use crate::players::BasePlayer;

/// Prefers replies that strand the computer: the first legal candidate
/// ending in a letter that starts no catalog city, else the first legal
/// candidate. Deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrapPlayer;

impl BasePlayer for TrapPlayer {
    fn next_city(&mut self, game: &Game) -> Option<String> {
        let candidates: Vec<&str> = game.state.legal_candidates().collect();
        let bad = game.state.bad_letters();
        candidates
            .iter()
            .find(|candidate| {
                letters::last_letter(candidate).is_some_and(|letter| bad.contains(&letter))
            })
            .or_else(|| candidates.first())
            .map(|name| (*name).to_owned())
    }
}
