use crate::game::game::Game;

pub trait BasePlayer {
    /// Produce the human seat's next city for `game`, or `None` when the
    /// player has no answer.
    fn next_city(&mut self, game: &Game) -> Option<String>;
}
