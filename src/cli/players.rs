use crate::game::game::Game;
use crate::players::{BasePlayer, RandomPlayer, TrapPlayer};

pub struct CliPlayer {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CLI_PLAYERS: &[CliPlayer] = &[
    CliPlayer {
        code: "R",
        name: "RandomPlayer",
        description: "Answers with a uniformly random legal city.",
    },
    CliPlayer {
        code: "T",
        name: "TrapPlayer",
        description: "Prefers cities ending in a letter the computer cannot answer.",
    },
];

#[derive(Debug, Clone)]
pub enum PlayerInstance {
    Random(RandomPlayer),
    Trap(TrapPlayer),
}

impl BasePlayer for PlayerInstance {
    fn next_city(&mut self, game: &Game) -> Option<String> {
        match self {
            PlayerInstance::Random(p) => p.next_city(game),
            PlayerInstance::Trap(p) => p.next_city(game),
        }
    }
}

pub fn create_player(code: &str, seed: u64) -> Option<PlayerInstance> {
    match code {
        "R" => Some(PlayerInstance::Random(RandomPlayer::new(seed))),
        "T" => Some(PlayerInstance::Trap(TrapPlayer)),
        _ => None,
    }
}

pub fn print_player_help() {
    println!("Player Legend:");
    println!("{:<5} {:<15} {}", "CODE", "PLAYER", "DESCRIPTION");
    println!("{}", "-".repeat(80));
    for player in CLI_PLAYERS {
        println!(
            "{:<5} {:<15} {}",
            player.code, player.name, player.description
        );
    }
}
