use std::path::PathBuf;
use std::process;

use clap::Parser;
use goroda::catalog::Catalog;
use goroda::cli::HumanPlayer;
use goroda::game::{Game, GameConfig, GameEvent};
use goroda::players::BasePlayer;

#[derive(Debug, Parser, Clone)]
#[command(name = "goroda-play")]
#[command(about = "Play the cities chain game against the computer")]
struct Args {
    /// Path to a JSON city catalog (bundled list when omitted)
    #[arg(short = 'c', long)]
    catalog: Option<PathBuf>,

    /// Random seed for the computer's opening move
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    let catalog = load_catalog(args.catalog.as_deref());

    if catalog.is_empty() {
        eprintln!("Error: the catalog has no playable cities");
        process::exit(1);
    }

    println!("Cities chain: you vs the computer");
    println!(
        "{} cities in play. Each city may be named once; answer with a city \
         starting with the shown letter.",
        catalog.len()
    );
    println!("{}", "=".repeat(80));

    let mut game = Game::new(&catalog, GameConfig { seed: args.seed });
    let mut player = HumanPlayer;

    match game.start() {
        Ok(outcome) => print_events(&outcome.events),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }

    while !game.is_over() {
        let name = player.next_city(&game).unwrap_or_default();
        match game.play_human_turn(&name) {
            Ok(outcome) => print_events(&outcome.events),
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
    }

    println!("{}", "=".repeat(80));
    if let Some(outcome) = game.outcome() {
        if outcome.human_won() {
            println!("🎉 YOU WIN! 🎉");
        } else {
            println!("🤖 Computer wins. Better luck next time!");
        }
    }
    println!(
        "Chain ({} cities): {}",
        game.state.chain().len(),
        game.state.chain().join(" -> ")
    );
}

fn load_catalog(path: Option<&std::path::Path>) -> Catalog {
    match path {
        Some(path) => match Catalog::load(path) {
            Ok((catalog, rejected)) => {
                if !rejected.is_empty() {
                    eprintln!("Skipped {} malformed record(s):", rejected.len());
                    for record in &rejected {
                        eprintln!("  record {}: {}", record.index, record.reason);
                    }
                }
                catalog
            }
            Err(err) => {
                eprintln!("Error: failed to load catalog {}: {err}", path.display());
                process::exit(1);
            }
        },
        None => Catalog::bundled().clone(),
    }
}

fn print_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ComputerPlayed {
                name,
                required_letter,
            } => match required_letter {
                Some(letter) => println!("🤖 Computer plays: {name} ('{letter}' to you)"),
                None => println!("🤖 Computer plays: {name}"),
            },
            GameEvent::HumanPlayed { name } => println!("→ You played: {name}"),
            GameEvent::GameEnded { outcome } => println!("Game over: {}", outcome.describe()),
        }
    }
}
