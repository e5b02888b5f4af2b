use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use goroda::catalog::Catalog;
use goroda::cli::{GameStats, StatisticsAccumulator, create_player, print_player_help};
use goroda::game::{Game, GameConfig, GameOutcome};
use strum::IntoEnumIterator;

#[derive(Debug, Parser, Clone)]
#[command(name = "goroda-sim")]
#[command(about = "Cities chain simulator - run automated games and report statistics")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 100)]
    num: u32,

    /// Human-seat player code (R=Random, T=Trap)
    #[arg(long, default_value = "R")]
    player: String,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Path to a JSON city catalog (bundled list when omitted)
    #[arg(short = 'c', long)]
    catalog: Option<PathBuf>,

    /// Show player codes and exit
    #[arg(long)]
    help_players: bool,

    /// Silence per-game output
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    if args.help_players {
        print_player_help();
        return;
    }

    let catalog = match &args.catalog {
        Some(path) => match Catalog::load(path) {
            Ok((catalog, rejected)) => {
                if !rejected.is_empty() {
                    eprintln!("Skipped {} malformed record(s)", rejected.len());
                }
                catalog
            }
            Err(err) => {
                eprintln!("Error: failed to load catalog {}: {err}", path.display());
                process::exit(1);
            }
        },
        None => Catalog::bundled().clone(),
    };

    if catalog.is_empty() {
        eprintln!("Error: the catalog has no playable cities");
        process::exit(1);
    }

    let mut stats = StatisticsAccumulator::new();

    for game_idx in 0..args.num {
        // One seed drives both the opening move and the simulated human.
        let seed = args.seed + game_idx as u64;
        let mut player = match create_player(&args.player, seed) {
            Some(player) => player,
            None => {
                eprintln!("Error: Unknown player code '{}'", args.player);
                eprintln!("Use --help-players to see available codes");
                process::exit(1);
            }
        };

        let start = Instant::now();
        let mut game = Game::new(&catalog, GameConfig { seed });
        let result = game.play(&mut player);
        let duration = start.elapsed();

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("Error: game {} aborted: {err}", game_idx + 1);
                process::exit(1);
            }
        };

        stats.after(&game, duration);

        if !args.quiet {
            println!(
                "Game {:>4}: Outcome={:<26} Chain={:>3}, Turns={:>3}, Duration={:?}",
                game_idx + 1,
                outcome.to_string(),
                game.state.chain().len(),
                game.state.turns(),
                duration
            );
        }
    }

    print_summary(&stats.stats);
}

fn print_summary(stats: &GameStats) {
    println!("\n{}", "=".repeat(80));
    println!("SIMULATION SUMMARY");
    println!("{}", "=".repeat(80));

    println!("\nOutcome Summary:");
    println!("{:<28} {:<8} {}", "Outcome", "Games", "Share");
    println!("{}", "-".repeat(50));

    for outcome in GameOutcome::iter() {
        let count = stats.outcomes.get(&outcome).copied().unwrap_or(0);
        let share = if stats.games > 0 {
            (count as f64 / stats.games as f64) * 100.0
        } else {
            0.0
        };
        println!("{:<28} {:<8} {:.1}%", outcome.to_string(), count, share);
    }

    println!("\nGame Summary:");
    println!("  Total Games: {}", stats.games);
    println!("  Human Win Rate: {:.1}%", stats.human_win_rate());
    println!("  Avg Chain Length: {:.2}", stats.get_avg_chain());
    println!("  Avg Turns: {:.2}", stats.get_avg_turns());
    println!("  Avg Duration: {:.2?}", stats.get_avg_duration());
}
