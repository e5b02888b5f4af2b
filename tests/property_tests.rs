//! Property tests for the letter analysis and for full-game invariants.

use std::collections::HashSet;

use goroda::catalog::Catalog;
use goroda::game::{
    Game, GameConfig, compute_bad_letters, effective_ending_letter, first_letter, last_letter,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn record(name: &str) -> Value {
    json!({
        "name": name,
        "population": 1,
        "subject": "s",
        "district": "d",
        "coords": { "lat": 0.0, "lon": 0.0 }
    })
}

fn catalog_of(names: &[String]) -> Catalog {
    let records = names.iter().map(|name| record(name)).collect();
    Catalog::from_records(records).0
}

proptest! {
    /// Every bad letter ends at least one city and starts none.
    #[test]
    fn bad_letters_end_some_city_and_start_none(
        names in prop::collection::hash_set("[a-z]{1,8}", 0..40)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let bad = compute_bad_letters(names.iter().map(String::as_str));
        for &letter in &bad {
            prop_assert!(names.iter().any(|name| last_letter(name) == Some(letter)));
            prop_assert!(!names.iter().any(|name| first_letter(name) == Some(letter)));
        }
    }

    /// The effective ending letter is the last character, or the
    /// second-to-last exactly when the last is bad.
    #[test]
    fn effective_letter_is_last_or_second_to_last(
        name in "[a-z]{1,8}",
        bad in prop::collection::hash_set(prop::char::range('a', 'z'), 0..10)
    ) {
        let chars: Vec<char> = name.chars().collect();
        let last = chars[chars.len() - 1];
        let expected = if bad.contains(&last) {
            if chars.len() >= 2 { chars[chars.len() - 2] } else { last }
        } else {
            last
        };
        prop_assert_eq!(effective_ending_letter(&name, &bad), Some(expected));
    }

    /// Driving a whole game with first-candidate replies: the pool only
    /// shrinks, nothing repeats in the chain, and the game terminates with
    /// an outcome.
    #[test]
    fn full_games_keep_pool_and_chain_invariants(
        names in prop::collection::hash_set("[a-z]{1,6}", 1..24),
        seed in 0u64..1000
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let catalog = catalog_of(&names);
        let mut game = Game::new(&catalog, GameConfig { seed });
        game.start().unwrap();

        while !game.is_over() {
            let before = game.state.remaining_len();
            let reply = game.state.legal_candidates().next().map(str::to_owned);
            let had_reply = reply.is_some();
            // "Ω" is never a catalog name here, so an empty-handed turn
            // ends the game through the unknown-city rule.
            let name = reply.unwrap_or_else(|| "Ω".to_owned());
            game.play_human_turn(&name).unwrap();
            let after = game.state.remaining_len();

            prop_assert!(after <= before);
            if had_reply {
                let removed = before - after;
                prop_assert!(removed == 1 || removed == 2);
            } else {
                prop_assert_eq!(after, before);
            }
        }

        prop_assert!(game.state.outcome().is_some());
        let chain = game.state.chain();
        let unique: HashSet<&String> = chain.iter().collect();
        prop_assert_eq!(unique.len(), chain.len());

        // Chain and pool partition the catalog.
        prop_assert_eq!(chain.len() + game.state.remaining_len(), catalog.len());
    }
}
