use std::collections::HashSet;

use itertools::Itertools;

/// Case-fold a single character: first char of its Unicode lowercase
/// mapping. Letter comparisons throughout the game go through this.
pub(crate) fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

pub fn first_letter(name: &str) -> Option<char> {
    name.chars().next().map(fold)
}

pub fn last_letter(name: &str) -> Option<char> {
    name.chars().next_back().map(fold)
}

/// The letter the next city must start with after `name` is played.
///
/// Normally the folded last character. When that letter starts no catalog
/// city, the second-to-last character is substituted so the chain stays
/// playable; the substitute is not itself re-checked, and a one-character
/// name keeps its only letter.
pub fn effective_ending_letter(name: &str, bad_letters: &HashSet<char>) -> Option<char> {
    let mut rev = name.chars().rev().map(fold);
    let last = rev.next()?;
    if !bad_letters.contains(&last) {
        return Some(last);
    }
    Some(rev.next().unwrap_or(last))
}

/// Letters that end at least one catalog city but start none.
///
/// Ending a turn on such a letter leaves the opponent without a legal
/// continuation. Naive scan: every distinct ending letter is checked
/// against the whole name list. Runs once per game, off the per-turn path.
pub fn compute_bad_letters<'a>(names: impl IntoIterator<Item = &'a str>) -> HashSet<char> {
    let names: Vec<&str> = names.into_iter().collect();
    let endings = names.iter().filter_map(|name| last_letter(name)).unique();
    endings
        .filter(|&letter| !names.iter().any(|name| first_letter(name) == Some(letter)))
        .collect()
}
