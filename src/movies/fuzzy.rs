//! Approximate title matching.
//!
//! Scores are on a 0-100 scale. The scorer is a weighted ratio built from
//! normalized Levenshtein similarity (`strsim`):
//!
//! - plain similarity of the two normalized strings,
//! - best similarity of the shorter string against every equally long window
//!   of the longer one, used only when the lengths differ by 1.5x or more,
//! - similarity after sorting whitespace-separated tokens, so word order
//!   matters less,
//! - token-set similarity: the shared tokens compared against each side's
//!   shared-plus-leftover tokens, so a query made of some of a title's words
//!   still scores high.
//!
//! Each partial score is scaled down a little and the maximum wins.

use std::collections::BTreeSet;
use strsim::normalized_levenshtein;

const TOKEN_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.9;
const FAR_PARTIAL_SCALE: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub title: String,
    pub score: u8,
}

/// Lowercases and replaces everything that is not alphanumeric with a space.
pub fn normalize(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = short.chars().count();
    if short_len == 0 {
        return 0.0;
    }

    let long_chars: Vec<char> = long.chars().collect();
    long_chars
        .windows(short_len)
        .map(|w| ratio(short, &w.iter().collect::<String>()))
        .fold(0.0, f64::max)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

// Best of the shared tokens against each recombined side, and the two
// recombined sides against each other.
fn token_set(a: &str, b: &str, compare: fn(&str, &str) -> f64) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let shared = join(tokens_a.intersection(&tokens_b));
    let left = join(tokens_a.difference(&tokens_b));
    let right = join(tokens_b.difference(&tokens_a));

    let combined_a = format!("{} {}", shared, left).trim().to_string();
    let combined_b = format!("{} {}", shared, right).trim().to_string();

    let mut best = compare(&combined_a, &combined_b);
    if !shared.is_empty() {
        best = best
            .max(compare(&shared, &combined_a))
            .max(compare(&shared, &combined_b));
    }
    best
}

fn join<'a>(tokens: impl Iterator<Item = &'a &'a str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

/// Similarity of `query` and `choice`, 0 (unrelated) to 100 (identical after normalization).
pub fn score(query: &str, choice: &str) -> u8 {
    let a = normalize(query);
    let b = normalize(choice);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let base = ratio(&a, &b);
    let (len_a, len_b) = (a.chars().count() as f64, b.chars().count() as f64);
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let (sorted_a, sorted_b) = (sorted_tokens(&a), sorted_tokens(&b));
    let best = if len_ratio < 1.5 {
        let tokens = ratio(&sorted_a, &sorted_b).max(token_set(&a, &b, ratio));
        base.max(tokens * TOKEN_SCALE)
    } else {
        let scale = if len_ratio < 8.0 {
            PARTIAL_SCALE
        } else {
            FAR_PARTIAL_SCALE
        };
        let partial = partial_ratio(&a, &b) * scale;
        let partial_tokens = partial_ratio(&sorted_a, &sorted_b)
            .max(token_set(&a, &b, partial_ratio))
            * scale
            * TOKEN_SCALE;
        base.max(partial).max(partial_tokens)
    };

    best.round().clamp(0.0, 100.0) as u8
}

/// Best `limit` choices for `query`, highest score first. Equal scores keep
/// the order in which the choices were given.
pub fn extract<'a, I>(query: &str, choices: I, limit: usize) -> Vec<FuzzyMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<FuzzyMatch> = choices
        .into_iter()
        .map(|title| FuzzyMatch {
            title: title.to_string(),
            score: score(query, title),
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_titles_score_100() {
        assert_eq!(score("Batman", "Batman"), 100);
        assert_eq!(score("the matrix", "The Matrix!"), 100);
    }

    #[test]
    fn single_typo_clears_the_default_threshold() {
        assert!(score("Btman", "Batman") >= 60);
        assert!(score("Titanc", "Titanic") >= 60);
    }

    #[test]
    fn unrelated_titles_score_low() {
        assert!(score("Btman", "The Matrix") < 60);
        assert!(score("Alien", "Titanic") < 60);
    }

    #[test]
    fn partial_window_helps_short_queries() {
        assert!(score("Matrx", "The Matrix") >= 60);
    }

    #[test]
    fn word_order_matters_less() {
        assert!(score("Matrix The", "The Matrix") >= 90);
    }

    #[test]
    fn subset_of_title_words_is_suggested() {
        assert_eq!(score("Lord Rings", "The Lord of the Rings"), 86);
        assert!(score("Godfather 2", "The Godfather Part 2") >= 60);
        assert!(score("Matrix", "The Matrix Reloaded") >= 60);
    }

    #[test]
    fn shared_filler_word_alone_does_not_match_short_titles() {
        assert!(score("The Heat", "The Matrix") < 60);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(score("", "Batman"), 0);
        assert_eq!(score("!!!", "Batman"), 0);
    }

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("  Spider-Man: Homecoming "), "spider man  homecoming");
    }

    #[test]
    fn extract_orders_by_score_and_limits() {
        let titles = ["Alien", "Batman", "Batman Returns", "Titanic"];
        let matches = extract("Batman", titles, 2);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].title, "Batman");
        assert_eq!(matches[0].score, 100);
        assert_eq!(matches[1].title, "Batman Returns");
    }
}
