use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fuzzy;
use crate::store::MovieStore;
use log::debug;

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Minimum score (0-100) for a suggestion
    pub threshold: u8,
    /// Candidates considered before the threshold is applied
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 60,
            limit: 5,
        }
    }
}

/// Case-insensitive substring search over titles, in collection order.
///
/// Only when nothing matches does approximate matching run; its
/// candidates that clear `options.threshold` end up in `suggestions`.
pub fn run<S: MovieStore>(store: &S, query: &str, options: SearchOptions) -> Result<CmdResult> {
    let movies = store.get_movies()?;
    let needle = query.to_lowercase();

    let matches: Vec<_> = movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    if !matches.is_empty() {
        return Ok(CmdResult::default().with_listed_movies(matches));
    }

    let candidates = fuzzy::extract(
        query,
        movies.iter().map(|m| m.title.as_str()),
        options.limit,
    );
    debug!("no substring match for {:?}, fuzzy candidates: {:?}", query, candidates);
    let suggestions: Vec<_> = candidates
        .into_iter()
        .filter(|c| c.score >= options.threshold)
        .collect();

    let message = if suggestions.is_empty() {
        format!("The movie {} does not exist.", query)
    } else {
        format!("The movie {} does not exist. Did you mean:", query)
    };
    Ok(CmdResult::default()
        .with_message(CmdMessage::error(message))
        .with_suggestions(suggestions))
}
