use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::MovieStore;
use rand::seq::SliceRandom;
use rand::Rng;

use super::helpers::{all_movies, empty_database};

/// Picks one movie uniformly at random into `listed_movies`.
pub fn run<S: MovieStore, R: Rng + ?Sized>(store: &S, rng: &mut R) -> Result<CmdResult> {
    let movies = all_movies(store)?;
    Ok(match movies.choose(rng) {
        Some(movie) => CmdResult::default().with_listed_movies(vec![movie.clone()]),
        None => empty_database(),
    })
}
