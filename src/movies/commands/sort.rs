use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::MovieStore;

use super::helpers::all_movies;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearOrder {
    NewestFirst,
    OldestFirst,
}

// Both sorts are stable: equal keys keep collection order.

pub fn by_rating<S: MovieStore>(store: &S) -> Result<CmdResult> {
    let mut movies = all_movies(store)?;
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    Ok(CmdResult::default().with_listed_movies(movies))
}

pub fn by_year<S: MovieStore>(store: &S, order: YearOrder) -> Result<CmdResult> {
    let mut movies = all_movies(store)?;
    match order {
        YearOrder::NewestFirst => movies.sort_by(|a, b| b.year.cmp(&a.year)),
        YearOrder::OldestFirst => movies.sort_by(|a, b| a.year.cmp(&b.year)),
    }
    Ok(CmdResult::default().with_listed_movies(movies))
}
