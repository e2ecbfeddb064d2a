use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Movie;
use crate::store::MovieStore;

use super::helpers::all_movies;

pub const NO_MATCHES: &str = "No movies found based on the provided criteria";

/// Constraints combined with AND. `None` means "no constraint".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovieFilter {
    pub min_rating: Option<f64>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl MovieFilter {
    pub fn matches(&self, movie: &Movie) -> bool {
        self.min_rating.map_or(true, |min| movie.rating >= min)
            && self.start_year.map_or(true, |start| movie.year >= start)
            && self.end_year.map_or(true, |end| movie.year <= end)
    }
}

pub fn run<S: MovieStore>(store: &S, filter: &MovieFilter) -> Result<CmdResult> {
    let matched: Vec<_> = all_movies(store)?
        .into_iter()
        .filter(|m| filter.matches(m))
        .collect();

    let mut result = CmdResult::default();
    if matched.is_empty() {
        result.add_message(CmdMessage::warning(NO_MATCHES));
    }
    Ok(result.with_listed_movies(matched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{sample_store, titles};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn minimum_rating_is_inclusive() {
        let store = InMemoryStore::with_movies(vec![
            Movie::new("Seven Five", 2000, 7.5),
            Movie::new("Eight", 2001, 8.0),
            Movie::new("Nine One", 2002, 9.1),
        ]);
        let filter = MovieFilter {
            min_rating: Some(8.0),
            ..MovieFilter::default()
        };
        let result = run(&store, &filter).unwrap();
        assert_eq!(titles(&result.listed_movies), vec!["Eight", "Nine One"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn no_constraints_returns_everything() {
        let store = sample_store();
        let result = run(&store, &MovieFilter::default()).unwrap();
        assert_eq!(result.listed_movies.len(), 5);
    }

    #[test]
    fn constraints_combine_with_and() {
        let store = sample_store();
        let filter = MovieFilter {
            min_rating: Some(8.0),
            start_year: Some(1980),
            end_year: Some(1998),
        };
        let result = run(&store, &filter).unwrap();
        assert_eq!(titles(&result.listed_movies), vec!["Heat"]);
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let store = sample_store();
        let filter = MovieFilter {
            start_year: Some(1989),
            end_year: Some(1997),
            ..MovieFilter::default()
        };
        let result = run(&store, &filter).unwrap();
        assert_eq!(titles(&result.listed_movies), vec!["Titanic", "Batman", "Heat"]);
    }

    #[test]
    fn no_matches_reports() {
        let store = sample_store();
        let filter = MovieFilter {
            start_year: Some(2030),
            ..MovieFilter::default()
        };
        let result = run(&store, &filter).unwrap();
        assert!(result.listed_movies.is_empty());
        assert_eq!(result.messages[0].content, NO_MATCHES);
    }
}
