use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Movie;
use crate::store::MovieStore;

use super::helpers::{all_movies, empty_database};

#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub best: Movie,
    pub worst: Movie,
}

impl RatingStats {
    /// `None` for an empty slice.
    ///
    /// Best and worst come from a stable ascending sort by rating: among
    /// equally rated movies the earliest in collection order is the worst
    /// and the latest is the best.
    pub fn from_movies(movies: &[Movie]) -> Option<Self> {
        if movies.is_empty() {
            return None;
        }

        let mut by_rating: Vec<&Movie> = movies.iter().collect();
        by_rating.sort_by(|a, b| a.rating.total_cmp(&b.rating));

        let count = movies.len();
        let mean = movies.iter().map(|m| m.rating).sum::<f64>() / count as f64;
        let median = if count % 2 == 1 {
            by_rating[count / 2].rating
        } else {
            (by_rating[count / 2 - 1].rating + by_rating[count / 2].rating) / 2.0
        };

        Some(Self {
            count,
            mean,
            median,
            best: by_rating[count - 1].clone(),
            worst: by_rating[0].clone(),
        })
    }
}

pub fn run<S: MovieStore>(store: &S) -> Result<CmdResult> {
    let movies = all_movies(store)?;
    Ok(match RatingStats::from_movies(&movies) {
        Some(stats) => CmdResult::default().with_stats(stats),
        None => empty_database(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn three_ratings() {
        let store = InMemoryStore::with_movies(vec![
            Movie::new("Mid", 2000, 7.0),
            Movie::new("Low", 2001, 5.0),
            Movie::new("High", 2002, 9.0),
        ]);
        let stats = run(&store).unwrap().stats.unwrap();

        assert_eq!(format!("{:.2}", stats.mean), "7.00");
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.best.title, "High");
        assert_eq!(stats.worst.title, "Low");
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn even_count_median_averages_middle_pair() {
        let movies = vec![
            Movie::new("A", 2000, 6.0),
            Movie::new("B", 2000, 9.0),
            Movie::new("C", 2000, 7.0),
            Movie::new("D", 2000, 8.0),
        ];
        let stats = RatingStats::from_movies(&movies).unwrap();
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.mean, 7.5);
    }

    #[test]
    fn ties_follow_collection_order() {
        let movies = vec![
            Movie::new("First Low", 2000, 3.0),
            Movie::new("First High", 2000, 9.0),
            Movie::new("Second Low", 2000, 3.0),
            Movie::new("Second High", 2000, 9.0),
        ];
        let stats = RatingStats::from_movies(&movies).unwrap();
        assert_eq!(stats.worst.title, "First Low");
        assert_eq!(stats.best.title, "Second High");
    }

    #[test]
    fn empty_store_reports_instead_of_failing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.stats.is_none());
        assert_eq!(result.messages[0].content, "No movies in the database.");
    }
}
