use super::MovieStore;
use crate::error::{MoviesError, Result};
use crate::model::{Movie, MovieCollection};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    movies: MovieCollection,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies<I: IntoIterator<Item = Movie>>(movies: I) -> Self {
        Self {
            movies: movies.into_iter().collect(),
        }
    }
}

impl MovieStore for InMemoryStore {
    fn get_movies(&self) -> Result<MovieCollection> {
        Ok(self.movies.clone())
    }

    fn add_movie(&mut self, title: &str, year: i32, rating: f64) -> Result<()> {
        if !self.movies.insert(Movie::new(title, year, rating)) {
            return Err(MoviesError::DuplicateTitle(title.to_string()));
        }
        Ok(())
    }

    fn delete_movie(&mut self, title: &str) -> Result<()> {
        self.movies.remove(title);
        Ok(())
    }

    fn update_movie(&mut self, title: &str, rating: f64) -> Result<()> {
        if !self.movies.set_rating(title, rating) {
            return Err(MoviesError::MovieNotFound(title.to_string()));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Small collection with distinct ratings and years, in this order:
    /// Titanic (1997, 7.9), Batman (1989, 7.5), Alien (1979, 8.5),
    /// The Matrix (1999, 8.7), Heat (1995, 8.3).
    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_movies(vec![
            Movie::new("Titanic", 1997, 7.9),
            Movie::new("Batman", 1989, 7.5),
            Movie::new("Alien", 1979, 8.5),
            Movie::new("The Matrix", 1999, 8.7),
            Movie::new("Heat", 1995, 8.3),
        ])
    }

    pub fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }
}
