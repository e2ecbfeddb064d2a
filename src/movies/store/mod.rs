//! # Storage Layer
//!
//! This module defines the storage abstraction for movies. The [`MovieStore`] trait
//! is the only thing the command layer knows about persistence.
//!
//! ## Contract
//!
//! - Reads always return the full, current collection. There is no cache:
//!   every `get_movies` call goes back to the backing store.
//! - Every mutating call persists the whole collection before returning, so
//!   what is in memory and what is durable never diverge after a successful call.
//! - `add_movie` expects a new title. Duplicate detection is the caller's job;
//!   a store handed a duplicate refuses it with [`MoviesError::DuplicateTitle`].
//! - `delete_movie` of an unknown title is **not** an error.
//! - `update_movie` expects an existing title and reports
//!   [`MoviesError::MovieNotFound`] otherwise.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "Titanic": { "year": 1997, "rating": 7.9 },
//!   "Alien":   { "year": 1979, "rating": 8.5 }
//! }
//! ```
//!
//! Keys are written in collection order.
//!
//! [`MoviesError::DuplicateTitle`]: crate::error::MoviesError::DuplicateTitle
//! [`MoviesError::MovieNotFound`]: crate::error::MoviesError::MovieNotFound

use crate::error::Result;
use crate::model::MovieCollection;

pub mod fs;
pub mod memory;

/// Abstract interface for movie storage.
pub trait MovieStore {
    /// Load every movie, in collection order
    fn get_movies(&self) -> Result<MovieCollection>;

    /// Append a new movie and persist
    fn add_movie(&mut self, title: &str, year: i32, rating: f64) -> Result<()>;

    /// Remove a movie if present and persist
    fn delete_movie(&mut self, title: &str) -> Result<()>;

    /// Replace the rating of an existing movie and persist
    fn update_movie(&mut self, title: &str, rating: f64) -> Result<()>;
}

impl<S: MovieStore + ?Sized> MovieStore for Box<S> {
    fn get_movies(&self) -> Result<MovieCollection> {
        (**self).get_movies()
    }

    fn add_movie(&mut self, title: &str, year: i32, rating: f64) -> Result<()> {
        (**self).add_movie(title, year, rating)
    }

    fn delete_movie(&mut self, title: &str) -> Result<()> {
        (**self).delete_movie(title)
    }

    fn update_movie(&mut self, title: &str, rating: f64) -> Result<()> {
        (**self).update_movie(title, rating)
    }
}
