//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every movie operation, whatever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Applies configuration** (search threshold, histogram bins) so callers
//!   only pass what the user typed
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, never prompts and holds no business logic of its own.
//!
//! `MoviesApi<S: MovieStore>` is generic over the storage backend:
//! - Production: `MoviesApi<FileStore>`
//! - Testing: `MoviesApi<InMemoryStore>`

use crate::chart::Histogram;
use crate::commands::{self, CmdResult, MovieFilter, SearchOptions, YearOrder};
use crate::config::MoviesConfig;
use crate::error::Result;
use crate::store::MovieStore;
use rand::Rng;

pub struct MoviesApi<S: MovieStore> {
    store: S,
    config: MoviesConfig,
}

impl<S: MovieStore> MoviesApi<S> {
    pub fn new(store: S, config: MoviesConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &MoviesConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn list_movies(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn movie_exists(&self, title: &str) -> Result<bool> {
        commands::helpers::movie_exists(&self.store, title)
    }

    pub fn add_movie(&mut self, title: &str, year: i32, rating: f64) -> Result<CmdResult> {
        commands::add::run(&mut self.store, title, year, rating)
    }

    pub fn delete_movie(&mut self, title: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, title)
    }

    pub fn update_movie(&mut self, title: &str, rating: f64) -> Result<CmdResult> {
        commands::update::run(&mut self.store, title, rating)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn random_movie<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CmdResult> {
        commands::random::run(&self.store, rng)
    }

    pub fn search_movies(&self, query: &str) -> Result<CmdResult> {
        let options = SearchOptions {
            threshold: self.config.fuzzy_threshold,
            limit: self.config.suggestion_limit,
        };
        commands::search::run(&self.store, query, options)
    }

    pub fn sort_by_rating(&self) -> Result<CmdResult> {
        commands::sort::by_rating(&self.store)
    }

    pub fn sort_by_year(&self, order: YearOrder) -> Result<CmdResult> {
        commands::sort::by_year(&self.store, order)
    }

    pub fn build_histogram(&self) -> Result<CmdResult> {
        commands::histogram::build(&self.store, self.config.histogram_bins)
    }

    pub fn save_histogram(&self, histogram: &Histogram, name: &str) -> CmdResult {
        commands::histogram::save(histogram, name)
    }

    pub fn filter_movies(&self, filter: &MovieFilter) -> Result<CmdResult> {
        commands::filter::run(&self.store, filter)
    }
}

pub use crate::commands::{CmdMessage, MessageLevel, RatingStats};
