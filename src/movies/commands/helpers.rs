use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Movie;
use crate::store::MovieStore;

pub const EMPTY_DATABASE: &str = "No movies in the database.";

pub fn movie_exists<S: MovieStore>(store: &S, title: &str) -> Result<bool> {
    Ok(store.get_movies()?.contains(title))
}

pub fn all_movies<S: MovieStore>(store: &S) -> Result<Vec<Movie>> {
    Ok(store.get_movies()?.to_vec())
}

pub fn empty_database() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(EMPTY_DATABASE))
}
