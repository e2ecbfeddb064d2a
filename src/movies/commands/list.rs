use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::MovieStore;

use super::helpers::all_movies;

pub fn run<S: MovieStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_movies(all_movies(store)?))
}
