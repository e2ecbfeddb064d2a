use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;
use log::info;

/// Deletes `title`. An unknown title is not an error and produces no message.
pub fn run<S: MovieStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    let existing = store.get_movies()?.get(title).cloned();
    store.delete_movie(title)?;

    let mut result = CmdResult::default();
    if let Some(movie) = existing {
        info!("deleted movie {:?}", title);
        result.add_message(CmdMessage::success(format!(
            "Movie {} successfully deleted",
            title
        )));
        result.affected_movies.push(movie);
    }
    Ok(result)
}
