use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;
use log::info;

pub fn run<S: MovieStore>(store: &mut S, title: &str, rating: f64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(mut movie) = store.get_movies()?.get(title).cloned() else {
        result.add_message(CmdMessage::error(not_found(title)));
        return Ok(result);
    };

    store.update_movie(title, rating)?;
    info!("updated {:?} rating {} -> {}", title, movie.rating, rating);
    movie.rating = rating;

    result.add_message(CmdMessage::success(format!(
        "Movie {} successfully updated",
        title
    )));
    Ok(result.with_affected_movies(vec![movie]))
}

pub fn not_found(title: &str) -> String {
    format!("Movie {} doesn't exist!", title)
}
