use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Movie;
use crate::store::MovieStore;
use log::info;

pub fn run<S: MovieStore>(store: &mut S, title: &str, year: i32, rating: f64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.get_movies()?.contains(title) {
        result.add_message(CmdMessage::error(already_exists(title)));
        return Ok(result);
    }

    store.add_movie(title, year, rating)?;
    info!("added movie {:?} ({}) rated {}", title, year, rating);
    result.add_message(CmdMessage::success(format!(
        "Movie {} successfully added",
        title
    )));
    Ok(result.with_affected_movies(vec![Movie::new(title, year, rating)]))
}

pub fn already_exists(title: &str) -> String {
    format!("Movie {} already exist!", title)
}
