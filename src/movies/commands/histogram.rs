use crate::chart::{self, Histogram};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;
use log::warn;
use std::path::PathBuf;

use super::helpers::empty_database;

/// Bins every rating. Without movies there is nothing to chart and only a
/// message comes back. A bin count of 0 is treated as 1.
pub fn build<S: MovieStore>(store: &S, bins: usize) -> Result<CmdResult> {
    let ratings = store.get_movies()?.ratings();
    Ok(match Histogram::from_ratings(&ratings, bins.max(1)) {
        Some(histogram) => CmdResult::default().with_histogram(histogram),
        None => empty_database(),
    })
}

/// `name` with the `.png` suffix the chart is always saved under.
pub fn output_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}.png", name))
}

/// Writes `histogram` to `<name>.png`. A failed write is reported as an
/// error message, not returned as an error, so callers can still show the chart.
pub fn save(histogram: &Histogram, name: &str) -> CmdResult {
    let path = output_path(name);
    let result = match chart::save_png(histogram, &path) {
        Ok(()) => CmdResult::default()
            .with_message(CmdMessage::success("Histogram saved successfully."))
            .with_saved_path(path),
        Err(e) => {
            warn!("saving histogram to {} failed: {}", path.display(), e);
            CmdResult::default().with_message(CmdMessage::error(e.to_string()))
        }
    };
    result.with_histogram(histogram.clone())
}
