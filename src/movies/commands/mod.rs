use crate::chart::Histogram;
use crate::fuzzy::FuzzyMatch;
use crate::model::Movie;
use std::path::PathBuf;

pub mod add;
pub mod delete;
pub mod filter;
pub mod helpers;
pub mod histogram;
pub mod list;
pub mod random;
pub mod search;
pub mod sort;
pub mod stats;
pub mod update;

pub use filter::MovieFilter;
pub use search::SearchOptions;
pub use sort::YearOrder;
pub use stats::RatingStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_movies: Vec<Movie>,
    pub listed_movies: Vec<Movie>,
    pub suggestions: Vec<FuzzyMatch>,
    pub stats: Option<RatingStats>,
    pub histogram: Option<Histogram>,
    pub saved_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_movies(mut self, movies: Vec<Movie>) -> Self {
        self.affected_movies = movies;
        self
    }

    pub fn with_listed_movies(mut self, movies: Vec<Movie>) -> Self {
        self.listed_movies = movies;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<FuzzyMatch>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_stats(mut self, stats: RatingStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_histogram(mut self, histogram: Histogram) -> Self {
        self.histogram = Some(histogram);
        self
    }

    pub fn with_saved_path(mut self, path: PathBuf) -> Self {
        self.saved_path = Some(path);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
