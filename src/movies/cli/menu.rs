//! The numbered menu: a fixed table from choice number to handler.

use super::commands::Session;
use super::handlers;
use movies::error::Result;
use movies::store::MovieStore;

pub type Handler<S> = fn(&mut Session<'_, S>) -> Result<()>;

pub struct MenuEntry<S: MovieStore> {
    pub label: &'static str,
    pub handler: Handler<S>,
}

/// What a number typed at the menu prompt means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Quit,
    /// Index into [`entries`]
    Run(usize),
    Invalid(i32),
}

/// Handlers for choices 1 through 11, in menu order.
pub fn entries<S: MovieStore>() -> Vec<MenuEntry<S>> {
    vec![
        MenuEntry {
            label: "List movies",
            handler: handlers::list_movies::<S>,
        },
        MenuEntry {
            label: "Add movie",
            handler: handlers::add_movie::<S>,
        },
        MenuEntry {
            label: "Delete movie",
            handler: handlers::delete_movie::<S>,
        },
        MenuEntry {
            label: "Update movie",
            handler: handlers::update_movie::<S>,
        },
        MenuEntry {
            label: "Stats",
            handler: handlers::stats::<S>,
        },
        MenuEntry {
            label: "Random movie",
            handler: handlers::random_movie::<S>,
        },
        MenuEntry {
            label: "Search movie",
            handler: handlers::search_movie::<S>,
        },
        MenuEntry {
            label: "Movies sorted by rating",
            handler: handlers::sort_movies_by_rating::<S>,
        },
        MenuEntry {
            label: "Movies sorted by year",
            handler: handlers::sort_movies_by_year::<S>,
        },
        MenuEntry {
            label: "Create Rating Histogram",
            handler: handlers::create_histogram::<S>,
        },
        MenuEntry {
            label: "Filter Movies",
            handler: handlers::filter_movies::<S>,
        },
    ]
}

pub fn choice(number: i32, entry_count: usize) -> Choice {
    match usize::try_from(number) {
        Ok(0) => Choice::Quit,
        Ok(n) if n <= entry_count => Choice::Run(n - 1),
        _ => Choice::Invalid(number),
    }
}

pub fn menu_text<S: MovieStore>(entries: &[MenuEntry<S>]) -> String {
    let mut text = String::from("Menu:\n0. Quit\n");
    for (i, entry) in entries.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, entry.label));
    }
    text
}

pub fn choice_prompt(entry_count: usize) -> String {
    format!("Enter choice (0-{}): ", entry_count)
}
