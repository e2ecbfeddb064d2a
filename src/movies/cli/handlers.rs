//! One handler per menu entry: prompt, call the API, print the result.

use super::commands::Session;
use super::render::{
    print_histogram, print_messages, print_movies, print_random_pick, print_search_hits,
    print_stats, print_suggestions,
};
use super::styles::PROMPT;
use movies::api::CmdMessage;
use movies::commands::{add, update, MovieFilter, YearOrder};
use movies::error::Result;
use movies::store::MovieStore;

fn prompt(text: &str) -> String {
    PROMPT.apply_to(text).to_string()
}

pub fn list_movies<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let result = session.api.list_movies()?;
    let out = session.console.out();
    writeln!(out, "{} movies in total", result.listed_movies.len())?;
    print_movies(out, &result.listed_movies)?;
    Ok(())
}

pub fn add_movie<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let title = session
        .console
        .read_non_empty(&prompt("Enter new movie name: "))?;
    if session.api.movie_exists(&title)? {
        print_messages(
            session.console.out(),
            &[CmdMessage::error(add::already_exists(&title))],
        )?;
        return Ok(());
    }

    let year = session.console.read_int(&prompt("Enter new movie year: "))?;
    let rating = session
        .console
        .read_float(&prompt("Enter new movie rating (0-10): "))?;

    let result = session.api.add_movie(&title, year, rating)?;
    print_messages(session.console.out(), &result.messages)?;
    Ok(())
}

pub fn delete_movie<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let title = session
        .console
        .read_non_empty(&prompt("Enter movie name to delete: "))?;
    let result = session.api.delete_movie(&title)?;
    print_messages(session.console.out(), &result.messages)?;
    Ok(())
}

pub fn update_movie<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let title = session.console.read_non_empty(&prompt("Enter movie name: "))?;
    if !session.api.movie_exists(&title)? {
        print_messages(
            session.console.out(),
            &[CmdMessage::error(update::not_found(&title))],
        )?;
        return Ok(());
    }

    let rating = session
        .console
        .read_float(&prompt("Enter new movie rating (0-10): "))?;
    let result = session.api.update_movie(&title, rating)?;
    print_messages(session.console.out(), &result.messages)?;
    Ok(())
}

pub fn stats<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let result = session.api.stats()?;
    let out = session.console.out();
    if let Some(stats) = &result.stats {
        print_stats(out, stats)?;
    }
    print_messages(out, &result.messages)?;
    Ok(())
}

pub fn random_movie<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let result = session.api.random_movie(&mut session.rng)?;
    let out = session.console.out();
    if let Some(movie) = result.listed_movies.first() {
        print_random_pick(out, movie)?;
    }
    print_messages(out, &result.messages)?;
    Ok(())
}

pub fn search_movie<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let query = session
        .console
        .read_line(&prompt("Enter part of movie name: "))?;
    let result = session.api.search_movies(&query)?;

    let out = session.console.out();
    print_search_hits(out, &result.listed_movies)?;
    print_messages(out, &result.messages)?;
    print_suggestions(out, &result.suggestions)?;
    Ok(())
}

pub fn sort_movies_by_rating<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let result = session.api.sort_by_rating()?;
    print_movies(session.console.out(), &result.listed_movies)?;
    Ok(())
}

pub fn sort_movies_by_year<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let newest_first = session
        .console
        .read_yes_no(&prompt("Do you want the latest movies first?  (Y/N) "))?;
    let order = if newest_first {
        YearOrder::NewestFirst
    } else {
        YearOrder::OldestFirst
    };

    let result = session.api.sort_by_year(order)?;
    print_movies(session.console.out(), &result.listed_movies)?;
    Ok(())
}

pub fn create_histogram<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let built = session.api.build_histogram()?;
    let Some(histogram) = built.histogram else {
        print_messages(session.console.out(), &built.messages)?;
        return Ok(());
    };

    let name = session.console.read_line(&prompt(
        "Histogram created successfully.\nPlease enter a file name to save it: ",
    ))?;
    let saved = session.api.save_histogram(&histogram, &name);

    let show = session.api.config().show_histogram;
    let out = session.console.out();
    print_messages(out, &saved.messages)?;
    if show {
        print_histogram(out, &histogram)?;
    }
    Ok(())
}

pub fn filter_movies<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    let console = &mut session.console;

    let raw = console.read_line(&prompt(
        "Enter minimum rating (leave blank for no minimum rating): ",
    ))?;
    let min_rating = console.validate_optional_float(raw)?;
    let raw = console.read_line(&prompt(
        "Enter start year (leave blank for no start year): ",
    ))?;
    let start_year = console.validate_optional_int(raw)?;
    let raw = console.read_line(&prompt("Enter end year (leave blank for no end year): "))?;
    let end_year = console.validate_optional_int(raw)?;

    let filter = MovieFilter {
        min_rating,
        start_year,
        end_year,
    };
    let result = session.api.filter_movies(&filter)?;

    let out = session.console.out();
    if !result.listed_movies.is_empty() {
        writeln!(out, "Filtered Movies:")?;
        print_movies(out, &result.listed_movies)?;
    }
    print_messages(out, &result.messages)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::plain_output;
    use movies::store::memory::fixtures::sample_store;
    use crate::cli::prompt::Console;
    use movies::api::MoviesApi;
    use movies::config::MoviesConfig;
    use movies::model::Movie;
    use movies::store::memory::InMemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    /// Runs one handler against `store` with `script` as stdin.
    fn drive(
        store: InMemoryStore,
        config: MoviesConfig,
        script: &str,
        handler: fn(&mut Session<'_, InMemoryStore>) -> Result<()>,
    ) -> (String, InMemoryStore) {
        plain_output();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let api = {
            let mut session = Session::new(
                MoviesApi::new(store, config),
                Console::new(&mut input, &mut output),
                StdRng::seed_from_u64(3),
            );
            handler(&mut session).unwrap();
            session.api
        };
        (String::from_utf8(output).unwrap(), api.into_store())
    }

    fn run_with(
        store: InMemoryStore,
        script: &str,
        handler: fn(&mut Session<'_, InMemoryStore>) -> Result<()>,
    ) -> (String, InMemoryStore) {
        drive(store, MoviesConfig::default(), script, handler)
    }

    #[test]
    fn list_prints_count_and_records() {
        let (out, _) = run_with(sample_store(), "", list_movies);
        assert!(out.starts_with("5 movies in total\n"));
        assert!(out.contains("Titanic (1997): 7.9\n"));
        assert!(out.contains("Heat (1995): 8.3\n"));
    }

    #[test]
    fn add_validates_year_and_rating() {
        let (out, store) = run_with(
            InMemoryStore::new(),
            "\nDune\nlast year\n2021\ngreat\n8\n",
            add_movie,
        );
        assert!(out.contains("'last year'"));
        assert!(out.contains("'great'"));
        assert!(out.contains("Movie Dune successfully added"));
        assert_eq!(
            store.get_movies().unwrap().get("Dune"),
            Some(&Movie::new("Dune", 2021, 8.0))
        );
    }

    #[test]
    fn add_duplicate_stops_before_asking_year() {
        let (out, store) = run_with(sample_store(), "Alien\n", add_movie);
        assert!(out.contains("Movie Alien already exist!"));
        assert!(!out.contains("Enter new movie year"));
        assert_eq!(store.get_movies().unwrap().len(), 5);
    }

    #[test]
    fn delete_missing_title_is_silent() {
        let (out, store) = run_with(sample_store(), "Nope\n", delete_movie);
        assert!(!out.contains("Nope"));
        assert_eq!(store.get_movies().unwrap().len(), 5);
    }

    #[test]
    fn delete_existing_title() {
        let (out, store) = run_with(sample_store(), "Heat\n", delete_movie);
        assert!(out.contains("Movie Heat successfully deleted"));
        assert!(!store.get_movies().unwrap().contains("Heat"));
    }

    #[test]
    fn update_missing_title_does_not_ask_rating() {
        let (out, _) = run_with(sample_store(), "Nope\n", update_movie);
        assert!(out.contains("Movie Nope doesn't exist!"));
        assert!(!out.contains("Enter new movie rating"));
    }

    #[test]
    fn update_existing_title() {
        let (out, store) = run_with(sample_store(), "Batman\n9.5\n", update_movie);
        assert!(out.contains("Movie Batman successfully updated"));
        assert_eq!(
            store.get_movies().unwrap().get("Batman"),
            Some(&Movie::new("Batman", 1989, 9.5))
        );
    }

    #[test]
    fn stats_output() {
        let store = InMemoryStore::with_movies(vec![
            Movie::new("Five", 2000, 5.0),
            Movie::new("Seven", 2000, 7.0),
            Movie::new("Nine", 2000, 9.0),
        ]);
        let (out, _) = run_with(store, "", stats);
        assert!(out.contains("Average rating: 7.00\n"));
        assert!(out.contains("Median rating: 7.0\n"));
        assert!(out.contains("Best movie: Nine, 9.0\n"));
        assert!(out.contains("Worst movie: Five, 5.0\n"));
    }

    #[test]
    fn stats_on_empty_database() {
        let (out, _) = run_with(InMemoryStore::new(), "", stats);
        assert!(out.contains("No movies in the database."));
    }

    #[test]
    fn random_pick_is_reported() {
        let (out, _) = run_with(sample_store(), "", random_movie);
        assert!(out.contains("Your movie for tonight: "));
        assert!(out.contains("it's rated "));
    }

    #[test]
    fn search_substring_hits() {
        let (out, _) = run_with(sample_store(), "bat\n", search_movie);
        assert!(out.contains("Batman, 7.5\n"));
        assert!(!out.contains("does not exist"));
    }

    #[test]
    fn search_suggests_on_typo() {
        let (out, _) = run_with(sample_store(), "Btman\n", search_movie);
        assert!(out.contains("The movie Btman does not exist. Did you mean:\nBatman\n"));
    }

    #[test]
    fn search_without_suggestions() {
        let (out, _) = run_with(sample_store(), "Casablanca\n", search_movie);
        assert!(out.contains("The movie Casablanca does not exist."));
        assert!(!out.contains("Did you mean"));
    }

    #[test]
    fn sort_by_rating_output() {
        let (out, _) = run_with(sample_store(), "", sort_movies_by_rating);
        let expected = "The Matrix (1999): 8.7\nAlien (1979): 8.5\nHeat (1995): 8.3\n\
                        Titanic (1997): 7.9\nBatman (1989): 7.5\n";
        assert!(out.ends_with(expected));
    }

    #[test]
    fn sort_by_year_reprompts_then_sorts_oldest_first() {
        let (out, _) = run_with(sample_store(), "x\nn\n", sort_movies_by_year);
        assert!(out.contains("Please enter \"Y\" or \"N\""));
        let alien = out.find("Alien (1979)").unwrap();
        let matrix = out.find("The Matrix (1999)").unwrap();
        assert!(alien < matrix);
    }

    #[test]
    fn histogram_saves_and_displays() {
        let dir = tempfile::TempDir::new().unwrap();
        let name = dir.path().join("ratings");
        let script = format!("{}\n", name.display());

        let (out, _) = run_with(sample_store(), &script, create_histogram);
        assert!(out.contains("Histogram saved successfully."));
        assert!(out.contains("Movies Ratings"));
        assert!(dir.path().join("ratings.png").exists());
    }

    #[test]
    fn histogram_save_failure_still_displays() {
        let dir = tempfile::TempDir::new().unwrap();
        let name = dir.path().join("missing").join("ratings");
        let script = format!("{}\n", name.display());

        let (out, _) = run_with(sample_store(), &script, create_histogram);
        assert!(!out.contains("Histogram saved successfully."));
        assert!(out.contains("Chart error"));
        assert!(out.contains("Movies Ratings"));
    }

    #[test]
    fn histogram_display_can_be_disabled() {
        let dir = tempfile::TempDir::new().unwrap();
        let script = format!("{}\n", dir.path().join("quiet").display());
        let config = MoviesConfig {
            show_histogram: false,
            ..MoviesConfig::default()
        };

        let (out, _) = drive(sample_store(), config, &script, create_histogram);
        assert!(out.contains("Histogram saved successfully."));
        assert!(!out.contains("Movies Ratings"));
    }

    #[test]
    fn histogram_on_empty_database_skips_prompt() {
        let (out, _) = run_with(InMemoryStore::new(), "", create_histogram);
        assert!(out.contains("No movies in the database."));
        assert!(!out.contains("file name"));
    }

    #[test]
    fn filter_with_blank_constraints_lists_all() {
        let (out, _) = run_with(sample_store(), "\n\n\n", filter_movies);
        assert!(out.contains("Filtered Movies:\n"));
        assert_eq!(out.matches(" (19").count(), 5);
    }

    #[test]
    fn filter_min_rating() {
        let store = InMemoryStore::with_movies(vec![
            Movie::new("A", 2000, 7.5),
            Movie::new("B", 2001, 8.0),
            Movie::new("C", 2002, 9.1),
        ]);
        let (out, _) = run_with(store, "8.0\n\n\n", filter_movies);
        assert!(out.contains("Filtered Movies:\nB (2001): 8.0\nC (2002): 9.1\n"));
        assert!(!out.contains("A (2000)"));
    }

    #[test]
    fn filter_reprompts_bad_year_and_reports_no_match() {
        let (out, _) = run_with(sample_store(), "\nsoon\n2020\n\n", filter_movies);
        assert!(out.contains("'soon'"));
        assert!(out.contains("No movies found based on the provided criteria"));
        assert!(!out.contains("Filtered Movies:"));
    }
}
