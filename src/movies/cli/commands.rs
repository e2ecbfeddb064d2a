//! # CLI Layer
//!
//! This module is **one possible UI client** for the movie database. It is
//! the only place in the codebase that:
//! - Touches stdin and stdout
//! - Parses command-line arguments
//! - Formats `CmdResult`s for a human
//!
//! ## Session
//!
//! A [`Session`] owns the API, the console and the random source. The loop in
//! [`run_session`] prints the menu, reads a choice and dispatches through the
//! table in [`super::menu`]. Handlers never see the raw choice.
//!
//! Closing stdin at any prompt ends the session the same way choice 0 does.
//!
//! ## Testing Strategy
//!
//! The session is generic over the store and reads from any `BufRead`, so
//! tests drive it with an `InMemoryStore` and a scripted `Cursor`. Business
//! rules are tested in the command layer, not here.

use super::menu::{choice, choice_prompt, entries, menu_text, Choice};
use super::prompt::Console;
use super::render::print_messages;
use super::setup::{default_data_dir, init_logging, Cli};
use super::styles::{BANNER, MENU, PROMPT};
use clap::Parser;
use log::{debug, info};
use movies::api::{CmdMessage, MoviesApi};
use movies::config::MoviesConfig;
use movies::error::{MoviesError, Result};
use movies::store::fs::FileStore;
use movies::store::MovieStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

const BANNER_TEXT: &str = "********** My Movies Database **********";

pub struct Session<'io, S: MovieStore> {
    pub api: MoviesApi<S>,
    pub console: Console<'io>,
    pub rng: StdRng,
}

impl<'io, S: MovieStore> Session<'io, S> {
    pub fn new(api: MoviesApi<S>, console: Console<'io>, rng: StdRng) -> Self {
        Self { api, console, rng }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api = init_api(&cli)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let mut session = Session::new(
        api,
        Console::new(&mut input, &mut output),
        StdRng::from_entropy(),
    );
    run_session(&mut session)
}

fn init_api(cli: &Cli) -> Result<MoviesApi<FileStore>> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let config = MoviesConfig::load(&data_dir)?;

    let path = match &cli.file {
        Some(file) => file.clone(),
        None => config.data_path(&data_dir),
    };
    info!("using movie database {}", path.display());

    Ok(MoviesApi::new(FileStore::new(path), config))
}

/// Runs the menu loop until the user quits or input ends.
pub fn run_session<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    match menu_loop(session) {
        Err(MoviesError::InputClosed) => {
            debug!("input closed, ending session");
            writeln!(session.console.out())?;
            say_goodbye(session)
        }
        other => other,
    }
}

fn menu_loop<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    writeln!(session.console.out(), "{}", BANNER.apply_to(BANNER_TEXT))?;

    let table = entries::<S>();
    let menu = menu_text(&table);
    let ask = PROMPT.apply_to(choice_prompt(table.len())).to_string();

    loop {
        writeln!(session.console.out())?;
        writeln!(session.console.out(), "{}", MENU.apply_to(&menu))?;
        let raw = session.console.read_line(&ask)?;
        let number = session.console.validate_int(raw)?;
        writeln!(session.console.out())?;

        match choice(number, table.len()) {
            Choice::Quit => return say_goodbye(session),
            Choice::Run(index) => {
                let entry = &table[index];
                debug!("running menu entry {:?}", entry.label);
                (entry.handler)(session)?;
                writeln!(session.console.out())?;
                session.console.read_line("Press enter to continue")?;
            }
            Choice::Invalid(n) => {
                debug!("invalid menu choice {}", n);
                print_messages(session.console.out(), &[CmdMessage::error("Invalid choice")])?;
            }
        }
    }
}

fn say_goodbye<S: MovieStore>(session: &mut Session<'_, S>) -> Result<()> {
    writeln!(session.console.out(), "Bye!")?;
    Ok(())
}
