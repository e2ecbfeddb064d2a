use clap::Parser;
use directories::ProjectDirs;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "movies", bin_name = "movies", version)]
#[command(about = "Interactive menu for a personal movie ratings database", long_about = None)]
pub struct Cli {
    /// Directory holding config.json and the movie database
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Movie database file, overriding the configured one
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Logs go to stderr as `[target][level] message`. `RUST_LOG` wins over
/// the `--verbose` default.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(buf, "[{}][{}] {}", record.target(), record.level(), record.args())
        });
    // A second init (tests) is harmless.
    let _ = builder.try_init();
}

/// The platform data directory, falling back to the working directory.
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "movies", "movies")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
