use crate::error::{MoviesError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "movies.json";
const DEFAULT_FUZZY_THRESHOLD: u8 = 60;
const DEFAULT_SUGGESTION_LIMIT: usize = 5;
const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Configuration for movies, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoviesConfig {
    /// Movie database file; relative paths resolve against the data dir
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Minimum similarity (0-100) for a title to be suggested by search
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: u8,

    /// How many best candidates the approximate matcher considers
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Number of equal-width bins in the rating histogram
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// Print the histogram in the terminal after saving it
    #[serde(default = "default_show_histogram")]
    pub show_histogram: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_fuzzy_threshold() -> u8 {
    DEFAULT_FUZZY_THRESHOLD
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

fn default_show_histogram() -> bool {
    true
}

impl Default for MoviesConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            show_histogram: true,
        }
    }
}

impl MoviesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MoviesError::Io)?;
        let config: MoviesConfig =
            serde_json::from_str(&content).map_err(MoviesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MoviesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MoviesError::Serialization)?;
        fs::write(config_path, content).map_err(MoviesError::Io)?;
        Ok(())
    }

    /// Where the movie database lives for the given data dir
    pub fn data_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.as_ref().join(file)
        }
    }
}
