use super::MovieStore;
use crate::error::{MoviesError, Result};
use crate::model::{Movie, MovieCollection};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file backed store. The file is re-read on every call.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(MoviesError::Io)?;
            }
        }
        Ok(())
    }

    fn load(&self) -> Result<MovieCollection> {
        if !self.path.exists() {
            debug!("{} does not exist yet, starting empty", self.path.display());
            return Ok(MovieCollection::new());
        }
        let content = fs::read_to_string(&self.path).map_err(MoviesError::Io)?;
        if content.trim().is_empty() {
            return Ok(MovieCollection::new());
        }
        let movies: MovieCollection =
            serde_json::from_str(&content).map_err(MoviesError::Serialization)?;
        debug!("loaded {} movies from {}", movies.len(), self.path.display());
        Ok(movies)
    }

    fn save(&self, movies: &MovieCollection) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(movies).map_err(MoviesError::Serialization)?;

        // Temp file then rename, so the database is never half-written
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "movies.json".to_string());
        let tmp_path = self
            .path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));
        fs::write(&tmp_path, content).map_err(MoviesError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(MoviesError::Io)?;

        debug!("saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }
}

impl MovieStore for FileStore {
    fn get_movies(&self) -> Result<MovieCollection> {
        self.load()
    }

    fn add_movie(&mut self, title: &str, year: i32, rating: f64) -> Result<()> {
        let mut movies = self.load()?;
        if !movies.insert(Movie::new(title, year, rating)) {
            return Err(MoviesError::DuplicateTitle(title.to_string()));
        }
        self.save(&movies)
    }

    fn delete_movie(&mut self, title: &str) -> Result<()> {
        let mut movies = self.load()?;
        if movies.remove(title).is_none() {
            debug!("delete of unknown movie {:?} ignored", title);
            return Ok(());
        }
        self.save(&movies)
    }

    fn update_movie(&mut self, title: &str, rating: f64) -> Result<()> {
        let mut movies = self.load()?;
        if !movies.set_rating(title, rating) {
            return Err(MoviesError::MovieNotFound(title.to_string()));
        }
        self.save(&movies)
    }
}
