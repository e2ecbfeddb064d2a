use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.title,
            self.year,
            format_rating(self.rating)
        )
    }
}

/// Formats a rating so whole numbers keep one decimal place (`7.0`, not `7`).
pub fn format_rating(rating: f64) -> String {
    if rating.is_finite() && rating.fract() == 0.0 && rating.abs() < 1e16 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

// What the store keeps per title; the title itself is the map key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct MovieEntry {
    year: i32,
    rating: f64,
}

/// Ordered set of movies keyed by title.
///
/// Titles are unique and compared case-sensitively. Iteration follows
/// insertion order, which is also the order written to disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieCollection {
    movies: Vec<Movie>,
}

impl MovieCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title == title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    /// Appends `movie` unless its title is taken. Returns whether it was added.
    pub fn insert(&mut self, movie: Movie) -> bool {
        if self.contains(&movie.title) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    pub fn remove(&mut self, title: &str) -> Option<Movie> {
        let pos = self.movies.iter().position(|m| m.title == title)?;
        Some(self.movies.remove(pos))
    }

    /// Replaces the rating of `title`. Returns false if there is no such movie.
    pub fn set_rating(&mut self, title: &str, rating: f64) -> bool {
        match self.movies.iter_mut().find(|m| m.title == title) {
            Some(movie) => {
                movie.rating = rating;
                true
            }
            None => false,
        }
    }

    pub fn ratings(&self) -> Vec<f64> {
        self.movies.iter().map(|m| m.rating).collect()
    }

    pub fn to_vec(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    // Later entries win, keeping the position of the first occurrence.
    fn upsert(&mut self, movie: Movie) {
        match self.movies.iter_mut().find(|m| m.title == movie.title) {
            Some(existing) => *existing = movie,
            None => self.movies.push(movie),
        }
    }
}

impl FromIterator<Movie> for MovieCollection {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        let mut collection = MovieCollection::new();
        for movie in iter {
            collection.insert(movie);
        }
        collection
    }
}

impl IntoIterator for MovieCollection {
    type Item = Movie;
    type IntoIter = std::vec::IntoIter<Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.into_iter()
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

impl Serialize for MovieCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.movies.len()))?;
        for movie in &self.movies {
            let entry = MovieEntry {
                year: movie.year,
                rating: movie.rating,
            };
            map.serialize_entry(&movie.title, &entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MovieCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor)
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = MovieCollection;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of movie titles to {year, rating} records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut collection = MovieCollection::new();
        while let Some((title, entry)) = access.next_entry::<String, MovieEntry>()? {
            collection.upsert(Movie::new(title, entry.year, entry.rating));
        }
        Ok(collection)
    }
}
