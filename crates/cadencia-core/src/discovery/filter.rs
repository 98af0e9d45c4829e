use serde::{Deserialize, Serialize};

use crate::domain::song::Song;
use crate::errors::CoreError;
use crate::ports::SongCatalog;

/// Estrategia que selecciona una subsecuencia del catálogo.
///
/// Los filtros no guardan el catálogo: lo reciben en cada llamada, así que sólo
/// tienen el estado de su parámetro de búsqueda. El resultado conserva el orden
/// del catálogo; no encontrar nada devuelve un vector vacío, no un error.
pub trait Filter: Send + Sync {
  fn apply(&self, catalog: &dyn SongCatalog) -> Result<Vec<Song>, CoreError>;
}

/// Canciones cuyo artista asociado en el catálogo es exactamente `artist_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterByArtist {
  pub artist_name: String,
}

impl FilterByArtist {
  pub fn new(artist_name: impl Into<String>) -> Self {
    Self { artist_name: artist_name.into() }
  }
}

impl Filter for FilterByArtist {
  fn apply(&self, catalog: &dyn SongCatalog) -> Result<Vec<Song>, CoreError> {
    let songs: Vec<Song> = catalog
      .entries()?
      .into_iter()
      .filter(|e| e.artist == self.artist_name)
      .map(|e| e.song)
      .collect();

    tracing::debug!(artist = %self.artist_name, matches = songs.len(), "filter by artist");
    Ok(songs)
  }
}

/// Sensibilidad a mayúsculas de `FilterBySubstring`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchCase {
  #[default]
  Sensitive,
  Insensitive,
}

/// Canciones cuyo nombre contiene `substring`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBySubstring {
  pub substring: String,
  pub match_case: MatchCase,
}

impl FilterBySubstring {
  pub fn new(substring: impl Into<String>) -> Self {
    Self { substring: substring.into(), match_case: MatchCase::default() }
  }

  pub fn with_match_case(mut self, match_case: MatchCase) -> Self {
    self.match_case = match_case;
    self
  }

  fn matches(&self, name: &str) -> bool {
    match self.match_case {
      MatchCase::Sensitive => name.contains(&self.substring),
      MatchCase::Insensitive => name.to_lowercase().contains(&self.substring.to_lowercase()),
    }
  }
}

impl Filter for FilterBySubstring {
  fn apply(&self, catalog: &dyn SongCatalog) -> Result<Vec<Song>, CoreError> {
    let songs: Vec<Song> =
      catalog.all()?.into_iter().filter(|s| self.matches(s.name())).collect();

    tracing::debug!(substring = %self.substring, matches = songs.len(), "filter by substring");
    Ok(songs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::VecCatalog;

  fn names(songs: &[Song]) -> Vec<&str> {
    songs.iter().map(Song::name).collect()
  }

  #[test]
  fn substring_returns_matches_in_catalog_order() {
    let catalog = VecCatalog::with(&[("Riff A", "X"), ("Riff B", "Y"), ("Solo", "X")]);
    let out = FilterBySubstring::new("Riff").apply(&catalog).unwrap();

    assert_eq!(names(&out), ["Riff A", "Riff B"]);
  }

  #[test]
  fn substring_is_case_sensitive_by_default() {
    let catalog = VecCatalog::with(&[("Riff A", "X"), ("riff lower", "X"), ("Solo", "X")]);

    let sensitive = FilterBySubstring::new("riff").apply(&catalog).unwrap();
    assert_eq!(names(&sensitive), ["riff lower"]);

    let insensitive =
      FilterBySubstring::new("RIFF").with_match_case(MatchCase::Insensitive).apply(&catalog).unwrap();
    assert_eq!(names(&insensitive), ["Riff A", "riff lower"]);
  }

  #[test]
  fn empty_substring_matches_whole_catalog() {
    let catalog = VecCatalog::with(&[("b", "X"), ("a", "Y")]);
    let out = FilterBySubstring::new("").apply(&catalog).unwrap();
    assert_eq!(names(&out), ["b", "a"]);
  }

  #[test]
  fn no_match_is_empty_not_error() {
    let catalog = VecCatalog::with(&[("Solo", "X")]);
    assert!(FilterBySubstring::new("Riff").apply(&catalog).unwrap().is_empty());
    assert!(FilterByArtist::new("Nobody").apply(&catalog).unwrap().is_empty());
    assert!(FilterByArtist::new("X").apply(&VecCatalog::default()).unwrap().is_empty());
  }

  #[test]
  fn by_artist_uses_catalog_association() {
    let catalog =
      VecCatalog::with(&[("Riff A", "Band"), ("Intro", "Other"), ("Solo", "Band"), ("Outro", "band")]);
    let out = FilterByArtist::new("Band").apply(&catalog).unwrap();

    assert_eq!(names(&out), ["Riff A", "Solo"]);
  }
}
