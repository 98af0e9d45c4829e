use serde::{Deserialize, Serialize};

use crate::domain::song::Song;
use crate::errors::CoreError;

/// Secuencia ordenada y con nombre de canciones, propiedad de un único oyente.
///
/// No admite dos canciones con el mismo nombre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlaylistRecord")]
pub struct Playlist {
  pub name: String,
  songs: Vec<Song>,
}

/// Forma serializada; se reconstruye con `add_song` para validar nombres.
#[derive(Deserialize)]
struct PlaylistRecord {
  name: String,
  #[serde(default)]
  songs: Vec<Song>,
}

impl TryFrom<PlaylistRecord> for Playlist {
  type Error = CoreError;

  fn try_from(r: PlaylistRecord) -> Result<Self, Self::Error> {
    let mut playlist = Playlist::new(r.name);
    for song in r.songs {
      playlist.add_song(song)?;
    }
    Ok(playlist)
  }
}

impl Playlist {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), songs: Vec::new() }
  }

  pub fn add_song(&mut self, song: Song) -> Result<(), CoreError> {
    if self.contains(song.name()) {
      return Err(CoreError::DuplicateName(song.name().to_string()));
    }

    tracing::debug!(playlist = %self.name, song = %song.name(), "add song");
    self.songs.push(song);
    Ok(())
  }

  /// Quita la canción `song_name` y la devuelve.
  pub fn remove_song(&mut self, song_name: &str) -> Result<Song, CoreError> {
    let idx = self
      .songs
      .iter()
      .position(|s| s.name() == song_name)
      .ok_or_else(|| CoreError::NotFound(format!("song '{song_name}' in playlist '{}'", self.name)))?;

    tracing::debug!(playlist = %self.name, song = %song_name, "remove song");
    Ok(self.songs.remove(idx))
  }

  pub fn songs(&self) -> &[Song] {
    &self.songs
  }

  pub fn contains(&self, song_name: &str) -> bool {
    self.songs.iter().any(|s| s.name() == song_name)
  }

  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }

  /// Suma de duraciones en segundos.
  pub fn total_duration(&self) -> f32 {
    self.songs.iter().map(Song::duration).sum()
  }
}
