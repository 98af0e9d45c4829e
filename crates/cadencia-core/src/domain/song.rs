use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// La Canción (Song): una pista reproducible del catálogo.
///
/// La identidad de una canción es su `name`; el catálogo y las playlists
/// lo usan como clave para borrar. Es inmutable una vez construida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SongRecord")]
pub struct Song {
  name: String,
  url: String,
  /// Duración en segundos.
  duration: f32,
  /// Repetir la pista al terminar.
  looping: bool,
}

/// Forma serializada sin validar; pasa por `Song::new` al deserializar.
#[derive(Deserialize)]
struct SongRecord {
  name: String,
  url: String,
  duration: f32,
  #[serde(default)]
  looping: bool,
}

impl TryFrom<SongRecord> for Song {
  type Error = CoreError;

  fn try_from(r: SongRecord) -> Result<Self, Self::Error> {
    Song::new(r.name, r.url, r.duration, r.looping)
  }
}

/// Petición de reproducción devuelta por `Song::play`.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
  pub url: String,
  pub duration: f32,
  pub looping: bool,
}

impl Song {
  pub fn new(
    name: impl Into<String>,
    url: impl Into<String>,
    duration: f32,
    looping: bool,
  ) -> Result<Self, CoreError> {
    if !duration.is_finite() || duration < 0.0 {
      return Err(CoreError::InvalidDuration(duration));
    }

    Ok(Self { name: name.into(), url: url.into(), duration, looping })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  pub fn duration(&self) -> f32 {
    self.duration
  }

  pub fn is_looping(&self) -> bool {
    self.looping
  }

  /// Lanza la reproducción. La salida de audio real queda fuera del núcleo:
  /// el reproductor consume el `Playback` devuelto.
  pub fn play(&self) -> Playback {
    tracing::info!(song = %self.name, url = %self.url, looping = self.looping, "play");
    Playback { url: self.url.clone(), duration: self.duration, looping: self.looping }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_negative_and_non_finite_durations() {
    assert_eq!(Song::new("a", "u", -1.0, false), Err(CoreError::InvalidDuration(-1.0)));
    assert!(Song::new("a", "u", f32::NAN, false).is_err());
    assert!(Song::new("a", "u", f32::INFINITY, false).is_err());
    assert!(Song::new("a", "u", 0.0, false).is_ok());
  }

  #[test]
  fn play_reports_url_and_loop_flag() {
    let song = Song::new("Solo", "https://cdn.example/solo.ogg", 183.5, true).unwrap();
    let playback = song.play();

    assert_eq!(playback.url, "https://cdn.example/solo.ogg");
    assert_eq!(playback.duration, 183.5);
    assert!(playback.looping);
  }

  #[test]
  fn deserialize_goes_through_validation() {
    let ok: Song =
      serde_json::from_str(r#"{"name":"Riff A","url":"u","duration":12.0}"#).unwrap();
    assert_eq!(ok.name(), "Riff A");
    assert!(!ok.is_looping());

    let bad = serde_json::from_str::<Song>(r#"{"name":"x","url":"u","duration":-3.0}"#);
    assert!(bad.is_err());
  }
}
