use serde::{Deserialize, Serialize};

use crate::domain::song::Song;
use crate::errors::CoreError;

/// Una canción del catálogo junto con su procedencia.
///
/// `Song` no lleva artista; la asociación canción → artista la aporta el
/// catálogo, y es lo que consulta `FilterByArtist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
  pub song: Song,
  pub artist: String,
}

impl CatalogEntry {
  pub fn new(song: Song, artist: impl Into<String>) -> Self {
    Self { song, artist: artist.into() }
  }
}

/// Catálogo compartido de canciones: lo modifica `Admin` y lo recorren los filtros.
///
/// Los métodos toman `&self`; cada adaptador decide su sincronización interna
/// y debe poder compartirse entre hilos. Los nombres de canción son únicos
/// dentro del catálogo.
pub trait SongCatalog: Send + Sync {
  /// Todas las entradas, en orden de catálogo.
  fn entries(&self) -> Result<Vec<CatalogEntry>, CoreError>;

  /// Inserta al final. Falla con `DuplicateName` si el nombre ya existe.
  fn add(&self, entry: CatalogEntry) -> Result<(), CoreError>;

  /// Quita la canción `name` y devuelve su entrada, o `NotFound`.
  fn remove_by_name(&self, name: &str) -> Result<CatalogEntry, CoreError>;

  fn all(&self) -> Result<Vec<Song>, CoreError> {
    Ok(self.entries()?.into_iter().map(|e| e.song).collect())
  }

  fn find(&self, name: &str) -> Result<Option<CatalogEntry>, CoreError> {
    Ok(self.entries()?.into_iter().find(|e| e.song.name() == name))
  }

  fn len(&self) -> Result<usize, CoreError> {
    Ok(self.entries()?.len())
  }
}
