//! Catálogo mínimo en memoria para los tests del núcleo.

use std::sync::Mutex;

use crate::domain::song::Song;
use crate::errors::CoreError;
use crate::ports::{CatalogEntry, SongCatalog};

#[derive(Default)]
pub struct VecCatalog {
  entries: Mutex<Vec<CatalogEntry>>,
}

impl VecCatalog {
  pub fn with(entries: &[(&str, &str)]) -> Self {
    let catalog = Self::default();
    for (name, artist) in entries {
      catalog.add(CatalogEntry::new(song(name), *artist)).unwrap();
    }
    catalog
  }
}

pub fn song(name: &str) -> Song {
  Song::new(name, format!("https://cdn.example/{name}.ogg"), 60.0, false).unwrap()
}

impl SongCatalog for VecCatalog {
  fn entries(&self) -> Result<Vec<CatalogEntry>, CoreError> {
    Ok(self.entries.lock().unwrap().clone())
  }

  fn add(&self, entry: CatalogEntry) -> Result<(), CoreError> {
    let mut entries = self.entries.lock().unwrap();
    if entries.iter().any(|e| e.song.name() == entry.song.name()) {
      return Err(CoreError::DuplicateName(entry.song.name().to_string()));
    }
    entries.push(entry);
    Ok(())
  }

  fn remove_by_name(&self, name: &str) -> Result<CatalogEntry, CoreError> {
    let mut entries = self.entries.lock().unwrap();
    let idx = entries
      .iter()
      .position(|e| e.song.name() == name)
      .ok_or_else(|| CoreError::NotFound(name.to_string()))?;
    Ok(entries.remove(idx))
  }
}
