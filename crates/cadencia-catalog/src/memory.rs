use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use cadencia_core::errors::CoreError;
use cadencia_core::ports::{CatalogEntry, SongCatalog};

/// Catálogo en memoria, protegido por un `RwLock`.
///
/// Una misma instancia puede compartirse detrás de un `Arc` entre varios
/// llamadores (admins que escriben, `Discover` que lee).
#[derive(Debug, Default)]
pub struct MemoryCatalog {
  entries: RwLock<Vec<CatalogEntry>>,
}

impl MemoryCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Construye el catálogo con `entries` en ese orden; nombres repetidos fallan.
  pub fn with_entries<I>(entries: I) -> Result<Self, CoreError>
  where
    I: IntoIterator<Item = CatalogEntry>,
  {
    let catalog = Self::new();
    for entry in entries {
      catalog.add(entry)?;
    }
    Ok(catalog)
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Vec<CatalogEntry>>, CoreError> {
    self.entries.read().map_err(|e| CoreError::Catalog(e.to_string()))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<CatalogEntry>>, CoreError> {
    self.entries.write().map_err(|e| CoreError::Catalog(e.to_string()))
  }
}

impl SongCatalog for MemoryCatalog {
  fn entries(&self) -> Result<Vec<CatalogEntry>, CoreError> {
    Ok(self.read()?.clone())
  }

  fn add(&self, entry: CatalogEntry) -> Result<(), CoreError> {
    let mut entries = self.write()?;
    if entries.iter().any(|e| e.song.name() == entry.song.name()) {
      return Err(CoreError::DuplicateName(entry.song.name().to_string()));
    }

    tracing::debug!(song = %entry.song.name(), artist = %entry.artist, "catalog insert");
    entries.push(entry);
    Ok(())
  }

  fn remove_by_name(&self, name: &str) -> Result<CatalogEntry, CoreError> {
    let mut entries = self.write()?;
    let idx = entries
      .iter()
      .position(|e| e.song.name() == name)
      .ok_or_else(|| CoreError::NotFound(format!("song '{name}' in catalog")))?;

    tracing::debug!(song = %name, "catalog delete");
    Ok(entries.remove(idx))
  }

  fn len(&self) -> Result<usize, CoreError> {
    Ok(self.read()?.len())
  }
}
