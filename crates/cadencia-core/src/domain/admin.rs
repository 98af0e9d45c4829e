use serde::{Deserialize, Serialize};

use crate::domain::ids::UserId;
use crate::domain::song::Song;
use crate::domain::user::{Theme, User};
use crate::errors::CoreError;
use crate::ports::{CatalogEntry, SongCatalog};

/// Administrador: un `User` con permiso para modificar el catálogo compartido.
///
/// El catálogo es un colaborador externo; el admin no lo posee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
  user: User,
}

impl Admin {
  pub fn new(username: impl Into<String>, theme: Theme) -> Self {
    Self::from_user(User::new(username, theme))
  }

  pub fn from_user(user: User) -> Self {
    Self { user }
  }

  pub fn id(&self) -> UserId {
    self.user.id
  }

  pub fn user(&self) -> &User {
    &self.user
  }

  pub fn add_song_to_database<C>(
    &self,
    catalog: &C,
    song: Song,
    artist: &str,
  ) -> Result<(), CoreError>
  where
    C: SongCatalog + ?Sized,
  {
    tracing::debug!(admin = %self.user.username, song = %song.name(), %artist, "catalog add");
    catalog.add(CatalogEntry::new(song, artist))
  }

  pub fn remove_song_from_database<C>(&self, catalog: &C, song_name: &str) -> Result<Song, CoreError>
  where
    C: SongCatalog + ?Sized,
  {
    tracing::debug!(admin = %self.user.username, song = %song_name, "catalog remove");
    catalog.remove_by_name(song_name).map(|entry| entry.song)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::{VecCatalog, song};

  #[test]
  fn admin_mutates_shared_catalog() {
    let catalog = VecCatalog::default();
    let admin = Admin::new("root", Theme::Dark);

    admin.add_song_to_database(&catalog, song("Riff A"), "Band").unwrap();
    admin.add_song_to_database(&catalog, song("Solo"), "Band").unwrap();
    assert_eq!(catalog.len().unwrap(), 2);

    let removed = admin.remove_song_from_database(&catalog, "Riff A").unwrap();
    assert_eq!(removed.name(), "Riff A");

    let names: Vec<_> = catalog.all().unwrap().iter().map(|s| s.name().to_string()).collect();
    assert_eq!(names, ["Solo"]);
  }

  #[test]
  fn admin_errors_come_from_the_catalog() {
    let catalog = VecCatalog::with(&[("Solo", "Band")]);
    let admin = Admin::new("root", Theme::Light);

    assert!(matches!(
      admin.add_song_to_database(&catalog, song("Solo"), "Other"),
      Err(CoreError::DuplicateName(_))
    ));
    assert!(matches!(
      admin.remove_song_from_database(&catalog, "missing"),
      Err(CoreError::NotFound(_))
    ));
  }
}
