use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador único de un usuario (oyente o administrador).
///
/// Es la identidad que usan las suscripciones de `Artist`: dos handles al
/// mismo oyente comparten `UserId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    UserId(Uuid::new_v4())
  }

  /// Construye un `UserId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    UserId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for UserId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for UserId {
  fn from(u: Uuid) -> Self {
    UserId(u)
  }
}

impl From<UserId> for Uuid {
  fn from(id: UserId) -> Self {
    id.0
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistId(Uuid);

impl ArtistId {
  pub fn new() -> Self {
    ArtistId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    ArtistId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for ArtistId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for ArtistId {
  fn from(u: Uuid) -> Self {
    ArtistId(u)
  }
}

impl From<ArtistId> for Uuid {
  fn from(id: ArtistId) -> Self {
    id.0
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
