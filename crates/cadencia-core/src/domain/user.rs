use serde::{Deserialize, Serialize};

use crate::domain::ids::UserId;

/// Tema visual preferido por el usuario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

/// Identidad base compartida por oyentes y administradores.
///
/// `Listener` y `Admin` no son identidades distintas: cada uno envuelve un
/// `User` y le añade sus capacidades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id: UserId,
  pub username: String,
  pub theme: Theme,
}

impl User {
  pub fn new(username: impl Into<String>, theme: Theme) -> Self {
    Self { id: UserId::new(), username: username.into(), theme }
  }

  pub fn set_theme(&mut self, theme: Theme) {
    self.theme = theme;
  }
}
