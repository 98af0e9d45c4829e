use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::domain::ids::UserId;
use crate::domain::playlist::Playlist;
use crate::domain::user::{Theme, User};
use crate::errors::CoreError;

/// Oyente: un `User` con playlists propias y una bandeja de notificaciones.
///
/// Los nombres de playlist son únicos dentro de un mismo oyente. La bandeja
/// sólo la alimenta `Artist::notify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ListenerRecord")]
pub struct Listener {
  user: User,
  playlists: Vec<Playlist>,
  notifications: Vec<String>,
}

#[derive(Deserialize)]
struct ListenerRecord {
  user: User,
  #[serde(default)]
  playlists: Vec<Playlist>,
  #[serde(default)]
  notifications: Vec<String>,
}

impl TryFrom<ListenerRecord> for Listener {
  type Error = CoreError;

  fn try_from(r: ListenerRecord) -> Result<Self, Self::Error> {
    let mut listener = Listener::from_user(r.user);
    for playlist in r.playlists {
      listener.insert_playlist(playlist)?;
    }
    listener.notifications = r.notifications;
    Ok(listener)
  }
}

impl Listener {
  pub fn new(username: impl Into<String>, theme: Theme) -> Self {
    Self::from_user(User::new(username, theme))
  }

  pub fn from_user(user: User) -> Self {
    Self { user, playlists: Vec::new(), notifications: Vec::new() }
  }

  pub fn id(&self) -> UserId {
    self.user.id
  }

  pub fn user(&self) -> &User {
    &self.user
  }

  pub fn set_theme(&mut self, theme: Theme) {
    self.user.set_theme(theme);
  }

  /// Crea una playlist vacía al final de la colección y la devuelve.
  pub fn create_playlist(&mut self, name: &str) -> Result<&mut Playlist, CoreError> {
    tracing::debug!(listener = %self.user.username, playlist = %name, "create playlist");
    self.insert_playlist(Playlist::new(name))
  }

  fn insert_playlist(&mut self, playlist: Playlist) -> Result<&mut Playlist, CoreError> {
    if self.playlist(&playlist.name).is_some() {
      return Err(CoreError::DuplicateName(playlist.name));
    }

    self.playlists.push(playlist);
    let idx = self.playlists.len() - 1;
    Ok(&mut self.playlists[idx])
  }

  pub fn delete_playlist(&mut self, name: &str) -> Result<Playlist, CoreError> {
    let idx = self
      .playlists
      .iter()
      .position(|p| p.name == name)
      .ok_or_else(|| CoreError::NotFound(format!("playlist '{name}'")))?;

    tracing::debug!(listener = %self.user.username, playlist = %name, "delete playlist");
    Ok(self.playlists.remove(idx))
  }

  pub fn playlist(&self, name: &str) -> Option<&Playlist> {
    self.playlists.iter().find(|p| p.name == name)
  }

  pub fn playlist_mut(&mut self, name: &str) -> Option<&mut Playlist> {
    self.playlists.iter_mut().find(|p| p.name == name)
  }

  pub fn playlists(&self) -> &[Playlist] {
    &self.playlists
  }

  pub fn notifications(&self) -> &[String] {
    &self.notifications
  }

  /// Vacía la bandeja y devuelve lo que había, en orden de llegada.
  pub fn take_notifications(&mut self) -> Vec<String> {
    std::mem::take(&mut self.notifications)
  }

  pub(crate) fn push_notification(&mut self, message: &str) {
    self.notifications.push(message.to_string());
  }
}

/// Referencia compartida y no propietaria a un `Listener`.
///
/// Un solo hilo: el oyente vive en un `Rc<RefCell<_>>` y cualquier clon del
/// handle apunta al mismo oyente. La identidad es la del puntero, no el
/// `UserId`: dos oyentes distintos con el mismo usuario son handles distintos.
#[derive(Debug, Clone)]
pub struct ListenerHandle {
  inner: Rc<RefCell<Listener>>,
}

impl ListenerHandle {
  pub fn new(listener: Listener) -> Self {
    Self { inner: Rc::new(RefCell::new(listener)) }
  }

  /// Panics si el oyente está prestado mutablemente en ese momento.
  pub fn id(&self) -> UserId {
    self.inner.borrow().id()
  }

  /// `true` si ambos handles apuntan al mismo oyente.
  pub fn same_listener(&self, other: &ListenerHandle) -> bool {
    Rc::ptr_eq(&self.inner, &other.inner)
  }

  /// Panics si el oyente está prestado mutablemente en otro sitio.
  pub fn borrow(&self) -> Ref<'_, Listener> {
    self.inner.borrow()
  }

  /// Panics si queda vivo cualquier otro préstamo (`borrow` o `borrow_mut`)
  /// del mismo oyente; `Artist::notify` pasa por aquí.
  pub fn borrow_mut(&self) -> RefMut<'_, Listener> {
    self.inner.borrow_mut()
  }
}

impl From<Listener> for ListenerHandle {
  fn from(listener: Listener) -> Self {
    Self::new(listener)
  }
}

impl PartialEq for ListenerHandle {
  fn eq(&self, other: &Self) -> bool {
    self.same_listener(other)
  }
}

impl Eq for ListenerHandle {}
