use crate::domain::ids::ArtistId;
use crate::domain::listener::ListenerHandle;
use crate::errors::CoreError;
use crate::ports::SubscriptionRegistry;

/// Artista al que los oyentes se suscriben para recibir avisos.
///
/// Guarda handles a sus suscriptores pero no gestiona su ciclo de vida.
#[derive(Debug, Clone)]
pub struct Artist {
  /// Identificador único del artista.
  pub id: ArtistId,

  /// Nombre canónico; es el que cruza `FilterByArtist` con el catálogo.
  pub name: String,

  subscribers: Vec<ListenerHandle>,
}

impl Artist {
  pub fn new(name: impl Into<String>) -> Self {
    Self { id: ArtistId::new(), name: name.into(), subscribers: Vec::new() }
  }

  /// Añade `message` al final de la bandeja de cada suscriptor, en orden de suscripción.
  ///
  /// # Panics
  ///
  /// Si el llamador mantiene vivo un `borrow()`/`borrow_mut()` de algún
  /// suscriptor durante la llamada (ver `ListenerHandle::borrow_mut`).
  pub fn notify(&self, message: &str) {
    tracing::info!(artist = %self.name, subscribers = self.subscribers.len(), "notify");

    for listener in &self.subscribers {
      listener.borrow_mut().push_notification(message);
    }
  }

  /// Compara por identidad de handle, no por `UserId`.
  pub fn is_subscribed(&self, listener: &ListenerHandle) -> bool {
    self.subscribers.iter().any(|l| l.same_listener(listener))
  }
}

impl SubscriptionRegistry for Artist {
  fn subscribe(&mut self, listener: ListenerHandle) -> bool {
    if self.is_subscribed(&listener) {
      return false;
    }

    tracing::debug!(artist = %self.name, listener = %listener.id(), "subscribe");
    self.subscribers.push(listener);
    true
  }

  fn unsubscribe(&mut self, listener: &ListenerHandle) -> Result<ListenerHandle, CoreError> {
    let idx = self
      .subscribers
      .iter()
      .position(|l| l.same_listener(listener))
      .ok_or_else(|| {
        CoreError::NotFound(format!("subscriber {} of '{}'", listener.id(), self.name))
      })?;

    tracing::debug!(artist = %self.name, listener = %listener.id(), "unsubscribe");
    Ok(self.subscribers.remove(idx))
  }

  fn subscribers(&self) -> &[ListenerHandle] {
    &self.subscribers
  }
}
