use crate::domain::listener::ListenerHandle;
use crate::errors::CoreError;

/// Registro de suscripciones artista ↔ oyente, por identidad de handle.
pub trait SubscriptionRegistry {
  /// Devuelve `false` si el oyente ya estaba suscrito.
  fn subscribe(&mut self, listener: ListenerHandle) -> bool;
  /// Quita el handle que apunta al mismo oyente que `listener`.
  fn unsubscribe(&mut self, listener: &ListenerHandle) -> Result<ListenerHandle, CoreError>;
  fn subscribers(&self) -> &[ListenerHandle];
}
