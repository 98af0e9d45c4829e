// crates/cadencia-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Cadencia.
///
/// Las capas superiores (adaptadores, binarios) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
  /// El nombre buscado no existe en la colección destino.
  #[error("not found: {0}")]
  NotFound(String),

  /// Ya existe un elemento con ese nombre (canciones y playlists).
  #[error("duplicate name: {0}")]
  DuplicateName(String),

  /// La operación no es válida en el estado actual del objeto.
  #[error("invalid state: {0}")]
  InvalidState(String),

  #[error("invalid duration: {0} (must be finite and >= 0)")]
  InvalidDuration(f32),

  /// Fallo interno del almacén del catálogo (p. ej. lock envenenado).
  #[error("catalog error: {0}")]
  Catalog(String),
}
