//! Búsqueda de canciones sobre el catálogo: filtros intercambiables y el
//! objeto `Discover` que los ejecuta.

pub mod discover;
pub mod filter;

pub use discover::Discover;
pub use filter::{Filter, FilterByArtist, FilterBySubstring, MatchCase};
