use std::fmt;
use std::sync::Arc;

use crate::discovery::filter::{Filter, FilterBySubstring, MatchCase};
use crate::domain::song::Song;
use crate::errors::CoreError;
use crate::ports::SongCatalog;

/// Punto de entrada de búsqueda: guarda una consulta y el filtro activo.
///
/// El catálogo se inyecta al construir y se pasa al filtro en cada ejecución.
/// El filtro es un handle compartido: quien lo crea puede conservarlo y
/// `set_filter` sólo reemplaza la referencia (gana el último).
pub struct Discover {
  pub search_query: String,
  match_case: MatchCase,
  filter: Option<Arc<dyn Filter>>,
  catalog: Arc<dyn SongCatalog>,
}

impl Discover {
  pub fn new(catalog: Arc<dyn SongCatalog>) -> Self {
    Self { search_query: String::new(), match_case: MatchCase::default(), filter: None, catalog }
  }

  /// Sensibilidad usada por `search`.
  pub fn with_match_case(mut self, match_case: MatchCase) -> Self {
    self.match_case = match_case;
    self
  }

  pub fn set_filter(&mut self, new_filter: Arc<dyn Filter>) {
    self.filter = Some(new_filter);
  }

  pub fn has_filter(&self) -> bool {
    self.filter.is_some()
  }

  pub fn set_search_query(&mut self, query: impl Into<String>) {
    self.search_query = query.into();
  }

  /// Ejecuta el filtro activo sobre el catálogo.
  pub fn execute_filter(&self) -> Result<Vec<Song>, CoreError> {
    let filter = self
      .filter
      .as_ref()
      .ok_or_else(|| CoreError::InvalidState("execute_filter called before set_filter".into()))?;

    filter.apply(self.catalog.as_ref())
  }

  /// Guarda `query`, instala un `FilterBySubstring` con ella y lo ejecuta.
  pub fn search(&mut self, query: &str) -> Result<Vec<Song>, CoreError> {
    self.set_search_query(query);
    self.set_filter(Arc::new(FilterBySubstring::new(query).with_match_case(self.match_case)));
    self.execute_filter()
  }
}

impl fmt::Debug for Discover {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Discover")
      .field("search_query", &self.search_query)
      .field("match_case", &self.match_case)
      .field("has_filter", &self.filter.is_some())
      .finish()
  }
}
