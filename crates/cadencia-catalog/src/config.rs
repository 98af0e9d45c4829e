use cadencia_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};
use cadencia_core::discovery::{Discover, MatchCase};
use cadencia_core::ports::SongCatalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Sección `[discover]` de cadencia.toml.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DiscoverConfig {
  /// Sensibilidad a mayúsculas de `Discover::search`.
  #[serde(default)]
  pub match_case: MatchCase,
}

impl DiscoverConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  /// Variante para tests: inyectar un backend distinto.
  /// Escribe de vuelta la sección para que los valores por defecto queden visibles.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default("discover")?;
    backend.save_section("discover", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("discover", self)
  }

  pub fn discover(&self, catalog: Arc<dyn SongCatalog>) -> Discover {
    Discover::new(catalog).with_match_case(self.match_case)
  }
}

/// Sección `[log]`: directiva de `tracing_subscriber::EnvFilter`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
  #[serde(default = "default_filter")]
  pub filter: String,
}

fn default_filter() -> String {
  "info".into()
}

impl Default for LogConfig {
  fn default() -> Self {
    LogConfig { filter: default_filter() }
  }
}

impl LogConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default("log")?;
    backend.save_section("log", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("log", self)
  }
}
