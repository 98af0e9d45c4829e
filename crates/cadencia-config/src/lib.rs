mod backend;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use paths::{CadenciaPaths, ConfigError};

use once_cell::sync::Lazy;

// Singleton de paths (CADENCIA_BASE_DIR / system)
pub static PATHS: Lazy<CadenciaPaths> =
  Lazy::new(|| CadenciaPaths::detect().expect("failed to init CadenciaPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> =
  Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
