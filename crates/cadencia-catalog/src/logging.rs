use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Instala el subscriber `fmt` global. `RUST_LOG` tiene prioridad sobre `[log] filter`.
///
/// Falla si ya había un subscriber global instalado.
pub fn init(cfg: &LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cfg.filter))?;

  tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init()
}
