pub mod config;
pub mod logging;
pub mod memory;

pub use config::{DiscoverConfig, LogConfig};
pub use memory::MemoryCatalog;
