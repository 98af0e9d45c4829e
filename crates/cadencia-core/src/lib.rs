pub mod discovery;
pub mod domain;
pub mod errors;
pub mod ports;

pub use errors::CoreError;

#[cfg(test)]
pub(crate) mod testing;
