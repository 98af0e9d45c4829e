pub mod catalog;
pub mod subscriptions;

pub use catalog::{CatalogEntry, SongCatalog};
pub use subscriptions::SubscriptionRegistry;
