pub mod admin;
pub mod artist;
pub mod ids;
pub mod listener;
pub mod playlist;
pub mod song;
pub mod user;

pub use admin::Admin;
pub use artist::Artist;
pub use ids::{ArtistId, UserId};
pub use listener::{Listener, ListenerHandle};
pub use playlist::Playlist;
pub use song::{Playback, Song};
pub use user::{Theme, User};
