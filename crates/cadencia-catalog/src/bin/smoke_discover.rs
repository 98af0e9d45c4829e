use std::sync::Arc;

use cadencia_catalog::{DiscoverConfig, LogConfig, MemoryCatalog, logging};
use cadencia_core::discovery::FilterByArtist;
use cadencia_core::domain::{Admin, Artist, Listener, ListenerHandle, Song, Theme};
use cadencia_core::ports::{SongCatalog, SubscriptionRegistry};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  logging::init(&LogConfig::load()?)?;

  let catalog = Arc::new(MemoryCatalog::new());
  let admin = Admin::new("admin", Theme::Dark);
  let seed = [
    ("Riff A", "https://cdn.example/riff-a.ogg", 184.0, "Band"),
    ("Riff B", "https://cdn.example/riff-b.ogg", 201.5, "Band"),
    ("Solo", "https://cdn.example/solo.ogg", 95.0, "Guitarist"),
  ];
  for (name, url, duration, artist) in seed {
    admin.add_song_to_database(catalog.as_ref(), Song::new(name, url, duration, false)?, artist)?;
  }
  println!("Catalog loaded: {} songs", catalog.len()?);

  let mut discover = DiscoverConfig::load()?.discover(catalog.clone());
  let riffs = discover.search("Riff")?;
  println!("search {:?} -> {} songs", discover.search_query, riffs.len());

  let listener = ListenerHandle::new(Listener::new("ana", Theme::Light));
  {
    let mut l = listener.borrow_mut();
    let playlist = l.create_playlist("Riffs")?;
    for song in riffs {
      playlist.add_song(song)?;
    }
    println!("playlist 'Riffs': {:.1}s", playlist.total_duration());
  }

  discover.set_filter(Arc::new(FilterByArtist::new("Guitarist")));
  for song in discover.execute_filter()? {
    println!("Guitarist: {} -> {:?}", song.name(), song.play());
  }

  let mut band = Artist::new("Band");
  band.subscribe(listener.clone());
  band.notify("New release!");
  println!("Inbox of ana: {:?}", listener.borrow().notifications());

  Ok(())
}
