use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Escribe `contents` en `path` sin dejar nunca un fichero a medias.
///
/// El contenido va primero a un temporal junto al destino (mismo sistema de
/// ficheros, así `rename` es atómico); si algo falla, el temporal se borra y
/// el fichero original queda como estaba.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }

  let staging = staging_path(path);
  let written = write_synced(&staging, contents.as_bytes()).and_then(|()| fs::rename(&staging, path));

  if written.is_err() {
    let _ = fs::remove_file(&staging);
  }
  written
}

// cadencia.toml -> cadencia.toml.<pid>.tmp
fn staging_path(path: &Path) -> PathBuf {
  let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
  name.push(format!(".{}.tmp", std::process::id()));
  path.with_file_name(name)
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
  let mut file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
  file.write_all(bytes)?;
  file.sync_all()
}
