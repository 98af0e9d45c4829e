use crate::io::atomic_write_str;
use crate::paths::{CadenciaPaths, ConfigError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

// toml_edit sólo para escribir: conserva comentarios y orden del fichero
use toml_edit::{DocumentMut, Item};

/// Lectura/escritura de una sección `[section]` del fichero de configuración.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: CadenciaPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: CadenciaPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &CadenciaPaths {
    &self.paths
  }

  /// Como `load_section`, pero un fichero o sección ausente devuelve `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(table) = self.read_table()? else {
      tracing::debug!(section, "config file missing, using defaults");
      return Ok(T::default());
    };

    match table.get(section) {
      Some(value) => decode(section, value.clone()),
      None => Ok(T::default()),
    }
  }

  fn read_table(&self) -> Result<Option<toml::Table>, ConfigError> {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    Ok(Some(toml::from_str(&content)?))
  }
}

fn decode<T: DeserializeOwned>(section: &str, value: toml::Value) -> Result<T, ConfigError> {
  value.try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let table: toml::Table = toml::from_str(&fs::read_to_string(&path)?)?;

    let value = table
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode(section, value.clone())
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si todavía no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) La sección serializada con serde es un documento sin cabecera
    //    ("foo = 1\nbar = 2\n"); se reparsea como Item tabla.
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 3) Reemplazar sólo esa sección; el resto del fichero queda intacto.
    doc[section] = section_item;

    atomic_write_str(&path, &doc.to_string())?;
    tracing::debug!(section, path = %path.display(), "config section saved");

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::{TempDir, tempdir};

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    level: String,
    depth: Option<u32>,
  }

  fn backend() -> (TempDir, TomlConfigBackend) {
    let tmp = tempdir().unwrap();
    let paths = CadenciaPaths::under(tmp.path());
    paths.create_dirs().unwrap();
    (tmp, TomlConfigBackend::new(paths))
  }

  #[test]
  fn missing_file_yields_default() {
    let (_tmp, backend) = backend();
    let s: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(s, Sample::default());
  }

  #[test]
  fn save_then_load_section() {
    let (_tmp, backend) = backend();
    let value = Sample { level: "debug".into(), depth: Some(3) };

    backend.save_section("sample", &value).unwrap();

    let loaded: Sample = backend.load_section("sample").unwrap();
    assert_eq!(loaded, value);
  }

  #[test]
  fn save_preserves_other_sections_and_comments() {
    let (_tmp, backend) = backend();
    let path = backend.paths().config_file();
    fs::write(&path, "# keep me\n[other]\nx = 1\n").unwrap();

    backend.save_section("sample", &Sample { level: "warn".into(), depth: None }).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# keep me"));
    assert!(content.contains("[other]"));
    assert!(content.contains("level = \"warn\""));
  }

  #[test]
  fn load_section_reports_missing_section() {
    let (_tmp, backend) = backend();
    fs::write(backend.paths().config_file(), "[other]\nx = 1\n").unwrap();

    let err = backend.load_section::<Sample>("sample").unwrap_err();
    assert!(matches!(err, ConfigError::Other(msg) if msg.contains("[sample]")));

    let fallback: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(fallback, Sample::default());
  }
}
