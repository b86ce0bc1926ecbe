use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// An entigen.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct EntigenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl EntigenToml {
    /// Open and parse an entigen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entigen.toml");
        fs::write(&path, "[project]\nnamespace = \"Shop\"\n").unwrap();

        let file = EntigenToml::open(&path).unwrap();

        assert_eq!(file.path(), path.as_path());
        assert!(file.content().starts_with("[project]"));
        assert_eq!(file.manifest().project.namespace.get_ref(), "Shop");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = EntigenToml::open(dir.path().join("entigen.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
