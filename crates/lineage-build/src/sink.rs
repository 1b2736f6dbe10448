//! Output sinks for generated artifacts.

use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// SinkError
///

#[derive(Debug, ThisError)]
pub enum SinkError {
    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

///
/// OutputSink
///
/// Receives each finished artifact by name; the sink decides the final path.
///

pub trait OutputSink {
    fn write(&mut self, name: &str, content: &str, directory: &Path) -> Result<(), SinkError>;
}

///
/// WrittenFile
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub content: String,
}

///
/// MemorySink
///
/// Collects writes instead of touching the filesystem.
///

#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub files: Vec<WrittenFile>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&WrittenFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, name: &str, content: &str, directory: &Path) -> Result<(), SinkError> {
        self.files.push(WrittenFile {
            path: directory.join(name),
            content: content.to_string(),
        });

        Ok(())
    }
}

///
/// DirectorySink
///
/// Writes `<directory>/<name>`, creating the directory first.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DirectorySink;

impl OutputSink for DirectorySink {
    fn write(&mut self, name: &str, content: &str, directory: &Path) -> Result<(), SinkError> {
        fs::create_dir_all(directory).map_err(|source| SinkError::Io {
            path: directory.to_path_buf(),
            source,
        })?;

        let path = directory.join(name);
        fs::write(&path, content).map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "wrote artifact");

        Ok(())
    }
}

///
/// TESTS
///
