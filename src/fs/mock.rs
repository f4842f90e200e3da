use std::{
    collections::LinkedList,
    io,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use tempfile::TempDir;
use tokio::fs::{File, OpenOptions};

use crate::ArcPath;

/// Mock implementation of the Fs actor for testing purposes.
///
/// Every path is resolved inside a temporary directory that lives as long as
/// the last clone of the mock.
#[derive(Debug, Clone)]
pub struct Mock {
    temp_dir: Arc<TempDir>,
}

impl Mock {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir for Fs mock");
        Self {
            temp_dir: Arc::new(temp_dir),
        }
    }

    /// Re-roots `path` inside the temporary directory.
    fn mock_path(&self, path: &Path) -> PathBuf {
        let relative: PathBuf = path
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect();
        self.temp_dir.path().join(relative)
    }

    pub async fn read_file(&self, path: ArcPath) -> io::Result<File> {
        OpenOptions::new()
            .read(true)
            .open(self.mock_path(&path))
            .await
    }

    pub async fn write_file(&self, path: ArcPath) -> io::Result<File> {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.mock_path(&path))
            .await
    }

    pub async fn append_file(&self, path: ArcPath) -> io::Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.mock_path(&path))
            .await
    }

    pub async fn remove_file(&self, path: ArcPath) -> io::Result<()> {
        tokio::fs::remove_file(self.mock_path(&path)).await
    }

    /// Lists a directory. Entries are reported with their virtual paths, so
    /// they can be fed back to the other methods.
    pub async fn read_dir(&self, path: ArcPath) -> io::Result<LinkedList<ArcPath>> {
        let entries = super::core::read_dir_entries(&self.mock_path(&path)).await?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                let relative = entry.strip_prefix(self.temp_dir.path()).unwrap_or(&entry);
                ArcPath::from(Path::new("/").join(relative))
            })
            .collect())
    }

    pub async fn mkdir(&self, path: ArcPath) -> io::Result<()> {
        tokio::fs::create_dir_all(self.mock_path(&path)).await
    }
}
