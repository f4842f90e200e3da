use std::{collections::LinkedList, io};

use anyhow::Context;
use tokio::{fs::File, sync::mpsc::Sender};

use crate::ArcPath;

mod core;
mod message;
mod mock;
#[cfg(test)]
mod tests;

pub use self::core::Core;
use message::Message;

/// The filesystem actor that provides a thread-safe interface for file operations.
///
/// Files are handed back as plain [`tokio::fs::File`] handles; the actor only
/// serializes the open/create/remove calls. Used by the configuration actor
/// to read and write `config.toml` and by the logger for its log files.
///
/// # Examples
/// ```ignore
/// let fs = Fs::spawn();
/// let mut file = fs.write_file(path).await?;
/// file.write_all(b"hello").await?;
/// ```
///
/// # Thread Safety
/// This type is designed to be safely shared between threads. Cloning is cheap as it only
/// copies the channel sender or mock reference.
#[derive(Debug, Clone)]
pub enum Fs {
    /// A real filesystem actor
    Actual(Sender<Message>),
    /// A mock rooted in a temporary directory
    Mock(mock::Mock),
}

impl Fs {
    /// Creates a new filesystem instance and spawns its actor.
    pub fn spawn() -> Self {
        let (fs, _) = Core::new().spawn();
        fs
    }

    /// Creates a new mock filesystem rooted in a fresh temporary directory.
    ///
    /// Absolute paths are re-rooted inside the temporary directory, so
    /// `/tmp/movie-info/logs` ends up at `<tempdir>/tmp/movie-info/logs`.
    pub fn mock() -> Self {
        Self::Mock(mock::Mock::new())
    }

    /// Opens an existing file for reading.
    pub async fn read_file(&self, path: ArcPath) -> io::Result<File> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::ReadFile { tx, path })
                    .await
                    .context("Opening file for reading with Fs")
                    .expect("Fs actor died");
                rx.await
                    .context("Awaiting response for file read with Fs")
                    .expect("Fs actor died")
            }
            Self::Mock(mock) => mock.read_file(path).await,
        }
    }

    /// Opens a file for writing, truncating it and creating it if needed.
    pub async fn write_file(&self, path: ArcPath) -> io::Result<File> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::WriteFile { tx, path })
                    .await
                    .context("Opening file for writing with Fs")
                    .expect("Fs actor died");
                rx.await
                    .context("Awaiting response for file write with Fs")
                    .expect("Fs actor died")
            }
            Self::Mock(mock) => mock.write_file(path).await,
        }
    }

    /// Opens a file for appending, creating it if needed.
    pub async fn append_file(&self, path: ArcPath) -> io::Result<File> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::AppendFile { tx, path })
                    .await
                    .context("Opening file for appending with Fs")
                    .expect("Fs actor died");
                rx.await
                    .context("Awaiting response for file append with Fs")
                    .expect("Fs actor died")
            }
            Self::Mock(mock) => mock.append_file(path).await,
        }
    }

    /// Removes a file from the filesystem.
    pub async fn remove_file(&self, path: ArcPath) -> io::Result<()> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::RemoveFile { tx, path })
                    .await
                    .context("Removing file with Fs")
                    .expect("Fs actor died");
                rx.await
                    .context("Awaiting response for file removal with Fs")
                    .expect("Fs actor died")
            }
            Self::Mock(mock) => mock.remove_file(path).await,
        }
    }

    /// Lists the entries of a directory.
    pub async fn read_dir(&self, path: ArcPath) -> io::Result<LinkedList<ArcPath>> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::ReadDir { tx, path })
                    .await
                    .context("Reading directory with Fs")
                    .expect("Fs actor died");
                rx.await
                    .context("Awaiting response for directory read with Fs")
                    .expect("Fs actor died")
            }
            Self::Mock(mock) => mock.read_dir(path).await,
        }
    }

    /// Creates a directory and all of its parents.
    pub async fn mkdir(&self, path: ArcPath) -> io::Result<()> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::MkDir { tx, path })
                    .await
                    .context("Creating directory with Fs")
                    .expect("Fs actor died");
                rx.await
                    .context("Awaiting response for directory creation with Fs")
                    .expect("Fs actor died")
            }
            Self::Mock(mock) => mock.mkdir(path).await,
        }
    }
}
