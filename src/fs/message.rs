use std::{collections::LinkedList, io};

use tokio::{fs::File, sync::oneshot};

use crate::ArcPath;

/// Messages that can be sent to a [`Fs`](super::Fs) actor.
#[derive(Debug)]
pub enum Message {
    /// Opens an existing file for reading
    ReadFile {
        tx: oneshot::Sender<io::Result<File>>,
        path: ArcPath,
    },
    /// Opens a file for writing, truncating existing content
    WriteFile {
        tx: oneshot::Sender<io::Result<File>>,
        path: ArcPath,
    },
    /// Opens a file for appending
    AppendFile {
        tx: oneshot::Sender<io::Result<File>>,
        path: ArcPath,
    },
    /// Removes a file from the filesystem
    RemoveFile {
        tx: oneshot::Sender<io::Result<()>>,
        path: ArcPath,
    },
    /// Reads the contents of a directory
    ReadDir {
        tx: oneshot::Sender<io::Result<LinkedList<ArcPath>>>,
        path: ArcPath,
    },
    /// Creates a directory and its parents
    MkDir {
        tx: oneshot::Sender<io::Result<()>>,
        path: ArcPath,
    },
}
