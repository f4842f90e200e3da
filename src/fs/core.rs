use std::{collections::LinkedList, io};

use tokio::{
    fs::OpenOptions,
    sync::{mpsc, oneshot},
};

use super::message::Message;
use crate::ArcPath;

/// The core of the Fs actor, responsible for handling filesystem operations.
///
/// Every request is answered with a fresh handle; nothing is cached.
#[derive(Debug, Default)]
pub struct Core;

impl Core {
    pub fn new() -> Self {
        Default::default()
    }

    /// Transforms an instance of [`Core`] into an actor ready to receive messages.
    pub fn spawn(self) -> (super::Fs, tokio::task::JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel(crate::BUFFER_SIZE);
        let handle = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                use Message::*;
                match msg {
                    ReadFile { tx, path } => {
                        let res = OpenOptions::new().read(true).open(&path).await;
                        let _ = tx.send(res);
                    }
                    WriteFile { tx, path } => {
                        let res = OpenOptions::new()
                            .write(true)
                            .create(true)
                            .truncate(true)
                            .open(&path)
                            .await;
                        let _ = tx.send(res);
                    }
                    AppendFile { tx, path } => {
                        let res = OpenOptions::new()
                            .create(true)
                            .append(true)
                            .open(&path)
                            .await;
                        let _ = tx.send(res);
                    }
                    RemoveFile { tx, path } => {
                        let _ = tx.send(tokio::fs::remove_file(&path).await);
                    }
                    ReadDir { tx, path } => Self::read_dir(tx, path).await,
                    MkDir { tx, path } => {
                        let _ = tx.send(tokio::fs::create_dir_all(&path).await);
                    }
                }
            }
        });
        (super::Fs::Actual(tx), handle)
    }

    async fn read_dir(tx: oneshot::Sender<io::Result<LinkedList<ArcPath>>>, path: ArcPath) {
        let _ = tx.send(read_dir_entries(&path).await);
    }
}

/// Collects the paths of every entry directly under `path`.
pub(super) async fn read_dir_entries(path: &std::path::Path) -> io::Result<LinkedList<ArcPath>> {
    let mut rd = tokio::fs::read_dir(path).await?;
    let mut entries = LinkedList::new();
    while let Some(entry) = rd.next_entry().await? {
        entries.push_back(ArcPath::from(entry.path()));
    }
    Ok(entries)
}

