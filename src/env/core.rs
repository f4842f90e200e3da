use std::{env::VarError, sync::Arc};

use tokio::sync::oneshot;

use super::{Env, message::Message};
use crate::{ArcOsStr, ArcStr};

/// The core of the Env actor, responsible for reading environment variables.
#[derive(Debug, Default)]
pub struct Core;

impl Core {
    /// Creates a new Env core instance.
    pub fn new() -> Self {
        Default::default()
    }

    /// Transforms an instance of [`Core`] into an actor ready to receive messages.
    ///
    /// # Returns
    /// A tuple containing:
    /// - An [`Env`] instance that can be used to send messages to the actor
    /// - A join handle for the spawned task
    pub fn spawn(self) -> (Env, tokio::task::JoinHandle<()>) {
        let (tx, mut rx) = tokio::sync::mpsc::channel(crate::BUFFER_SIZE);
        let handle = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                match msg {
                    Message::Get { tx, key } => self.get(tx, key),
                }
            }
        });

        (Env::Actual(tx), handle)
    }

    fn get(&self, tx: oneshot::Sender<Result<ArcStr, VarError>>, key: ArcOsStr) {
        let _ = tx.send(std::env::var(key).map(Arc::from));
    }
}
