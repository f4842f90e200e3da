use std::env::VarError;

use anyhow::Context;
use tokio::sync::mpsc::Sender;

use crate::{ArcOsStr, ArcStr};

mod core;
mod message;
mod mock;
#[cfg(test)]
mod tests;

pub use self::core::Core;
use message::Message;

/// The env actor is responsible for reading environment variables.
///
/// This enum represents either a real environment actor or a mock implementation
/// for testing purposes. The application only reads the environment (for `HOME`
/// and `OMDB_API_KEY`), so no mutating operations are exposed.
///
/// # Examples
/// ```ignore
/// let env = Env::spawn();
/// let home = env.env(arc_os_str("HOME")).await?;
/// ```
///
/// # Thread Safety
/// This type is designed to be safely shared between threads. Cloning is cheap as it only
/// copies the channel sender or mock reference.
#[derive(Debug, Clone)]
pub enum Env {
    /// A real environment actor that reads the process environment
    Actual(Sender<Message>),
    /// A mock implementation for testing
    Mock(mock::Mock),
}

impl Env {
    /// Creates a new env instance and spawns its actor.
    pub fn spawn() -> Self {
        let (env, _) = Core::new().spawn();
        env
    }

    /// Creates a new mock instance with no variables set.
    pub fn mock() -> Self {
        Self::Mock(mock::Mock::new())
    }

    /// Creates a new mock instance populated with `variables`.
    pub fn mock_with<I, K, V>(variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<ArcOsStr>,
        V: Into<ArcStr>,
    {
        Self::Mock(mock::Mock::with_variables(
            variables
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Gets an environment variable.
    ///
    /// # Returns
    /// The variable value, or the [`VarError`] reported by the OS.
    pub async fn env(&self, key: ArcOsStr) -> Result<ArcStr, VarError> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::Get { tx, key })
                    .await
                    .context("Getting environment variable with Env")
                    .expect("Env actor died");
                rx.await
                    .context("Awaiting response for environment variable get with Env")
                    .expect("Env actor died")
            }
            Self::Mock(mock) => mock.env(key).await,
        }
    }
}
