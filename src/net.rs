use anyhow::Context;
use std::collections::HashMap;
use tokio::sync::mpsc::Sender;

use crate::{ArcStr, app::config::Config, log::Log};

mod core;
mod message;
mod mock;
#[cfg(test)]
mod tests;

pub use self::core::Core;
use message::Message;

/// The networking actor that provides a thread-safe interface for network operations.
///
/// Requests are answered concurrently: the actor hands each one to its own
/// task, so a slow response never holds up the ones behind it.
///
/// # Examples
/// ```ignore
/// let net = Net::spawn(config, log).await?;
/// let body = net.get(url).await?;
/// ```
///
/// # Thread Safety
/// This type is designed to be safely shared between threads. Cloning is cheap as it only
/// copies the channel sender or mock reference.
#[derive(Debug, Clone)]
pub enum Net {
    /// A real networking actor that performs HTTP requests
    Actual(Sender<Message>),
    /// A mock implementation for testing
    Mock(mock::Mock),
}

impl Net {
    /// Creates a new networking instance and spawns its actor.
    ///
    /// The request timeout is read from `config` once, at spawn time.
    pub async fn spawn(config: Config, log: Log) -> anyhow::Result<Self> {
        let (net, _) = Core::build(config, log).await?.spawn();
        Ok(net)
    }

    /// Creates a new mock networking instance that answers from `responses`,
    /// keyed by full URL. Unknown URLs fail like an unreachable host.
    pub fn mock(responses: HashMap<ArcStr, ArcStr>) -> Self {
        Self::Mock(mock::Mock::new(responses))
    }

    /// Performs an HTTP GET request and returns the response body.
    ///
    /// Any response that arrives counts as a success, whatever its status;
    /// only transport failures (including the timeout) are errors.
    pub async fn get(&self, url: ArcStr) -> anyhow::Result<ArcStr> {
        match self {
            Net::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::Get { url, tx })
                    .await
                    .context("Sending message to Net actor")
                    .expect("Net actor died");
                rx.await
                    .context("Awaiting response from Net actor")
                    .expect("Net actor died")
            }
            Net::Mock(mock) => mock.get(url).await,
        }
    }

    /// Returns every URL requested from a mock, in order. `None` for a real actor.
    pub async fn requests(&self) -> Option<Vec<ArcStr>> {
        match self {
            Net::Actual(_) => None,
            Net::Mock(mock) => Some(mock.requests().await),
        }
    }
}
