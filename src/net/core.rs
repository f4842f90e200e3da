use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use tokio::task::JoinHandle;

use super::{Net, message::Message};
use crate::{
    ArcStr, BUFFER_SIZE,
    app::config::{Config, USizeOpt},
    log::Log,
};

const SCOPE: &str = "net";

/// The core of the networking system that handles HTTP requests.
///
/// Wraps a [`reqwest::Client`] built with the configured timeout. The client
/// is internally reference counted, so every request task gets its own clone
/// sharing one connection pool.
#[derive(Debug)]
pub struct Core {
    /// Logging interface for operation logging
    log: Log,
    /// HTTP client for making requests
    client: Client,
}

impl Core {
    /// Builds the HTTP client from the network settings in `config`.
    pub async fn build(config: Config, log: Log) -> anyhow::Result<Self> {
        let timeout = config.usize(USizeOpt::Timeout).await;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout as u64))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Building the HTTP client")?;

        Ok(Self { log, client })
    }

    /// Transforms the networking core instance into an actor.
    pub fn spawn(self) -> (Net, JoinHandle<()>) {
        let (tx, mut rx) = tokio::sync::mpsc::channel(BUFFER_SIZE);

        let handle = tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                match message {
                    Message::Get { url, tx } => {
                        let client = self.client.clone();
                        let log = self.log.clone();
                        tokio::spawn(async move {
                            let response = handle_get_request(&client, &log, &url)
                                .await
                                .with_context(|| format!("GET request failed for URL: {}", url));
                            let _ = tx.send(response);
                        });
                    }
                }
            }
        });

        (Net::Actual(tx), handle)
    }
}

async fn handle_get_request(client: &Client, log: &Log, url: &str) -> anyhow::Result<ArcStr> {
    log.info(SCOPE, format!("GET {}", redact(url)));
    let response = client.get(url).send().await.context("Sending GET request")?;

    let status = response.status();
    if !status.is_success() {
        log.warn(SCOPE, format!("GET {} answered {}", redact(url), status));
    }

    let text = response.text().await.context("Reading response body")?;
    Ok(ArcStr::from(text))
}

/// Hides the value of the `apikey` query parameter.
fn redact(url: &str) -> String {
    let Ok(mut parsed) = reqwest::Url::parse(url) else {
        return url.to_string();
    };
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        return url.to_string();
    }
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}
