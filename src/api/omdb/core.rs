use anyhow::Context;
use reqwest::Url;
use tokio::task::JoinHandle;

use super::{
    OmdbApi,
    data::{ItemDetail, ListRequest, Outcome, ResultPage},
    message::OmdbApiMessage,
    parse,
};
use crate::{ArcStr, BUFFER_SIZE, net::Net};

/// The core of the OMDb actor: URL construction plus decoding.
///
/// Each request runs in its own task so list and detail lookups never wait
/// on each other.
#[derive(Debug, Clone)]
pub struct Core {
    /// The networking actor for making HTTP requests
    net: Net,
    /// Root URL of the API
    base_url: ArcStr,
    /// Key sent with every request
    api_key: ArcStr,
}

impl Core {
    pub fn new(net: Net, base_url: ArcStr, api_key: ArcStr) -> Self {
        Self {
            net,
            base_url,
            api_key,
        }
    }

    /// Transforms the OMDb core instance into an actor.
    pub fn spawn(self) -> (OmdbApi, JoinHandle<()>) {
        let (tx, mut rx) = tokio::sync::mpsc::channel(BUFFER_SIZE);

        let handle = tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                let core = self.clone();
                match message {
                    OmdbApiMessage::List { request, tx } => {
                        tokio::spawn(async move {
                            let response = core.handle_list(&request).await.with_context(|| {
                                format!("OMDb list failed for {:?} page {}", request.term, request.page)
                            });
                            let _ = tx.send(response);
                        });
                    }
                    OmdbApiMessage::Detail { id, tx } => {
                        tokio::spawn(async move {
                            let response = core
                                .handle_detail(&id)
                                .await
                                .with_context(|| format!("OMDb detail failed for {}", id));
                            let _ = tx.send(response);
                        });
                    }
                }
            }
        });

        (OmdbApi::Actual(tx), handle)
    }

    async fn handle_list(&self, request: &ListRequest) -> anyhow::Result<Outcome<ResultPage>> {
        let url = list_url(&self.base_url, &self.api_key, request)?;
        let body = self.net.get(ArcStr::from(url.as_str())).await?;
        Ok(parse::parse_list(&body)?)
    }

    async fn handle_detail(&self, id: &str) -> anyhow::Result<Outcome<ItemDetail>> {
        let url = detail_url(&self.base_url, &self.api_key, id)?;
        let body = self.net.get(ArcStr::from(url.as_str())).await?;
        Ok(parse::parse_detail(&body)?)
    }
}

/// `?apikey=..&s=..[&type=..][&y=..]&page=..`
pub(super) fn list_url(base_url: &str, api_key: &str, request: &ListRequest) -> anyhow::Result<Url> {
    let page = request.page.to_string();
    let mut params: Vec<(&str, &str)> = vec![("apikey", api_key), ("s", &*request.term)];
    if let Some(kind) = &request.kind {
        params.push(("type", &**kind));
    }
    if let Some(year) = &request.year {
        params.push(("y", &**year));
    }
    params.push(("page", page.as_str()));
    Url::parse_with_params(base_url, &params)
        .with_context(|| format!("Invalid OMDb base URL {}", base_url))
}

/// `?apikey=..&i=..&plot=full`
pub(super) fn detail_url(base_url: &str, api_key: &str, id: &str) -> anyhow::Result<Url> {
    Url::parse_with_params(base_url, &[("apikey", api_key), ("i", id), ("plot", "full")])
        .with_context(|| format!("Invalid OMDb base URL {}", base_url))
}
