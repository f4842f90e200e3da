use anyhow::Context;
use tokio::sync::{mpsc::Sender, oneshot};

use crate::{ArcStr, net::Net};

mod core;
pub mod data;
mod message;
mod mock;
pub mod parse;

pub use data::{ItemDetail, ListRequest, Outcome, ResultPage, SearchResultItem};
pub use message::OmdbApiMessage;
pub use parse::OmdbError;

/// The OMDb API actor, a typed interface over the networking actor.
///
/// Two queries are available: a paged title search (optionally filtered by
/// type and year) and a full-plot lookup by IMDb id. An OMDb `"Response":
/// "False"` answer is a successful call that yields [`Outcome::NotFound`];
/// only transport and decoding failures are errors.
///
/// # Examples
/// ```ignore
/// let omdb = OmdbApi::spawn(net, base_url, api_key);
/// let page = omdb.list(ListRequest::search("batman", 1)).await?;
/// ```
///
/// # Thread Safety
/// This type is designed to be safely shared between threads. Cloning is cheap as it only
/// copies the channel sender or mock reference.
#[derive(Debug, Clone)]
pub enum OmdbApi {
    /// A real OMDb actor that performs HTTP requests through the networking actor
    Actual(Sender<OmdbApiMessage>),
    /// A mock implementation for testing
    Mock(mock::Mock),
}

impl OmdbApi {
    /// Creates a new OMDb actor and spawns its core.
    ///
    /// # Arguments
    /// * `net` - The networking actor for making HTTP requests
    /// * `base_url` - Root URL of the API, usually `https://www.omdbapi.com/`
    /// * `api_key` - Key sent as the `apikey` query parameter
    pub fn spawn(net: Net, base_url: ArcStr, api_key: ArcStr) -> Self {
        let (omdb, _) = core::Core::new(net, base_url, api_key).spawn();
        omdb
    }

    /// Creates a mock with no canned answers; every call fails until
    /// answers are registered with [`OmdbApi::mock_list`] and [`OmdbApi::mock_detail`].
    pub fn mock() -> Self {
        Self::Mock(mock::Mock::new())
    }

    /// Registers the answer a mock gives for `request`. `Err` holds the
    /// message of a simulated transport failure.
    pub async fn mock_list(&self, request: ListRequest, answer: Result<Outcome<ResultPage>, ArcStr>) {
        if let Self::Mock(mock) = self {
            mock.set_list(request, answer).await;
        }
    }

    /// Registers the answer a mock gives for a detail lookup of `id`.
    pub async fn mock_detail(&self, id: ArcStr, answer: Result<Outcome<ItemDetail>, ArcStr>) {
        if let Self::Mock(mock) = self {
            mock.set_detail(id, answer).await;
        }
    }

    /// Lists the requests a mock has received, as `list:<term>:<page>` or
    /// `detail:<id>`. `None` for a real actor.
    pub async fn mock_requests(&self) -> Option<Vec<ArcStr>> {
        match self {
            Self::Actual(_) => None,
            Self::Mock(mock) => Some(mock.requests().await),
        }
    }

    /// Fetches one page of search results.
    pub async fn list(&self, request: ListRequest) -> anyhow::Result<Outcome<ResultPage>> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = oneshot::channel();
                sender
                    .send(OmdbApiMessage::List { request, tx })
                    .await
                    .context("Sending message to OmdbApi actor")
                    .expect("OmdbApi actor died");
                rx.await
                    .context("Awaiting response from OmdbApi actor")
                    .expect("OmdbApi actor died")
            }
            Self::Mock(mock) => mock.list(request).await,
        }
    }

    /// Fetches the full detail of one title by IMDb id.
    pub async fn detail(&self, id: ArcStr) -> anyhow::Result<Outcome<ItemDetail>> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = oneshot::channel();
                sender
                    .send(OmdbApiMessage::Detail { id, tx })
                    .await
                    .context("Sending message to OmdbApi actor")
                    .expect("OmdbApi actor died");
                rx.await
                    .context("Awaiting response from OmdbApi actor")
                    .expect("OmdbApi actor died")
            }
            Self::Mock(mock) => mock.detail(id).await,
        }
    }
}
