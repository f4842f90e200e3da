use tokio::sync::oneshot::Sender;

use super::data::{ItemDetail, ListRequest, Outcome, ResultPage};
use crate::ArcStr;

/// Messages that can be sent to the OMDb actor.
#[derive(Debug)]
pub enum OmdbApiMessage {
    /// Fetches one page of list results
    List {
        request: ListRequest,
        tx: Sender<anyhow::Result<Outcome<ResultPage>>>,
    },
    /// Fetches the full detail of one title
    Detail {
        id: ArcStr,
        tx: Sender<anyhow::Result<Outcome<ItemDetail>>>,
    },
}
