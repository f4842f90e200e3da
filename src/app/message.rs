use anyhow::Result;
use tokio::sync::oneshot;

use crate::{
    ArcStr,
    api::omdb::{ItemDetail, Outcome, ResultPage},
};

/// Messages for communicating with the App actor
#[derive(Debug)]
pub enum Message {
    /// A list fetch finished
    ListDone {
        seq: u64,
        result: Result<Outcome<ResultPage>>,
    },
    /// A detail fetch finished
    DetailDone {
        seq: u64,
        id: ArcStr,
        result: Result<Outcome<ItemDetail>>,
    },
    /// Stop the interactive loop
    Shutdown { tx: oneshot::Sender<()> },
}
