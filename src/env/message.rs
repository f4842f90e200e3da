use std::env::VarError;

use tokio::sync::oneshot;

use crate::{ArcOsStr, ArcStr};

/// Messages that can be sent to an [`Env`](super::Env) actor.
#[derive(Debug)]
pub enum Message {
    /// Retrieves the value of an environment variable
    Get {
        /// Channel to send the result back to the caller
        tx: oneshot::Sender<Result<ArcStr, VarError>>,
        /// The environment variable name to retrieve
        key: ArcOsStr,
    },
}
