use tokio::sync::oneshot;

use crate::app::ui::Screen;

/// Messages that can be sent to the terminal actor.
#[derive(Debug)]
pub enum Message {
    TakeOver {
        tx: oneshot::Sender<anyhow::Result<()>>,
    },
    Release {
        tx: oneshot::Sender<anyhow::Result<()>>,
    },
    /// Render the given screen
    Draw {
        screen: Box<Screen>,
        tx: oneshot::Sender<anyhow::Result<()>>,
    },
}
