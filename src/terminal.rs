use anyhow::Context;
use tokio::sync::{
    mpsc::{Receiver, Sender},
    oneshot,
};

use crate::{BUFFER_SIZE, app::ui::Screen, log::Log};

mod core;
mod data;
mod message;
mod mock;
#[cfg(test)]
mod tests;

pub use self::core::TerminalCore;
pub use data::UiEvent;
use message::Message;

/// The terminal actor, sole owner of the screen.
///
/// While taken over, the terminal is in raw mode on the alternate screen and
/// a reader thread forwards key presses as [`UiEvent`]s.
///
/// # Examples
/// ```ignore
/// let (terminal, mut events) = Terminal::spawn(log)?;
/// terminal.take_over().await?;
/// terminal.draw(screen).await?;
/// terminal.release().await?;
/// ```
#[derive(Debug, Clone)]
pub enum Terminal {
    Actual(Sender<Message>),
    Mock(mock::Mock),
}

impl Terminal {
    /// Spawns the terminal actor on stdout and returns it with the stream of
    /// key events, which starts flowing on [`Terminal::take_over`].
    pub fn spawn(log: Log) -> anyhow::Result<(Self, Receiver<UiEvent>)> {
        let (events_tx, events_rx) = tokio::sync::mpsc::channel(BUFFER_SIZE);
        let (terminal, _) = TerminalCore::build(log, events_tx)?.spawn();
        Ok((terminal, events_rx))
    }

    /// Creates a mock terminal that records the screens it is asked to draw.
    pub fn mock() -> Self {
        Self::Mock(mock::Mock::new())
    }

    /// Enters raw mode and the alternate screen.
    pub async fn take_over(&self) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = oneshot::channel();
                sender
                    .send(Message::TakeOver { tx })
                    .await
                    .context("Taking over the terminal")
                    .expect("Terminal actor died");
                rx.await
                    .context("Awaiting terminal take over")
                    .expect("Terminal actor died")
            }
            Self::Mock(mock) => mock.take_over().await,
        }
    }

    /// Hands the terminal back to the shell.
    pub async fn release(&self) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = oneshot::channel();
                sender
                    .send(Message::Release { tx })
                    .await
                    .context("Releasing the terminal")
                    .expect("Terminal actor died");
                rx.await
                    .context("Awaiting terminal release")
                    .expect("Terminal actor died")
            }
            Self::Mock(mock) => mock.release().await,
        }
    }

    /// Draws one frame.
    pub async fn draw(&self, screen: Screen) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = oneshot::channel();
                sender
                    .send(Message::Draw {
                        screen: Box::new(screen),
                        tx,
                    })
                    .await
                    .context("Drawing on the terminal")
                    .expect("Terminal actor died");
                rx.await
                    .context("Awaiting terminal draw")
                    .expect("Terminal actor died")
            }
            Self::Mock(mock) => mock.draw(screen).await,
        }
    }

    /// Screens drawn on a mock, oldest first. `None` for a real terminal.
    pub async fn screens(&self) -> Option<Vec<Screen>> {
        match self {
            Self::Actual(_) => None,
            Self::Mock(mock) => Some(mock.screens().await),
        }
    }

    /// Whether a mock is currently taken over. `None` for a real terminal.
    pub async fn is_taken_over(&self) -> Option<bool> {
        match self {
            Self::Actual(_) => None,
            Self::Mock(mock) => Some(mock.is_taken_over().await),
        }
    }
}
