use anyhow::{Context, Result, bail};
use tokio::sync::{
    mpsc::{Receiver, Sender},
    oneshot,
};
use tokio::task::JoinHandle;

pub mod browse;
pub mod config;
pub mod ui;

mod core;
mod data;
mod message;
#[cfg(test)]
mod tests;

pub use data::Command;
use message::Message;

use crate::{
    api::omdb::OmdbApi,
    app::browse::FeedDefaults,
    log::Log,
    terminal::{Terminal, UiEvent},
};

/// App actor - Central coordinator for the entire application
///
/// Owns the browse controller and the view state, performs the fetches the
/// controller asks for and feeds their results back to it. Either resolves a
/// single [`Command`] and exits, or is spawned to drive the interactive TUI.
#[derive(Debug)]
pub enum App {
    /// Built but not spawned
    Ready(Box<core::Core>),
    /// Spawned, driving the terminal
    Actual(Sender<Message>),
}

impl App {
    /// Builds every actor the application needs.
    ///
    /// The configuration is read from `$HOME/.config/movie-info/config.toml`
    /// and written with the defaults when it cannot be loaded. `api_key`
    /// takes precedence over `OMDB_API_KEY` and over the configured key.
    pub async fn build(api_key: Option<String>) -> Result<Self> {
        let core = core::Core::build(api_key).await?;
        Ok(Self::Ready(Box::new(core)))
    }

    /// Builds an app around already spawned actors.
    pub fn with_actors(omdb: OmdbApi, log: Log, defaults: FeedDefaults) -> Self {
        Self::Ready(Box::new(core::Core::new(omdb, log, defaults)))
    }

    /// Runs a one-shot command and returns what it would print.
    pub async fn report(&mut self, command: Command) -> Result<String> {
        match self {
            Self::Ready(core) => core.run_command(command).await,
            Self::Actual(_) => bail!("App already spawned, cannot resolve"),
        }
    }

    /// Runs a one-shot command, prints its report and flushes the log.
    pub async fn resolve(mut self, command: Command) -> Result<()> {
        let report = self.report(command).await;
        if let Self::Ready(core) = self {
            core.finish().await;
        }
        print!("{}", report?);
        Ok(())
    }

    /// Spawns the app on the real terminal.
    pub fn spawn(self) -> Result<(Self, JoinHandle<()>)> {
        let log = match &self {
            Self::Ready(core) => core.log(),
            Self::Actual(_) => bail!("App already spawned"),
        };
        let (terminal, events) = Terminal::spawn(log)?;
        self.spawn_on(terminal, events)
    }

    /// Spawns the app on `terminal`, reading key presses from `events`.
    ///
    /// The actor takes the terminal over, loads the first page of the default
    /// feed and runs until the user quits, `events` closes or
    /// [`App::shutdown`] is called. It then releases the terminal and flushes
    /// the log.
    pub fn spawn_on(
        self,
        terminal: Terminal,
        events: Receiver<UiEvent>,
    ) -> Result<(Self, JoinHandle<()>)> {
        match self {
            Self::Ready(core) => {
                let (app, handle) = core.spawn(terminal, events);
                Ok((app, handle))
            }
            Self::Actual(_) => bail!("App already spawned"),
        }
    }

    /// Asks a spawned app to stop. Returns once the actor acknowledged it.
    pub async fn shutdown(&self) -> Result<()> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = oneshot::channel();
                sender
                    .send(Message::Shutdown { tx })
                    .await
                    .context("Sending shutdown message to App actor")?;
                rx.await
                    .context("Awaiting response for shutdown from App actor")
            }
            Self::Ready(_) => bail!("App not spawned"),
        }
    }
}
