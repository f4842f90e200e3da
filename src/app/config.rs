pub use data::Data;
pub use data::{PathOpt, StrOpt, USizeOpt};
use message::Message;

use crate::{ArcPath, ArcStr, fs::Fs, log::LogLevel};
use anyhow::Context;

mod core;
mod data;
mod message;
mod mock;

/// The configuration actor that provides a thread-safe interface for configuration operations.
///
/// This enum represents either a real configuration actor or a mock implementation
/// for testing purposes. The real actor persists its [`Data`] as TOML.
///
/// # Examples
/// ```ignore
/// let config = Config::spawn(fs, config_path);
/// config.load().await?;
/// let log_dir = config.path(PathOpt::LogDir).await;
/// ```
///
/// # Thread Safety
/// This type is designed to be safely shared between threads. Cloning is cheap as it only
/// copies the channel sender.
#[derive(Debug, Clone)]
pub enum Config {
    /// A real configuration actor that reads from and writes to a file
    Actual(tokio::sync::mpsc::Sender<Message>),
    /// A mock implementation for testing that stores data in memory
    Mock(mock::Mock),
}

impl Config {
    /// Creates a new configuration instance and spawns its actor.
    ///
    /// The actor starts with default values; call [`Config::load`] to read `path`.
    ///
    /// # Arguments
    /// * `fs` - The filesystem actor for file operations
    /// * `path` - The path to the configuration file
    pub fn spawn(fs: Fs, path: ArcPath) -> Self {
        let (config, _) = core::Core::new(fs, path).spawn();
        config
    }

    /// Creates a new mock configuration instance for testing.
    pub fn mock(data: Data) -> Self {
        Self::Mock(mock::Mock::new(data))
    }

    /// Loads the configuration from the file.
    ///
    /// Missing keys fall back to their defaults.
    pub async fn load(&self) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::Load { tx })
                    .await
                    .context("Loading config with Config actor")
                    .expect("Config actor died");
                rx.await
                    .context("Awaiting response for config load with Config actor")
                    .expect("Config actor died")
            }
            Self::Mock(mock) => mock.load().await,
        }
    }

    /// Saves the current configuration to the file, creating its directory.
    pub async fn save(&self) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::Save { tx })
                    .await
                    .context("Saving config with Config actor")
                    .expect("Config actor died");
                rx.await
                    .context("Awaiting response for config save with Config actor")
                    .expect("Config actor died")
            }
            Self::Mock(mock) => mock.save().await,
        }
    }

    /// Gets a path-based configuration value.
    pub async fn path(&self, opt: PathOpt) -> ArcPath {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::GetPath { opt, tx })
                    .await
                    .context("Getting path with Config actor")
                    .expect("Config actor died");
                rx.await
                    .context("Awaiting response for path with Config actor")
                    .expect("Config actor died")
            }
            Self::Mock(mock) => mock.path(opt).await,
        }
    }

    /// Sets a path-based configuration value.
    pub async fn set_path(&self, opt: PathOpt, path: ArcPath) {
        match self {
            Self::Actual(sender) => {
                sender
                    .send(Message::SetPath { opt, path })
                    .await
                    .context("Setting path with Config actor")
                    .expect("Config actor died");
            }
            Self::Mock(mock) => mock.set_path(opt, path).await,
        }
    }

    /// Gets the current log level.
    pub async fn log_level(&self) -> LogLevel {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::GetLogLevel { tx })
                    .await
                    .context("Getting log level with Config actor")
                    .expect("Config actor died");
                rx.await
                    .context("Awaiting response for log level with Config actor")
                    .expect("Config actor died")
            }
            Self::Mock(mock) => mock.log_level().await,
        }
    }

    /// Sets the log level.
    pub async fn set_log_level(&self, level: LogLevel) {
        match self {
            Self::Actual(sender) => {
                let _ = sender.send(Message::SetLogLevel { level }).await;
            }
            Self::Mock(mock) => mock.set_log_level(level).await,
        }
    }

    /// Gets a numeric configuration value.
    pub async fn usize(&self, opt: USizeOpt) -> usize {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::GetUSize { opt, tx })
                    .await
                    .context("Getting numeric value with Config actor")
                    .expect("Config actor died");
                rx.await
                    .context("Awaiting response for numeric value with Config actor")
                    .expect("Config actor died")
            }
            Self::Mock(mock) => mock.usize(opt).await,
        }
    }

    /// Sets a numeric configuration value.
    pub async fn set_usize(&self, opt: USizeOpt, value: usize) {
        match self {
            Self::Actual(sender) => {
                let _ = sender.send(Message::SetUSize { opt, size: value }).await;
            }
            Self::Mock(mock) => mock.set_usize(opt, value).await,
        }
    }

    /// Gets a string configuration value.
    pub async fn str(&self, opt: StrOpt) -> ArcStr {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::GetStr { opt, tx })
                    .await
                    .context("Getting string value with Config actor")
                    .expect("Config actor died");
                rx.await
                    .context("Awaiting response for string value with Config actor")
                    .expect("Config actor died")
            }
            Self::Mock(mock) => mock.str(opt).await,
        }
    }

    /// Sets a string configuration value.
    pub async fn set_str(&self, opt: StrOpt, value: ArcStr) {
        match self {
            Self::Actual(sender) => {
                let _ = sender.send(Message::SetStr { opt, value }).await;
            }
            Self::Mock(mock) => mock.set_str(opt, value).await,
        }
    }
}
