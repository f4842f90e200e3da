use std::fmt::Display;

use tokio::sync::{
    mpsc::{Sender, error::TrySendError},
    oneshot,
};

mod core;
mod data;
mod message;
mod mock;
#[cfg(test)]
mod tests;

pub use self::core::LogCore;
pub use data::{LogLevel, LogMessage};
use message::Message;

use crate::{ArcPath, fs::Fs};

/// The logging actor that provides a thread-safe interface for logging operations.
///
/// Every message carries a scope (the module that emitted it, e.g. `"app"` or
/// `"api.omdb"`). Messages always go to the log files; the ones at or above the
/// configured level are also printed to stderr when the logger is flushed,
/// which happens after the terminal has been released.
///
/// # Examples
/// ```ignore
/// let log = Log::spawn(fs, LogLevel::Warning, 0, log_dir).await?;
/// log.info("app", "Application started");
/// ```
///
/// # Thread Safety
/// This type is designed to be safely shared between threads. Cloning is cheap as it only
/// copies the channel sender.
#[derive(Debug, Clone)]
pub enum Log {
    /// A real logging actor that writes to files and stderr
    Actual(Sender<Message>),
    /// A mock that keeps messages in memory
    Mock(mock::Mock),
}

impl Log {
    /// Builds the log files under `log_dir` and spawns the logging actor.
    ///
    /// # Arguments
    /// * `fs` - Filesystem actor used to create the log files
    /// * `level` - Minimum level for messages to be printed to stderr on flush
    /// * `max_age` - Maximum age of log files in days, 0 keeps them forever
    /// * `log_dir` - Directory where log files are stored
    pub async fn spawn(
        fs: Fs,
        level: LogLevel,
        max_age: usize,
        log_dir: ArcPath,
    ) -> anyhow::Result<Self> {
        let (log, _) = LogCore::build(fs, level, max_age, log_dir).await?.spawn();
        Ok(log)
    }

    /// Creates a mock logger that stores messages in memory.
    pub fn mock() -> Self {
        Self::Mock(mock::Mock::new())
    }

    /// Sends a [`LogMessage`] to the logger without blocking async callers.
    ///
    /// Messages sent after a flush are dropped.
    fn log(&self, scope: &'static str, message: String, level: LogLevel) {
        let message = LogMessage {
            level,
            scope,
            message,
        };
        match self {
            Self::Actual(sender) => {
                if let Err(TrySendError::Full(msg)) = sender.try_send(Message::Log(message)) {
                    let sender = sender.clone();
                    match tokio::runtime::Handle::try_current() {
                        Ok(runtime) => {
                            runtime.spawn(async move {
                                let _ = sender.send(msg).await;
                            });
                        }
                        // Plain threads wait for room instead
                        Err(_) => {
                            let _ = sender.blocking_send(msg);
                        }
                    }
                }
            }
            Self::Mock(mock) => mock.log(message),
        }
    }

    /// Log a message with the `INFO` level
    pub fn info<M: Display>(&self, scope: &'static str, message: M) {
        self.log(scope, message.to_string(), LogLevel::Info);
    }

    /// Log a message with the `WARNING` level
    pub fn warn<M: Display>(&self, scope: &'static str, message: M) {
        self.log(scope, message.to_string(), LogLevel::Warning);
    }

    /// Log a message with the `ERROR` level
    pub fn error<M: Display>(&self, scope: &'static str, message: M) {
        self.log(scope, message.to_string(), LogLevel::Error);
    }

    /// Log a warning if the result is an error and return the result as is
    pub fn warn_on_error<T, E: Display>(
        &self,
        scope: &'static str,
        result: Result<T, E>,
    ) -> Result<T, E> {
        if let Err(err) = &result {
            self.log(scope, err.to_string(), LogLevel::Warning);
        }
        result
    }

    /// Log an error if the result is an error and return the result as is
    pub fn error_on_error<T, E: Display>(
        &self,
        scope: &'static str,
        result: Result<T, E>,
    ) -> Result<T, E> {
        if let Err(err) = &result {
            self.log(scope, err.to_string(), LogLevel::Error);
        }
        result
    }

    /// Prints the buffered messages to stderr and stops the actor. Messages
    /// logged afterwards through other clones are dropped.
    pub async fn flush(self) {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = oneshot::channel();
                if sender.send(Message::Flush { tx }).await.is_ok() {
                    let _ = rx.await;
                }
            }
            Self::Mock(mock) => mock.flush(),
        }
    }

    /// Deletes log files older than the configured maximum age.
    pub async fn collect_garbage(&self) {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = oneshot::channel();
                if sender.send(Message::CollectGarbage { tx }).await.is_ok() {
                    let _ = rx.await;
                }
            }
            Self::Mock(_) => {}
        }
    }

    /// Returns the messages recorded by a mock logger, `None` for a real one.
    pub fn messages(&self) -> Option<Vec<LogMessage>> {
        match self {
            Self::Actual(_) => None,
            Self::Mock(mock) => Some(mock.messages()),
        }
    }
}
