use anyhow::Context;
use tokio::{fs::File, io::AsyncWriteExt, task::JoinHandle};

use super::data::{LogLevel, LogMessage};
use super::message::Message;
use crate::{ArcPath, BUFFER_SIZE, fs::Fs};

const SCOPE: &str = "log";
const LOG_PREFIX: &str = "movie-info_";

/// The core of the logging system that manages logging to both stderr and log files.
///
/// Each message is written to a timestamped log file and to `latest.log`,
/// which is truncated on every run. Messages at or above `print_level` are
/// also kept in memory so they can be printed to stderr on flush, after the
/// terminal has been handed back to the shell.
///
/// # Examples
/// ```ignore
/// let (log, _) = LogCore::build(fs, LogLevel::Info, 7, log_dir).await?.spawn();
/// log.info("app", "Application started");
/// ```
#[derive(Debug)]
pub struct LogCore {
    /// Filesystem interface for file operations
    fs: Fs,
    /// Directory where log files are stored
    log_dir: ArcPath,
    /// Path to the current timestamped log file
    log_path: ArcPath,
    /// Handle to the current log file
    log_file: File,
    /// Handle to the "latest" log file
    latest_log_file: File,
    /// Buffer of messages to be printed to stderr
    logs_to_print: Vec<LogMessage>,
    /// Minimum level of messages to be printed to stderr
    print_level: LogLevel,
    /// Maximum age of log files in days before they are deleted
    max_age: usize,
}

impl LogCore {
    pub async fn build(
        fs: Fs,
        level: LogLevel,
        max_age: usize,
        log_dir: ArcPath,
    ) -> anyhow::Result<Self> {
        let log_path = ArcPath::from(log_dir.join(format!(
            "{}{}.log",
            LOG_PREFIX,
            chrono::Utc::now().format("%Y-%m-%d-%H-%M-%S")
        )));
        let latest_log_path = ArcPath::from(log_dir.join("latest.log"));

        fs.mkdir(log_dir.clone())
            .await
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_file = fs
            .append_file(log_path.clone())
            .await
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        let latest_log_file = fs
            .write_file(latest_log_path.clone())
            .await
            .with_context(|| {
                format!(
                    "Failed to create latest log file: {}",
                    latest_log_path.display()
                )
            })?;

        Ok(Self {
            fs,
            log_dir,
            log_path,
            log_file,
            latest_log_file,
            logs_to_print: Vec::new(),
            print_level: level,
            max_age,
        })
    }

    pub fn spawn(mut self) -> (super::Log, JoinHandle<()>) {
        let (tx, mut rx) = tokio::sync::mpsc::channel(BUFFER_SIZE);
        let handle = tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    Message::Log(msg) => {
                        self.log(msg).await;
                    }
                    Message::Flush { tx } => {
                        rx.close();
                        self.flush();
                        let _ = tx.send(());
                        break;
                    }
                    Message::CollectGarbage { tx } => {
                        self.collect_garbage().await;
                        let _ = tx.send(());
                    }
                }
            }
        });
        (super::Log::Actual(tx), handle)
    }

    async fn log(&mut self, message: LogMessage) {
        let line = format!("{}\n", &message);

        // A broken log file must not take the application down with it
        for file in [&mut self.log_file, &mut self.latest_log_file] {
            if file.write_all(line.as_bytes()).await.is_ok() {
                let _ = file.flush().await;
            }
        }

        if message.level >= self.print_level {
            self.logs_to_print.push(message);
        }
    }

    fn flush(&self) {
        for message in &self.logs_to_print {
            eprintln!("{}", message);
        }
        if !self.logs_to_print.is_empty() {
            eprintln!("Check the full log file: {}", self.log_path.display());
        }
    }

    async fn collect_garbage(&mut self) {
        if self.max_age == 0 {
            return;
        }
        let now = std::time::SystemTime::now();
        let Ok(logs) = self.fs.read_dir(self.log_dir.clone()).await else {
            self.log(LogMessage {
                level: LogLevel::Error,
                scope: SCOPE,
                message: "Failed to read the logs directory during garbage collection".into(),
            })
            .await;
            return;
        };
        for log in logs {
            let Some(filename) = log.file_name() else {
                continue;
            };
            let filename = filename.to_string_lossy();
            if !filename.ends_with(".log") || !filename.starts_with(LOG_PREFIX) {
                continue;
            }
            if *log == *self.log_path {
                continue;
            }
            let Ok(Ok(modified)) = log.metadata().map(|meta| meta.modified()) else {
                continue;
            };
            let Ok(age) = now.duration_since(modified) else {
                continue;
            };
            let age = age.as_secs() / 60 / 60 / 24;
            if age as usize > self.max_age && self.fs.remove_file(log.clone()).await.is_err() {
                self.log(LogMessage {
                    level: LogLevel::Warning,
                    scope: SCOPE,
                    message: format!("Failed to remove the log file: {}", log.display()),
                })
                .await;
            }
        }
    }
}
