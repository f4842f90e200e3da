use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::task::JoinHandle;

use crate::api::omdb::{ItemDetail, OmdbApi, Outcome};
use crate::app::browse::{Browse, BrowseState, FeedDefaults, Fetch};
use crate::app::config::{Config, PathOpt, StrOpt, USizeOpt};
use crate::app::ui::{Intent, Screen, UiState};
use crate::env::Env;
use crate::fs::Fs;
use crate::log::Log;
use crate::net::Net;
use crate::terminal::{Terminal, UiEvent};
use crate::{ArcPath, ArcStr, BUFFER_SIZE, arc_os_str};

use super::App;
use super::data::Command;
use super::message::Message;

const SCOPE: &str = "app";

/// Core implementation of the App actor
#[derive(Debug)]
pub struct Core {
    omdb: OmdbApi,
    log: Log,
    browse: Browse,
    ui: UiState,
}

/// Picks the API key: the command line flag, then `OMDB_API_KEY`, then the
/// configuration. Empty values count as unset.
pub(super) async fn resolve_api_key(flag: Option<String>, env: &Env, config: &Config) -> ArcStr {
    if let Some(key) = flag.filter(|k| !k.is_empty()) {
        return ArcStr::from(key);
    }
    match env.env(arc_os_str("OMDB_API_KEY")).await {
        Ok(key) if !key.is_empty() => key,
        _ => config.str(StrOpt::ApiKey).await,
    }
}

impl Core {
    /// Build a new App actor core with full initialization
    pub async fn build(api_key: Option<String>) -> Result<Self> {
        let env = Env::spawn();
        let fs = Fs::spawn();

        let home = env
            .env(arc_os_str("HOME"))
            .await
            .context("Reading HOME to locate the configuration")?;
        let config_path = Path::new(&*home)
            .join(".config")
            .join("movie-info")
            .join("config.toml");
        let config = Config::spawn(fs.clone(), ArcPath::from(config_path));

        let loaded = config.load().await;
        if loaded.is_err() {
            config.save().await?;
        }

        let log = Log::spawn(
            fs.clone(),
            config.log_level().await,
            config.usize(USizeOpt::MaxAge).await,
            config.path(PathOpt::LogDir).await,
        )
        .await?;
        if let Err(err) = loaded {
            log.warn(SCOPE, format!("Using the default configuration: {:#}", err));
        }

        let api_key = resolve_api_key(api_key, &env, &config).await;
        if api_key.is_empty() {
            log.warn(SCOPE, "No OMDb API key configured, requests will be rejected");
        }

        let net = Net::spawn(config.clone(), log.clone()).await?;
        let omdb = OmdbApi::spawn(net, config.str(StrOpt::BaseUrl).await, api_key);

        let defaults = FeedDefaults {
            query: config.str(StrOpt::DefaultQuery).await,
            kind: config.str(StrOpt::DefaultKind).await,
            year: config.str(StrOpt::DefaultYear).await,
        };

        log.info(SCOPE, "App actor initialized successfully");
        Ok(Self::new(omdb, log, defaults))
    }

    pub fn new(omdb: OmdbApi, log: Log, defaults: FeedDefaults) -> Self {
        Self {
            omdb,
            log,
            browse: Browse::new(defaults),
            ui: UiState::default(),
        }
    }

    pub fn log(&self) -> Log {
        self.log.clone()
    }

    /// Cleans old log files up and prints the buffered messages.
    pub async fn finish(&self) {
        self.log.collect_garbage().await;
        self.log.clone().flush().await;
    }

    /// Spawns the interactive loop on a new task.
    pub fn spawn(self: Box<Self>, terminal: Terminal, events: Receiver<UiEvent>) -> (App, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(BUFFER_SIZE);
        let handle = tokio::spawn(self.run(terminal, events, tx.clone(), rx));
        (App::Actual(tx), handle)
    }

    async fn run(
        mut self: Box<Self>,
        terminal: Terminal,
        mut events: Receiver<UiEvent>,
        tx: Sender<Message>,
        mut rx: Receiver<Message>,
    ) {
        if self
            .log
            .error_on_error(SCOPE, terminal.take_over().await)
            .is_err()
        {
            self.finish().await;
            return;
        }

        let fetch = self.browse.load_default_feed(1);
        self.perform(fetch, &tx);
        self.redraw(&terminal).await;

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        if !self.handle_event(event, &tx) {
                            break;
                        }
                    }
                    None => break,
                },
                Some(msg) = rx.recv() => match msg {
                    Message::Shutdown { tx } => {
                        self.log.info(SCOPE, "Shutdown requested");
                        let _ = tx.send(());
                        break;
                    }
                    msg => self.apply(msg),
                },
            }
            self.redraw(&terminal).await;
        }

        let _ = self.log.warn_on_error(SCOPE, terminal.release().await);
        self.finish().await;
    }

    /// Applies one key press. Returns `false` when the user quits.
    fn handle_event(&mut self, event: UiEvent, tx: &Sender<Message>) -> bool {
        let Some(intent) = self.ui.handle_event(event, self.browse.state()) else {
            return true;
        };
        let fetch = match intent {
            Intent::Search(query) => self.browse.search(&query, 1),
            Intent::LoadMore => self.browse.load_more(),
            Intent::Select(id) => Some(self.browse.select_item(id)),
            Intent::Home => Some(self.browse.return_home()),
            Intent::CloseDetail => {
                self.browse.close_detail();
                None
            }
            Intent::Quit => return false,
        };
        if let Some(fetch) = fetch {
            self.perform(fetch, tx);
        }
        self.ui.sync(self.browse.state());
        true
    }

    /// Runs `fetch` on its own task and reports back through `tx`.
    fn perform(&self, fetch: Fetch, tx: &Sender<Message>) {
        let omdb = self.omdb.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(execute(&omdb, fetch).await).await;
        });
    }

    fn apply(&mut self, msg: Message) {
        match msg {
            Message::ListDone { seq, result } => {
                match &result {
                    Ok(Outcome::Found(page)) => self.log.info(
                        SCOPE,
                        format!("List fetch {} got {} of {} results", seq, page.items.len(), page.total),
                    ),
                    Ok(Outcome::NotFound(reason)) => {
                        self.log.info(SCOPE, format!("List fetch {} found nothing: {}", seq, reason))
                    }
                    Err(err) => self
                        .log
                        .error(SCOPE, format!("List fetch {} failed: {:#}", seq, err)),
                }
                if !self.browse.complete_list(seq, result) {
                    self.log.info(SCOPE, format!("Discarded stale list fetch {}", seq));
                }
            }
            Message::DetailDone { seq, id, result } => {
                match &result {
                    Ok(Outcome::Found(_)) => {}
                    Ok(Outcome::NotFound(reason)) => self
                        .log
                        .warn(SCOPE, format!("No detail for {}: {}", id, reason)),
                    Err(err) => self
                        .log
                        .error(SCOPE, format!("Detail fetch for {} failed: {:#}", id, err)),
                }
                if !self.browse.complete_detail(seq, result) {
                    self.log.info(SCOPE, format!("Detail fetch {} not shown", seq));
                }
            }
            Message::Shutdown { .. } => {}
        }
        self.ui.sync(self.browse.state());
    }

    fn screen(&self) -> Screen {
        Screen {
            browse: self.browse.state().clone(),
            ui: self.ui.clone(),
            has_more: self.browse.has_more(),
            loading_page: self.browse.loading_page(),
        }
    }

    async fn redraw(&self, terminal: &Terminal) {
        let _ = self.log.warn_on_error(SCOPE, terminal.draw(self.screen()).await);
    }

    /// Resolves a one-shot command into the text to print.
    pub async fn run_command(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Latest { page } => {
                let fetch = self.browse.load_default_feed(page);
                let msg = execute(&self.omdb, fetch).await;
                self.apply(msg);
                Ok(list_report(self.browse.state()))
            }
            Command::Search { query, page } => {
                let Some(fetch) = self.browse.search(&query, page) else {
                    bail!("The search query is empty");
                };
                let msg = execute(&self.omdb, fetch).await;
                self.apply(msg);
                Ok(list_report(self.browse.state()))
            }
            Command::Detail { id } => {
                let seq = self.browse.select_item(id.clone()).seq();
                let result = self
                    .omdb
                    .detail(id.clone())
                    .await
                    .with_context(|| format!("Fetching the detail of {}", id))?;
                if let Outcome::NotFound(reason) = &result {
                    bail!("No detail for {}: {}", id, reason);
                }
                self.browse.complete_detail(seq, Ok(result));
                match &self.browse.state().selected_detail {
                    Some(detail) => Ok(detail_report(detail)),
                    None => bail!("No detail for {}", id),
                }
            }
        }
    }
}

async fn execute(omdb: &OmdbApi, fetch: Fetch) -> Message {
    match fetch {
        Fetch::List { seq, request } => Message::ListDone {
            seq,
            result: omdb.list(request).await,
        },
        Fetch::Detail { seq, id } => Message::DetailDone {
            seq,
            result: omdb.detail(id.clone()).await,
            id,
        },
    }
}

pub(super) fn list_report(state: &BrowseState) -> String {
    let mut out = String::new();
    for (i, item) in state.results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({}) [{}] {}",
            i + 1,
            item.title,
            item.year,
            item.kind,
            item.id
        );
    }
    if !state.results.is_empty() {
        let _ = writeln!(
            out,
            "Showing {} of {}",
            state.results.len(),
            state.total_available
        );
    }
    if let Some(message) = &state.error_message {
        let _ = writeln!(out, "{}", message);
    }
    out
}

pub(super) fn detail_report(detail: &ItemDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) [{}] {}",
        detail.title, detail.year, detail.kind, detail.id
    );
    if let Some(runtime) = &detail.runtime {
        let _ = writeln!(out, "Runtime: {}", runtime);
    }
    if let Some(rating) = &detail.rating {
        let _ = writeln!(out, "IMDb {}", rating);
    }
    if !detail.genres.is_empty() {
        let _ = writeln!(out, "Genre: {}", detail.genres.join(", "));
    }
    if let Some(director) = &detail.director {
        let _ = writeln!(out, "Director: {}", director);
    }
    if !detail.cast.is_empty() {
        let _ = writeln!(out, "Cast: {}", detail.cast.join(", "));
    }
    match &detail.poster_url {
        Some(url) => {
            let _ = writeln!(out, "Poster: {}", url);
        }
        None => {
            let _ = writeln!(out, "No poster available");
        }
    }
    if let Some(plot) = &detail.plot {
        let _ = writeln!(out, "\n{}", plot);
    }
    out
}
