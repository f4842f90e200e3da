use std::{
    io::{Stdout, stdout},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use anyhow::bail;
use ratatui::{
    crossterm::{
        event,
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    prelude::CrosstermBackend,
};
use tokio::{sync::mpsc::Sender, task::JoinHandle};

use super::{Terminal, data::{UiEvent, map_event}, message::Message};
use crate::{app::ui::{Screen, draw}, log::Log};

const SCOPE: &str = "terminal";
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct TerminalCore {
    log: Log,
    take_over: bool,
    terminal: ratatui::Terminal<CrosstermBackend<Stdout>>,
    /// Where the reader thread sends key presses
    events: Sender<UiEvent>,
    /// Tells the current reader thread to stop
    stop_reader: Arc<AtomicBool>,
}

impl TerminalCore {
    pub fn build(log: Log, events: Sender<UiEvent>) -> anyhow::Result<Self> {
        let terminal = ratatui::Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self {
            log,
            take_over: false,
            terminal,
            events,
            stop_reader: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn spawn(mut self) -> (Terminal, JoinHandle<()>) {
        let (tx, mut rx) = tokio::sync::mpsc::channel(1);
        let handle = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                match msg {
                    Message::TakeOver { tx } => {
                        let res = self.take_over();
                        let _ = tx.send(res);
                    }
                    Message::Release { tx } => {
                        let res = self.release();
                        let _ = tx.send(res);
                    }
                    Message::Draw { screen, tx } => {
                        let res = self.draw(&screen);
                        let _ = tx.send(res);
                    }
                }
            }
            if self.take_over {
                let _ = self.release();
            }
        });
        (Terminal::Actual(tx), handle)
    }

    fn take_over(&mut self) -> anyhow::Result<()> {
        if self.take_over {
            bail!("Terminal already taken over");
        }
        self.take_over = true;
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        enable_raw_mode()?;
        self.terminal.clear()?;
        self.terminal.hide_cursor()?;

        let size = self.terminal.size()?;
        let _ = self.events.try_send(UiEvent::Resize(size.width, size.height));
        self.stop_reader = Arc::new(AtomicBool::new(false));
        self.spawn_reader();
        self.log.info(SCOPE, "Terminal taken over");
        Ok(())
    }

    fn release(&mut self) -> anyhow::Result<()> {
        if !self.take_over {
            bail!("Terminal not taken over");
        }
        self.take_over = false;
        self.stop_reader.store(true, Ordering::Relaxed);
        self.terminal.show_cursor()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        disable_raw_mode()?;
        self.log.info(SCOPE, "Terminal released");
        Ok(())
    }

    fn draw(&mut self, screen: &Screen) -> anyhow::Result<()> {
        if !self.take_over {
            bail!("Terminal not taken over");
        }
        self.terminal.draw(|frame| draw(frame, screen))?;
        Ok(())
    }

    /// Reads crossterm events on a plain thread, since reading blocks.
    fn spawn_reader(&self) {
        let events = self.events.clone();
        let stop = self.stop_reader.clone();
        let log = self.log.clone();
        thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) && !events.is_closed() {
                match event::poll(POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(err) => {
                        log.error(SCOPE, format!("Failed to poll terminal events: {}", err));
                        break;
                    }
                }
                let event = match event::read() {
                    Ok(event) => event,
                    Err(err) => {
                        log.error(SCOPE, format!("Failed to read terminal event: {}", err));
                        break;
                    }
                };
                if let Some(ui_event) = map_event(event) {
                    if events.blocking_send(ui_event).is_err() {
                        break;
                    }
                }
            }
        });
    }
}
