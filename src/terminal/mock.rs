use std::sync::Arc;

use anyhow::bail;
use tokio::sync::Mutex;

use crate::app::ui::Screen;

#[derive(Debug, Default)]
struct MockData {
    taken_over: bool,
    screens: Vec<Screen>,
}

/// Mock implementation of the Terminal actor for testing purposes.
///
/// Keeps the screens it is asked to draw and enforces the same take over
/// rules as the real terminal.
#[derive(Debug, Clone, Default)]
pub struct Mock {
    data: Arc<Mutex<MockData>>,
}

impl Mock {
    pub fn new() -> Self {
        Default::default()
    }

    pub async fn take_over(&self) -> anyhow::Result<()> {
        let mut data = self.data.lock().await;
        if data.taken_over {
            bail!("Terminal already taken over");
        }
        data.taken_over = true;
        Ok(())
    }

    pub async fn release(&self) -> anyhow::Result<()> {
        let mut data = self.data.lock().await;
        if !data.taken_over {
            bail!("Terminal not taken over");
        }
        data.taken_over = false;
        Ok(())
    }

    pub async fn draw(&self, screen: Screen) -> anyhow::Result<()> {
        let mut data = self.data.lock().await;
        if !data.taken_over {
            bail!("Terminal not taken over");
        }
        data.screens.push(screen);
        Ok(())
    }

    pub async fn screens(&self) -> Vec<Screen> {
        self.data.lock().await.screens.clone()
    }

    pub async fn is_taken_over(&self) -> bool {
        self.data.lock().await.taken_over
    }
}
