use std::{ffi::OsStr, io::stdout, path::Path, sync::Arc};

use ratatui::crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode, is_raw_mode_enabled},
};

/// Shared, immutable string. Cloning only bumps a reference count.
pub type ArcStr = Arc<str>;

/// Shared, immutable path.
pub type ArcPath = Arc<Path>;

/// Shared, immutable OS string, used for environment variable names.
pub type ArcOsStr = Arc<OsStr>;

/// Builds an [`ArcOsStr`] from anything that looks like an OS string.
pub fn arc_os_str<S: AsRef<OsStr> + ?Sized>(s: &S) -> ArcOsStr {
    Arc::from(s.as_ref())
}

/// Chains a hook in front of the default panic hook that restores the
/// terminal before the panic message is printed, so a crash inside the TUI
/// does not leave the shell in raw mode on the alternate screen.
pub fn install_panic_hook() -> anyhow::Result<()> {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
    Ok(())
}

/// Leaves the alternate screen and disables raw mode, if raw mode is on.
pub fn restore_terminal() -> std::io::Result<()> {
    if is_raw_mode_enabled()? {
        disable_raw_mode()?;
        execute!(stdout(), LeaveAlternateScreen)?;
    }
    Ok(())
}
