use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type ViewerTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs `f` on the alternate screen and restores the terminal afterwards,
/// whether `f` succeeds or not.
pub fn with_terminal<T, E, F>(f: F) -> Result<T, E>
where
    E: From<io::Error>,
    F: FnOnce(&mut ViewerTerminal) -> Result<T, E>,
{
    let mut terminal = init()?;
    let result = f(&mut terminal);
    restore()?;
    result
}

fn init() -> io::Result<ViewerTerminal> {
    setup_panic_hook();
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
