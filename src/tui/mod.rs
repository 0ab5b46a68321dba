// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::context::AppContext;
use crate::session::Session;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};

pub fn run(ctx: &dyn AppContext) -> Result<()> {
    // Panic Hook
    let panic_log = ctx.get_panic_log_path();
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        if let Some(path) = &panic_log
            && let Ok(mut file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    let session = Session::open(ctx)?;
    let mut app_state = AppState::new(session);

    // --- TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app_state);

    // --- CLEANUP ---
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_state: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app_state))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => app_state.scroll_up(1),
                MouseEventKind::ScrollDown => app_state.scroll_down(1),
                _ => {}
            },
            Event::Key(key) => {
                // Filter out KeyRelease events to prevent double input on Windows
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                match handlers::handle_key_event(key, app_state) {
                    Some(Action::Submit(line)) => {
                        if app_state.submit(line) {
                            return Ok(());
                        }
                    }
                    Some(Action::Quit) => {
                        if let Err(e) = app_state.session.save() {
                            log::error!("Save on quit failed: {:#}", e);
                        }
                        return Ok(());
                    }
                    None => {}
                }
            }
            _ => {}
        }
    }
}
