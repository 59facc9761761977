// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod cli;
mod config;
mod content;
mod logging;
mod services;
mod ui;

use app::scroll::SectionId;
use app::{App, AppMode, FocusTarget, HitMap, Navigable};
use clap::Parser;
use color_eyre::Result;
use content::NAV_ITEMS;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{
    io,
    time::{Duration, Instant},
};

const MOUSE_SCROLL_LINES: usize = 3;
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let cli = cli::Cli::parse();
    let config = config::Config::load()?;

    if let Some(command) = cli.command {
        return command.run(&config, &mut io::stdout().lock());
    }

    match logging::init(&config) {
        Ok(path) => tracing::info!(path = %path.display(), "logging started"),
        Err(error) => eprintln!("Logging disabled: {error}"),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let size = terminal.size()?;
    app.resize(size.width, size.height);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "page loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let poll_interval = app.config.hero.frame_interval().min(MAX_POLL_INTERVAL);
    loop {
        let now = Instant::now();
        app.process_carousel_events(now);
        tick_starfield(app, now);
        app.clear_expired_status_toast();
        app.clear_expired_signup_error();

        let mut hits = HitMap::default();
        terminal.draw(|f| hits = ui::render(f, app))?;
        app.refresh_hit_map(hits);

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout
        if event::poll(poll_interval)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle KeyPress events to avoid duplicate handling
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.should_quit = true;
                        continue;
                    }

                    match app.mode {
                        AppMode::Page => handle_page_mode(app, key.code),
                        AppMode::NavMenu => handle_nav_menu_mode(app, key.code),
                        AppMode::Help => handle_help_mode(app, key.code),
                        AppMode::EmailInput => handle_email_input_mode(app, key.code),
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                Event::Paste(paste) => handle_paste(app, &paste),
                Event::Resize(width, height) => app.resize(width, height),
                Event::FocusGained | Event::FocusLost => {}
            }
        }
    }

    Ok(())
}

fn tick_starfield(app: &mut App, now: Instant) {
    let interval = app.config.hero.frame_interval();
    let should_tick = app
        .last_frame_tick
        .is_none_or(|last_tick| now.duration_since(last_tick) >= interval);

    if should_tick {
        app.starfield.step();
        app.last_frame_tick = Some(now);
    }
}

fn handle_page_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Left | KeyCode::Right => {
            if let Some(event) = app::key_event(key_code) {
                app.dispatch_carousel(event);
            }
        }
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('m') => app.toggle_nav_menu(),
        KeyCode::Char('c') => app.copy_current_prompt(),
        KeyCode::Char('o') => app.activate(FocusTarget::OpenTool),
        KeyCode::Char('e') => {
            app.reveal_section(SectionId::GetInvolved);
            app.activate(FocusTarget::EmailField);
        }
        KeyCode::Char('0') => app.scroll_to_section("main"),
        KeyCode::Char(digit @ '1'..='9') => select_nav_item(app, digit),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up_lines(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down_lines(1),
        KeyCode::PageUp => app.scroll_up_page(),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down_page(),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Enter => app.activate_focused(),
        KeyCode::Esc => app.focus.clear(),
        KeyCode::Backspace
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

/// Number keys follow the navbar links in order
fn select_nav_item(app: &mut App, digit: char) {
    let item = digit
        .to_digit(10)
        .and_then(|number| usize::try_from(number).ok())
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| NAV_ITEMS.get(index));
    if let Some(item) = item {
        app.scroll_to_section(item.id);
    }
}

fn handle_nav_menu_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc | KeyCode::Char('m' | 'q') => app.close_nav_menu(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.previous_item(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.next_item(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Enter => app.select_nav_menu_entry(),
        KeyCode::Left | KeyCode::Right => {
            if let Some(event) = app::key_event(key_code) {
                app.dispatch_carousel(event);
            }
        }
        KeyCode::Backspace
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

fn handle_help_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q' | '?') => app.close_help(),
        KeyCode::Backspace
        | KeyCode::Enter
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

fn handle_email_input_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.leave_email_input(),
        KeyCode::Enter => app.submit_signup(),
        KeyCode::Char(character) => app.add_email_char(character),
        KeyCode::Backspace => app.remove_email_char(),
        KeyCode::Delete => app.email_input.delete_char(),
        KeyCode::Left => app.email_input.move_left(),
        KeyCode::Right => app.email_input.move_right(),
        KeyCode::Home => app.email_input.move_to_start(),
        KeyCode::End => app.email_input.move_to_end(),
        KeyCode::Tab => {
            app.leave_email_input();
            app.focus_next();
        }
        KeyCode::BackTab => {
            app.leave_email_input();
            app.focus_previous();
        }
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: event::MouseEvent) {
    if app.mode == AppMode::Help {
        return;
    }

    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => app.pointer_moved(column, row),
        MouseEventKind::Down(MouseButton::Left) => app.pointer_pressed(column, row),
        MouseEventKind::Drag(MouseButton::Left) => app.pointer_dragged(column, row),
        MouseEventKind::Up(MouseButton::Left) => app.pointer_released(),
        MouseEventKind::ScrollUp => app.scroll_up_lines(MOUSE_SCROLL_LINES),
        MouseEventKind::ScrollDown => app.scroll_down_lines(MOUSE_SCROLL_LINES),
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
            // Ignore horizontal scrolling
        }
        MouseEventKind::Down(_) | MouseEventKind::Up(_) | MouseEventKind::Drag(_) => {}
    }
}

fn handle_paste(app: &mut App, paste: &str) {
    if app.mode != AppMode::EmailInput {
        return;
    }
    for character in paste.chars().filter(|character| !character.is_control()) {
        app.add_email_char(character);
    }
}
