use std::io;
use std::time::Duration;

use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::error::Result;
use crate::tui::{
    app::{App, AppEvent, Screen},
    components,
    event::{Event, EventHandler},
    screens,
};
use crate::utils::format_timestamp;

pub async fn run_tui(config: Config) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(32);
    let mut app = App::new(config, tx)?;
    app.reload();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(app.config.ui.tick_rate_ms);
    let mut events = EventHandler::new(tick_rate);

    let result = run_loop(&mut terminal, &mut app, &mut events, &mut rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    app_events: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render_ui(frame, app))?;

        tokio::select! {
            Some(event) = events.next() => match event {
                Event::Tick => app.on_tick(),
                Event::Key(key) => handle_key(app, key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
            },
            Some(app_event) = app_events.recv() => app.on_app_event(app_event),
            else => break,
        }

        if app.should_quit {
            app.teardown();
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // An open alert captures input until dismissed.
    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_alert();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('s') => app.sync_discord_username(),
        KeyCode::Char('e') => app.open_edit_profile(),
        KeyCode::Char('m') => app.open_change_email(),
        KeyCode::Char('p') => app.open_public_profile(),
        _ => {}
    }
}

pub fn render_ui(frame: &mut Frame, app: &mut App) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    components::header::render(frame, chunks[0], app);

    match app.current_screen {
        Screen::Profile => screens::profile::render(frame, chunks[1], app),
        Screen::Help => screens::help::render(frame, chunks[1], app),
    }

    render_status_bar(frame, chunks[2], app);

    // The alert popup overlays everything else.
    if app.alert.is_some() {
        components::alert::render(frame, area, app);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let screen_indicator = match app.current_screen {
        Screen::Profile => "Profile",
        Screen::Help => "Help",
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", screen_indicator),
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.status_message.clone(),
            Style::default().fg(app.theme.secondary),
        ),
    ];

    if let Some(fetched_at) = &app.fetched_at {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Fetched {}", format_timestamp(fetched_at)),
            Style::default().fg(app.theme.secondary),
        ));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        "h: Help",
        Style::default().fg(app.theme.warning),
    ));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled("q: Quit", Style::default().fg(app.theme.error)));

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(paragraph, area);
}
