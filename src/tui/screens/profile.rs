use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::MessageKey;
use crate::tui::app::{App, Rendering};
use crate::tui::components;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    match app.rendering() {
        Rendering::Error => render_error(frame, area, app),
        Rendering::Loading => render_loading(frame, area, app),
        Rendering::Card => render_card(frame, area, app),
    }
}

fn render_error(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.catalog.text(MessageKey::ProfileLoadError),
            Style::default().fg(app.theme.error),
        )),
    ];

    if let Some(detail) = &app.load_error {
        lines.push(Line::from(Span::styled(
            detail.clone(),
            Style::default().fg(app.theme.secondary),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        app.catalog.text(MessageKey::RetryHint),
        Style::default().fg(app.theme.warning),
    )));

    let paragraph = Paragraph::new(lines)
        .block(profile_block(app))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.catalog.text(MessageKey::ProfileLoading),
            Style::default().fg(app.theme.info),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(profile_block(app))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_card(frame: &mut Frame, area: Rect, app: &App) {
    let Some(card) = app.card() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Card body
            Constraint::Length(3), // Action row
        ])
        .split(area);

    let width = chunks[0].width.saturating_sub(4) as usize;
    let label = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(app.theme.secondary)))
    };
    let value = |text: String| {
        Line::from(Span::styled(text, Style::default().fg(app.theme.foreground)))
    };

    let mut name_style = Style::default()
        .fg(app.theme.primary)
        .add_modifier(Modifier::BOLD);
    if card.display_name_is_fallback {
        name_style = name_style.add_modifier(Modifier::DIM);
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled("◉ ", Style::default().fg(app.theme.info)),
            Span::styled(card.display_name.clone(), name_style),
        ]),
        Line::from(Span::styled(
            crate::utils::truncate_middle(&card.avatar_url, width),
            Style::default().fg(app.theme.border),
        )),
        Line::from(""),
    ];

    if let Some(email) = &card.email {
        lines.push(label(app.catalog.text(MessageKey::EmailLabel)));
        lines.push(value(email.clone()));
        lines.push(Line::from(""));
    }

    // Discord block, with the sync control state inline in the label.
    let mut discord_label = vec![Span::styled(
        app.catalog.text(MessageKey::DiscordLabel),
        Style::default().fg(app.theme.secondary),
    )];
    if card.discord.sync_available {
        discord_label.push(Span::raw(" "));
        discord_label.push(components::action_bar::sync_control_span(app));
    }
    lines.push(Line::from(discord_label));
    lines.push(value(card.discord.body.clone()));
    lines.push(Line::from(""));

    lines.push(label(app.catalog.text(MessageKey::GithubLabel)));
    lines.push(value(card.github_text.clone()));
    lines.push(Line::from(""));

    lines.push(label(app.catalog.text(MessageKey::BioLabel)));
    lines.push(value(card.bio_text.clone()));
    lines.push(Line::from(""));

    lines.extend(components::community_links::lines(
        &card.community_links,
        &app.theme,
        width,
    ));
    if !card.community_links.is_empty() {
        lines.push(Line::from(""));
    }

    lines.push(label(app.catalog.text(MessageKey::DonateLabel)));
    lines.push(value(card.donate_text.clone()));

    let paragraph = Paragraph::new(lines)
        .block(profile_block(app))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[0]);

    components::action_bar::render(frame, chunks[1], app, &card);
}

fn profile_block(app: &App) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title("Profile")
        .border_style(Style::default().fg(app.theme.border))
}
