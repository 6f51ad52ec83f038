use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::MessageKey;
use crate::profile::card::ProfileCard;
use crate::profile::sync::SyncStatus;
use crate::tui::app::App;

/// The action row under the card: edit profile, change email (disabled
/// for auto-generated emails), public profile, and the sync control when
/// it applies.
pub fn render(frame: &mut Frame, area: Rect, app: &App, card: &ProfileCard) {
    let enabled = Style::default().fg(app.theme.foreground);
    let disabled = Style::default()
        .fg(app.theme.secondary)
        .add_modifier(Modifier::DIM);
    let key_style = Style::default()
        .fg(app.theme.warning)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled("[e] ", key_style),
        Span::styled(app.catalog.text(MessageKey::ActionEditProfile), enabled),
        Span::raw("  "),
        Span::styled("[m] ", key_style),
        Span::styled(
            app.catalog.text(MessageKey::ActionChangeEmail),
            if card.change_email_enabled {
                enabled
            } else {
                disabled
            },
        ),
        Span::raw("  "),
        Span::styled("[p] ", key_style),
        Span::styled(app.catalog.text(MessageKey::ActionPublicProfile), enabled),
    ];

    if card.discord.sync_available {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("[s] ", key_style));
        spans.push(sync_control_span(app));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(paragraph, area);
}

/// The sync control's icon and label: a refresh glyph while idle or
/// syncing, a confirmation glyph while the success state is showing.
/// Dimmed whenever the status is not idle.
pub fn sync_control_span(app: &App) -> Span<'static> {
    let status = app.sync.status();
    let (icon, label) = match status {
        SyncStatus::Success => ("✓", "Synced"),
        SyncStatus::Idle | SyncStatus::Syncing => ("↻", "Sync Discord role"),
    };

    let style = if status.is_idle() {
        Style::default().fg(app.theme.success)
    } else {
        Style::default()
            .fg(app.theme.secondary)
            .add_modifier(Modifier::DIM)
    };

    Span::styled(format!("{icon} {label}"), style)
}
