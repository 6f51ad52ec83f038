use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::profile::community::ResolvedLink;
use crate::tui::theme::Theme;
use crate::utils::truncate_middle;

/// One line per resolved community link, in display order. Profiles with
/// no links contribute no lines at all.
pub fn lines(links: &[ResolvedLink], theme: &Theme, width: usize) -> Vec<Line<'static>> {
    links
        .iter()
        .map(|link| {
            Line::from(vec![
                Span::styled(
                    format!("[{:>4}] ", link.icon),
                    Style::default().fg(theme.info),
                ),
                Span::styled(
                    truncate_middle(&link.url, width.saturating_sub(7)),
                    Style::default().fg(theme.foreground),
                ),
            ])
        })
        .collect()
}
