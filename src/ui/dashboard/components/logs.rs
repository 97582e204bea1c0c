//! Dashboard activity log component

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, get_source_color};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Status icon shown in front of a log line. Warn-level errors stay
/// icon-free so partial failures read less alarming than hard ones.
fn event_icon(event: &Event) -> &'static str {
    match (event.event_type, event.log_level) {
        (EventType::Success, _) => "✅",
        (EventType::Error, LogLevel::Warn) => "",
        (EventType::Error, _) => "❌",
        (EventType::Refresh, _) => "",
    }
}

/// Render the activity log panel, newest events on top.
pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Lines that fit inside the bordered, padded block
    let visible = (area.height.saturating_sub(3)).max(1) as usize;

    let mut log_lines: Vec<Line> = Vec::with_capacity(visible);
    for event in state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(visible)
    {
        let time = format_compact_timestamp(&event.timestamp);
        let msg = clean_http_error_message(&event.msg);

        log_lines.push(Line::from(vec![
            Span::raw(format!("{} ", event_icon(event))),
            Span::styled(format!("{} ", time), Style::default().fg(Color::DarkGray)),
            Span::styled(msg, Style::default().fg(get_source_color(&event.source))),
        ]));
    }

    if log_lines.is_empty() {
        log_lines.push(Line::from("Starting up..."));
    }

    let logs_block = Block::default()
        .title("FEED ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let log_widget = Paragraph::new(log_lines)
        .block(logs_block)
        .wrap(Wrap { trim: true });

    f.render_widget(log_widget, area);
}
