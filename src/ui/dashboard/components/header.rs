//! Title row and fetch-progress gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the two-row header: branding line plus fetch progress gauge.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    render_title(f, rows[0]);
    render_progress(f, rows[1], state);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let underline = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick);

    let title = Paragraph::new(format!(
        "TRIPTYCH DASHBOARD v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .alignment(Alignment::Center)
    .style(title_style)
    .block(underline);

    f.render_widget(title, area);
}

/// Gauge tracking settled sections, with an animated sweep while any
/// fetch is still in flight.
fn render_progress(f: &mut Frame, area: Rect, state: &DashboardState) {
    let settled = state.settled_count();

    let (label, color, percent) = if state.all_settled() {
        (
            "LIVE - All sections loaded".to_string(),
            Color::LightGreen,
            100,
        )
    } else {
        // The sweep loops every 20 ticks and never claims completion
        let sweep = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        let base = (settled as f64 / 3.0 * 100.0) as u16;
        (
            format!("LOADING - {} of 3 sections", settled),
            Color::LightBlue,
            base.max(sweep.min(95)),
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}
