//! Footer row: key hints, active environment, and uptime

use super::super::state::DashboardState;
use super::super::utils::format_uptime;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let text = format!(
        "[Q] Quit | {} | Uptime: {}",
        state.environment,
        format_uptime(state.start_time.elapsed())
    );
    let style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let rule = Block::default()
        .borders(Borders::TOP)
        .border_type(BorderType::Thick);

    let footer = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(rule);
    f.render_widget(footer, area);
}
