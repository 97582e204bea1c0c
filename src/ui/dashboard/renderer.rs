//! Top-level dashboard layout and rendering

use super::components::{crypto, footer, header, logs, news, weather};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Split an area into thirds for the weather, crypto and news panels.
fn section_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area)
}

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        let backdrop = Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24)));
        f.render_widget(backdrop, f.area());
    }

    // Header, section row, activity log, footer
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, rows[0], state);

    let columns = section_columns(rows[1]);
    weather::render_weather_section(f, columns[0], state);
    crypto::render_crypto_section(f, columns[1], state);
    news::render_news_section(f, columns[2], state);

    logs::render_logs_panel(f, rows[2], state);
    footer::render_footer(f, rows[3], state);
}
