//! Weather section component
//!
//! Renders the weather panel with one line per location

use super::super::state::DashboardState;
use super::super::utils::format_reading;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the weather section for all reported locations.
pub fn render_weather_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = if state.weather.is_loading() {
        vec![Line::from(Span::styled(
            "Fetching weather data...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if state.weather.items().is_empty() {
        vec![Line::from(Span::styled(
            "No weather data available",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .weather
            .items()
            .iter()
            .flat_map(|entry| {
                let name_line = Line::from(Span::styled(
                    entry.name.clone(),
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ));
                let readings_line = Line::from(vec![
                    Span::styled(
                        format!("  {}", format_reading(entry.temperature, "°C")),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("  {}", format_reading(entry.humidity, "%")),
                        Style::default().fg(Color::LightBlue),
                    ),
                    Span::styled(
                        format!(
                            "  {}",
                            entry.description.as_deref().unwrap_or("--")
                        ),
                        Style::default().fg(Color::Gray),
                    ),
                ]);
                [name_line, readings_line]
            })
            .collect()
    };

    let weather_block = Block::default()
        .title("WEATHER")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let weather_paragraph = Paragraph::new(lines)
        .block(weather_block)
        .wrap(Wrap { trim: true });
    f.render_widget(weather_paragraph, area);
}
