//! News section component
//!
//! Renders the crypto-news panel in upstream article order

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the news section. An empty settled list shows the fallback text.
pub fn render_news_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = if state.news.is_loading() {
        vec![Line::from(Span::styled(
            "Fetching latest crypto news...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if state.news.items().is_empty() {
        vec![Line::from(Span::styled(
            "No news available",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .news
            .items()
            .iter()
            .flat_map(|entry| {
                let title_line = Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Green)),
                    Span::styled(entry.title.clone(), Style::default().fg(Color::White)),
                ]);
                let url_line = Line::from(Span::styled(
                    format!("  {}", entry.url),
                    Style::default().fg(Color::DarkGray),
                ));
                [title_line, url_line]
            })
            .collect()
    };

    let news_block = Block::default()
        .title("CRYPTO NEWS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::uniform(1));

    let news_paragraph = Paragraph::new(lines)
        .block(news_block)
        .wrap(Wrap { trim: true });
    f.render_widget(news_paragraph, area);
}
