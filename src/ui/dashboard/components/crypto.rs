//! Crypto section component
//!
//! Renders the crypto panel with one block per tracked coin

use super::super::state::DashboardState;
use super::super::utils::{format_change_percent, format_market_cap_usd, format_price_usd};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the crypto section in fixed coin order.
pub fn render_crypto_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = if state.crypto.is_loading() {
        vec![Line::from(Span::styled(
            "Fetching crypto prices...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if state.crypto.items().is_empty() {
        vec![Line::from(Span::styled(
            "No crypto prices available",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .crypto
            .items()
            .iter()
            .flat_map(|entry| {
                // Red for a negative 24h change, green otherwise
                let change_color = if entry.change_24h_percent < 0.0 {
                    Color::LightRed
                } else {
                    Color::LightGreen
                };
                let name_line = Line::from(vec![
                    Span::styled(
                        entry.name,
                        Style::default()
                            .fg(Color::LightYellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", format_price_usd(entry.price_usd)),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("  {}", format_change_percent(entry.change_24h_percent)),
                        Style::default().fg(change_color),
                    ),
                ]);
                let cap_line = Line::from(Span::styled(
                    format!("  Cap: {}", format_market_cap_usd(entry.market_cap_usd)),
                    Style::default().fg(Color::Gray),
                ));
                [name_line, cap_line]
            })
            .collect()
    };

    let crypto_block = Block::default()
        .title("CRYPTO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow))
        .padding(Padding::uniform(1));

    let crypto_paragraph = Paragraph::new(lines)
        .block(crypto_block)
        .wrap(Wrap { trim: true });
    f.render_widget(crypto_paragraph, area);
}
