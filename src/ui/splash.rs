//! Startup logo screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
  ████████╗██████╗ ██╗██████╗ ████████╗██╗   ██╗ ██████╗██╗  ██╗
  ╚══██╔══╝██╔══██╗██║██╔══██╗╚══██╔══╝╚██╗ ██╔╝██╔════╝██║  ██║
     ██║   ██████╔╝██║██████╔╝   ██║    ╚████╔╝ ██║     ███████║
     ██║   ██╔══██╗██║██╔═══╝    ██║     ╚██╔╝  ██║     ██╔══██║
     ██║   ██║  ██║██║██║        ██║      ██║   ╚██████╗██║  ██║
     ╚═╝   ╚═╝  ╚═╝╚═╝╚═╝        ╚═╝      ╚═╝    ╚═════╝╚═╝  ╚═╝
"#;

pub fn render_splash(f: &mut Frame) {
    let logo_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    for row in LOGO_NAME.trim_matches('\n').lines() {
        lines.push(Line::from(Span::styled(row.to_string(), logo_style)));
    }
    lines.push(Line::from(" "));
    lines.push(Line::from(Span::styled(
        format!("Version {}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::ITALIC),
    )));

    // Center the logo band vertically, splitting the leftover height
    let height = lines.len() as u16 + 2;
    let top_gap = f.area().height.saturating_sub(height) / 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_gap),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(f.area());

    let logo = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(logo, rows[1]);
}
