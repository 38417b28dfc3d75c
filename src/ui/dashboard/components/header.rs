//! Dashboard header component
//!
//! Renders the title bar and connection line

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the title and the backend/uptime status line.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("SALES DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 3600 {
        format!(
            "{}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!("{}m {}s", uptime.as_secs() / 60, uptime.as_secs() % 60)
    };

    // Slow pulse so the operator can tell the loop is alive.
    let pulse = if state.tick % 10 < 5 { "●" } else { "○" };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", pulse), Style::default().fg(Color::LightGreen)),
        Span::styled("Backend: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.base_url.clone(),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw("    "),
        Span::styled("Uptime: ", Style::default().fg(Color::Gray)),
        Span::styled(uptime_string, Style::default().fg(Color::LightGreen)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(status, header_chunks[1]);
}
