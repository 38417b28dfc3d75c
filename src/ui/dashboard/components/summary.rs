//! Dashboard summary component
//!
//! Renders the headline figures derived from the loaded events

use super::super::state::DashboardState;
use super::super::utils::format_currency;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the three summary cards.
pub fn render_summary(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "TOTAL REVENUE",
        format_currency(state.summary.total_revenue),
        Color::LightGreen,
    );
    render_card(
        f,
        cards[1],
        "TRANSACTIONS",
        state.summary.transactions.to_string(),
        Color::LightBlue,
    );
    render_card(
        f,
        cards[2],
        "AVERAGE SPEND",
        format_currency(state.summary.average_spend),
        Color::LightYellow,
    );
}

fn render_card(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    title: &str,
    value: String,
    color: Color,
) {
    let card = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(card, area);
}
