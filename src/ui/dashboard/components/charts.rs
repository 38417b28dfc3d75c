//! Dashboard chart components
//!
//! Renders the product distribution and hourly sales volume charts

use super::super::state::DashboardState;
use crate::consts::cli_consts::DISTRIBUTION_CHART_ROWS;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Padding, Paragraph};

/// Render the two charts stacked vertically.
pub fn render_charts_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chart_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_distribution_chart(f, chart_chunks[0], state);
    render_hourly_chart(f, chart_chunks[1], state);
}

/// Horizontal bars for the most-sold products, widest first.
pub fn render_distribution_chart(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
) {
    let mut rows: Vec<(String, u64)> = state.distribution.clone();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows.truncate(DISTRIBUTION_CHART_ROWS);

    let max_count = rows.iter().map(|(_, count)| *count).max().unwrap_or(1);
    // Name column, count column, borders and padding all come off the bar.
    let bar_width = (area.width.saturating_sub(30)) as u64;

    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::from("No sales recorded yet")]
    } else {
        rows.iter()
            .map(|(name, count)| {
                let filled = if max_count > 0 {
                    (count * bar_width / max_count) as usize
                } else {
                    0
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:<20.20} ", name),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        "█".repeat(filled.max(1)),
                        Style::default().fg(Color::LightMagenta),
                    ),
                    Span::styled(format!(" {}", count), Style::default().fg(Color::Gray)),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .title("PRODUCT SALES DISTRIBUTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Sales volume per sale hour, one bar per hour of the day.
pub fn render_hourly_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let bars: Vec<Bar> = state
        .hourly
        .iter()
        .enumerate()
        .map(|(hour, volume)| {
            Bar::default()
                .value(volume.round() as u64)
                .label(Line::from(format!("{:02}", hour)))
                .text_value(String::new())
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("SALES VOLUME BY HOUR")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(2)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::LightCyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(chart, area);
}
