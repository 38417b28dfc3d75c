//! Dashboard event table component
//!
//! Renders the most recent event records

use super::super::state::DashboardState;
use crate::models::EventRecord;

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

/// Render the recent-events table, newest first.
pub fn render_events_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Header plus borders eat three rows of the area.
    let visible = (area.height.saturating_sub(3)) as usize;

    let rows: Vec<Row> = state
        .events
        .iter()
        .rev()
        .take(visible.max(1))
        .map(event_row)
        .collect();

    let header = Row::new(vec![
        "Event", "Start", "End", "Venue", "Hours", "Products", "Volume", "Price", "Revenue",
        "Hour", "Payment",
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let widths = [
        Constraint::Percentage(14),
        Constraint::Percentage(8),
        Constraint::Percentage(8),
        Constraint::Percentage(10),
        Constraint::Percentage(10),
        Constraint::Percentage(14),
        Constraint::Percentage(7),
        Constraint::Percentage(7),
        Constraint::Percentage(8),
        Constraint::Percentage(6),
        Constraint::Percentage(8),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!("EVENTS ({})", state.events.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(table, area);
}

fn event_row(event: &EventRecord) -> Row<'static> {
    Row::new(vec![
        Cell::from(event.event_name.clone()),
        Cell::from(event.event_date_from.clone()),
        Cell::from(event.event_date_to.clone()),
        Cell::from(event.venue_name.clone()),
        Cell::from(event.operating_hours.clone()),
        Cell::from(event.products_sold.display()),
        Cell::from(event.sales_volume.clone()),
        Cell::from(event.price_per_unit.clone()),
        Cell::from(event.total_revenue.clone()).style(Style::default().fg(Color::LightGreen)),
        Cell::from(event.sale_hour.clone()),
        Cell::from(event.payment_method.clone()),
    ])
}
