//! Add-event form component
//!
//! Renders the modal overlay for composing a new event record

use super::super::state::{DashboardState, FormField};
use super::super::utils::centered_rect;
use crate::models::PaymentMethod;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

const PRODUCT_WINDOW: usize = 6;

/// Render the add-event modal over the dashboard.
pub fn render_form(f: &mut Frame, state: &DashboardState) {
    let area = centered_rect(72, 84, f.area());
    f.render_widget(Clear, area);

    let mut lines = Vec::new();
    lines.push(text_field(state, FormField::Name, "Event name", &state.draft.event_name));
    lines.push(text_field(
        state,
        FormField::DateFrom,
        "Date from (YYYY-MM-DD)",
        &state.draft.event_date_from,
    ));
    lines.push(text_field(
        state,
        FormField::DateTo,
        "Date to (YYYY-MM-DD)",
        &state.draft.event_date_to,
    ));
    lines.push(text_field(state, FormField::Venue, "Venue", &state.draft.venue_name));
    // The backend fills in the default hours when the field is left blank.
    if state.draft.operating_hours.is_empty() && state.focus != FormField::Hours {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<26}", "Operating hours"),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                "12:00 PM - 11:00 PM",
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    } else {
        lines.push(text_field(
            state,
            FormField::Hours,
            "Operating hours",
            &state.draft.operating_hours,
        ));
    }
    lines.push(text_field(
        state,
        FormField::SaleHour,
        "Sale hour (0-23)",
        &state.draft.sale_hour,
    ));

    lines.push(payment_line(state));

    lines.push(text_field(
        state,
        FormField::NewProduct,
        "New product (Enter adds)",
        &state.new_product_input,
    ));

    lines.push(Line::from(Span::styled(
        if state.focus == FormField::Products {
            "Products  [Space toggle, r rename, d delete]"
        } else {
            "Products"
        },
        Style::default().fg(if state.focus == FormField::Products {
            Color::LightYellow
        } else {
            Color::Gray
        }),
    )));
    lines.extend(product_lines(state));

    if let Some(buffer) = &state.rename_input {
        lines.push(Line::from(vec![
            Span::styled("  Rename to: ", Style::default().fg(Color::LightMagenta)),
            Span::styled(
                format!("{}_", buffer),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    lines.push(text_field(
        state,
        FormField::Volume,
        "Sales volume",
        &state.draft.sales_volume,
    ));
    lines.push(text_field(
        state,
        FormField::Price,
        "Price per unit",
        &state.draft.price_per_unit,
    ));

    let total = state.draft.total_revenue_display();
    lines.push(Line::from(vec![
        Span::styled("Total revenue: ", Style::default().fg(Color::Gray)),
        Span::styled(
            total,
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Tab] Next field  [Enter] Save  [Esc] Cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title("ADD EVENT")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// All payment methods on one line, the chosen one highlighted.
fn payment_line(state: &DashboardState) -> Line<'static> {
    let focused = state.focus == FormField::Payment;
    let label_style = if focused {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled(
        format!("{:<26}", "Payment method"),
        label_style,
    )];
    for method in PaymentMethod::ALL {
        let style = if method == state.draft.payment_method {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}  ", method), style));
    }
    Line::from(spans)
}

/// Render the import-path prompt over the dashboard.
pub fn render_import_prompt(f: &mut Frame, buffer: &str) {
    let area = centered_rect(60, 20, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("File: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{}_", buffer), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Upload  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title("IMPORT EVENTS (csv / xlsx / xls)")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn text_field(state: &DashboardState, field: FormField, label: &str, value: &str) -> Line<'static> {
    let focused = state.focus == field;
    let shown = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    labelled(focused, label, &shown)
}

fn labelled(focused: bool, label: &str, value: &str) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(format!("{:<26}", label), label_style),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

/// A window of the catalog around the cursor, with selection marks.
fn product_lines(state: &DashboardState) -> Vec<Line<'static>> {
    let names = state.catalog.names();
    if state.catalog.is_empty() {
        return vec![Line::from(Span::styled(
            "  (no products)",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let start = state
        .product_cursor
        .saturating_sub(PRODUCT_WINDOW / 2)
        .min(names.len().saturating_sub(PRODUCT_WINDOW));
    let end = (start + PRODUCT_WINDOW).min(names.len());

    names[start..end]
        .iter()
        .enumerate()
        .map(|(offset, name)| {
            let index = start + offset;
            let under_cursor = state.focus == FormField::Products && index == state.product_cursor;
            let mark = if state.draft.is_selected(name) { "[x]" } else { "[ ]" };
            let style = if under_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightYellow)
            } else if state.draft.is_selected(name) {
                Style::default().fg(Color::LightGreen)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!("  {} {}", mark, name), style))
        })
        .collect()
}
