//! Dashboard main renderer

use super::components::{charts, footer, form, header, logs, summary, table};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    summary::render_summary(f, main_chunks[1], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[2]);

    charts::render_charts_section(f, content_chunks[0], state);
    table::render_events_table(f, content_chunks[1], state);

    logs::render_logs_panel(f, main_chunks[3], state);
    footer::render_footer(f, main_chunks[4]);

    // Overlays come last so they draw on top.
    if state.form_open {
        form::render_form(f, state);
    }
    if let Some(buffer) = &state.import_input {
        form::render_import_prompt(f, buffer);
    }
}
