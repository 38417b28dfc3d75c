//! Dashboard state update logic
//!
//! The controller operations: network-backed actions awaited by the UI
//! loop, catalog/draft coordination, and key handling.

use super::state::{Action, DashboardState, ExportKind, FormField};

use crate::api::SalesApi;
use crate::consts::cli_consts::exports;
use crate::events::{Event as ActivityEvent, EventType};
use crate::logging::LogLevel;

use crossterm::event::KeyCode;
use std::path::{Path, PathBuf};

impl ExportKind {
    pub fn filename(self) -> &'static str {
        match self {
            ExportKind::Pdf => exports::PDF_FILENAME,
            ExportKind::Excel => exports::EXCEL_FILENAME,
            ExportKind::Csv => exports::CSV_FILENAME,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Pdf => "PDF",
            ExportKind::Excel => "Excel",
            ExportKind::Csv => "CSV",
        }
    }
}

// Network-backed operations. Each failure is logged and leaves the rest of
// the state as it was.
impl DashboardState {
    /// Fetches all events and rebuilds the derived datasets. On failure the
    /// prior event list stays in place.
    pub async fn load_events(&mut self, api: &dyn SalesApi) {
        match api.get_events().await {
            Ok(events) => {
                let count = events.len();
                self.set_events(events);
                self.push_log(ActivityEvent::loader(
                    format!("Loaded {count} events"),
                    EventType::Refresh,
                ));
            }
            Err(e) => {
                let level = self.classifier().classify_api_error(&e);
                self.push_log(
                    ActivityEvent::loader(
                        format!("Error fetching events: {}", e.user_message()),
                        EventType::Error,
                    )
                    .with_level(level),
                );
            }
        }
    }

    /// Posts the draft as a new event. On success the draft resets and the
    /// event list is reloaded; the modal closes either way.
    pub async fn submit_event(&mut self, api: &dyn SalesApi) {
        let request = self.draft.to_request();
        match api.save_event(&request).await {
            Ok(message) => {
                self.push_log(ActivityEvent::submitter(message, EventType::Success));
                self.load_events(api).await;
            }
            Err(e) => {
                self.push_log(
                    ActivityEvent::submitter(
                        format!("Failed to save event: {}", e.user_message()),
                        EventType::Error,
                    )
                    .with_level(LogLevel::Error),
                );
            }
        }
        self.close_form();
    }

    /// Uploads a csv/xlsx/xls file to the import endpoint and reloads the
    /// event list on success.
    pub async fn import_file(&mut self, api: &dyn SalesApi, path: &Path) {
        self.push_log(ActivityEvent::transfer(
            format!("Uploading {}...", path.display()),
            EventType::Waiting,
        ));
        match api.import_events(path).await {
            Ok(message) => {
                self.push_log(ActivityEvent::transfer(message, EventType::Success));
                self.load_events(api).await;
            }
            Err(e) => {
                let level = self.classifier().classify_api_error(&e);
                self.push_log(
                    ActivityEvent::transfer(
                        format!("Import failed: {}", e.user_message()),
                        EventType::Error,
                    )
                    .with_level(level),
                );
            }
        }
    }

    /// Downloads a report and writes it to its fixed filename in the
    /// working directory.
    pub async fn export_report(&mut self, api: &dyn SalesApi, kind: ExportKind) {
        self.push_log(ActivityEvent::transfer(
            format!("Requesting {} report...", kind.label()),
            EventType::Waiting,
        ));
        let result = match kind {
            ExportKind::Pdf => api.export_pdf().await,
            ExportKind::Excel => api.export_excel().await,
            ExportKind::Csv => api.export_csv().await,
        };
        let filename = kind.filename();

        match result {
            Ok(bytes) => match tokio::fs::write(filename, &bytes).await {
                Ok(()) => {
                    self.push_log(ActivityEvent::transfer(
                        format!("{} report saved to {filename}", kind.label()),
                        EventType::Success,
                    ));
                }
                Err(e) => {
                    self.push_log(
                        ActivityEvent::transfer(
                            format!("Could not write {filename}: {e}"),
                            EventType::Error,
                        )
                        .with_level(LogLevel::Error),
                    );
                }
            },
            Err(e) => {
                let level = self.classifier().classify_api_error(&e);
                self.push_log(
                    ActivityEvent::transfer(
                        format!("Export failed: {}", e.user_message()),
                        EventType::Error,
                    )
                    .with_level(level),
                );
            }
        }
    }
}

// Catalog operations, kept in sync with the draft's selection set.
impl DashboardState {
    pub fn add_product(&mut self, name: &str) {
        self.catalog.add(name);
    }

    /// Renames a catalog entry and swaps it in the draft's selection when
    /// the old name was selected.
    pub fn rename_product(&mut self, old: &str, new: &str) {
        if let Some(applied) = self.catalog.rename(old, new) {
            self.draft.replace_selection(old, &applied);
        }
    }

    /// Removes a catalog entry and deselects it in the draft.
    pub fn remove_product(&mut self, name: &str) {
        self.catalog.remove(name);
        self.draft.deselect(name);
        if self.product_cursor >= self.catalog.len() {
            self.product_cursor = self.catalog.len().saturating_sub(1);
        }
    }

    pub fn toggle_product(&mut self, name: &str) {
        self.draft.toggle_product(name);
    }

    fn product_under_cursor(&self) -> Option<String> {
        self.catalog.names().get(self.product_cursor).cloned()
    }
}

// Key handling. Returns the async work the UI loop should run, if any.
impl DashboardState {
    pub fn handle_key(&mut self, code: KeyCode) -> Option<Action> {
        if self.import_input.is_some() {
            return self.handle_import_key(code);
        }
        if self.form_open {
            return self.handle_form_key(code);
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('a') => {
                self.open_form();
                None
            }
            KeyCode::Char('r') => Some(Action::Reload),
            KeyCode::Char('i') => {
                self.import_input = Some(String::new());
                None
            }
            KeyCode::Char('p') => Some(Action::Export(ExportKind::Pdf)),
            KeyCode::Char('x') => Some(Action::Export(ExportKind::Excel)),
            KeyCode::Char('c') => Some(Action::Export(ExportKind::Csv)),
            _ => None,
        }
    }

    fn handle_import_key(&mut self, code: KeyCode) -> Option<Action> {
        let buffer = self.import_input.as_mut()?;
        match code {
            KeyCode::Esc => {
                self.import_input = None;
            }
            KeyCode::Enter => {
                let path = buffer.trim().to_string();
                self.import_input = None;
                if !path.is_empty() {
                    return Some(Action::Import(PathBuf::from(path)));
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) => buffer.push(c),
            _ => {}
        }
        None
    }

    fn handle_form_key(&mut self, code: KeyCode) -> Option<Action> {
        // A rename in progress captures all input first.
        if self.rename_input.is_some() {
            self.handle_rename_key(code);
            return None;
        }

        match code {
            KeyCode::Esc => {
                self.close_form();
                None
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Enter => match self.focus {
                FormField::NewProduct => {
                    let name = self.new_product_input.clone();
                    self.add_product(&name);
                    self.new_product_input.clear();
                    None
                }
                _ => Some(Action::Submit),
            },
            _ => {
                self.handle_field_key(code);
                None
            }
        }
    }

    fn handle_rename_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.rename_input = None;
            }
            KeyCode::Enter => {
                if let (Some(new_name), Some(old_name)) =
                    (self.rename_input.take(), self.product_under_cursor())
                {
                    self.rename_product(&old_name, &new_name);
                }
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.rename_input.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.rename_input.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_field_key(&mut self, code: KeyCode) {
        match self.focus {
            FormField::Products => match code {
                KeyCode::Up => {
                    self.product_cursor = self.product_cursor.saturating_sub(1);
                }
                KeyCode::Down => {
                    if self.product_cursor + 1 < self.catalog.len() {
                        self.product_cursor += 1;
                    }
                }
                KeyCode::Char(' ') => {
                    if let Some(product) = self.product_under_cursor() {
                        self.toggle_product(&product);
                    }
                }
                KeyCode::Char('r') => {
                    if let Some(product) = self.product_under_cursor() {
                        self.rename_input = Some(product);
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(product) = self.product_under_cursor() {
                        self.remove_product(&product);
                    }
                }
                _ => {}
            },
            FormField::Payment => match code {
                KeyCode::Char(' ') | KeyCode::Right => {
                    self.draft.payment_method = self.draft.payment_method.next();
                }
                KeyCode::Left => {
                    // Two steps forward in a 3-cycle is one step back.
                    self.draft.payment_method = self.draft.payment_method.next().next();
                }
                _ => {}
            },
            _ => match code {
                KeyCode::Char(c) => {
                    if let Some(buffer) = self.focused_text_mut() {
                        buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(buffer) = self.focused_text_mut() {
                        buffer.pop();
                    }
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockSalesApi;
    use crate::api::error::ApiError;
    use crate::draft::EventDraft;
    use crate::models::{EventRecord, ProductsSold};
    use std::time::Instant;

    fn state() -> DashboardState {
        DashboardState::new("http://localhost:5000".to_string(), Instant::now(), None)
    }

    fn record() -> EventRecord {
        EventRecord {
            id: 1,
            event_name: "Quiz Night".to_string(),
            event_date_from: String::new(),
            event_date_to: String::new(),
            venue_name: String::new(),
            operating_hours: String::new(),
            products_sold: ProductsSold::parse("[]"),
            sales_volume: String::new(),
            price_per_unit: String::new(),
            total_revenue: "25.00".to_string(),
            sale_hour: "20".to_string(),
            payment_method: "Cash".to_string(),
        }
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_events() {
        let mut state = state();
        state.set_events(vec![record()]);

        let mut api = MockSalesApi::new();
        api.expect_get_events().returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "backend down".to_string(),
            })
        });

        state.load_events(&api).await;

        assert_eq!(state.events.len(), 1);
        assert_eq!(state.summary.transactions, 1);
        let last = state.activity_logs.back().unwrap();
        assert_eq!(last.event_type, EventType::Error);
    }

    #[tokio::test]
    async fn successful_submit_resets_draft_and_reloads() {
        let mut state = state();
        state.open_form();
        state.draft.event_name = "Quiz Night".to_string();
        state.draft.sales_volume = "10".to_string();
        state.draft.price_per_unit = "2.5".to_string();
        state.toggle_product("Madri");

        let mut api = MockSalesApi::new();
        api.expect_save_event()
            .withf(|request| request.total_revenue == Some(25.0))
            .returning(|_| Ok("Event saved successfully!".to_string()));
        api.expect_get_events()
            .times(1)
            .returning(|| Ok(vec![record()]));

        state.submit_event(&api).await;

        assert!(!state.form_open);
        assert_eq!(state.draft, EventDraft::default());
        assert_eq!(state.events.len(), 1);
        assert!(
            state
                .activity_logs
                .iter()
                .any(|e| e.msg == "Event saved successfully!")
        );
    }

    #[tokio::test]
    async fn failed_submit_surfaces_server_message_and_closes_modal() {
        let mut state = state();
        state.open_form();

        let mut api = MockSalesApi::new();
        api.expect_save_event().returning(|_| {
            Err(ApiError::Http {
                status: 400,
                message: "Error saving event: bad date".to_string(),
            })
        });

        state.submit_event(&api).await;

        assert!(!state.form_open);
        let last = state.activity_logs.back().unwrap();
        assert_eq!(last.event_type, EventType::Error);
        assert!(last.msg.contains("Error saving event: bad date"));
        assert!(state.events.is_empty());
    }

    #[tokio::test]
    async fn successful_import_reloads_events() {
        let mut state = state();

        let mut api = MockSalesApi::new();
        api.expect_import_events()
            .returning(|_| Ok("Successfully imported 3 events.".to_string()));
        api.expect_get_events()
            .times(1)
            .returning(|| Ok(vec![record(), record(), record()]));

        state.import_file(&api, Path::new("rows.csv")).await;

        assert_eq!(state.events.len(), 3);
        assert!(
            state
                .activity_logs
                .iter()
                .any(|e| e.msg.contains("imported 3"))
        );
    }

    #[tokio::test]
    async fn failed_export_logs_server_message() {
        let mut state = state();

        let mut api = MockSalesApi::new();
        api.expect_export_pdf().returning(|| {
            Err(ApiError::Http {
                status: 400,
                message: "No events found to generate report.".to_string(),
            })
        });

        state.export_report(&api, ExportKind::Pdf).await;

        let last = state.activity_logs.back().unwrap();
        assert!(last.msg.contains("No events found"));
    }

    #[test]
    fn duplicate_add_keeps_single_entry() {
        let mut state = state();
        let before = state.catalog.len();
        state.add_product("Stella");
        state.add_product("Stella");
        assert_eq!(state.catalog.len(), before + 1);
    }

    #[test]
    fn remove_product_also_deselects() {
        let mut state = state();
        state.toggle_product("Guinness");
        assert!(state.draft.is_selected("Guinness"));

        state.remove_product("Guinness");
        assert!(!state.catalog.contains("Guinness"));
        assert!(!state.draft.is_selected("Guinness"));
    }

    #[test]
    fn rename_product_swaps_draft_selection() {
        let mut state = state();
        state.toggle_product("Fosters");

        state.rename_product("Fosters", "Fosters Gold");
        assert!(state.catalog.contains("Fosters Gold"));
        assert!(state.draft.is_selected("Fosters Gold"));
        assert!(!state.draft.is_selected("Fosters"));
    }

    #[test]
    fn keys_drive_form_lifecycle() {
        let mut state = state();
        assert_eq!(state.handle_key(KeyCode::Char('a')), None);
        assert!(state.form_open);

        // Type into the name field, then tab away and back.
        state.handle_key(KeyCode::Char('Q'));
        state.handle_key(KeyCode::Char('z'));
        state.handle_key(KeyCode::Backspace);
        assert_eq!(state.draft.event_name, "Q");

        state.handle_key(KeyCode::Tab);
        assert_eq!(state.focus, FormField::DateFrom);
        state.handle_key(KeyCode::BackTab);
        assert_eq!(state.focus, FormField::Name);

        // Enter submits from a plain field.
        assert_eq!(state.handle_key(KeyCode::Enter), Some(Action::Submit));
    }

    #[test]
    fn space_toggles_product_under_cursor() {
        let mut state = state();
        state.open_form();
        state.focus = FormField::Products;

        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Char(' '));
        let second = state.catalog.names()[1].clone();
        assert!(state.draft.is_selected(&second));

        state.handle_key(KeyCode::Char(' '));
        assert!(!state.draft.is_selected(&second));
    }

    #[test]
    fn import_prompt_produces_action() {
        let mut state = state();
        assert_eq!(state.handle_key(KeyCode::Char('i')), None);
        assert!(state.import_input.is_some());

        for c in "rows.csv".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        assert_eq!(
            state.handle_key(KeyCode::Enter),
            Some(Action::Import(PathBuf::from("rows.csv")))
        );
        assert!(state.import_input.is_none());
    }

    #[test]
    fn quit_only_from_the_main_screen() {
        let mut state = state();
        state.open_form();
        assert_eq!(state.handle_key(KeyCode::Esc), None);
        assert!(!state.form_open);
        assert_eq!(state.handle_key(KeyCode::Esc), Some(Action::Quit));
    }
}
