//! Dashboard state management
//!
//! The application-state struct owned by the UI loop. Every mutation goes
//! through the operations defined here and in `updaters.rs`.

use crate::catalog::ProductCatalog;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::draft::EventDraft;
use crate::error_classifier::ErrorClassifier;
use crate::events::Event as ActivityEvent;
use crate::models::EventRecord;
use crate::stats::{self, Summary};

use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;

/// Form fields in tab order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FormField {
    Name,
    DateFrom,
    DateTo,
    Venue,
    Hours,
    SaleHour,
    Payment,
    NewProduct,
    Products,
    Volume,
    Price,
}

impl FormField {
    pub const ORDER: [FormField; 11] = [
        FormField::Name,
        FormField::DateFrom,
        FormField::DateTo,
        FormField::Venue,
        FormField::Hours,
        FormField::SaleHour,
        FormField::Payment,
        FormField::NewProduct,
        FormField::Products,
        FormField::Volume,
        FormField::Price,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Async work requested by a key press; executed by the UI loop.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Action {
    Quit,
    Reload,
    Submit,
    Import(PathBuf),
    Export(ExportKind),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExportKind {
    Pdf,
    Excel,
    Csv,
}

/// Dashboard state: loaded events, the datasets derived from them, the
/// product catalog, the form draft, and the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// Base URL of the backend, shown in the header.
    pub base_url: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Default venue pre-filled into new drafts, from the config file.
    pub default_venue: Option<String>,

    /// All loaded event records, newest last (server order).
    pub events: Vec<EventRecord>,
    /// Derived chart datasets, rebuilt wholesale on every events change.
    pub summary: Summary,
    pub distribution: Vec<(String, u64)>,
    pub hourly: [f64; 24],

    /// Selectable product names (ephemeral).
    pub catalog: ProductCatalog,
    /// The in-progress event being composed.
    pub draft: EventDraft,

    /// Whether the add-event modal is open.
    pub form_open: bool,
    /// Focused form field while the modal is open.
    pub focus: FormField,
    /// Cursor into the catalog list while the Products field is focused.
    pub product_cursor: usize,
    /// Input buffer for the new-product row.
    pub new_product_input: String,
    /// Some while renaming the product under the cursor.
    pub rename_input: Option<String>,
    /// Some while the import-path prompt is open.
    pub import_input: Option<String>,

    /// Activity logs for display.
    pub activity_logs: VecDeque<ActivityEvent>,
    /// Animation tick counter.
    pub tick: usize,

    classifier: ErrorClassifier,
}

impl DashboardState {
    pub fn new(base_url: String, start_time: Instant, default_venue: Option<String>) -> Self {
        let mut draft = EventDraft::default();
        if let Some(venue) = &default_venue {
            draft.venue_name = venue.clone();
        }
        Self {
            base_url,
            start_time,
            default_venue,
            events: Vec::new(),
            summary: Summary::default(),
            distribution: Vec::new(),
            hourly: [0.0; 24],
            catalog: ProductCatalog::default(),
            draft,
            form_open: false,
            focus: FormField::Name,
            product_cursor: 0,
            new_product_input: String::new(),
            rename_input: None,
            import_input: None,
            activity_logs: VecDeque::new(),
            tick: 0,
            classifier: ErrorClassifier::new(),
        }
    }

    pub fn classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }

    /// Advance the animation tick.
    pub fn update(&mut self) {
        self.tick += 1;
    }

    /// Replaces the event list and rebuilds every derived dataset. The old
    /// datasets are dropped here; nothing else holds them.
    pub fn set_events(&mut self, events: Vec<EventRecord>) {
        self.summary = stats::compute_summary(&events);
        self.distribution = stats::product_distribution(&events);
        self.hourly = stats::hourly_totals(&events);
        self.events = events;
    }

    /// Add an event to activity logs with size limit
    pub fn push_log(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
        self.focus = FormField::Name;
        self.product_cursor = 0;
    }

    /// Closing the modal discards the draft, like reloading the page form.
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.reset_draft();
    }

    pub fn reset_draft(&mut self) {
        self.draft.reset();
        if let Some(venue) = &self.default_venue {
            self.draft.venue_name = venue.clone();
        }
        self.new_product_input.clear();
        self.rename_input = None;
        self.focus = FormField::Name;
        self.product_cursor = 0;
    }

    /// Mutable text buffer behind the focused form field, when it is a
    /// free-text field.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.draft.event_name),
            FormField::DateFrom => Some(&mut self.draft.event_date_from),
            FormField::DateTo => Some(&mut self.draft.event_date_to),
            FormField::Venue => Some(&mut self.draft.venue_name),
            FormField::Hours => Some(&mut self.draft.operating_hours),
            FormField::SaleHour => Some(&mut self.draft.sale_hour),
            FormField::Volume => Some(&mut self.draft.sales_volume),
            FormField::Price => Some(&mut self.draft.price_per_unit),
            FormField::NewProduct => Some(&mut self.new_product_input),
            FormField::Payment | FormField::Products => None,
        }
    }
}
