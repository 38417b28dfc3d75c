//! Event System
//!
//! Types and implementations for activity events shown in the dashboard log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Origin of an activity event, used for color coding in the log panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Fetching and refreshing the event list.
    EventLoader,
    /// Submitting a new event record.
    EventSubmitter,
    /// Bulk import and report export operations.
    Transfer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader(msg: String, event_type: EventType) -> Self {
        Self::new(Source::EventLoader, msg, event_type, LogLevel::Info)
    }

    pub fn submitter(msg: String, event_type: EventType) -> Self {
        Self::new(Source::EventSubmitter, msg, event_type, LogLevel::Info)
    }

    pub fn transfer(msg: String, event_type: EventType) -> Self {
        Self::new(Source::Transfer, msg, event_type, LogLevel::Info)
    }

    pub fn with_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_events_always_display() {
        let event =
            Event::loader("refreshed".to_string(), EventType::Success).with_level(LogLevel::Debug);
        assert!(event.should_display());
    }

    #[test]
    fn display_includes_type_and_message() {
        let event = Event::submitter("saved".to_string(), EventType::Success);
        let text = format!("{}", event);
        assert!(text.starts_with("Success ["));
        assert!(text.ends_with("saved"));
    }
}
