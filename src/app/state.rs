//! App state - pure data structure with no I/O logic

use std::collections::{HashMap, VecDeque};

use crate::constants::MAX_ACTIVITY;
use crate::messages::ui_events::{InputField, InputMode};
use crate::messages::{OperationKind, RenderState};
use crate::page::Page;

/// Severity of an activity log entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// A line in the activity log, the page's console
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    /// The document every response is applied to
    pub page: Page,
    pub api_base: String,

    // Form editing
    pub focus: InputField,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub markup_scroll: u16,

    // Requests issued and not yet answered, with the reload count at dispatch
    pub next_request_id: u64,
    pub pending: HashMap<u64, (OperationKind, u64)>,

    pub activity: VecDeque<LogEntry>,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_API_BASE)
    }
}

impl AppState {
    pub fn new(api_base: impl Into<String>) -> Self {
        AppState {
            page: Page::new(),
            api_base: api_base.into(),
            focus: InputField::default(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            markup_scroll: 0,
            next_request_id: 1,
            pending: HashMap::new(),
            activity: VecDeque::with_capacity(MAX_ACTIVITY),
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the focused input's content
    pub fn current_input(&self) -> &str {
        self.page.value(self.focus.id())
    }

    pub fn current_input_mut(&mut self) -> &mut String {
        self.page.value_mut(self.focus.id())
    }

    /// Append to the activity log, newest first
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        if self.activity.len() >= MAX_ACTIVITY {
            self.activity.pop_back();
        }
        self.activity.push_front(LogEntry {
            level,
            message: message.into(),
            timestamp: chrono::Utc::now(),
        });
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        use crate::constants::ids;

        RenderState {
            api_base: self.api_base.clone(),
            inputs: InputField::ALL
                .iter()
                .map(|f| (*f, self.page.value(f.id()).to_string()))
                .collect(),
            focus: self.focus,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            artists_html: self.page.inner_html(ids::ARTISTS).to_string(),
            choreographies_html: self.page.inner_html(ids::CHOREOGRAPHIES).to_string(),
            error_html: self.page.inner_html(ids::ERROR).to_string(),
            markup_scroll: self.markup_scroll,
            in_flight: self.pending.len(),
            reloads: self.page.reloads(),
            activity: self.activity.iter().cloned().collect(),
            show_help: self.show_help,
        }
    }
}
