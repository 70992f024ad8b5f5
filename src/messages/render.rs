//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::LogEntry;
use crate::messages::ui_events::{InputField, InputMode};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    /// API base the page talks to
    pub api_base: String,

    // Form inputs, in `InputField::ALL` order
    pub inputs: Vec<(InputField, String)>,
    pub focus: InputField,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Container innerHTML
    pub artists_html: String,
    pub choreographies_html: String,
    pub error_html: String,

    pub markup_scroll: u16,
    pub in_flight: usize,
    pub reloads: u64,
    pub activity: Vec<LogEntry>,

    pub show_help: bool,
}

impl RenderState {
    pub fn value(&self, field: InputField) -> &str {
        self.inputs
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}
