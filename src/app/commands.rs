//! Command handlers - business logic for processing UI events

use crate::app::state::LogLevel;
use crate::app::AppState;
use crate::constants::ids;
use crate::markup::render_table;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse, Operation, OperationKind};
use crate::models::{Artist, Choreography};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
        self.cursor_position = self.current_input().len();
    }

    pub fn scroll_up(&mut self) {
        self.markup_scroll = self.markup_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.markup_scroll = self.markup_scroll.saturating_add(1);
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.replace_range(prev_pos..cursor_pos, "");
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Page operations
    // ========================

    fn dispatch(&mut self, operation: Operation) -> NetworkCommand {
        let id = self.next_id();
        self.pending.insert(id, (operation.kind(), self.page.reloads()));
        tracing::debug!(id, operation = operation.kind().as_str(), "Dispatching");
        NetworkCommand::Execute { id, operation }
    }

    pub fn list_artists(&mut self) -> NetworkCommand {
        self.dispatch(Operation::ListArtists)
    }

    pub fn list_choreographies(&mut self) -> NetworkCommand {
        self.dispatch(Operation::ListChoreographies)
    }

    /// POST the choreography typed into the create form
    pub fn create_choreography(&mut self) -> NetworkCommand {
        let choreography = Choreography::new(
            self.page.value(ids::CHORE_NAME),
            self.page.value(ids::CHORE_DESCRIPTION),
        );
        self.dispatch(Operation::CreateChoreography(choreography))
    }

    /// PUT the edited artist over the one named in `artist_name_old`
    pub fn edit_artist(&mut self) -> NetworkCommand {
        let old_unique_name = self.page.value(ids::ARTIST_NAME_OLD).to_string();
        let artist = Artist::new(
            self.page.value(ids::ARTIST_NAME),
            self.page.value(ids::ARTIST_UNIQUE),
        );
        self.dispatch(Operation::UpdateArtist { old_unique_name, artist })
    }

    pub fn delete_choreography(&mut self) -> NetworkCommand {
        let old_name = self.page.value(ids::CHORE_NAME_OLD).to_string();
        self.dispatch(Operation::DeleteChoreography { old_name })
    }

    /// The page's on-load script: render both lists
    pub fn load(&mut self) -> Vec<NetworkCommand> {
        vec![self.list_artists(), self.list_choreographies()]
    }

    /// Throw the document away and load it again
    pub fn reload(&mut self) -> Vec<NetworkCommand> {
        self.page.reset();
        // Callbacks of the old document never run
        self.pending.clear();
        self.input_mode = InputMode::Normal;
        self.cursor_position = 0;
        self.markup_scroll = 0;
        tracing::info!(reloads = self.page.reloads(), "Page reloaded");
        self.load()
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a network response to the page.
    ///
    /// Responses to requests issued before the last reload are dropped.
    /// Returns the follow-up commands the response triggers.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Vec<NetworkCommand> {
        let id = response.id();
        match self.pending.remove(&id) {
            Some((_, generation)) if generation == self.page.reloads() => {}
            _ => {
                tracing::debug!(id, reloads = self.page.reloads(), "Dropping response from an earlier page");
                return Vec::new();
            }
        }

        match response {
            NetworkResponse::Artists { items, .. } => {
                self.page.set_inner_html(ids::ARTISTS, render_table(&items));
                Vec::new()
            }
            NetworkResponse::Choreographies { items, .. } => {
                self.page.set_inner_html(ids::CHOREOGRAPHIES, render_table(&items));
                Vec::new()
            }
            NetworkResponse::Done { kind, status, .. } => self.handle_done(kind, status),
            NetworkResponse::Failed { id, kind, error } => {
                match kind {
                    OperationKind::CreateChoreography | OperationKind::UpdateArtist => {
                        match error.page_message() {
                            Some(message) => {
                                tracing::warn!(id, operation = kind.as_str(), %error, "Rejected");
                                self.page.set_inner_html(ids::ERROR, message.as_str());
                                self.log(LogLevel::Warn, format!("{}: {}", kind.as_str(), message));
                            }
                            None => {
                                tracing::error!(id, operation = kind.as_str(), %error, "Request failed");
                                self.log(LogLevel::Error, format!("{}: {}", kind.as_str(), error));
                            }
                        }
                    }
                    // No handler on the page for these
                    OperationKind::ListArtists
                    | OperationKind::ListChoreographies
                    | OperationKind::DeleteChoreography => {
                        tracing::warn!(id, operation = kind.as_str(), %error, "Unhandled failure");
                        self.log(LogLevel::Error, format!("{}: {}", kind.as_str(), error));
                    }
                }
                Vec::new()
            }
        }
    }

    fn handle_done(&mut self, kind: OperationKind, status: u16) -> Vec<NetworkCommand> {
        match kind {
            OperationKind::CreateChoreography => {
                tracing::info!(status, "Created!");
                self.log(LogLevel::Info, "Created!");
                self.page.set_inner_html(ids::ERROR, "");
                vec![self.list_choreographies()]
            }
            OperationKind::UpdateArtist => {
                tracing::info!(status, "Updated!");
                self.log(LogLevel::Info, "Updated!");
                self.reload()
            }
            OperationKind::DeleteChoreography => {
                tracing::info!(status, "Deleted!");
                self.log(LogLevel::Info, "Deleted!");
                self.reload()
            }
            OperationKind::ListArtists | OperationKind::ListChoreographies => Vec::new(),
        }
    }
}
