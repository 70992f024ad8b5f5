//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::constants::ids;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Field navigation
    NextField,
    PrevField,
    ScrollUp,
    ScrollDown,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Page operations
    ListArtists,
    ListChoreographies,
    CreateChoreography,
    EditArtist,
    DeleteChoreography,
    Reload,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Form input with focus (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputField {
    #[default]
    ChoreName,
    ChoreDescription,
    ChoreNameOld,
    ArtistNameOld,
    ArtistName,
    ArtistUnique,
}

impl InputField {
    pub const ALL: [InputField; 6] = [
        InputField::ChoreName,
        InputField::ChoreDescription,
        InputField::ChoreNameOld,
        InputField::ArtistNameOld,
        InputField::ArtistName,
        InputField::ArtistUnique,
    ];

    /// Page element backing this field
    pub fn id(&self) -> &'static str {
        match self {
            InputField::ChoreName => ids::CHORE_NAME,
            InputField::ChoreDescription => ids::CHORE_DESCRIPTION,
            InputField::ChoreNameOld => ids::CHORE_NAME_OLD,
            InputField::ArtistNameOld => ids::ARTIST_NAME_OLD,
            InputField::ArtistName => ids::ARTIST_NAME,
            InputField::ArtistUnique => ids::ARTIST_UNIQUE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::ChoreName => "Choreography name",
            InputField::ChoreDescription => "Description",
            InputField::ChoreNameOld => "Choreography to delete",
            InputField::ArtistNameOld => "Artist to edit (unique name)",
            InputField::ArtistName => "New name",
            InputField::ArtistUnique => "New unique name",
        }
    }

    pub fn next(&self) -> InputField {
        match self {
            InputField::ChoreName => InputField::ChoreDescription,
            InputField::ChoreDescription => InputField::ChoreNameOld,
            InputField::ChoreNameOld => InputField::ArtistNameOld,
            InputField::ArtistNameOld => InputField::ArtistName,
            InputField::ArtistName => InputField::ArtistUnique,
            InputField::ArtistUnique => InputField::ChoreName,
        }
    }

    pub fn prev(&self) -> InputField {
        match self {
            InputField::ChoreName => InputField::ArtistUnique,
            InputField::ChoreDescription => InputField::ChoreName,
            InputField::ChoreNameOld => InputField::ChoreDescription,
            InputField::ArtistNameOld => InputField::ChoreNameOld,
            InputField::ArtistName => InputField::ArtistNameOld,
            InputField::ArtistUnique => InputField::ArtistName,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, input_mode: InputMode, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            KeyCode::Char('a') => Some(UiEvent::ListArtists),
            KeyCode::Char('g') => Some(UiEvent::ListChoreographies),
            KeyCode::Char('c') => Some(UiEvent::CreateChoreography),
            KeyCode::Char('u') => Some(UiEvent::EditArtist),
            KeyCode::Char('d') => Some(UiEvent::DeleteChoreography),
            KeyCode::Char('r') | KeyCode::F(5) => Some(UiEvent::Reload),
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_field_cycle_covers_all_inputs() {
        let mut field = InputField::default();
        for expected in InputField::ALL {
            assert_eq!(field, expected);
            assert_eq!(field.next().prev(), field);
            field = field.next();
        }
        assert_eq!(field, InputField::ChoreName);
    }

    #[test]
    fn test_operation_keys_in_normal_mode() {
        let map = |c| key_to_ui_event(press(KeyCode::Char(c)), InputMode::Normal, false);
        assert_eq!(map('c'), Some(UiEvent::CreateChoreography));
        assert_eq!(map('u'), Some(UiEvent::EditArtist));
        assert_eq!(map('d'), Some(UiEvent::DeleteChoreography));
        assert_eq!(map('a'), Some(UiEvent::ListArtists));
    }

    #[test]
    fn test_editing_mode_types_characters() {
        let event = key_to_ui_event(press(KeyCode::Char('d')), InputMode::Editing, false);
        assert_eq!(event, Some(UiEvent::CharInput('d')));
    }

    #[test]
    fn test_help_swallows_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('d')), InputMode::Normal, true);
        assert_eq!(event, Some(UiEvent::CloseHelp));
    }
}
