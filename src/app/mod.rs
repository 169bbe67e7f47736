//! Application state types and entry glue.
//!
//! Defines enums and structs that model the TUI state, as well as helpers
//! to construct defaults and to run the application loop (re-exported as `run`).

pub mod update;

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::user::User;

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Modal,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub error_fg: Color,
    pub notice_fg: Color,
}

impl Theme {
    /// Catppuccin Mocha defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            error_fg: Color::Rgb(0xf3, 0x8b, 0xa8),     // red
            notice_fg: Color::Rgb(0xa6, 0xe3, 0xa1),    // green
        }
    }
}

/// Fields of the add/edit user form, in cursor order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Username,
    Phone,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Username,
        FormField::Phone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Username => "Username",
            FormField::Phone => "Phone",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Modal dialog states.
#[derive(Clone, Debug)]
pub enum ModalState {
    /// Add (editing = None) or edit (editing = Some(id)) a user.
    UserForm {
        editing: Option<u64>,
        field: FormField,
        name: String,
        email: String,
        username: String,
        phone: String,
    },
    /// Yes/No confirmation before a delete. 0 = Yes, 1 = No.
    DeleteConfirm { selected: usize },
}

/// A transient success message; hidden again after [`Notification::TTL`].
#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub shown_at: Instant,
}

impl Notification {
    pub const TTL: Duration = Duration::from_secs(3);

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::TTL
    }
}

pub struct AppState {
    pub started_at: Instant,
    /// Mirror of the store's collection.
    pub users_all: Vec<User>,
    /// Visible slice after search filtering.
    pub users: Vec<User>,
    pub selected_index: usize,
    pub rows_per_page: usize,
    pub input_mode: InputMode,
    pub search_query: String,
    pub theme: Theme,
    pub modal: Option<ModalState>,
    /// The single current error; each new failure replaces it.
    pub error: Option<String>,
    pub notification: Option<Notification>,
    /// When set, local mutations are not propagated to the remote endpoint.
    pub offline: bool,
}

impl AppState {
    pub fn new(offline: bool) -> Self {
        Self {
            started_at: Instant::now(),
            users_all: Vec::new(),
            users: Vec::new(),
            selected_index: 0,
            rows_per_page: 10,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme: Theme::mocha(),
            modal: None,
            error: None,
            notification: None,
            offline,
        }
    }

    /// Adopt the store's collection, re-applying the active search filter and
    /// clamping the selection.
    pub fn refresh_from(&mut self, users: &[User]) {
        self.users_all = users.to_vec();
        crate::search::apply_search(self);
        if self.selected_index >= self.users.len() {
            self.selected_index = self.users.len().saturating_sub(1);
        }
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected_index)
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::new(message));
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Drop the notification once its display window has passed.
    pub fn tick_notification(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::expired) {
            self.notification = None;
        }
    }

    /// Open a blank form for adding a user.
    pub fn open_add_form(&mut self) {
        self.modal = Some(ModalState::UserForm {
            editing: None,
            field: FormField::Name,
            name: String::new(),
            email: String::new(),
            username: String::new(),
            phone: String::new(),
        });
        self.input_mode = InputMode::Modal;
    }

    /// Open the form pre-filled with the selected user, if any.
    pub fn open_edit_form(&mut self) {
        if let Some(user) = self.selected_user() {
            self.modal = Some(ModalState::UserForm {
                editing: Some(user.id),
                field: FormField::Name,
                name: user.name.clone(),
                email: user.email.clone(),
                username: user.username.clone(),
                phone: user.phone.clone(),
            });
            self.input_mode = InputMode::Modal;
        }
    }

    /// Open the delete confirmation, defaulting to "No".
    pub fn open_delete_confirm(&mut self) {
        if self.selected_user().is_some() {
            self.modal = Some(ModalState::DeleteConfirm { selected: 1 });
            self.input_mode = InputMode::Modal;
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.input_mode = InputMode::Normal;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_field_cursor_wraps() {
        assert_eq!(FormField::Name.next(), FormField::Email);
        assert_eq!(FormField::Phone.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Phone);
    }

    #[test]
    fn refresh_clamps_selection() {
        let mut app = AppState::new(false);
        app.selected_index = 5;
        app.refresh_from(&[crate::user::User {
            id: 1,
            name: "A".into(),
            email: "a@x.com".into(),
            username: "a".into(),
            phone: "1".into(),
        }]);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn notify_replaces_error() {
        let mut app = AppState::new(false);
        app.set_error("boom");
        app.notify("User added successfully");
        assert!(app.error.is_none());
        assert!(app.notification.is_some());
    }
}
