//! The application event loop: draws the UI, routes key input, and dispatches
//! user intents (add/edit/delete/select) to the user store.
//!
//! The store's transactions are local (memory + cache slot). After a successful
//! local commit the corresponding remote call is fired best-effort; a remote
//! failure is logged and never rolls back local state.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;
use tracing::{debug, warn};

use crate::app::{AppState, FormField, InputMode, ModalState};
use crate::remote::RemoteDirectory;
use crate::search::apply_search;
use crate::store::UserStore;
use crate::ui;
use crate::user::UserDraft;

pub async fn run_app<R: RemoteDirectory>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut store: UserStore<R>,
    offline: bool,
) -> Result<()> {
    let mut app = AppState::new(offline);

    if let Err(e) = store.load().await {
        warn!(error = %e, "initial load failed");
        app.set_error("Failed to load users from API");
    }
    app.refresh_from(store.users());

    loop {
        terminal.draw(|f| {
            ui::render(f, &mut app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.input_mode {
                        InputMode::Normal => match key.code {
                            KeyCode::Char('q') => break,
                            KeyCode::Char('/') => {
                                app.search_query.clear();
                                app.input_mode = InputMode::Search;
                            }
                            KeyCode::Char('n') => app.open_add_form(),
                            KeyCode::Enter | KeyCode::Char('e') => app.open_edit_form(),
                            KeyCode::Char('d') | KeyCode::Delete => app.open_delete_confirm(),
                            KeyCode::Up | KeyCode::Char('k') => {
                                if app.selected_index > 0 {
                                    app.selected_index -= 1;
                                }
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                if app.selected_index + 1 < app.users.len() {
                                    app.selected_index += 1;
                                }
                            }
                            KeyCode::Left | KeyCode::Char('h') => {
                                let rpp = app.rows_per_page.max(1);
                                if app.selected_index >= rpp {
                                    app.selected_index -= rpp;
                                } else {
                                    app.selected_index = 0;
                                }
                            }
                            KeyCode::Right | KeyCode::Char('l') => {
                                let rpp = app.rows_per_page.max(1);
                                let new_idx = app.selected_index.saturating_add(rpp);
                                app.selected_index = new_idx.min(app.users.len().saturating_sub(1));
                            }
                            _ => {}
                        },
                        InputMode::Search => match key.code {
                            KeyCode::Enter => {
                                apply_search(&mut app);
                                app.input_mode = InputMode::Normal;
                            }
                            KeyCode::Esc => {
                                app.input_mode = InputMode::Normal;
                                app.search_query.clear();
                                apply_search(&mut app);
                            }
                            KeyCode::Backspace => {
                                app.search_query.pop();
                            }
                            KeyCode::Char(c) => {
                                app.search_query.push(c);
                            }
                            _ => {}
                        },
                        InputMode::Modal => {
                            handle_modal_key(&mut app, &mut store, key.code).await;
                        }
                    }
                }
            }
        }

        app.tick_notification();
    }

    Ok(())
}

async fn handle_modal_key<R: RemoteDirectory>(
    app: &mut AppState,
    store: &mut UserStore<R>,
    code: KeyCode,
) {
    match &mut app.modal {
        Some(ModalState::UserForm {
            editing,
            field,
            name,
            email,
            username,
            phone,
        }) => match code {
            KeyCode::Esc => {
                app.close_modal();
                app.error = None;
            }
            KeyCode::Tab | KeyCode::Down => *field = field.next(),
            KeyCode::BackTab | KeyCode::Up => *field = field.prev(),
            KeyCode::Backspace => {
                form_value(field, name, email, username, phone).pop();
            }
            KeyCode::Char(c) => {
                form_value(field, name, email, username, phone).push(c);
            }
            KeyCode::Enter => {
                let editing = *editing;
                let draft = UserDraft {
                    name: name.clone(),
                    email: email.clone(),
                    username: username.clone(),
                    phone: phone.clone(),
                };
                submit_form(app, store, editing, draft).await;
            }
            _ => {}
        },
        Some(ModalState::DeleteConfirm { selected }) => match code {
            KeyCode::Esc => app.close_modal(),
            KeyCode::Left | KeyCode::Right => {
                *selected = if *selected == 0 { 1 } else { 0 };
            }
            KeyCode::Enter => {
                let confirmed = *selected == 0;
                if confirmed {
                    confirm_delete(app, store).await;
                } else {
                    app.close_modal();
                }
            }
            _ => {}
        },
        None => {}
    }
}

fn form_value<'a>(
    field: &FormField,
    name: &'a mut String,
    email: &'a mut String,
    username: &'a mut String,
    phone: &'a mut String,
) -> &'a mut String {
    match field {
        FormField::Name => name,
        FormField::Email => email,
        FormField::Username => username,
        FormField::Phone => phone,
    }
}

/// Commit the form locally, then propagate to the remote best-effort.
/// Validation and duplicate-email failures keep the form open.
async fn submit_form<R: RemoteDirectory>(
    app: &mut AppState,
    store: &mut UserStore<R>,
    editing: Option<u64>,
    draft: UserDraft,
) {
    match editing {
        None => match store.create_user(draft) {
            Ok(created) => {
                let created = created.clone();
                app.refresh_from(store.users());
                app.close_modal();
                app.notify("User added successfully");
                if !app.offline {
                    match store.remote().create_user(&created).await {
                        // Local ids are authoritative; the echoed id is only logged.
                        Ok(remote_id) => {
                            debug!(local_id = created.id, remote_id, "remote create acknowledged");
                        }
                        Err(e) => warn!(error = %e, "remote create failed, local state kept"),
                    }
                }
            }
            Err(e) => app.set_error(e.to_string()),
        },
        Some(id) => {
            let user = draft.into_user(id);
            match store.update_user(user.clone()) {
                Ok(()) => {
                    app.refresh_from(store.users());
                    app.close_modal();
                    app.notify("User updated successfully");
                    if !app.offline {
                        if let Err(e) = store.remote().update_user(&user).await {
                            warn!(error = %e, "remote update failed, local state kept");
                        }
                    }
                }
                Err(e) => app.set_error(e.to_string()),
            }
        }
    }
}

async fn confirm_delete<R: RemoteDirectory>(app: &mut AppState, store: &mut UserStore<R>) {
    let Some(id) = app.selected_user().map(|u| u.id) else {
        app.close_modal();
        return;
    };
    match store.delete_user(id) {
        Ok(removed) => {
            app.refresh_from(store.users());
            app.close_modal();
            app.notify("User deleted successfully");
            if !app.offline {
                if let Err(e) = store.remote().delete_user(removed.id).await {
                    warn!(error = %e, "remote delete failed, local state kept");
                }
            }
        }
        Err(e) => {
            app.close_modal();
            app.set_error(e.to_string());
        }
    }
}
