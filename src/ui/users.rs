use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};

use crate::app::{AppState, FormField, ModalState};

pub fn render_users_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let body_height = area.height.saturating_sub(3) as usize;
    if body_height > 0 {
        app.rows_per_page = body_height;
    }

    let start = (app.selected_index / app.rows_per_page) * app.rows_per_page;
    let end = (start + app.rows_per_page).min(app.users.len());
    let slice = &app.users[start..end];

    let rows = slice.iter().enumerate().map(|(i, u)| {
        let absolute_index = start + i;
        let style = if absolute_index == app.selected_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(u.id.to_string()),
            Cell::from(u.name.clone()),
            Cell::from(u.email.clone()),
            Cell::from(u.username.clone()),
            Cell::from(u.phone.clone()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(25),
        Constraint::Percentage(35),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];

    let header = Row::new(vec!["ID", "NAME", "EMAIL", "USERNAME", "PHONE"]).style(
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title("Users")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(
            Style::default()
                .fg(app.theme.highlight_fg)
                .bg(app.theme.highlight_bg)
                .add_modifier(Modifier::REVERSED),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

pub fn render_user_details(f: &mut Frame, area: Rect, app: &AppState) {
    let user = app.selected_user();
    let (id, name, email, username, phone) = match user {
        Some(u) => (
            u.id.to_string(),
            u.name.clone(),
            u.email.clone(),
            u.username.clone(),
            u.phone.clone(),
        ),
        None => Default::default(),
    };

    let text =
        format!("ID: {id}\nName: {name}\nEmail: {email}\nUsername: {username}\nPhone: {phone}");
    let p = Paragraph::new(text)
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title("Details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}

pub fn render_user_modal(f: &mut Frame, area: Rect, app: &mut AppState, state: &ModalState) {
    match state.clone() {
        ModalState::UserForm {
            editing,
            field,
            name,
            email,
            username,
            phone,
        } => {
            let rect = crate::ui::components::centered_rect(60, 10, area);
            let title = if editing.is_some() { "Edit User" } else { "Add User" };
            let values = [
                (FormField::Name, name),
                (FormField::Email, email),
                (FormField::Username, username),
                (FormField::Phone, phone),
            ];
            let mut text = String::new();
            for (form_field, value) in values {
                let marker = if form_field == field { "▶" } else { " " };
                text.push_str(&format!("{} {:<9} {}\n", marker, form_field.label(), value));
            }
            text.push_str("\nEnter: save  Tab: next field  Esc: cancel");
            let p = Paragraph::new(text).block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
            f.render_widget(Clear, rect);
            f.render_widget(p, rect);
        }
        ModalState::DeleteConfirm { selected } => {
            let rect = crate::ui::components::centered_rect(50, 7, area);
            let (name, id) = match app.selected_user() {
                Some(u) => (u.name.clone(), u.id),
                None => (String::new(), 0),
            };
            let yes = if selected == 0 { "[Yes]" } else { " Yes " };
            let no = if selected == 1 { "[No]" } else { " No  " };
            let body =
                format!("Are you sure you want to delete '{name}' (id {id})?\n\n  {yes}    {no}");
            let p = Paragraph::new(body).block(
                Block::default()
                    .title("Confirm delete")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
            f.render_widget(Clear, rect);
            f.render_widget(p, rect);
        }
    }
}
