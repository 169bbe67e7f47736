//! Shared UI components (status bar, message line, modal helpers).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::app::{AppState, InputMode};

/// Render the bottom status bar with mode and counts.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
        InputMode::Modal => "MODAL",
    };
    let filter = if app.search_query.is_empty() {
        String::new()
    } else {
        format!("  filter:[{}]", app.search_query)
    };
    let msg = format!(
        "mode: {mode}  users:{}/{}  rows/page:{}{}  up:{}s",
        app.users.len(),
        app.users_all.len(),
        app.rows_per_page,
        filter,
        app.started_at.elapsed().as_secs()
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

/// Render the single-line message area: the current error wins over the
/// current notification; both are absent most of the time.
pub fn render_message_line(f: &mut Frame, area: Rect, app: &AppState) {
    let (text, style) = if let Some(err) = &app.error {
        (err.clone(), Style::default().fg(app.theme.error_fg))
    } else if let Some(n) = &app.notification {
        (n.message.clone(), Style::default().fg(app.theme.notice_fg))
    } else {
        (String::new(), Style::default())
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

