use crate::app::AppState;

/// Filter the visible user list by the current search query.
///
/// Matches case-insensitively across name, email, username, phone, and id.
/// An empty query restores the full collection.
pub fn apply_search(app: &mut AppState) {
    let q = app.search_query.to_lowercase();
    if q.is_empty() {
        app.users = app.users_all.clone();
    } else {
        app.users = app
            .users_all
            .iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&q)
                    || u.email.to_lowercase().contains(&q)
                    || u.username.to_lowercase().contains(&q)
                    || u.phone.to_lowercase().contains(&q)
                    || u.id.to_string().contains(&q)
            })
            .cloned()
            .collect();
    }
    app.selected_index = 0;
}
