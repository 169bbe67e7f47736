// Unit tests for usrdir-manager
// These tests work with the public API without modifying the main codebase

#[cfg(test)]
mod validate_tests {
    use usrdir_manager::error::ValidationError;
    use usrdir_manager::{UserDraft, validate};

    fn complete_draft() -> UserDraft {
        UserDraft {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            username: "testuser".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn validate_accepts_complete_draft() {
        assert!(validate(&complete_draft()).is_ok());
    }

    #[test]
    fn validate_requires_every_field() {
        let mut d = complete_draft();
        d.username = String::new();
        assert_eq!(
            validate(&d),
            Err(ValidationError::MissingField("username"))
        );
    }

    #[test]
    fn validate_rejects_email_without_dot_in_domain() {
        let mut d = complete_draft();
        d.email = "test@example".to_string();
        assert!(matches!(
            validate(&d),
            Err(ValidationError::InvalidEmailFormat(_))
        ));
    }

    #[test]
    fn validate_rejects_email_with_spaces() {
        let mut d = complete_draft();
        d.email = "test user@example.com".to_string();
        assert!(matches!(
            validate(&d),
            Err(ValidationError::InvalidEmailFormat(_))
        ));
    }
}

#[cfg(test)]
mod user_tests {
    use usrdir_manager::User;

    #[test]
    fn user_struct_round_trips_through_json() {
        let user = User {
            id: 1000,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            username: "testuser".to_string(),
            phone: "555-0100".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}

#[cfg(test)]
mod search_tests {
    use usrdir_manager::User;
    use usrdir_manager::app::AppState;
    use usrdir_manager::search::apply_search;

    fn create_test_user(name: &str, id: u64) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            username: name.to_lowercase(),
            phone: format!("555-01{id:02}"),
        }
    }

    fn create_test_app(users: Vec<User>) -> AppState {
        let mut app = AppState::new(false);
        app.users_all = users.clone();
        app.users = users;
        app
    }

    #[test]
    fn search_filters_by_username() {
        let mut app = create_test_app(vec![
            create_test_user("Alice", 1),
            create_test_user("Bob", 2),
            create_test_user("Carol", 3),
        ]);
        app.search_query = "car".to_string();
        apply_search(&mut app);

        assert_eq!(app.users.len(), 1);
        assert_eq!(app.users[0].name, "Carol");
    }

    #[test]
    fn search_filters_by_id() {
        let mut app = create_test_app(vec![
            create_test_user("Alice", 1),
            create_test_user("Bob", 22),
        ]);
        app.search_query = "22".to_string();
        apply_search(&mut app);

        assert_eq!(app.users.len(), 1);
        assert_eq!(app.users[0].name, "Bob");
    }

    #[test]
    fn search_with_no_match_empties_the_view_but_not_the_collection() {
        let mut app = create_test_app(vec![create_test_user("Alice", 1)]);
        app.search_query = "zzz".to_string();
        apply_search(&mut app);

        assert!(app.users.is_empty());
        assert_eq!(app.users_all.len(), 1);
    }
}
