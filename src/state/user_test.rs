use super::*;

// =============================================================
// Draft lifecycle
// =============================================================

#[test]
fn default_draft_is_empty_and_not_submittable() {
    let draft = User::default();
    assert!(draft.first_name.is_empty());
    assert!(draft.last_name.is_empty());
    assert!(draft.email.is_empty());
    assert!(draft.note.is_empty());
    assert!(draft.created.is_none());
    assert_eq!(draft.validation, Validation::default());
    assert!(!draft.submittable());
}

fn filled_draft() -> User {
    User {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        note: "first".to_owned(),
        ..User::default()
    }
}

#[test]
fn submittable_once_all_four_fields_are_non_empty() {
    assert!(filled_draft().submittable());
}

#[test]
fn any_single_empty_field_blocks_submission() {
    for clear in [
        |u: &mut User| u.first_name.clear(),
        |u: &mut User| u.last_name.clear(),
        |u: &mut User| u.email.clear(),
        |u: &mut User| u.note.clear(),
    ] {
        let mut draft = filled_draft();
        clear(&mut draft);
        assert!(!draft.submittable());
    }
}

#[test]
fn values_are_taken_verbatim_so_whitespace_counts() {
    let mut draft = filled_draft();
    draft.note = " ".to_owned();
    assert!(draft.submittable());
}

// =============================================================
// Validation messages
// =============================================================

#[test]
fn message_table_matches_field_names() {
    assert_eq!(Field::FirstName.message(), "Please enter a first name.");
    assert_eq!(Field::LastName.message(), "Please enter a last name.");
    assert_eq!(Field::Email.message(), "Please enter a valid email.");
    assert_eq!(Field::Note.message(), "Please enter a note.");
}

#[test]
fn record_stores_the_static_message_for_that_field_only() {
    let mut validation = Validation::default();
    validation.record(Field::Email);
    assert_eq!(validation.get(Field::Email), Some("Please enter a valid email."));
    assert_eq!(validation.get(Field::FirstName), None);
    assert_eq!(validation.get(Field::LastName), None);
    assert_eq!(validation.get(Field::Note), None);
}

#[test]
fn correcting_a_field_does_not_clear_its_recorded_message() {
    // Entries are only ever added on an invalid event; nothing removes them
    // apart from the whole-draft reset on submit.
    let mut draft = User::default();
    draft.validation.record(Field::FirstName);
    draft.first_name = "Ada".to_owned();
    assert_eq!(
        draft.validation.get(Field::FirstName),
        Some("Please enter a first name.")
    );
}

// =============================================================
// Identity key
// =============================================================

#[test]
fn created_key_is_empty_for_drafts() {
    assert_eq!(User::default().created_key(), "");
}

#[test]
fn created_key_is_the_timestamp_string() {
    let user = User {
        created: Some(1_700_000_000_000.0),
        ..User::default()
    };
    assert_eq!(user.created_key(), "1700000000000");
}
