use crate::helpers::spawn_app;
use claims::{assert_err, assert_ok};
use fake::faker::name::en::Name;
use fake::Fake;
use user_registry::domain::ValidationError;

#[test]
fn a_valid_submission_is_appended_to_the_store() {
    let mut app = spawn_app();

    assert_ok!(app.submit("Alice", "Abcdefg1", "01/02/2023"));

    assert_eq!(app.store.len(), 1);
    let record = &app.store.records()[0];
    assert_eq!(record.user_name, "Alice");
    assert_eq!(record.password, "Abcdefg1");
    assert_eq!(record.date_of_create_account, "01/02/2023");
}

#[test]
fn a_blank_user_name_is_rejected_and_nothing_is_stored() {
    let mut app = spawn_app();

    let outcome = app.submit(" ", "Abcdefg1", "01/02/2023");

    assert_eq!(outcome.unwrap_err(), ValidationError::EmptyField);
    assert_eq!(app.store.len(), 0);
}

#[test]
fn a_rejected_submission_leaves_earlier_records_untouched() {
    let mut app = spawn_app();
    assert_ok!(app.submit("Alice", "Abcdefg1", "01/02/2023"));

    assert_err!(app.submit("Bob", "weak", "01/02/2023"));

    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.records()[0].user_name, "Alice");
}

#[test]
fn submissions_are_stored_in_the_order_they_were_accepted() {
    let mut app = spawn_app();

    assert_ok!(app.submit("Alice", "Abcdefg1", "01/02/2023"));
    assert_ok!(app.submit("Bob", "Hgfedcb2", "15-06-2021"));

    let names: Vec<_> = app
        .store
        .records()
        .iter()
        .map(|r| r.user_name.as_str())
        .collect();
    assert_eq!(names, ["Alice", "Bob"]);
}

#[test]
fn surrounding_whitespace_is_gone_from_the_stored_record() {
    let mut app = spawn_app();

    assert_ok!(app.submit("  Bob  ", "  Abcdefg1  ", "  01/02/2023  "));

    let record = &app.store.records()[0];
    assert_eq!(record.user_name, "Bob");
    assert_eq!(record.password, "Abcdefg1");
    assert_eq!(record.date_of_create_account, "01/02/2023");
}

#[test]
fn every_accepted_date_format_round_trips_through_the_store() {
    let mut app = spawn_app();
    let dates = ["01, 02, 2023", "01,02,2023", "01/02/2023", "01-02-2023"];

    for date in dates {
        let user_name: String = Name().fake();
        assert_ok!(app.submit(&user_name, "Abcdefg1", date));
    }

    assert_eq!(app.store.len(), dates.len());
    for (record, date) in app.store.records().iter().zip(dates) {
        assert_eq!(record.date_of_create_account, date);
    }
}

#[test]
fn resubmitting_after_a_failure_succeeds() {
    let mut app = spawn_app();

    assert_eq!(
        app.submit("Carol", "Abcdefg1", "31/02/2023").unwrap_err(),
        ValidationError::BadDateFormat
    );
    assert_ok!(app.submit("Carol", "Abcdefg1", "28/02/2023"));

    assert_eq!(app.store.len(), 1);
}
