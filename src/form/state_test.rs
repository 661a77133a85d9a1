use super::*;

fn filled(username: &str, password: &str) -> SignInForm {
    let mut form = SignInForm::default();
    form.set_field(Field::Username, username.to_owned());
    form.set_field(Field::Password, password.to_owned());
    form
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_form_is_idle_and_enabled() {
    let form = SignInForm::default();
    assert_eq!(form.status, SubmissionState::Idle);
    assert!(!form.is_submit_disabled());
    assert!(form.errors.is_empty());
    assert!(form.notice.is_none());
    assert!(!form.attempted);
}

// =============================================================
// set_field
// =============================================================

#[test]
fn typing_before_first_submit_shows_no_errors() {
    let form = filled("j", "1");
    assert!(form.errors.is_empty());
}

#[test]
fn typing_after_failed_submit_revalidates() {
    let mut form = filled("jd", "secret1");
    assert!(form.begin_submit().is_err());
    assert!(form.error(Field::Username).is_some());

    form.set_field(Field::Username, "jdo".to_owned());
    assert_eq!(form.error(Field::Username), None);

    form.set_field(Field::Password, "123".to_owned());
    assert_eq!(form.error(Field::Password), Some("Password must be at least 6 characters"));
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn invalid_submit_stores_errors_and_keeps_status() {
    let mut form = filled("jd", "secret1");
    let rejected = form.begin_submit().unwrap_err();

    let SubmitRejected::Invalid(errors) = &rejected else {
        panic!("expected Invalid, got {rejected:?}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(form.error(Field::Username), Some("Username must be at least 3 characters"));
    assert_eq!(form.status, SubmissionState::Idle);
    assert!(!form.is_submit_disabled());
}

#[test]
fn valid_submit_enters_submitting_and_disables() {
    let mut form = filled("jdoe", "secret1");
    let values = form.begin_submit().unwrap();

    assert_eq!(values.username, "jdoe");
    assert_eq!(values.password, "secret1");
    assert_eq!(form.status, SubmissionState::Submitting);
    assert!(form.is_submit_disabled());
}

#[test]
fn submit_while_submitting_is_rejected_without_changes() {
    let mut form = filled("jdoe", "secret1");
    form.begin_submit().unwrap();
    let before = form.clone();

    assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    assert_eq!(form, before);
}

#[test]
fn new_submit_clears_previous_notice() {
    let mut form = filled("jdoe", "secret1");
    form.begin_submit().unwrap();
    form.finish_submit(&Err(SubmissionError::Transport("offline".to_owned())));
    assert!(form.notice.is_some());

    form.begin_submit().unwrap();
    assert!(form.notice.is_none());
}

// =============================================================
// finish_submit
// =============================================================

#[test]
fn success_sets_succeeded_and_success_notice() {
    let mut form = filled("jdoe", "secret1");
    form.begin_submit().unwrap();
    form.finish_submit(&Ok(serde_json::json!({ "id": 1 })));

    assert_eq!(form.status, SubmissionState::Succeeded);
    assert!(!form.is_submit_disabled());
    assert_eq!(
        form.notice,
        Some(Notice { kind: NoticeKind::Success, message: SUCCESS_MESSAGE.to_owned() })
    );
}

#[test]
fn failure_sets_failed_and_failure_notice() {
    let mut form = filled("jdoe", "secret1");
    form.begin_submit().unwrap();
    form.finish_submit(&Err(SubmissionError::Status { status: 401, body: String::new() }));

    assert_eq!(form.status, SubmissionState::Failed);
    assert!(!form.is_submit_disabled());
    let notice = form.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert_eq!(notice.message, "Could not sign in: sign-in failed: 401");
}

#[test]
fn failed_form_can_be_resubmitted() {
    let mut form = filled("jdoe", "secret1");
    form.begin_submit().unwrap();
    form.finish_submit(&Err(SubmissionError::Transport("offline".to_owned())));

    assert!(form.begin_submit().is_ok());
    assert_eq!(form.status, SubmissionState::Submitting);
}
