use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use project_catalog::models::{BillingType, Category, Status};
use project_catalog::validate::{validate, ProjectField, ProjectInput};

fn valid_input() -> ProjectInput {
    ProjectInput {
        name: Some("Site Revamp".to_string()),
        client: Some("Acme Co".to_string()),
        category: Some("Development".to_string()),
        status: Some("inprogress".to_string()),
        billing_type: Some("fixed".to_string()),
        value: Some("50000".to_string()),
        start_date: Some("2025-01-01".to_string()),
        end_date: None,
        team: Vec::new(),
    }
}

#[test]
fn valid_input_produces_a_fully_typed_draft() {
    let draft = validate(&valid_input()).expect("input should validate");

    assert_eq!(draft.name, "Site Revamp");
    assert_eq!(draft.client, "Acme Co");
    assert_eq!(draft.category, Category::Development);
    assert_eq!(draft.status, Status::InProgress);
    assert_eq!(draft.billing_type, BillingType::Fixed);
    assert_eq!(draft.value, 50000.0);
    assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(draft.end_date, None);
    assert_eq!(draft.team, Vec::<String>::new());
}

#[test]
fn every_violation_is_reported_in_one_pass() {
    let input = ProjectInput {
        name: Some("A".to_string()),
        value: Some("-5".to_string()),
        ..ProjectInput::default()
    };

    let errors = validate(&input).expect_err("input should be rejected");
    let reported: Vec<(ProjectField, &str)> = errors
        .iter()
        .map(|e| (e.field, e.reason.as_str()))
        .collect();

    assert_eq!(
        reported,
        vec![
            (ProjectField::Name, "too short"),
            (ProjectField::Client, "too short"),
            (ProjectField::Category, "required"),
            (ProjectField::Status, "required"),
            (ProjectField::BillingType, "required"),
            (ProjectField::Value, "must be positive"),
            (ProjectField::StartDate, "required"),
        ]
    );
}

#[test]
fn value_coercion_accepts_numeric_looking_text() {
    let mut input = valid_input();
    input.value = Some("  1234.5  ".to_string());
    let draft = validate(&input).expect("padded numeric text should coerce");
    assert_eq!(draft.value, 1234.5);
}

#[test]
fn non_numeric_value_is_rejected_as_non_positive() {
    let mut input = valid_input();
    input.value = Some("a lot".to_string());

    let errors = validate(&input).expect_err("non-numeric value should be rejected");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, ProjectField::Value);
    assert_eq!(errors[0].reason, "must be positive");
}

#[test]
fn missing_end_date_is_not_an_error() {
    let mut input = valid_input();
    input.end_date = None;
    assert!(validate(&input).is_ok());

    input.end_date = Some("   ".to_string());
    let draft = validate(&input).expect("blank end date should count as absent");
    assert_eq!(draft.end_date, None);
}

#[test]
fn unparseable_end_date_is_exactly_one_error() {
    let mut input = valid_input();
    input.end_date = Some("sometime next year".to_string());

    let errors = validate(&input).expect_err("bad end date should be rejected");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, ProjectField::EndDate);
    assert_eq!(errors[0].reason, "invalid date");
}

#[test]
fn end_date_may_fall_before_the_start_date() {
    let mut input = valid_input();
    input.end_date = Some("2024-06-30".to_string());

    let draft = validate(&input).expect("date ordering is not validated");
    assert_eq!(draft.end_date, NaiveDate::from_ymd_opt(2024, 6, 30));
}

#[test]
fn enum_fields_accept_lenient_spellings() {
    let mut input = valid_input();
    input.status = Some("Awaiting PO".to_string());
    input.billing_type = Some("RETAINER".to_string());

    let draft = validate(&input).expect("lenient spellings should parse");
    assert_eq!(draft.status, Status::AwaitingPO);
    assert_eq!(draft.billing_type, BillingType::Retainer);
}

#[test]
fn team_defaults_to_empty_and_is_carried_through() {
    let mut input = valid_input();
    input.team = vec!["Ana".to_string(), "Bruno".to_string()];

    let draft = validate(&input).expect("team members need no validation");
    assert_eq!(draft.team, vec!["Ana", "Bruno"]);
}
