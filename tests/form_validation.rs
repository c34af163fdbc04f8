mod common;

use common::valid_values;
use regform::form::{validate, FieldPath, FormValues, Gender, Hobby};

#[test]
fn fully_populated_values_produce_no_errors() {
    let errors = validate(&valid_values());
    assert!(errors.is_empty());
}

#[test]
fn empty_first_name_fails_independently_of_other_fields() {
    // Everything else invalid too; the firstName rule must not care.
    let mut values = FormValues::default();
    values.first_name = String::new();
    let errors = validate(&values);
    assert_eq!(errors.first_name.as_deref(), Some("First Name is Required"));

    // Everything else valid; same message.
    let mut values = valid_values();
    values.first_name = String::new();
    let errors = validate(&values);
    assert_eq!(errors.first_name.as_deref(), Some("First Name is Required"));
    assert_eq!(errors.last_name, None);
}

#[test]
fn last_name_is_required() {
    let mut values = valid_values();
    values.last_name = String::new();
    let errors = validate(&values);
    assert_eq!(errors.last_name.as_deref(), Some("Last Name is Required"));
}

#[test]
fn malformed_email_is_the_only_error_on_otherwise_valid_values() {
    let mut values = valid_values();
    values.email = "not-an-email".to_string();

    let errors = validate(&values);
    assert_eq!(errors.email.as_deref(), Some("Invalid email address"));

    let mut expected_only_email = errors.clone();
    expected_only_email.email = None;
    assert!(expected_only_email.is_empty());
}

#[test]
fn email_matching_is_case_insensitive() {
    let mut values = valid_values();
    values.email = "JO@EXAMPLE.COM".to_string();
    assert!(validate(&values).is_empty());
}

#[test]
fn age_below_eighteen_is_rejected() {
    let mut values = valid_values();
    values.age = 17;
    let errors = validate(&values);
    assert_eq!(errors.age.as_deref(), Some("You must be over the 18 years"));

    values.age = 18;
    assert!(validate(&values).is_empty());
}

#[test]
fn unset_gender_is_rejected() {
    let mut values = valid_values();
    values.gender = Gender::Unset;
    let errors = validate(&values);
    assert_eq!(errors.gender.as_deref(), Some("Gender must be requried"));
}

#[test]
fn address_fields_are_validated_independently() {
    let mut values = valid_values();
    values.address.city = String::new();
    let errors = validate(&values);
    assert_eq!(errors.address.city.as_deref(), Some("City is requried"));
    assert_eq!(errors.address.state, None);

    let mut values = valid_values();
    values.address.state = String::new();
    let errors = validate(&values);
    assert_eq!(errors.address.city, None);
    assert_eq!(errors.address.state.as_deref(), Some("State is requried"));
}

#[test]
fn hobby_errors_are_sparse_and_position_indexed() {
    let mut values = valid_values();
    values.hobbies = vec![
        Hobby {
            name: "chess".to_string(),
        },
        Hobby::default(),
        Hobby {
            name: "climbing".to_string(),
        },
        Hobby::default(),
    ];

    let errors = validate(&values);
    assert_eq!(
        errors.hobbies,
        vec![
            None,
            Some("Hobby name is requried".to_string()),
            None,
            Some("Hobby name is requried".to_string()),
        ]
    );
    assert_eq!(errors.get(&FieldPath::Hobby(0)), None);
    assert_eq!(errors.get(&FieldPath::Hobby(1)), Some("Hobby name is requried"));
}

#[test]
fn referral_is_never_required_without_subscription() {
    let mut values = valid_values();
    values.subscribe = false;

    for referral in ["", "x", "a friend"] {
        values.referral = referral.to_string();
        assert_eq!(validate(&values).referral, None, "referral = {:?}", referral);
    }
}

#[test]
fn referral_is_required_for_subscribers() {
    let mut values = valid_values();
    values.subscribe = true;
    values.referral = String::new();

    let errors = validate(&values);
    assert_eq!(
        errors.referral.as_deref(),
        Some("Referral source is requried if you are subscribing")
    );

    values.referral = "x".to_string();
    assert!(validate(&values).is_empty());
}

#[test]
fn all_rules_are_evaluated_at_once() {
    let mut values = FormValues::default();
    values.age = 17;
    values.subscribe = true;

    let errors = validate(&values);
    assert!(errors.first_name.is_some());
    assert!(errors.last_name.is_some());
    assert!(errors.email.is_some());
    assert!(errors.age.is_some());
    assert!(errors.gender.is_some());
    assert!(errors.address.city.is_some());
    assert!(errors.address.state.is_some());
    assert!(errors.hobbies.iter().any(Option::is_some));
    assert!(errors.referral.is_some());
    assert!(errors.root.is_none());
}

#[test]
fn validation_is_idempotent() {
    let values = FormValues::default();
    assert_eq!(validate(&values), validate(&values));

    let values = valid_values();
    assert_eq!(validate(&values), validate(&values));
}
