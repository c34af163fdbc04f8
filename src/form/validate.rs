//! The validation pass run before every submission attempt.

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::FormErrors;
use super::state::FormValues;

/// One or more non-whitespace characters, '@', one or more non-whitespace
/// characters. Deliberately loose; matches what the form UI accepted.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\S+@\S+$").expect("email regex must compile"));

/// Run every field rule against `values` and collect the failures.
///
/// All rules are evaluated; none short-circuits the others. Pure: no engine
/// state is touched, and the same values always produce the same errors.
pub fn validate(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::default();

    if values.first_name.is_empty() {
        errors.first_name = Some("First Name is Required".to_string());
    }
    if values.last_name.is_empty() {
        errors.last_name = Some("Last Name is Required".to_string());
    }
    if !EMAIL_RE.is_match(&values.email) {
        errors.email = Some("Invalid email address".to_string());
    }
    if values.age < 18 {
        errors.age = Some("You must be over the 18 years".to_string());
    }
    if values.gender.is_unset() {
        errors.gender = Some("Gender must be requried".to_string());
    }
    if values.address.city.is_empty() {
        errors.address.city = Some("City is requried".to_string());
    }
    if values.address.state.is_empty() {
        errors.address.state = Some("State is requried".to_string());
    }
    for (idx, hobby) in values.hobbies.iter().enumerate() {
        if hobby.name.is_empty() {
            errors.set_hobby(idx, "Hobby name is requried");
        }
    }
    // Referral is required only for subscribers, whether or not the field
    // was ever rendered.
    if values.subscribe && values.referral.is_empty() {
        errors.referral = Some("Referral source is requried if you are subscribing".to_string());
    }

    errors
}
