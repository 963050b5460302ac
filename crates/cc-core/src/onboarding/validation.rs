//! Field validators for the basic-info step.
//!
//! Validators are pure: they never touch form state. Callers decide where the
//! resulting errors go.

use url::Url;

use super::error_map::ErrorMap;
use super::field::Field;
use super::identity::Identity;
use super::record::OnboardingRecord;

pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Validation error attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: Field },
    #[error("Phone number is too short (minimum {min} digits)")]
    PhoneTooShort { min: usize },
    #[error("Phone number is too long (maximum {max} digits)")]
    PhoneTooLong { max: usize },
    #[error("Please enter a valid URL for {field}")]
    InvalidUrl { field: Field },
}

/// Digits of a phone number, ignoring separators and a leading plus.
pub fn phone_digits(input: &str) -> String {
    let trimmed = input.trim();
    let without_plus = trimmed.strip_prefix('+').unwrap_or(trimmed);
    without_plus.chars().filter(char::is_ascii_digit).collect()
}

/// Checks the shape of a phone number. The country code is tracked
/// separately and is not part of this check.
pub fn validate_phone(input: &str) -> Result<(), FieldError> {
    if input.trim().is_empty() {
        return Err(FieldError::Required {
            field: Field::PhoneNumber,
        });
    }

    let digits = phone_digits(input).len();
    if digits < PHONE_MIN_DIGITS {
        return Err(FieldError::PhoneTooShort {
            min: PHONE_MIN_DIGITS,
        });
    }
    if digits > PHONE_MAX_DIGITS {
        return Err(FieldError::PhoneTooLong {
            max: PHONE_MAX_DIGITS,
        });
    }
    Ok(())
}

/// Optional URL field: empty passes, anything else must parse.
pub fn validate_url(value: &str, field: Field) -> Result<(), FieldError> {
    if value.is_empty() {
        return Ok(());
    }
    Url::parse(value)
        .map(|_| ())
        .map_err(|_| FieldError::InvalidUrl { field })
}

/// The name required by the account type must not be blank.
pub fn validate_identity(identity: &Identity) -> Result<(), (Field, FieldError)> {
    match identity {
        Identity::Individual { full_name } if full_name.trim().is_empty() => Err((
            Field::FullName,
            FieldError::Required {
                field: Field::FullName,
            },
        )),
        Identity::Company {
            organization_name, ..
        } if organization_name.trim().is_empty() => Err((
            Field::OrganizationName,
            FieldError::Required {
                field: Field::OrganizationName,
            },
        )),
        _ => Ok(()),
    }
}

/// Full validation of the basic-info step.
pub fn validate_basic_info(record: &OnboardingRecord) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if let Err((field, err)) = validate_identity(&record.identity()) {
        errors.insert(field, err);
    }
    if let Err(err) = validate_phone(&record.phone_number) {
        errors.insert(Field::PhoneNumber, err);
    }
    for field in [Field::Website, Field::ProfileLink] {
        if let Err(err) = validate_url(record.get(field), field) {
            errors.insert(field, err);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::AccountType;

    const SEPARATED: [&str; 5] = ["{}", "+{}", " {} ", "({})", "+{}-"];

    fn digits(n: usize) -> String {
        "9876543210123456789".chars().cycle().take(n).collect()
    }

    fn with_separators(raw: &str) -> Vec<String> {
        let spaced: String = raw
            .chars()
            .enumerate()
            .flat_map(|(i, c)| if i > 0 && i % 3 == 0 { vec![' ', c] } else { vec![c] })
            .collect();
        let dashed = spaced.replace(' ', "-");
        SEPARATED
            .iter()
            .flat_map(|pattern| {
                [raw, spaced.as_str(), dashed.as_str()]
                    .into_iter()
                    .map(move |body| pattern.replace("{}", body))
            })
            .collect()
    }

    #[test]
    fn phone_in_range_passes_with_any_separators() {
        for n in PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS {
            for phone in with_separators(&digits(n)) {
                assert_eq!(validate_phone(&phone), Ok(()), "{phone:?} should pass");
            }
        }
    }

    #[test]
    fn phone_out_of_range_fails_with_any_separators() {
        for n in 1..PHONE_MIN_DIGITS {
            for phone in with_separators(&digits(n)) {
                assert_eq!(
                    validate_phone(&phone),
                    Err(FieldError::PhoneTooShort { min: 10 }),
                    "{phone:?}"
                );
            }
        }
        for n in (PHONE_MAX_DIGITS + 1)..=19 {
            for phone in with_separators(&digits(n)) {
                assert_eq!(
                    validate_phone(&phone),
                    Err(FieldError::PhoneTooLong { max: 15 }),
                    "{phone:?}"
                );
            }
        }
    }

    #[test]
    fn blank_phone_is_required() {
        for phone in ["", "   ", "\t"] {
            let err = validate_phone(phone).unwrap_err();
            assert_eq!(err.to_string(), "Phone number is required");
        }
    }

    #[test]
    fn empty_url_always_passes() {
        for field in Field::ALL {
            assert_eq!(validate_url("", field), Ok(()));
        }
    }

    #[test]
    fn unparsable_url_names_the_field() {
        for value in ["example.com", "not a url", "http://", "://missing-scheme"] {
            let err = validate_url(value, Field::ProfileLink).unwrap_err();
            assert_eq!(err.to_string(), "Please enter a valid URL for profile link");
        }
        assert_eq!(validate_url("https://t.me/jane", Field::ProfileLink), Ok(()));
    }

    #[test]
    fn individual_with_blank_full_name_fails() {
        let record = OnboardingRecord {
            account_type: AccountType::Individual,
            full_name: "  ".into(),
            organization_name: "Acme".into(),
            phone_number: "9876543210".into(),
            ..Default::default()
        };
        let errors = validate_basic_info(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::FullName), "Full name is required");
    }

    #[test]
    fn company_with_blank_organization_fails_but_contact_is_optional() {
        let record = OnboardingRecord {
            account_type: AccountType::Company,
            phone_number: "9876543210".into(),
            ..Default::default()
        };
        let errors = validate_basic_info(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(Field::OrganizationName),
            "Organization name is required"
        );
        assert!(errors.get(Field::FullName).is_none());
    }

    #[test]
    fn basic_info_collects_every_failure() {
        let record = OnboardingRecord {
            phone_number: "123".into(),
            website: "acme".into(),
            profile_link: "twitter/acme".into(),
            ..Default::default()
        };
        let errors = validate_basic_info(&record);
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                Field::FullName,
                Field::PhoneNumber,
                Field::Website,
                Field::ProfileLink
            ]
        );
    }
}
