use super::error_map::ErrorMap;
use super::field::Field;
use super::record::{AccountType, OnboardingRecord};
use super::validation::validate_basic_info;
use crate::verification::VerificationToken;

/// Form state holder: the record plus its per-field errors.
///
/// Updating a field clears that field's error right away; nothing is
/// re-validated until the next explicit validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    record: OnboardingRecord,
    errors: ErrorMap,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: OnboardingRecord) -> Self {
        Self {
            record,
            errors: ErrorMap::new(),
        }
    }

    pub fn record(&self) -> &OnboardingRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value.into());
        self.errors.clear(field);
    }

    /// Switch account type. The value of the field that stops being required
    /// is kept, only its error goes away.
    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.record.account_type = account_type;
        match account_type {
            AccountType::Individual => self.errors.clear(Field::OrganizationName),
            AccountType::Company => self.errors.clear(Field::FullName),
        }
    }

    /// Recompute all errors of the basic-info step. Returns `true` when the
    /// step is valid.
    pub fn validate_basic_info(&mut self) -> bool {
        self.errors = validate_basic_info(&self.record);
        self.errors.is_empty()
    }

    /// The session's verification token, generated on first access.
    pub fn verification_token(&mut self) -> &VerificationToken {
        self.record
            .verification_token
            .get_or_insert_with(VerificationToken::generate)
    }

    pub fn existing_verification_token(&self) -> Option<&VerificationToken> {
        self.record.verification_token.as_ref()
    }

    pub(crate) fn replace_verification_token(&mut self, token: VerificationToken) {
        self.record.verification_token = Some(token);
    }
}
