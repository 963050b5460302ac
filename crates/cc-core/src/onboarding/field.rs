use serde::{Deserialize, Serialize};

/// Editable text fields of the onboarding form.
///
/// The account type is not listed here: it is a selector, not a text input,
/// and is set through [`FormState::set_account_type`](super::FormState::set_account_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    OrganizationName,
    PhoneNumber,
    CountryCode,
    TelegramUsername,
    Website,
    ProfileLink,
    Description,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FullName,
        Field::OrganizationName,
        Field::PhoneNumber,
        Field::CountryCode,
        Field::TelegramUsername,
        Field::Website,
        Field::ProfileLink,
        Field::Description,
    ];

    /// Wire name of the field (camelCase, as sent to the API).
    pub fn key(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::OrganizationName => "organizationName",
            Field::PhoneNumber => "phoneNumber",
            Field::CountryCode => "countryCode",
            Field::TelegramUsername => "telegramUsername",
            Field::Website => "website",
            Field::ProfileLink => "profileLink",
            Field::Description => "description",
        }
    }

    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::OrganizationName => "Organization name",
            Field::PhoneNumber => "Phone number",
            Field::CountryCode => "Country code",
            Field::TelegramUsername => "Telegram username",
            Field::Website => "website",
            Field::ProfileLink => "profile link",
            Field::Description => "Description",
        }
    }

}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
