//! Onboarding record held by the wizard while the user fills in the form.

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::identity::Identity;
use super::validation::phone_digits;
use crate::verification::VerificationToken;

/// Soft cap on the description length. Shown as a counter, never enforced.
pub const DESCRIPTION_SOFT_LIMIT: usize = 500;

/// Publisher account type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Individual,
    Company,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Individual => "individual",
            AccountType::Company => "company",
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Ok(AccountType::Individual),
            "company" => Ok(AccountType::Company),
            other => Err(format!("unknown account type: {other}")),
        }
    }
}

/// Flat form state of the onboarding wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingRecord {
    pub account_type: AccountType,
    /// Primary identity for individuals, contact person for companies.
    pub full_name: String,
    pub organization_name: String,
    pub phone_number: String,
    pub country_code: String,
    pub telegram_username: String,
    pub website: String,
    pub profile_link: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<VerificationToken>,
}

impl OnboardingRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::OrganizationName => &self.organization_name,
            Field::PhoneNumber => &self.phone_number,
            Field::CountryCode => &self.country_code,
            Field::TelegramUsername => &self.telegram_username,
            Field::Website => &self.website,
            Field::ProfileLink => &self.profile_link,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::OrganizationName => &mut self.organization_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::CountryCode => &mut self.country_code,
            Field::TelegramUsername => &mut self.telegram_username,
            Field::Website => &mut self.website,
            Field::ProfileLink => &mut self.profile_link,
            Field::Description => &mut self.description,
        };
        *slot = value;
    }

    /// The identity the record describes, according to its account type.
    pub fn identity(&self) -> Identity {
        match self.account_type {
            AccountType::Individual => Identity::Individual {
                full_name: self.full_name.trim().to_string(),
            },
            AccountType::Company => Identity::Company {
                organization_name: self.organization_name.trim().to_string(),
                contact_name: self.full_name.trim().to_string(),
            },
        }
    }

    /// A website was supplied, so the verification sub-flow applies.
    pub fn has_website(&self) -> bool {
        !self.website.trim().is_empty()
    }

    /// Country code followed by the digits of the phone number.
    pub fn dialable_phone(&self) -> String {
        format!("{}{}", self.country_code.trim(), phone_digits(&self.phone_number))
    }

    pub fn description_counter(&self) -> DescriptionCounter {
        DescriptionCounter {
            used: self.description.chars().count(),
            limit: DESCRIPTION_SOFT_LIMIT,
        }
    }
}

/// Character counter shown under the description input.
///
/// `used` counts Unicode scalar values, so an emoji outside the BMP is one
/// character here where a UTF-16 length would report two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DescriptionCounter {
    pub used: usize,
    pub limit: usize,
}

impl DescriptionCounter {
    pub fn is_over_limit(&self) -> bool {
        self.used > self.limit
    }
}

impl std::fmt::Display for DescriptionCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} characters", self.used, self.limit)
    }
}
