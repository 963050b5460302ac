/// Who the publisher is, as implied by the account type.
///
/// The flat record keeps both name fields around so switching the account
/// type never loses input; this view only exposes what the chosen type needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Individual {
        full_name: String,
    },
    Company {
        organization_name: String,
        /// Collected but not required.
        contact_name: String,
    },
}

impl Identity {
    pub fn display_name(&self) -> &str {
        match self {
            Identity::Individual { full_name } => full_name,
            Identity::Company {
                organization_name, ..
            } => organization_name,
        }
    }
}
