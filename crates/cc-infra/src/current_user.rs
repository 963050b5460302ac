use std::sync::RwLock;

use tracing::debug;

use cc_core::ports::CurrentUserPort;
use cc_core::publisher::AuthenticatedUser;

/// Process-wide current-user holder.
#[derive(Debug, Default)]
pub struct InMemoryCurrentUser {
    user: RwLock<Option<AuthenticatedUser>>,
}

impl InMemoryCurrentUser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CurrentUserPort for InMemoryCurrentUser {
    fn set_current_user(&self, user: AuthenticatedUser) {
        debug!(user_id = %user.user.id, "current user replaced");
        let mut guard = self.user.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(user);
    }

    fn current_user(&self) -> Option<AuthenticatedUser> {
        self.user
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
