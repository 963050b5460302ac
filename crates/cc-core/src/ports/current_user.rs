use crate::publisher::AuthenticatedUser;

/// Application-wide holder of the signed-in user.
pub trait CurrentUserPort: Send + Sync {
    fn set_current_user(&self, user: AuthenticatedUser);

    fn current_user(&self) -> Option<AuthenticatedUser>;
}
