use std::sync::Arc;

use tokio::sync::Mutex;

use cc_core::onboarding::OnboardingSession;

use super::busy::BusyFlag;

/// Shared onboarding context: the session, its dispatch lock and busy flag.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `session`.
/// - `dispatch_lock`: serializes every mutating operation, including the
///   remote calls it awaits.
/// - `session`: held only for short reads and writes, never across an
///   `.await` on a port.
pub struct OnboardingContext {
    session: Mutex<OnboardingSession>,
    dispatch_lock: Mutex<()>,
    busy: BusyFlag,
}

impl OnboardingContext {
    pub fn new(initial: OnboardingSession) -> Self {
        Self {
            session: Mutex::new(initial),
            dispatch_lock: Mutex::new(()),
            busy: BusyFlag::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Copy of the current session. Does not take `dispatch_lock`.
    pub async fn session(&self) -> OnboardingSession {
        self.session.lock().await.clone()
    }

    /// Run `f` against the session while holding its lock.
    pub async fn with_session<R>(&self, f: impl FnOnce(&mut OnboardingSession) -> R) -> R {
        let mut guard = self.session.lock().await;
        f(&mut guard)
    }

    /// Should only be called after acquiring `dispatch_lock`.
    pub async fn set_session(&self, session: OnboardingSession) {
        *self.session.lock().await = session;
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    pub fn busy(&self) -> &BusyFlag {
        &self.busy
    }
}

impl Default for OnboardingContext {
    fn default() -> Self {
        Self::new(OnboardingSession::new())
    }
}
