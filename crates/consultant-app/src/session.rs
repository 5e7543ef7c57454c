//! Session state: the signed-in user and the auth loading flag

use consultant_core::{ProfileUpdate, User};
use tracing::{debug, info};

/// Whether a user is signed in, and whether an auth operation is running.
///
/// Starts as `{ user: None, loading: true }` until the bootstrap check
/// finishes. `user` is only populated by a completed sign-in or sign-up.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    user: Option<User>,
    loading: bool,
    bootstrapped: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: None,
            loading: true,
            bootstrapped: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once the initial session check has completed
    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    /// Finish the startup check, adopting a restored user if there is one.
    ///
    /// Returns `true` when this produced a signed-in session.
    pub fn finish_bootstrap(&mut self, restored: Option<User>) -> bool {
        self.bootstrapped = true;
        self.loading = false;
        match restored {
            Some(user) => {
                info!("Restored session for {}", user.email);
                self.user = Some(user);
                true
            }
            None => {
                debug!("No session to restore");
                false
            }
        }
    }

    /// Mark a sign-in, sign-up or reset request as in flight
    pub fn begin_auth(&mut self) {
        self.loading = true;
    }

    /// Store the user from a successful sign-in or sign-up.
    ///
    /// Returns `true` if the session went from signed out to signed in.
    pub fn complete_auth(&mut self, user: User) -> bool {
        let was_signed_out = self.user.is_none();
        info!("Signed in as {} ({})", user.full_name, user.email);
        self.user = Some(user);
        self.loading = false;
        was_signed_out
    }

    /// Clear the loading flag after a failed or non-session auth call
    pub fn end_auth(&mut self) {
        self.loading = false;
    }

    /// Clear the session immediately
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.email);
        }
    }

    /// Merge fields into the current user. No-op when signed out.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        match self.user.as_mut() {
            Some(user) => {
                debug!("Updating profile: {:?}", update);
                user.apply(update);
            }
            None => debug!("Ignoring profile update while signed out"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn user(name: &str) -> User {
        User {
            id: "1".to_string(),
            email: "jane@example.com".to_string(),
            full_name: name.to_string(),
            avatar: None,
            is_premium: false,
            created_at: Local::now(),
        }
    }

    #[test]
    fn test_starts_loading_without_user() {
        let session = SessionState::new();
        assert!(session.is_loading());
        assert!(!session.is_signed_in());
        assert!(!session.is_bootstrapped());
    }

    #[test]
    fn test_bootstrap_without_user_clears_loading() {
        let mut session = SessionState::new();
        assert!(!session.finish_bootstrap(None));
        assert!(!session.is_loading());
        assert!(session.is_bootstrapped());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_complete_auth_reports_transition_once() {
        let mut session = SessionState::new();
        session.finish_bootstrap(None);
        session.begin_auth();
        assert!(session.is_loading());

        assert!(session.complete_auth(user("Jane Doe")));
        assert!(!session.is_loading());
        assert!(!session.complete_auth(user("Jane Doe")));
    }

    #[test]
    fn test_sign_out_clears_user() {
        let mut session = SessionState::new();
        session.finish_bootstrap(None);
        session.complete_auth(user("Jane Doe"));
        session.sign_out();
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_update_profile_merges_into_user() {
        let mut session = SessionState::new();
        session.complete_auth(user("Jane Doe"));
        session.update_profile(ProfileUpdate::default().with_full_name("Jane Q. Doe"));
        assert_eq!(session.user().unwrap().full_name, "Jane Q. Doe");
        assert_eq!(session.user().unwrap().email, "jane@example.com");
    }

    #[test]
    fn test_update_profile_signed_out_is_noop() {
        let mut session = SessionState::new();
        session.update_profile(ProfileUpdate::default().with_full_name("Nobody"));
        assert!(session.user().is_none());
    }
}
