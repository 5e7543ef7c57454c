//! Authentication backend
//!
//! [`AuthService`] is the async boundary for every session operation. The
//! only shipped implementation, [`MockAuthService`], accepts any credentials
//! after a configurable delay.

use chrono::Local;
use tokio::time::sleep;
use tracing::{debug, info};

use consultant_core::User;

use crate::config::LatencySettings;

/// Failure reported by an authentication backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("credentials rejected")]
    InvalidCredentials,

    #[error("registration rejected")]
    RegistrationRejected,

    #[error("no account registered for {email}")]
    UnknownEmail { email: String },

    #[error("current password is incorrect")]
    WrongPassword,

    #[error("authentication backend unavailable: {0}")]
    Unavailable(String),
}

/// Session operations backed by a (simulated) remote service
#[trait_variant::make(AuthService: Send)]
pub trait LocalAuthService {
    /// Startup check for an existing session
    async fn restore_session(&self) -> Option<User>;

    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    async fn signup(&self, email: &str, password: &str, full_name: &str)
        -> Result<User, AuthError>;

    /// Send a password-reset email
    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;

    /// Set a new password from the reset flow
    async fn confirm_password_reset(&self, new_password: &str) -> Result<(), AuthError>;

    /// Change the password of the signed-in account
    async fn change_password(&self, current: &str, new_password: &str) -> Result<(), AuthError>;
}

/// Display name given to every account created by [`MockAuthService::login`]
pub const MOCK_LOGIN_NAME: &str = "John Doe";

/// Accept-everything backend with fixed delays
#[derive(Debug, Clone)]
pub struct MockAuthService {
    latency: LatencySettings,
}

impl MockAuthService {
    pub fn new(latency: LatencySettings) -> Self {
        Self { latency }
    }

    fn fabricate_user(email: &str, full_name: &str) -> User {
        User {
            id: "1".to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            avatar: None,
            is_premium: false,
            created_at: Local::now(),
        }
    }
}

impl AuthService for MockAuthService {
    async fn restore_session(&self) -> Option<User> {
        sleep(self.latency.bootstrap()).await;
        debug!("Session check finished, nothing stored");
        None
    }

    async fn login(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        debug!("Signing in {}", email);
        sleep(self.latency.auth()).await;
        Ok(Self::fabricate_user(email, MOCK_LOGIN_NAME))
    }

    async fn signup(
        &self,
        email: &str,
        _password: &str,
        full_name: &str,
    ) -> Result<User, AuthError> {
        debug!("Registering {} <{}>", full_name, email);
        sleep(self.latency.auth()).await;
        Ok(Self::fabricate_user(email, full_name))
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        sleep(self.latency.reset_password()).await;
        info!("Password reset email sent to {}", email);
        Ok(())
    }

    async fn confirm_password_reset(&self, _new_password: &str) -> Result<(), AuthError> {
        sleep(self.latency.password_update()).await;
        info!("Password reset confirmed");
        Ok(())
    }

    async fn change_password(&self, _current: &str, _new_password: &str) -> Result<(), AuthError> {
        sleep(self.latency.password_update()).await;
        info!("Password changed");
        Ok(())
    }
}
