//! Three-step password reset: request email, confirmation, new password

use consultant_core::validation::{validate_confirmation, validate_email, validate_new_password};

use super::{cycle, FormView, TextInput};

/// Shown on the email field when the backend does not know the address
pub const EMAIL_NOT_FOUND: &str = "Email not found in our system";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetStep {
    /// Enter the account email
    #[default]
    Email,
    /// Reset link sent
    Sent,
    /// Choose a new password
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetField {
    Email,
    SendLink,
    Resend,
    HaveCode,
    NewPassword,
    ConfirmPassword,
    ShowPassword,
    SetPassword,
    BackToLogin,
}

impl ResetField {
    pub fn order(step: ResetStep) -> &'static [ResetField] {
        match step {
            ResetStep::Email => &[
                ResetField::Email,
                ResetField::SendLink,
                ResetField::BackToLogin,
            ],
            ResetStep::Sent => &[
                ResetField::HaveCode,
                ResetField::Resend,
                ResetField::BackToLogin,
            ],
            ResetStep::Reset => &[
                ResetField::NewPassword,
                ResetField::ConfirmPassword,
                ResetField::ShowPassword,
                ResetField::SetPassword,
                ResetField::BackToLogin,
            ],
        }
    }

    fn first(step: ResetStep) -> ResetField {
        Self::order(step)[0]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl ResetErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ResetFlow {
    pub step: ResetStep,
    pub email: TextInput,
    pub new_password: TextInput,
    pub confirm_password: TextInput,
    pub show_password: bool,
    pub errors: ResetErrors,
    pub submitting: bool,
    pub focus: ResetField,
}

impl Default for ResetFlow {
    fn default() -> Self {
        Self {
            step: ResetStep::Email,
            email: TextInput::default(),
            new_password: TextInput::default(),
            confirm_password: TextInput::default(),
            show_password: false,
            errors: ResetErrors::default(),
            submitting: false,
            focus: ResetField::Email,
        }
    }
}

impl ResetFlow {
    pub fn validate_email(&mut self) -> bool {
        self.errors = ResetErrors {
            email: validate_email(self.email.value()),
            ..Default::default()
        };
        self.errors.is_empty()
    }

    pub fn validate_new_password(&mut self) -> bool {
        self.errors = ResetErrors {
            email: None,
            password: validate_new_password(self.new_password.value()),
            confirm_password: validate_confirmation(
                self.new_password.value(),
                self.confirm_password.value(),
            ),
        };
        self.errors.is_empty()
    }

    /// Move to `step`, resetting focus and errors
    pub fn go_to(&mut self, step: ResetStep) {
        self.step = step;
        self.focus = ResetField::first(step);
        self.errors = ResetErrors::default();
    }
}

impl FormView for ResetFlow {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            ResetField::Email => {
                self.errors.email = None;
                Some(&mut self.email)
            }
            ResetField::NewPassword => {
                self.errors.password = None;
                Some(&mut self.new_password)
            }
            ResetField::ConfirmPassword => {
                self.errors.confirm_password = None;
                Some(&mut self.confirm_password)
            }
            _ => None,
        }
    }

    fn focus_next(&mut self) {
        self.focus = cycle(ResetField::order(self.step), self.focus, true);
    }

    fn focus_prev(&mut self) {
        self.focus = cycle(ResetField::order(self.step), self.focus, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_step_validation() {
        let mut flow = ResetFlow::default();
        assert!(!flow.validate_email());
        assert_eq!(flow.errors.email, Some("Email is required"));

        flow.email.set("jane@example.com");
        assert!(flow.validate_email());
    }

    #[test]
    fn test_go_to_moves_focus_into_step() {
        let mut flow = ResetFlow::default();
        flow.go_to(ResetStep::Sent);
        assert_eq!(flow.focus, ResetField::HaveCode);
        flow.go_to(ResetStep::Reset);
        assert_eq!(flow.focus, ResetField::NewPassword);
    }

    #[test]
    fn test_new_password_rules() {
        let mut flow = ResetFlow::default();
        flow.go_to(ResetStep::Reset);
        flow.new_password.set("short");
        assert!(!flow.validate_new_password());
        assert_eq!(
            flow.errors.password,
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            flow.errors.confirm_password,
            Some("Please confirm your password")
        );

        flow.new_password.set("longenough");
        flow.confirm_password.set("longenough");
        assert!(flow.validate_new_password());
    }

    #[test]
    fn test_focus_stays_within_step() {
        let mut flow = ResetFlow::default();
        flow.focus_prev();
        assert_eq!(flow.focus, ResetField::BackToLogin);
        flow.focus_next();
        assert_eq!(flow.focus, ResetField::Email);
    }
}
