//! Sign-in form

use consultant_core::validation::{validate_email, validate_login_password};

use super::{cycle, FormView, TextInput};

/// Banner shown when the backend rejects a sign-in
pub const LOGIN_FAILED: &str = "Invalid email or password";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    ShowPassword,
    Submit,
    ForgotPassword,
    Signup,
}

impl LoginField {
    pub const ORDER: [LoginField; 6] = [
        LoginField::Email,
        LoginField::Password,
        LoginField::ShowPassword,
        LoginField::Submit,
        LoginField::ForgotPassword,
        LoginField::Signup,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub general: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.general.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: TextInput,
    pub password: TextInput,
    pub show_password: bool,
    pub errors: LoginErrors,
    /// A sign-in request from this form is in flight
    pub submitting: bool,
    pub focus: LoginField,
}

impl LoginForm {
    /// Run field validation, replacing any previous errors
    pub fn validate(&mut self) -> bool {
        self.errors = LoginErrors {
            email: validate_email(self.email.value()),
            password: validate_login_password(self.password.value()),
            general: None,
        };
        self.errors.is_empty()
    }

    /// Both fields filled and no outstanding field errors
    pub fn can_submit(&self) -> bool {
        !self.submitting
            && !self.email.is_empty()
            && !self.password.is_empty()
            && self.errors.email.is_none()
            && self.errors.password.is_none()
    }
}

impl FormView for LoginForm {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            LoginField::Email => {
                self.errors.email = None;
                Some(&mut self.email)
            }
            LoginField::Password => {
                self.errors.password = None;
                Some(&mut self.password)
            }
            _ => None,
        }
    }

    fn focus_next(&mut self) {
        self.focus = cycle(&LoginField::ORDER, self.focus, true);
    }

    fn focus_prev(&mut self) {
        self.focus = cycle(&LoginField::ORDER, self.focus, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: TextInput::new(email),
            password: TextInput::new(password),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_form_reports_both_required() {
        let mut login = form("", "");
        assert!(!login.validate());
        assert_eq!(login.errors.email, Some("Email is required"));
        assert_eq!(login.errors.password, Some("Password is required"));
    }

    #[test]
    fn test_short_password_rejected() {
        let mut login = form("a@b.co", "12345");
        assert!(!login.validate());
        assert_eq!(
            login.errors.password,
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_valid_form() {
        let mut login = form("a@b.co", "123456");
        assert!(login.validate());
        assert!(login.can_submit());
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut login = form("bad", "123456");
        login.validate();
        assert!(login.errors.email.is_some());

        login.focus = LoginField::Email;
        login.focused_input().unwrap().insert('x');
        assert!(login.errors.email.is_none());
    }

    #[test]
    fn test_submitting_blocks_submit() {
        let mut login = form("a@b.co", "123456");
        login.submitting = true;
        assert!(!login.can_submit());
    }
}
