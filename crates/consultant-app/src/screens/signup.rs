//! Account registration form

use consultant_core::validation::{
    validate_confirmation, validate_email, validate_full_name, validate_signup_password,
};
use consultant_core::PasswordStrength;

use super::{cycle, FormView, TextInput};

/// Banner shown when the backend rejects a registration
pub const SIGNUP_FAILED: &str = "Registration failed. Please try again.";

pub const TERMS_REQUIRED: &str = "You must accept the terms and conditions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    FullName,
    Email,
    Password,
    ShowPassword,
    ConfirmPassword,
    ShowConfirm,
    AcceptTerms,
    Submit,
    SignIn,
}

impl SignupField {
    pub const ORDER: [SignupField; 9] = [
        SignupField::FullName,
        SignupField::Email,
        SignupField::Password,
        SignupField::ShowPassword,
        SignupField::ConfirmPassword,
        SignupField::ShowConfirm,
        SignupField::AcceptTerms,
        SignupField::Submit,
        SignupField::SignIn,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub terms: Option<&'static str>,
    pub general: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.terms.is_none()
            && self.general.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub full_name: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub confirm_password: TextInput,
    pub show_password: bool,
    pub show_confirm: bool,
    pub accept_terms: bool,
    pub errors: SignupErrors,
    pub submitting: bool,
    pub focus: SignupField,
}

impl SignupForm {
    pub fn validate(&mut self) -> bool {
        self.errors = SignupErrors {
            full_name: validate_full_name(self.full_name.value()),
            email: validate_email(self.email.value()),
            password: validate_signup_password(self.password.value()),
            confirm_password: validate_confirmation(
                self.password.value(),
                self.confirm_password.value(),
            ),
            terms: (!self.accept_terms).then_some(TERMS_REQUIRED),
            general: None,
        };
        self.errors.is_empty()
    }

    /// Every field filled, terms accepted and no outstanding errors
    pub fn can_submit(&self) -> bool {
        !self.submitting
            && !self.full_name.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && self.accept_terms
            && self.errors.is_empty()
    }

    pub fn toggle_terms(&mut self) {
        self.accept_terms = !self.accept_terms;
        self.errors.terms = None;
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::of(self.password.value())
    }
}

impl FormView for SignupForm {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            SignupField::FullName => {
                self.errors.full_name = None;
                Some(&mut self.full_name)
            }
            SignupField::Email => {
                self.errors.email = None;
                Some(&mut self.email)
            }
            SignupField::Password => {
                self.errors.password = None;
                Some(&mut self.password)
            }
            SignupField::ConfirmPassword => {
                self.errors.confirm_password = None;
                Some(&mut self.confirm_password)
            }
            _ => None,
        }
    }

    fn focus_next(&mut self) {
        self.focus = cycle(&SignupField::ORDER, self.focus, true);
    }

    fn focus_prev(&mut self) {
        self.focus = cycle(&SignupField::ORDER, self.focus, false);
    }
}
