//! Profile settings: account details, password change, notifications

use consultant_core::validation::{validate_email, NEW_PASSWORD_MIN_LEN};
use consultant_core::{ProfileUpdate, User};

use super::{cycle, FormView, TextInput};

pub const PASSWORD_UPDATED: &str = "Password updated successfully";

/// Notification channels a user can opt in or out of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Email,
    Push,
    MarketUpdates,
    PortfolioAlerts,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Email,
        NotificationKind::Push,
        NotificationKind::MarketUpdates,
        NotificationKind::PortfolioAlerts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Email => "Email notifications",
            NotificationKind::Push => "Push notifications",
            NotificationKind::MarketUpdates => "Market updates",
            NotificationKind::PortfolioAlerts => "Portfolio alerts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub market_updates: bool,
    pub portfolio_alerts: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            market_updates: false,
            portfolio_alerts: true,
        }
    }
}

impl NotificationPrefs {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Push => self.push,
            NotificationKind::MarketUpdates => self.market_updates,
            NotificationKind::PortfolioAlerts => self.portfolio_alerts,
        }
    }

    pub fn toggle(&mut self, kind: NotificationKind) -> bool {
        let slot = match kind {
            NotificationKind::Email => &mut self.email,
            NotificationKind::Push => &mut self.push,
            NotificationKind::MarketUpdates => &mut self.market_updates,
            NotificationKind::PortfolioAlerts => &mut self.portfolio_alerts,
        };
        *slot = !*slot;
        *slot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    EditProfile,
    FullName,
    Email,
    SaveProfile,
    CancelEdit,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
    ChangePassword,
    Notification(NotificationKind),
    SignOut,
}

impl ProfileField {
    const VIEWING: [ProfileField; 10] = [
        ProfileField::EditProfile,
        ProfileField::CurrentPassword,
        ProfileField::NewPassword,
        ProfileField::ConfirmPassword,
        ProfileField::ChangePassword,
        ProfileField::Notification(NotificationKind::Email),
        ProfileField::Notification(NotificationKind::Push),
        ProfileField::Notification(NotificationKind::MarketUpdates),
        ProfileField::Notification(NotificationKind::PortfolioAlerts),
        ProfileField::SignOut,
    ];

    const EDITING: [ProfileField; 13] = [
        ProfileField::FullName,
        ProfileField::Email,
        ProfileField::SaveProfile,
        ProfileField::CancelEdit,
        ProfileField::CurrentPassword,
        ProfileField::NewPassword,
        ProfileField::ConfirmPassword,
        ProfileField::ChangePassword,
        ProfileField::Notification(NotificationKind::Email),
        ProfileField::Notification(NotificationKind::Push),
        ProfileField::Notification(NotificationKind::MarketUpdates),
        ProfileField::Notification(NotificationKind::PortfolioAlerts),
        ProfileField::SignOut,
    ];

    pub fn order(editing: bool) -> &'static [ProfileField] {
        if editing {
            &Self::EDITING
        } else {
            &Self::VIEWING
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordErrors {
    pub current: Option<&'static str>,
    pub new_password: Option<&'static str>,
    pub confirm: Option<&'static str>,
}

impl PasswordErrors {
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.new_password.is_none() && self.confirm.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub editing: bool,
    pub full_name: TextInput,
    pub email: TextInput,
    pub profile_errors: ProfileErrors,

    pub current_password: TextInput,
    pub new_password: TextInput,
    pub confirm_password: TextInput,
    pub password_errors: PasswordErrors,
    /// A password change is in flight
    pub changing_password: bool,
    pub password_notice: Option<&'static str>,

    pub notifications: NotificationPrefs,
    pub focus: ProfileField,
}

impl ProfileView {
    pub fn new(user: Option<&User>) -> Self {
        let (full_name, email) = user
            .map(|u| (u.full_name.clone(), u.email.clone()))
            .unwrap_or_default();
        Self {
            editing: false,
            full_name: TextInput::new(full_name),
            email: TextInput::new(email),
            profile_errors: ProfileErrors::default(),
            current_password: TextInput::default(),
            new_password: TextInput::default(),
            confirm_password: TextInput::default(),
            password_errors: PasswordErrors::default(),
            changing_password: false,
            password_notice: None,
            notifications: NotificationPrefs::default(),
            focus: ProfileField::EditProfile,
        }
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
        self.focus = ProfileField::FullName;
    }

    /// Leave edit mode, restoring the fields from `user`
    pub fn cancel_edit(&mut self, user: Option<&User>) {
        if let Some(user) = user {
            self.full_name.set(user.full_name.clone());
            self.email.set(user.email.clone());
        }
        self.editing = false;
        self.profile_errors = ProfileErrors::default();
        self.focus = ProfileField::EditProfile;
    }

    /// Validate the edit form and build the update to merge
    pub fn profile_update(&mut self) -> Option<ProfileUpdate> {
        self.profile_errors = ProfileErrors {
            full_name: self
                .full_name
                .value()
                .trim()
                .is_empty()
                .then_some("Full name is required"),
            email: validate_email(self.email.value()),
        };
        if self.profile_errors != ProfileErrors::default() {
            return None;
        }
        Some(
            ProfileUpdate::default()
                .with_full_name(self.full_name.value().trim())
                .with_email(self.email.value()),
        )
    }

    /// Finish a successful save
    pub fn finish_edit(&mut self) {
        self.editing = false;
        self.focus = ProfileField::EditProfile;
    }

    pub fn validate_password_change(&mut self) -> bool {
        let new_password = self.new_password.value();
        self.password_errors = PasswordErrors {
            current: self
                .current_password
                .is_empty()
                .then_some("Current password is required"),
            new_password: if new_password.is_empty() {
                Some("New password is required")
            } else if new_password.chars().count() < NEW_PASSWORD_MIN_LEN {
                Some("Password must be at least 8 characters")
            } else {
                None
            },
            confirm: (new_password != self.confirm_password.value())
                .then_some("Passwords do not match"),
        };
        self.password_errors.is_empty()
    }

    /// Clear the password fields and show the success notice
    pub fn finish_password_change(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
        self.changing_password = false;
        self.password_notice = Some(PASSWORD_UPDATED);
    }
}

impl FormView for ProfileView {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            ProfileField::FullName if self.editing => {
                self.profile_errors.full_name = None;
                Some(&mut self.full_name)
            }
            ProfileField::Email if self.editing => {
                self.profile_errors.email = None;
                Some(&mut self.email)
            }
            ProfileField::CurrentPassword => {
                self.password_errors.current = None;
                self.password_notice = None;
                Some(&mut self.current_password)
            }
            ProfileField::NewPassword => {
                self.password_errors.new_password = None;
                self.password_notice = None;
                Some(&mut self.new_password)
            }
            ProfileField::ConfirmPassword => {
                self.password_errors.confirm = None;
                self.password_notice = None;
                Some(&mut self.confirm_password)
            }
            _ => None,
        }
    }

    fn focus_next(&mut self) {
        self.focus = cycle(ProfileField::order(self.editing), self.focus, true);
    }

    fn focus_prev(&mut self) {
        self.focus = cycle(ProfileField::order(self.editing), self.focus, false);
    }
}
