//! View-local state for every screen
//!
//! Each screen owns a state struct that is rebuilt whenever the screen is
//! entered. [`ActiveView`] holds the one currently shown, and [`ViewId`]
//! identifies that instance so late async completions can be discarded.

pub mod advice;
pub mod billing;
pub mod dashboard;
pub mod login;
pub mod portfolio;
pub mod profile;
pub mod reset;
pub mod signup;

use consultant_core::User;

use crate::router::Screen;

pub use advice::AdviceView;
pub use billing::BillingView;
pub use dashboard::DashboardView;
pub use login::LoginForm;
pub use portfolio::PortfolioView;
pub use profile::ProfileView;
pub use reset::ResetFlow;
pub use signup::SignupForm;

/// Identity of one view instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewId(pub u64);

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

/// Single-line text field value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Value as a single `•` per character
    pub fn masked(&self) -> String {
        "•".repeat(self.value.chars().count())
    }
}

/// Keyboard behaviour shared by views with focusable controls
pub trait FormView {
    /// Text field under focus, if any. Clears that field's error.
    fn focused_input(&mut self) -> Option<&mut TextInput>;

    fn focus_next(&mut self);

    fn focus_prev(&mut self);
}

/// Step `current` one place through `order`, wrapping at either end
pub(crate) fn cycle<T: Copy + PartialEq>(order: &[T], current: T, forward: bool) -> T {
    let Some(pos) = order.iter().position(|item| *item == current) else {
        return order.first().copied().unwrap_or(current);
    };
    let len = order.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    order[next]
}

/// State of the screen currently on display
#[derive(Debug, Clone)]
pub enum ActiveView {
    Login(LoginForm),
    Signup(SignupForm),
    ForgotPassword(ResetFlow),
    Dashboard(DashboardView),
    Profile(ProfileView),
    Portfolio(PortfolioView),
    Advice(AdviceView),
    Billing(BillingView),
}

impl Default for ActiveView {
    fn default() -> Self {
        ActiveView::Login(LoginForm::default())
    }
}

impl ActiveView {
    /// Fresh state for `screen`
    pub fn for_screen(screen: Screen, user: Option<&User>) -> Self {
        match screen {
            Screen::Login => ActiveView::Login(LoginForm::default()),
            Screen::Signup => ActiveView::Signup(SignupForm::default()),
            Screen::ForgotPassword => ActiveView::ForgotPassword(ResetFlow::default()),
            Screen::Dashboard => ActiveView::Dashboard(DashboardView::default()),
            Screen::Profile => ActiveView::Profile(ProfileView::new(user)),
            Screen::Portfolio => ActiveView::Portfolio(PortfolioView::new()),
            Screen::Advice => ActiveView::Advice(AdviceView::default()),
            Screen::Billing => ActiveView::Billing(BillingView::default()),
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            ActiveView::Login(_) => Screen::Login,
            ActiveView::Signup(_) => Screen::Signup,
            ActiveView::ForgotPassword(_) => Screen::ForgotPassword,
            ActiveView::Dashboard(_) => Screen::Dashboard,
            ActiveView::Profile(_) => Screen::Profile,
            ActiveView::Portfolio(_) => Screen::Portfolio,
            ActiveView::Advice(_) => Screen::Advice,
            ActiveView::Billing(_) => Screen::Billing,
        }
    }

    /// The view as a keyboard form, when it has focusable controls
    pub fn as_form(&mut self) -> &mut dyn FormView {
        match self {
            ActiveView::Login(form) => form,
            ActiveView::Signup(form) => form,
            ActiveView::ForgotPassword(flow) => flow,
            ActiveView::Dashboard(view) => view,
            ActiveView::Profile(view) => view,
            ActiveView::Portfolio(view) => view,
            ActiveView::Advice(view) => view,
            ActiveView::Billing(view) => view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::default();
        for c in "abc".chars() {
            input.insert(c);
        }
        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.masked(), "••");
        input.clear();
        assert!(input.is_empty());
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let order = [1, 2, 3];
        assert_eq!(cycle(&order, 3, true), 1);
        assert_eq!(cycle(&order, 1, false), 3);
        assert_eq!(cycle(&order, 2, true), 3);
    }

    #[test]
    fn test_cycle_unknown_item_resets_to_first() {
        assert_eq!(cycle(&[1, 2, 3], 9, true), 1);
    }

    #[test]
    fn test_for_screen_matches_screen() {
        for screen in [
            Screen::Login,
            Screen::Signup,
            Screen::ForgotPassword,
            Screen::Dashboard,
            Screen::Profile,
            Screen::Portfolio,
            Screen::Advice,
            Screen::Billing,
        ] {
            assert_eq!(ActiveView::for_screen(screen, None).screen(), screen);
        }
    }
}
