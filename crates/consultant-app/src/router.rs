//! Screen router
//!
//! One current screen, changed only through [`Router::apply`], which resolves
//! every request through [`transition`].

use tracing::debug;

/// Every screen the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
    Profile,
    Portfolio,
    Advice,
    Billing,
}

impl Screen {
    /// Screens reachable from the navigation bar, in display order
    pub const NAV: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Portfolio,
        Screen::Advice,
        Screen::Billing,
        Screen::Profile,
    ];

    /// Screens shown to signed-out visitors
    pub fn is_auth(&self) -> bool {
        matches!(self, Screen::Login | Screen::Signup | Screen::ForgotPassword)
    }

    /// Screens that require a session
    pub fn is_member(&self) -> bool {
        !self.is_auth()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Signup => "Create Account",
            Screen::ForgotPassword => "Reset Password",
            Screen::Dashboard => "Dashboard",
            Screen::Profile => "Profile",
            Screen::Portfolio => "Portfolio",
            Screen::Advice => "Advice",
            Screen::Billing => "Billing",
        }
    }
}

/// Inputs that can move the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEvent {
    /// Explicit navigation request from a view or the navigation bar
    Navigate(Screen),
    /// The session went from signed out to signed in
    SignedIn,
    /// The session was cleared
    SignedOut,
}

/// Transition table: `(current, event, signed_in) -> next`.
///
/// | event               | condition                   | next        |
/// |---------------------|-----------------------------|-------------|
/// | `SignedIn`          | any                         | `Dashboard` |
/// | `SignedOut`         | any                         | `Login`     |
/// | `Navigate(member)`  | no session                  | `Login`     |
/// | `Navigate(auth)`    | session present             | `Dashboard` |
/// | `Navigate(target)`  | otherwise                   | `target`    |
pub fn transition(_current: Screen, event: RouteEvent, signed_in: bool) -> Screen {
    match event {
        RouteEvent::SignedIn => Screen::Dashboard,
        RouteEvent::SignedOut => Screen::Login,
        RouteEvent::Navigate(target) if target.is_member() && !signed_in => Screen::Login,
        RouteEvent::Navigate(target) if target.is_auth() && signed_in => Screen::Dashboard,
        RouteEvent::Navigate(target) => target,
    }
}

/// Current screen holder. There is no history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Router {
    current: Screen,
}

impl Router {
    pub fn new(initial: Screen) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Resolve `event` through the transition table and return the new screen
    pub fn apply(&mut self, event: RouteEvent, signed_in: bool) -> Screen {
        let next = transition(self.current, event, signed_in);
        debug!("Route {:?} --{:?}--> {:?}", self.current, event, next);
        self.current = next;
        next
    }
}
