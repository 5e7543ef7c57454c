//! Dashboard shortcuts

use crate::router::Screen;

use super::{cycle, FormView, TextInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardAction {
    #[default]
    ManagePortfolio,
    ViewAdvice,
    Upgrade,
}

impl DashboardAction {
    pub const ORDER: [DashboardAction; 3] = [
        DashboardAction::ManagePortfolio,
        DashboardAction::ViewAdvice,
        DashboardAction::Upgrade,
    ];

    pub fn target(&self) -> Screen {
        match self {
            DashboardAction::ManagePortfolio => Screen::Portfolio,
            DashboardAction::ViewAdvice => Screen::Advice,
            DashboardAction::Upgrade => Screen::Billing,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardAction::ManagePortfolio => "Manage Portfolio",
            DashboardAction::ViewAdvice => "View Advice",
            DashboardAction::Upgrade => "Upgrade",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub focus: DashboardAction,
}

impl FormView for DashboardView {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        None
    }

    fn focus_next(&mut self) {
        self.focus = cycle(&DashboardAction::ORDER, self.focus, true);
    }

    fn focus_prev(&mut self) {
        self.focus = cycle(&DashboardAction::ORDER, self.focus, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_goes_to_billing() {
        assert_eq!(DashboardAction::Upgrade.target(), Screen::Billing);
    }

    #[test]
    fn test_focus_cycles() {
        let mut view = DashboardView::default();
        view.focus_prev();
        assert_eq!(view.focus, DashboardAction::Upgrade);
    }
}
