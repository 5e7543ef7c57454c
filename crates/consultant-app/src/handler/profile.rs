//! Profile handlers: edit mode, password change, notification toggles

use tracing::{info, warn};

use crate::screens::profile::NotificationKind;
use crate::screens::ActiveView;
use crate::services::AuthError;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub const PASSWORD_CHANGE_FAILED: &str = "Failed to update password";

pub fn handle_edit(state: &mut AppState) -> UpdateResult {
    if let ActiveView::Profile(view) = &mut state.view {
        view.begin_edit();
    }
    UpdateResult::none()
}

pub fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    if let ActiveView::Profile(view) = &mut state.view {
        view.cancel_edit(state.session.user());
    }
    UpdateResult::none()
}

pub fn handle_save(state: &mut AppState) -> UpdateResult {
    let ActiveView::Profile(view) = &mut state.view else {
        return UpdateResult::none();
    };
    if !view.editing {
        return UpdateResult::none();
    }
    let Some(update) = view.profile_update() else {
        return UpdateResult::none();
    };

    state.session.update_profile(update);
    view.finish_edit();
    state.status = Some("Profile updated".to_string());
    UpdateResult::none()
}

pub fn handle_change_password(state: &mut AppState) -> UpdateResult {
    let view_id = state.view_id;
    let ActiveView::Profile(view) = &mut state.view else {
        return UpdateResult::none();
    };
    if view.changing_password {
        return UpdateResult::none();
    }
    view.password_notice = None;
    if !view.validate_password_change() {
        return UpdateResult::none();
    }

    view.changing_password = true;
    UpdateResult::action(UpdateAction::ChangePassword {
        view: view_id,
        current: view.current_password.value().to_string(),
        new_password: view.new_password.value().to_string(),
    })
}

pub fn handle_password_changed(
    state: &mut AppState,
    result: Result<(), AuthError>,
) -> UpdateResult {
    let ActiveView::Profile(view) = &mut state.view else {
        return UpdateResult::none();
    };
    match result {
        Ok(()) => {
            info!("Password changed");
            view.finish_password_change();
        }
        Err(e) => {
            warn!("Password change failed: {}", e);
            view.changing_password = false;
            view.password_errors.current = Some(PASSWORD_CHANGE_FAILED);
        }
    }
    UpdateResult::none()
}

pub fn handle_toggle_notification(state: &mut AppState, kind: NotificationKind) -> UpdateResult {
    if let ActiveView::Profile(view) = &mut state.view {
        let enabled = view.notifications.toggle(kind);
        info!("{} {}", kind.label(), if enabled { "on" } else { "off" });
    }
    UpdateResult::none()
}
