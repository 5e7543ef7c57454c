//! Profile: account details, password change and notification preferences

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use consultant_app::screens::profile::{NotificationKind, ProfileField, ProfileView};
use consultant_app::AppState;

use super::rows;
use crate::theme::{styles, Palette};
use crate::widgets::{Button, Checkbox, TextField, TEXT_FIELD_HEIGHT};

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    view: &ProfileView,
    p: &Palette,
) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    let [account, sign_out] =
        Layout::vertical([Constraint::Min(8), Constraint::Length(3)]).areas(left);
    let [password, notifications] =
        Layout::vertical([Constraint::Min(16), Constraint::Length(6)]).areas(right);

    render_account(frame, account, state, view, p);
    frame.render_widget(
        Button::new("Sign Out", p).focused(view.focus == ProfileField::SignOut),
        Rect {
            y: sign_out.y + 1,
            height: 1,
            ..sign_out
        },
    );
    render_password(frame, password, view, p);
    render_notifications(frame, notifications, view, p);
}

fn card_title(title: &str, p: &Palette) -> Span<'static> {
    Span::styled(format!(" {title} "), styles::title(p))
}

fn render_account(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    view: &ProfileView,
    p: &Palette,
) {
    let focused = matches!(
        view.focus,
        ProfileField::EditProfile
            | ProfileField::FullName
            | ProfileField::Email
            | ProfileField::SaveProfile
            | ProfileField::CancelEdit
    );
    let block = styles::glass_block(p, focused).title(card_title("Account", p));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.editing {
        let r = rows(inner, &[TEXT_FIELD_HEIGHT, TEXT_FIELD_HEIGHT, 1, 1]);
        frame.render_widget(
            TextField::new("Full name", &view.full_name, p)
                .focused(view.focus == ProfileField::FullName)
                .error(view.profile_errors.full_name),
            r[0],
        );
        frame.render_widget(
            TextField::new("Email", &view.email, p)
                .focused(view.focus == ProfileField::Email)
                .error(view.profile_errors.email),
            r[1],
        );
        let [save, cancel] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(r[3]);
        frame.render_widget(
            Button::new("Save", p).focused(view.focus == ProfileField::SaveProfile),
            save,
        );
        frame.render_widget(
            Button::new("Cancel", p).focused(view.focus == ProfileField::CancelEdit),
            cancel,
        );
        return;
    }

    let user = state.session.user();
    let detail = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), styles::text_muted(p)),
            Span::styled(value, styles::text_primary(p)),
        ])
    };
    let mut lines = vec![
        detail("Name", user.map(|u| u.full_name.clone()).unwrap_or_default()),
        detail("Email", user.map(|u| u.email.clone()).unwrap_or_default()),
        detail(
            "Member since",
            user.map(|u| u.created_at.format("%B %Y").to_string())
                .unwrap_or_default(),
        ),
    ];
    let plan = if user.is_some_and(|u| u.is_premium) {
        Span::styled("Premium", styles::status_yellow(p))
    } else {
        Span::styled("Free", styles::text_secondary(p))
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{:<14}", "Plan"), styles::text_muted(p)),
        plan,
    ]));

    let r = rows(inner, &[lines.len() as u16, 1, 1]);
    frame.render_widget(Paragraph::new(lines), r[0]);
    frame.render_widget(
        Button::new("Edit Profile", p).focused(view.focus == ProfileField::EditProfile),
        r[2],
    );
}

fn render_password(frame: &mut Frame, area: Rect, view: &ProfileView, p: &Palette) {
    let focused = matches!(
        view.focus,
        ProfileField::CurrentPassword
            | ProfileField::NewPassword
            | ProfileField::ConfirmPassword
            | ProfileField::ChangePassword
    );
    let block = styles::glass_block(p, focused).title(card_title("Change Password", p));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let r = rows(
        inner,
        &[TEXT_FIELD_HEIGHT, TEXT_FIELD_HEIGHT, TEXT_FIELD_HEIGHT, 1],
    );
    let errors = &view.password_errors;
    frame.render_widget(
        TextField::new("Current password", &view.current_password, p)
            .focused(view.focus == ProfileField::CurrentPassword)
            .masked(true)
            .error(errors.current),
        r[0],
    );
    frame.render_widget(
        TextField::new("New password", &view.new_password, p)
            .focused(view.focus == ProfileField::NewPassword)
            .masked(true)
            .error(errors.new_password),
        r[1],
    );
    frame.render_widget(
        TextField::new("Confirm new password", &view.confirm_password, p)
            .focused(view.focus == ProfileField::ConfirmPassword)
            .masked(true)
            .error(errors.confirm),
        r[2],
    );

    let [button, notice] =
        Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(r[3]);
    frame.render_widget(
        Button::new("Update Password", p)
            .focused(view.focus == ProfileField::ChangePassword)
            .busy(view.changing_password, "Updating..."),
        button,
    );
    if let Some(text) = view.password_notice {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("✓ {text}"), styles::status_green(p))),
            notice,
        );
    }
}

fn render_notifications(frame: &mut Frame, area: Rect, view: &ProfileView, p: &Palette) {
    let focused = matches!(view.focus, ProfileField::Notification(_));
    let block = styles::glass_block(p, focused).title(card_title("Notifications", p));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let r = rows(inner, &[1; NotificationKind::ALL.len()]);
    for (kind, row) in NotificationKind::ALL.iter().zip(r.iter()) {
        frame.render_widget(
            Checkbox::new(kind.label(), view.notifications.get(*kind), p)
                .focused(view.focus == ProfileField::Notification(*kind)),
            *row,
        );
    }
}
