//! Sign-in, sign-up and password reset forms

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use consultant_app::screens::login::{LoginField, LoginForm};
use consultant_app::screens::reset::{ResetField, ResetFlow, ResetStep};
use consultant_app::screens::signup::{SignupField, SignupForm};

use super::rows;
use crate::layout::{centered_column, FORM_WIDTH};
use crate::theme::{styles, Palette};
use crate::widgets::{
    link, Button, Checkbox, StrengthMeter, TextField, STRENGTH_METER_HEIGHT, TEXT_FIELD_HEIGHT,
};

/// Title and subtitle, centered
fn header<'a>(title: &'a str, subtitle: String, p: &Palette) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(title, styles::title(p))),
        Line::from(Span::styled(subtitle, styles::text_muted(p))),
    ])
    .alignment(Alignment::Center)
}

fn banner(frame: &mut Frame, area: Rect, error: Option<&str>, p: &Palette) {
    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("✗ {error}"), styles::status_red(p)))
                .alignment(Alignment::Center),
            area,
        );
    }
}

fn field_error(frame: &mut Frame, area: Rect, error: Option<&str>, p: &Palette) {
    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(error, styles::status_red(p))),
            area,
        );
    }
}

pub(super) fn render_login(frame: &mut Frame, area: Rect, form: &LoginForm, p: &Palette) {
    let col = centered_column(area, FORM_WIDTH);
    let r = rows(
        col,
        &[1, 2, 1, 1, TEXT_FIELD_HEIGHT, TEXT_FIELD_HEIGHT, 1, 1, 1, 1, 1],
    );

    frame.render_widget(
        header(
            "Welcome back",
            "Sign in to your Stock Consultant account".to_string(),
            p,
        ),
        r[1],
    );
    banner(frame, r[3], form.errors.general, p);

    frame.render_widget(
        TextField::new("Email", &form.email, p)
            .focused(form.focus == LoginField::Email)
            .placeholder("you@example.com")
            .error(form.errors.email),
        r[4],
    );
    frame.render_widget(
        TextField::new("Password", &form.password, p)
            .focused(form.focus == LoginField::Password)
            .masked(!form.show_password)
            .error(form.errors.password),
        r[5],
    );
    frame.render_widget(
        Checkbox::new("Show password", form.show_password, p)
            .focused(form.focus == LoginField::ShowPassword),
        r[6],
    );
    frame.render_widget(
        Button::new("Sign In", p)
            .focused(form.focus == LoginField::Submit)
            .busy(form.submitting, "Signing in..."),
        r[8],
    );

    let links = Line::from(vec![
        link(
            "Forgot password?",
            form.focus == LoginField::ForgotPassword,
            p,
        ),
        Span::styled("   No account? ", styles::text_muted(p)),
        link("Create one", form.focus == LoginField::Signup, p),
    ]);
    frame.render_widget(Paragraph::new(links).alignment(Alignment::Center), r[10]);
}

pub(super) fn render_signup(frame: &mut Frame, area: Rect, form: &SignupForm, p: &Palette) {
    let col = centered_column(area, FORM_WIDTH);
    let r = rows(
        col,
        &[
            2,
            1,
            TEXT_FIELD_HEIGHT,
            TEXT_FIELD_HEIGHT,
            TEXT_FIELD_HEIGHT,
            STRENGTH_METER_HEIGHT,
            1,
            TEXT_FIELD_HEIGHT,
            1,
            1,
            1,
            1,
            1,
        ],
    );

    frame.render_widget(
        header(
            "Create your account",
            "Start getting personalised stock advice".to_string(),
            p,
        ),
        r[0],
    );
    banner(frame, r[1], form.errors.general, p);

    frame.render_widget(
        TextField::new("Full name", &form.full_name, p)
            .focused(form.focus == SignupField::FullName)
            .placeholder("Jane Doe")
            .error(form.errors.full_name),
        r[2],
    );
    frame.render_widget(
        TextField::new("Email", &form.email, p)
            .focused(form.focus == SignupField::Email)
            .placeholder("you@example.com")
            .error(form.errors.email),
        r[3],
    );
    frame.render_widget(
        TextField::new("Password", &form.password, p)
            .focused(form.focus == SignupField::Password)
            .masked(!form.show_password)
            .error(form.errors.password),
        r[4],
    );
    if !form.password.is_empty() {
        frame.render_widget(StrengthMeter::new(form.password.value(), p), r[5]);
    }
    frame.render_widget(
        Checkbox::new("Show password", form.show_password, p)
            .focused(form.focus == SignupField::ShowPassword),
        r[6],
    );
    frame.render_widget(
        TextField::new("Confirm password", &form.confirm_password, p)
            .focused(form.focus == SignupField::ConfirmPassword)
            .masked(!form.show_confirm)
            .error(form.errors.confirm_password),
        r[7],
    );
    frame.render_widget(
        Checkbox::new("Show confirmation", form.show_confirm, p)
            .focused(form.focus == SignupField::ShowConfirm),
        r[8],
    );
    frame.render_widget(
        Checkbox::new(
            "I accept the Terms of Service and Privacy Policy",
            form.accept_terms,
            p,
        )
        .focused(form.focus == SignupField::AcceptTerms),
        r[9],
    );
    field_error(frame, r[10], form.errors.terms, p);
    frame.render_widget(
        Button::new("Create Account", p)
            .focused(form.focus == SignupField::Submit)
            .busy(form.submitting, "Creating account..."),
        r[11],
    );

    let sign_in = Line::from(vec![
        Span::styled("Already have an account? ", styles::text_muted(p)),
        link("Sign in", form.focus == SignupField::SignIn, p),
    ]);
    frame.render_widget(Paragraph::new(sign_in).alignment(Alignment::Center), r[12]);
}

pub(super) fn render_reset(frame: &mut Frame, area: Rect, flow: &ResetFlow, p: &Palette) {
    let col = centered_column(area, FORM_WIDTH);
    match flow.step {
        ResetStep::Email => render_reset_email(frame, col, flow, p),
        ResetStep::Sent => render_reset_sent(frame, col, flow, p),
        ResetStep::Reset => render_reset_password(frame, col, flow, p),
    }
}

fn back_to_login(flow: &ResetFlow, p: &Palette) -> Paragraph<'static> {
    Paragraph::new(Line::from(link(
        "← Back to sign in",
        flow.focus == ResetField::BackToLogin,
        p,
    )))
    .alignment(Alignment::Center)
}

fn render_reset_email(frame: &mut Frame, col: Rect, flow: &ResetFlow, p: &Palette) {
    let r = rows(col, &[1, 2, 1, TEXT_FIELD_HEIGHT, 1, 1, 1]);
    frame.render_widget(
        header(
            "Forgot your password?",
            "Enter your email and we'll send you a reset link".to_string(),
            p,
        ),
        r[1],
    );
    frame.render_widget(
        TextField::new("Email", &flow.email, p)
            .focused(flow.focus == ResetField::Email)
            .placeholder("you@example.com")
            .error(flow.errors.email),
        r[3],
    );
    frame.render_widget(
        Button::new("Send Reset Link", p)
            .focused(flow.focus == ResetField::SendLink)
            .busy(flow.submitting, "Sending..."),
        r[4],
    );
    frame.render_widget(back_to_login(flow, p), r[6]);
}

fn render_reset_sent(frame: &mut Frame, col: Rect, flow: &ResetFlow, p: &Palette) {
    let r = rows(col, &[1, 2, 1, 1, 1, 1, 1, 1]);
    frame.render_widget(
        header(
            "Check your email",
            format!("We sent a password reset link to {}", flow.email.value()),
            p,
        ),
        r[1],
    );
    frame.render_widget(
        Button::new("I have a reset code", p).focused(flow.focus == ResetField::HaveCode),
        r[3],
    );
    let resend = Line::from(vec![
        Span::styled("Didn't get it? ", styles::text_muted(p)),
        link("Resend email", flow.focus == ResetField::Resend, p),
    ]);
    frame.render_widget(Paragraph::new(resend).alignment(Alignment::Center), r[5]);
    frame.render_widget(back_to_login(flow, p), r[7]);
}

fn render_reset_password(frame: &mut Frame, col: Rect, flow: &ResetFlow, p: &Palette) {
    let r = rows(
        col,
        &[
            2,
            1,
            TEXT_FIELD_HEIGHT,
            STRENGTH_METER_HEIGHT,
            TEXT_FIELD_HEIGHT,
            1,
            1,
            1,
            1,
            1,
        ],
    );
    frame.render_widget(
        header(
            "Set a new password",
            "Choose a strong password you haven't used before".to_string(),
            p,
        ),
        r[0],
    );
    frame.render_widget(
        TextField::new("New password", &flow.new_password, p)
            .focused(flow.focus == ResetField::NewPassword)
            .masked(!flow.show_password)
            .error(flow.errors.password),
        r[2],
    );
    if !flow.new_password.is_empty() {
        frame.render_widget(StrengthMeter::new(flow.new_password.value(), p), r[3]);
    }
    frame.render_widget(
        TextField::new("Confirm password", &flow.confirm_password, p)
            .focused(flow.focus == ResetField::ConfirmPassword)
            .masked(!flow.show_password)
            .error(flow.errors.confirm_password),
        r[4],
    );
    frame.render_widget(
        Checkbox::new("Show passwords", flow.show_password, p)
            .focused(flow.focus == ResetField::ShowPassword),
        r[5],
    );
    frame.render_widget(
        Button::new("Reset Password", p)
            .focused(flow.focus == ResetField::SetPassword)
            .busy(flow.submitting, "Resetting..."),
        r[7],
    );
    frame.render_widget(back_to_login(flow, p), r[9]);
}
