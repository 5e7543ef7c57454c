//! Reusable widgets

pub mod controls;
pub mod modal_overlay;
pub mod nav_bar;
pub mod status_bar;
pub mod strength_meter;
pub mod text_field;

pub use controls::{link, Button, Checkbox};
pub use modal_overlay::{centered_rect, render_modal};
pub use nav_bar::NavBar;
pub use status_bar::StatusBar;
pub use strength_meter::{StrengthMeter, STRENGTH_METER_HEIGHT};
pub use text_field::{TextField, TEXT_FIELD_HEIGHT};
