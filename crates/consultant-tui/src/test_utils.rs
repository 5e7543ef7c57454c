//! Test utilities for TUI rendering verification
//!
//! Widgets and full screens are rendered into ratatui's `TestBackend`
//! and asserted on as plain text.

use chrono::Local;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use consultant_app::{update, AppState, Message, Screen, Settings};
use consultant_core::User;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 36;

/// Compact terminal for testing small layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Wrapper around a `TestBackend` terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Standard dimensions (100x36)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// All content as a string (for debugging and snapshots)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }

    /// Content with trailing blanks removed from every line
    pub fn content_trimmed(&self) -> String {
        self.content()
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
            .trim_end()
            .to_string()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

pub fn test_user() -> User {
    User {
        id: "1".to_string(),
        email: "jane@example.com".to_string(),
        full_name: "Jane Doe".to_string(),
        avatar: None,
        is_premium: false,
        created_at: Local::now(),
    }
}

/// State after the startup check found no session
pub fn signed_out_state() -> AppState {
    let mut state = AppState::new(Settings::instant());
    update(&mut state, Message::SessionRestored { user: None });
    state
}

/// State signed in as [`test_user`] and showing `screen`
pub fn signed_in_state(screen: Screen) -> AppState {
    let mut state = AppState::new(Settings::instant());
    update(
        &mut state,
        Message::SessionRestored {
            user: Some(test_user()),
        },
    );
    if screen != Screen::Dashboard {
        update(&mut state, Message::Navigate(screen));
    }
    state
}
