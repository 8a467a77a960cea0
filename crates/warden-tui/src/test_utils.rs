//! Shared helpers for widget tests

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

/// In-memory terminal for rendering widgets in tests.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
    width: u16,
    height: u16,
}

impl TestTerminal {
    /// Standard 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    /// Small terminal for layout edge cases
    pub fn compact() -> Self {
        Self::with_size(40, 10)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("test backend construction cannot fail");
        Self {
            terminal,
            width,
            height,
        }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw to test backend");
    }

    /// The whole buffer as one string, rows separated by newlines.
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().contains(needle)
    }
}
