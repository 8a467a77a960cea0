//! Console view: live log pane, command input, and action status

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use warden_app::ConsoleState;

use crate::theme::styles;

/// The console view: every line the service pushes, in arrival order, with
/// the command input underneath.
pub struct ConsoleView<'a> {
    state: &'a ConsoleState,
}

impl<'a> ConsoleView<'a> {
    pub fn new(state: &'a ConsoleState) -> Self {
        Self { state }
    }

    /// The window of log lines shown for a pane of `height` rows.
    fn visible_lines(&self, height: usize) -> &[String] {
        let logs = &self.state.logs;
        if height == 0 || logs.is_empty() {
            return &[];
        }
        let start = if self.state.follow {
            logs.len().saturating_sub(height)
        } else {
            self.state.scroll.min(logs.len().saturating_sub(1))
        };
        let end = (start + height).min(logs.len());
        &logs[start..end]
    }
}

impl Widget for ConsoleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Min(3),    // Log pane
            Constraint::Length(3), // Command input
            Constraint::Length(1), // Status line
        ])
        .split(area);

        // Log pane
        let log_block = styles::panel_block(!self.state.input_active).title(" Console ");
        let log_inner = log_block.inner(chunks[0]);
        let lines: Vec<Line> = self
            .visible_lines(log_inner.height as usize)
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), styles::text_primary())))
            .collect();
        Paragraph::new(lines).block(log_block).render(chunks[0], buf);

        // Command input
        let title = if self.state.busy {
            " Command (working…) "
        } else {
            " Command "
        };
        let input_block = styles::panel_block(self.state.input_active).title(title);
        let cursor = if self.state.input_active { "█" } else { "" };
        let input_line = Line::from(vec![
            Span::styled("> ", styles::text_muted()),
            Span::styled(self.state.command.as_str(), styles::text_primary()),
            Span::styled(cursor, styles::accent()),
        ]);
        Paragraph::new(input_line)
            .block(input_block)
            .render(chunks[1], buf);

        // Status line
        if let Some(status) = &self.state.status {
            let style = if status.is_error {
                styles::status_red()
            } else {
                styles::status_green()
            };
            let line = Line::from(Span::styled(format!(" {}", status.text), style));
            if chunks[2].height > 0 {
                buf.set_line(chunks[2].x, chunks[2].y, &line, chunks[2].width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use warden_core::StatusMessage;

    fn console_with_lines(n: usize) -> ConsoleState {
        let mut state = ConsoleState::new();
        for i in 0..n {
            state.push_line(format!("log line {i}"));
        }
        state
    }

    #[test]
    fn test_follow_mode_shows_newest_lines() {
        let mut term = TestTerminal::with_size(80, 12);
        let state = console_with_lines(100);

        term.render_widget(ConsoleView::new(&state), term.area());

        assert!(term.buffer_contains("log line 99"));
        assert!(!term.buffer_contains("log line 0 "));
    }

    #[test]
    fn test_detached_scroll_shows_older_lines() {
        let mut term = TestTerminal::with_size(80, 12);
        let mut state = console_with_lines(100);
        state.scroll_to_top();

        term.render_widget(ConsoleView::new(&state), term.area());

        assert!(term.buffer_contains("log line 0"));
        assert!(!term.buffer_contains("log line 99"));
    }

    #[test]
    fn test_command_input_text_visible() {
        let mut term = TestTerminal::new();
        let mut state = ConsoleState::new();
        state.input_active = true;
        state.command = "say hello".to_string();

        term.render_widget(ConsoleView::new(&state), term.area());

        assert!(term.buffer_contains("say hello"));
    }

    #[test]
    fn test_error_status_rendered() {
        let mut term = TestTerminal::new();
        let mut state = ConsoleState::new();
        state.status = Some(StatusMessage::error("server not running"));

        term.render_widget(ConsoleView::new(&state), term.area());

        assert!(term.buffer_contains("server not running"));
    }

    #[test]
    fn test_busy_flag_shown_in_input_title() {
        let mut term = TestTerminal::new();
        let mut state = ConsoleState::new();
        state.busy = true;

        term.render_widget(ConsoleView::new(&state), term.area());

        assert!(term.buffer_contains("working"));
    }
}
