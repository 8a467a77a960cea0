//! Footer hint line: per-view keybindings

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use warden_app::View;

use crate::theme::styles;

/// One-line keybinding reference for the active view.
pub struct FooterHints {
    view: View,
}

impl FooterHints {
    pub fn new(view: View) -> Self {
        Self { view }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.view {
            View::Console => &[
                ("s", "Start"),
                ("x", "Stop"),
                ("c", "Command"),
                ("Tab", "Next view"),
                ("q", "Quit"),
            ],
            View::Mods | View::Files => &[
                ("r", "Refresh"),
                ("/", "Filter"),
                ("o", "Choose file"),
                ("u", "Upload"),
                ("d", "Delete"),
                ("q", "Quit"),
            ],
            View::Properties => &[
                ("Enter", "Edit"),
                ("s", "Save"),
                ("r", "Reload"),
                ("Tab", "Next view"),
                ("q", "Quit"),
            ],
        }
    }
}

impl Widget for FooterHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled("] ", styles::text_muted()));
            spans.push(Span::styled(*label, styles::text_muted()));
            spans.push(Span::raw("  "));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::layout::Rect;

    #[test]
    fn test_console_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(FooterHints::new(View::Console), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("[s] Start"));
        assert!(term.buffer_contains("[x] Stop"));
    }

    #[test]
    fn test_repository_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(FooterHints::new(View::Mods), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("[u] Upload"));
        assert!(term.buffer_contains("[d] Delete"));
    }
}
