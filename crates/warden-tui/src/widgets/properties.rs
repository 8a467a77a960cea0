//! Property editor view: the server's key/value map, one value editable at a time

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use warden_app::PropertiesState;

use crate::theme::styles;

pub struct PropertiesView<'a> {
    state: &'a PropertiesState,
}

impl<'a> PropertiesView<'a> {
    pub fn new(state: &'a PropertiesState) -> Self {
        Self { state }
    }
}

impl Widget for PropertiesView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Min(3),    // Key/value table
            Constraint::Length(3), // Edit buffer
            Constraint::Length(1), // Status line
        ])
        .split(area);

        let title = if self.state.loading {
            " Server Properties (loading…) ".to_string()
        } else if self.state.saving {
            " Server Properties (saving…) ".to_string()
        } else {
            format!(" Server Properties ({}) ", self.state.entries.len())
        };
        let block = styles::panel_block(self.state.editing.is_none()).title(title);
        let inner = block.inner(chunks[0]);
        let height = inner.height as usize;
        let start = if height == 0 {
            0
        } else {
            self.state.selected.saturating_sub(height.saturating_sub(1))
        };

        let key_width = self
            .state
            .entries
            .keys()
            .map(|k| k.len())
            .max()
            .unwrap_or(0);
        let lines: Vec<Line> = self
            .state
            .entries
            .iter()
            .enumerate()
            .skip(start)
            .take(height)
            .map(|(i, (key, value))| {
                let text = format!(" {key:key_width$} = {value}");
                if i == self.state.selected {
                    Line::from(Span::styled(text, styles::focused_selected()))
                } else {
                    Line::from(vec![
                        Span::styled(format!(" {key:key_width$}"), styles::accent()),
                        Span::styled(" = ", styles::text_muted()),
                        Span::styled(value.clone(), styles::text_primary()),
                    ])
                }
            })
            .collect();
        Paragraph::new(lines).block(block).render(chunks[0], buf);

        // Edit buffer
        let edit_block = styles::panel_block(self.state.editing.is_some()).title(" Edit ");
        let edit_line = match &self.state.editing {
            Some(edit) => Line::from(vec![
                Span::styled(format!("{} = ", edit.key), styles::text_muted()),
                Span::styled(edit.buffer.as_str(), styles::text_primary()),
                Span::styled("█", styles::accent()),
            ]),
            None => Line::from(Span::styled(
                "press Enter to edit the selected value",
                styles::text_muted(),
            )),
        };
        Paragraph::new(edit_line)
            .block(edit_block)
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
    use std::collections::BTreeMap;

    fn loaded() -> PropertiesState {
        let mut state = PropertiesState::new();
        state.apply_loaded(BTreeMap::from([
            ("difficulty".to_string(), "normal".to_string()),
            ("max-players".to_string(), "20".to_string()),
        ]));
        state
    }

    #[test]
    fn test_properties_render_as_key_value_pairs() {
        let mut term = TestTerminal::new();
        let state = loaded();

        term.render_widget(PropertiesView::new(&state), term.area());

        assert!(term.buffer_contains("difficulty"));
        assert!(term.buffer_contains("normal"));
        assert!(term.buffer_contains("max-players"));
        assert!(term.buffer_contains("Server Properties (2)"));
    }

    #[test]
    fn test_edit_buffer_shows_pending_value() {
        let mut term = TestTerminal::new();
        let mut state = loaded();
        state.select_next();
        state.begin_edit();
        state.edit_push('0');

        term.render_widget(PropertiesView::new(&state), term.area());

        assert!(term.buffer_contains("max-players = 200"));
    }

    #[test]
    fn test_save_in_flight_shown_in_title() {
        let mut term = TestTerminal::new();
        let mut state = loaded();
        state.saving = true;

        term.render_widget(PropertiesView::new(&state), term.area());

        assert!(term.buffer_contains("saving"));
    }
}
