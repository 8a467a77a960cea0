//! Repository view: listing with filter, upload staging, and delete prompt

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use warden_app::repository::{RepoInput, RepositoryState};

use crate::theme::styles;

/// One repository view (generic files or mods), driven entirely by
/// `RepositoryState`.
pub struct RepositoryView<'a> {
    state: &'a RepositoryState,
}

impl<'a> RepositoryView<'a> {
    pub fn new(state: &'a RepositoryState) -> Self {
        Self { state }
    }

    fn list_title(&self) -> String {
        let shown = self.state.visible().len();
        let total = self.state.entries.len();
        if self.state.loading {
            format!(" {} (loading…) ", self.state.kind.title())
        } else if shown == total {
            format!(" {} ({total}) ", self.state.kind.title())
        } else {
            format!(" {} ({shown}/{total}) ", self.state.kind.title())
        }
    }

    fn input_line(&self) -> Line<'_> {
        match self.state.input {
            RepoInput::Filter => Line::from(vec![
                Span::styled("/", styles::text_muted()),
                Span::styled(self.state.filter.as_str(), styles::text_primary()),
                Span::styled("█", styles::accent()),
            ]),
            RepoInput::Path => Line::from(vec![
                Span::styled("path: ", styles::text_muted()),
                Span::styled(self.state.path_input.as_str(), styles::text_primary()),
                Span::styled("█", styles::accent()),
            ]),
            RepoInput::None => {
                if let Some(staged) = &self.state.staged {
                    Line::from(vec![
                        Span::styled("staged: ", styles::text_muted()),
                        Span::styled(staged.filename.as_str(), styles::accent()),
                        Span::styled(
                            format!(" ({} bytes)", staged.size_bytes),
                            styles::text_secondary(),
                        ),
                    ])
                } else if !self.state.filter.is_empty() {
                    Line::from(vec![
                        Span::styled("filter: ", styles::text_muted()),
                        Span::styled(self.state.filter.as_str(), styles::text_secondary()),
                    ])
                } else {
                    Line::from(Span::styled(
                        "no file staged — press o to choose one",
                        styles::text_muted(),
                    ))
                }
            }
        }
    }
}

impl Widget for RepositoryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Min(3),    // Listing
            Constraint::Length(3), // Filter / path / staged line
            Constraint::Length(1), // Status line
        ])
        .split(area);

        // Listing pane, with a scroll window centered on the selection
        let block = styles::panel_block(self.state.input == RepoInput::None)
            .title(self.list_title());
        let inner = block.inner(chunks[0]);
        let visible = self.state.visible();
        let height = inner.height as usize;
        let start = if height == 0 {
            0
        } else {
            self.state.selected.saturating_sub(height.saturating_sub(1))
        };
        let lines: Vec<Line> = visible
            .iter()
            .enumerate()
            .skip(start)
            .take(height)
            .map(|(i, name)| {
                if i == self.state.selected {
                    Line::from(Span::styled(format!(" {name} "), styles::focused_selected()))
                } else {
                    Line::from(Span::styled(format!(" {name} "), styles::text_primary()))
                }
            })
            .collect();
        let lines = if lines.is_empty() && !self.state.loading {
            vec![Line::from(Span::styled(" (empty)", styles::text_muted()))]
        } else {
            lines
        };
        Paragraph::new(lines).block(block).render(chunks[0], buf);

        // Input / staged line
        let input_block = styles::panel_block(self.state.input != RepoInput::None);
        Paragraph::new(self.input_line())
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

        // Delete confirmation modal, on top of everything
        if let Some(target) = &self.state.pending_delete {
            render_delete_prompt(target, area, buf);
        }
    }
}

fn render_delete_prompt(target: &str, area: Rect, buf: &mut Buffer) {
    let width = (target.len() as u16 + 14).clamp(30, area.width);
    let modal = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(5) / 2,
        width,
        height: 5.min(area.height),
    };
    Clear.render(modal, buf);
    let block = styles::modal_block(" Confirm delete ");
    let inner = block.inner(modal);
    block.render(modal, buf);

    let lines = vec![
        Line::from(Span::styled(
            format!("Delete {target}?"),
            styles::text_primary(),
        )),
        Line::from(vec![
            Span::styled("[y]", styles::keybinding()),
            Span::styled(" delete   ", styles::text_secondary()),
            Span::styled("[n]", styles::keybinding()),
            Span::styled(" keep", styles::text_secondary()),
        ]),
    ];
    Paragraph::new(lines).render(inner, buf);
}
