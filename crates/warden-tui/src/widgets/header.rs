//! Header bar: title, view tabs, and log channel indicator

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use warden_app::View;
use warden_core::ChannelState;

use crate::theme::{palette, styles};

/// Main header showing the app title, one tab per view, and the live log
/// channel indicator on the right.
pub struct HeaderBar {
    view: View,
    channel: ChannelState,
}

impl HeaderBar {
    pub fn new(view: View, channel: ChannelState) -> Self {
        Self { view, channel }
    }
}

impl Widget for HeaderBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::raw(" "),
            Span::styled("Server Warden", styles::accent_bold()),
            Span::raw("  "),
        ];
        for (i, view) in View::ALL.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, view.title());
            if *view == self.view {
                spans.push(Span::styled(label, styles::focused_selected()));
            } else {
                spans.push(Span::styled(label, styles::text_muted()));
            }
            spans.push(Span::raw(" "));
        }
        let left_line = Line::from(spans);
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Channel indicator, right-aligned
        let (icon, label, style) = styles::channel_indicator(self.channel);
        let right_line = Line::from(vec![
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(label, styles::text_secondary()),
            Span::raw(" "),
        ]);
        let right_width = right_line.width() as u16;
        if left_line.width() as u16 + right_width <= inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right_line, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title_and_tabs() {
        let mut term = TestTerminal::new();
        let header = HeaderBar::new(View::Console, ChannelState::Disconnected);

        term.render_widget(header, term.area());

        assert!(term.buffer_contains("Server Warden"));
        assert!(term.buffer_contains("1 Console"));
        assert!(term.buffer_contains("4 Properties"));
    }

    #[test]
    fn test_header_shows_channel_state() {
        let mut term = TestTerminal::new();
        let header = HeaderBar::new(View::Console, ChannelState::Connected);
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("Connected"));

        let mut term = TestTerminal::new();
        let header = HeaderBar::new(View::Console, ChannelState::Disconnected);
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("Offline"));
    }

    #[test]
    fn test_header_compact_does_not_panic() {
        let mut term = TestTerminal::compact();
        let header = HeaderBar::new(View::Mods, ChannelState::Disconnected);
        term.render_widget(header, term.area());
        assert!(!term.content().is_empty());
    }
}
