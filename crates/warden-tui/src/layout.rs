//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (title + view tabs + channel indicator)
    pub header: Rect,

    /// Active view content
    pub content: Rect,

    /// Keybinding hints for the active view
    pub footer: Rect,
}

/// Split the screen into header, content, and footer areas.
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Footer hints
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(
            layout.header.height + layout.content.height + layout.footer.height,
            area.height
        );
        assert_eq!(layout.content.y, 3);
    }

    #[test]
    fn test_layout_tiny_screen_does_not_panic() {
        let area = Rect::new(0, 0, 20, 4);
        let layout = create(area);
        let total = layout.header.height + layout.content.height + layout.footer.height;
        assert_eq!(total, area.height);
    }
}
