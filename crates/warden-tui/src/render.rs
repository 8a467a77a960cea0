//! Top-level frame rendering

use ratatui::Frame;

use warden_app::{AppState, View};

use crate::layout;
use crate::widgets::{ConsoleView, FooterHints, HeaderBar, PropertiesView, RepositoryView};

/// Draw one frame from the current state.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area());

    frame.render_widget(HeaderBar::new(state.view, state.channel), areas.header);

    match state.view {
        View::Console => frame.render_widget(ConsoleView::new(&state.console), areas.content),
        View::Mods => frame.render_widget(RepositoryView::new(&state.mods), areas.content),
        View::Files => frame.render_widget(RepositoryView::new(&state.files), areas.content),
        View::Properties => {
            frame.render_widget(PropertiesView::new(&state.properties), areas.content)
        }
    }

    frame.render_widget(FooterHints::new(state.view), areas.footer);
}
