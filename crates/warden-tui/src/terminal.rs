//! Raw-mode lifecycle for the dashboard terminal
//!
//! The dashboard owns the whole screen while it runs; a panic that skips
//! teardown would leave the user's shell in raw mode with no cursor.

/// Enter the alternate screen, with a panic hook chained in front of the
/// default one so a crash restores the terminal before printing.
pub fn setup() -> ratatui::DefaultTerminal {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
    ratatui::init()
}

/// Leave the alternate screen and hand the terminal back to the shell.
pub fn teardown() {
    ratatui::restore();
}
