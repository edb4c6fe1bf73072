use ratatui::crossterm::event::KeyEvent;

/// Application-wide actions
#[derive(Debug, Clone)]
pub enum GlobalAction {
    KeyPressed(KeyEvent),
    /// Bracketed paste from the terminal
    Paste(String),
    Resize { width: u16, height: u16 },
    /// Close the top-most overlay
    Close,
    Quit,
}
