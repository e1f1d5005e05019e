//! Core types for TUI screens and navigation

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing page the chat bubble floats over
    Home,
    /// Contact form
    Contact,
}

impl Screen {
    /// Title shown in the header
    pub fn title(&self) -> &str {
        match self {
            Self::Home => "Scotch | GIS Systems & Spatial Consulting",
            Self::Contact => "Contact | Start a Project",
        }
    }

    /// Key hints shown in the footer
    pub fn help(&self) -> &str {
        match self {
            Self::Home => "o: Open chat | c: Contact | Up/Down: Scroll | q: Quit",
            Self::Contact => {
                "Tab/Shift+Tab: Field | Left/Right: Choose | Enter: Send | Ctrl+O: Chat | Esc: Back"
            }
        }
    }
}
