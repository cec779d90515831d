/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// State after the menu button is pressed.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// State after any nav link is activated.
    pub fn link_activated(self) -> Self {
        MenuState::Closed
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}
