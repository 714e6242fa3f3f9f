//! Hamburger navigation menu

/// Class toggled on both the hamburger button and the menu
pub const ACTIVE_CLASS: &str = "active";

/// Open/closed state shared by the hamburger and the menu it controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger clicked. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A menu link was followed
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut menu = NavMenu::new();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
    }

    #[test]
    fn link_click_closes() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        // Closing an already closed menu is harmless
        menu.close();
        assert!(!menu.is_open());
    }
}
