//! Scroll progress bar and scroll-to-top button

/// Page offset past which the scroll-to-top button shows
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 300.0;

/// Class that reveals the scroll-to-top button
pub const VISIBLE_CLASS: &str = "visible";

/// Fraction of the page scrolled, in `[0, 1]`.
///
/// A page that fits its viewport cannot scroll and reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// CSS transform for the progress bar
pub fn progress_transform(progress: f64) -> String {
    format!("scaleX({})", progress)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollToTop {
    visible: bool,
}

impl ScrollToTop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Track the page offset. Returns true when visibility changed.
    pub fn on_scroll(&mut self, page_offset: f64) -> bool {
        let visible = page_offset > SCROLL_TO_TOP_THRESHOLD;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}
