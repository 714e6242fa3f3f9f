//! Pointer position tracking in surface-local coordinates

use folio_core::{Dimensions, Vec2};

/// The current mouse/touch position, read by every particle update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    position: Vec2,
}

impl PointerTracker {
    /// Starts at the surface origin until the first move event
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Pointer moved within the tracked region. `surface_origin` is the
    /// surface's on-screen offset at the time of the event.
    pub fn on_move(&mut self, client: Vec2, surface_origin: Vec2) {
        self.position = client - surface_origin;
    }

    /// Touch moved; only the first touch point steers the web
    pub fn on_touch_move(&mut self, touches: &[Vec2], surface_origin: Vec2) {
        if let Some(first) = touches.first() {
            self.on_move(*first, surface_origin);
        }
    }

    /// Pointer left the tracked region: park it at the surface center
    pub fn on_leave(&mut self, dimensions: Dimensions) {
        self.position = dimensions.center();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        assert_eq!(PointerTracker::new().position(), Vec2::ZERO);
    }

    #[test]
    fn move_subtracts_surface_offset() {
        let mut pointer = PointerTracker::new();
        pointer.on_move(Vec2::new(150.0, 220.0), Vec2::new(50.0, 20.0));
        assert_eq!(pointer.position(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn touch_uses_first_point() {
        let mut pointer = PointerTracker::new();
        pointer.on_touch_move(
            &[Vec2::new(30.0, 40.0), Vec2::new(500.0, 500.0)],
            Vec2::new(10.0, 10.0),
        );
        assert_eq!(pointer.position(), Vec2::new(20.0, 30.0));

        pointer.on_touch_move(&[], Vec2::ZERO);
        assert_eq!(pointer.position(), Vec2::new(20.0, 30.0));
    }

    #[test]
    fn leave_recenters() {
        let mut pointer = PointerTracker::new();
        pointer.on_move(Vec2::new(5.0, 5.0), Vec2::ZERO);
        pointer.on_leave(Dimensions::new(800.0, 600.0));
        assert_eq!(pointer.position(), Vec2::new(400.0, 300.0));
    }
}
