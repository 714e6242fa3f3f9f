//! The assembled hero effect: field, pointer, and viewport behind one handle

use crate::config::FieldConfig;
use crate::field::Field;
use crate::pointer::PointerTracker;
use crate::rand::ParticleRng;
use crate::surface::DrawingSurface;
use crate::viewport::Viewport;
use folio_core::{Dimensions, Vec2};

/// Input observed by the host between two frames
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Mouse moved inside the tracked region. `origin` is the surface's
    /// on-screen offset measured when the event fired.
    PointerMove { client: Vec2, origin: Vec2 },
    /// Touch moved; the host has already suppressed default scrolling
    TouchMove { touches: Vec<Vec2>, origin: Vec2 },
    PointerLeave,
    /// Container content box changed size
    Resize(Dimensions),
}

/// Particle web wired to its pointer and viewport.
///
/// All mutation happens from discrete host callbacks (events or frames),
/// never concurrently, so the state is always settled at the start of a step.
pub struct ParticleWeb {
    field: Field,
    pointer: PointerTracker,
    viewport: Viewport,
    rng: ParticleRng,
    frame: u64,
}

impl ParticleWeb {
    pub fn new(config: FieldConfig, seed: u32) -> Self {
        Self {
            field: Field::new(config),
            pointer: PointerTracker::new(),
            viewport: Viewport::new(),
            rng: ParticleRng::new(seed),
            frame: 0,
        }
    }

    /// Size the surface to its container and seed the field
    pub fn start<S: DrawingSurface + ?Sized>(&mut self, container: Dimensions, surface: &mut S) {
        self.reinitialize(container, surface);
        log::info!(
            "particle web started with {} points",
            self.field.particles().len()
        );
    }

    pub fn handle_event<S: DrawingSurface + ?Sized>(&mut self, event: HostEvent, surface: &mut S) {
        match event {
            HostEvent::PointerMove { client, origin } => self.pointer.on_move(client, origin),
            HostEvent::TouchMove { touches, origin } => {
                self.pointer.on_touch_move(&touches, origin)
            }
            HostEvent::PointerLeave => self.pointer.on_leave(self.viewport.dimensions()),
            HostEvent::Resize(container) => self.reinitialize(container, surface),
        }
    }

    /// Advance and draw one frame
    pub fn step<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        self.field
            .step(surface, self.pointer.position(), self.viewport.dimensions());
        self.frame += 1;
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.position()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.viewport.dimensions()
    }

    /// Frames stepped since construction
    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn reinitialize<S: DrawingSurface + ?Sized>(&mut self, container: Dimensions, surface: &mut S) {
        let dimensions = self.viewport.fit(container, surface);
        self.field.initialize(dimensions, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn start_sizes_and_seeds() {
        let mut web = ParticleWeb::new(FieldConfig::default(), 1);
        let mut surface = RecordingSurface::new(0.0, 0.0);
        web.start(Dimensions::new(800.0, 600.0), &mut surface);

        assert_eq!(surface.dimensions(), Dimensions::new(800.0, 600.0));
        assert_eq!(web.field().particles().len(), 50);
        assert_eq!(web.frame(), 0);
    }

    #[test]
    fn resize_reseeds_within_new_bounds() {
        let mut web = ParticleWeb::new(FieldConfig::default(), 9);
        let mut surface = RecordingSurface::new(0.0, 0.0);
        web.start(Dimensions::new(800.0, 600.0), &mut surface);
        web.step(&mut surface);

        web.handle_event(HostEvent::Resize(Dimensions::new(320.0, 240.0)), &mut surface);
        let dims = web.dimensions();
        assert_eq!(dims, Dimensions::new(320.0, 240.0));
        assert_eq!(web.field().particles().len(), 50);
        assert!(web.field().particles().iter().all(|p| dims.contains(p.position)));
    }

    #[test]
    fn pointer_events_route_to_tracker() {
        let mut web = ParticleWeb::new(FieldConfig::default(), 2);
        let mut surface = RecordingSurface::new(0.0, 0.0);
        web.start(Dimensions::new(800.0, 600.0), &mut surface);

        web.handle_event(
            HostEvent::PointerMove {
                client: Vec2::new(120.0, 90.0),
                origin: Vec2::new(20.0, 40.0),
            },
            &mut surface,
        );
        assert_eq!(web.pointer(), Vec2::new(100.0, 50.0));

        web.handle_event(
            HostEvent::TouchMove {
                touches: vec![Vec2::new(60.0, 60.0)],
                origin: Vec2::ZERO,
            },
            &mut surface,
        );
        assert_eq!(web.pointer(), Vec2::new(60.0, 60.0));

        web.handle_event(HostEvent::PointerLeave, &mut surface);
        assert_eq!(web.pointer(), Vec2::new(400.0, 300.0));
    }
}
