//! Render loop driven by an injected frame scheduler

use crate::engine::{HostEvent, ParticleWeb};
use crate::surface::DrawingSurface;
use std::collections::VecDeque;

/// Source of presentation slots.
///
/// Each call waits for the host's next frame and pushes any input the host
/// observed since the previous frame into `events`. Returning `false` means
/// the host stopped presenting and the loop should end.
pub trait FrameScheduler {
    fn next_frame(&mut self, events: &mut Vec<HostEvent>) -> bool;
}

/// Presents a fixed number of frames with no input
pub struct FixedFrames {
    remaining: u64,
}

impl FixedFrames {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FixedFrames {
    fn next_frame(&mut self, _events: &mut Vec<HostEvent>) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Presents one frame per script entry, delivering that entry's events first
#[derive(Default)]
pub struct ScriptedFrames {
    frames: VecDeque<Vec<HostEvent>>,
}

impl ScriptedFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame preceded by `events`
    pub fn frame(mut self, events: Vec<HostEvent>) -> Self {
        self.frames.push_back(events);
        self
    }

    /// Append `count` frames with no input
    pub fn idle(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.frames.push_back(Vec::new());
        }
        self
    }
}

impl FrameScheduler for ScriptedFrames {
    fn next_frame(&mut self, events: &mut Vec<HostEvent>) -> bool {
        match self.frames.pop_front() {
            Some(frame_events) => {
                events.extend(frame_events);
                true
            }
            None => false,
        }
    }
}

/// Steps the particle web once per presented frame.
///
/// Events are applied in arrival order between frames, never inside a step.
pub struct RenderLoop<S, F> {
    web: ParticleWeb,
    surface: S,
    scheduler: F,
    pending: Vec<HostEvent>,
}

impl<S: DrawingSurface, F: FrameScheduler> RenderLoop<S, F> {
    /// Fit the web to the surface's current size and seed it
    pub fn new(mut web: ParticleWeb, mut surface: S, scheduler: F) -> Self {
        let container = surface.dimensions();
        web.start(container, &mut surface);
        Self {
            web,
            surface,
            scheduler,
            pending: Vec::new(),
        }
    }

    /// Run until the scheduler stops presenting. Returns the frames stepped.
    pub fn run(&mut self) -> u64 {
        let mut frames = 0;
        while self.tick() {
            frames += 1;
        }
        log::debug!("render loop ended after {frames} frames");
        frames
    }

    /// Wait for one frame and step it. Returns false once the host is gone.
    pub fn tick(&mut self) -> bool {
        self.pending.clear();
        if !self.scheduler.next_frame(&mut self.pending) {
            return false;
        }
        for event in self.pending.drain(..) {
            self.web.handle_event(event, &mut self.surface);
        }
        self.web.step(&mut self.surface);
        true
    }

    pub fn web(&self) -> &ParticleWeb {
        &self.web
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::surface::RecordingSurface;
    use folio_core::{Dimensions, Vec2};

    #[test]
    fn fixed_frames_runs_exact_count() {
        let web = ParticleWeb::new(FieldConfig::default(), 5);
        let surface = RecordingSurface::new(800.0, 600.0);
        let mut render_loop = RenderLoop::new(web, surface, FixedFrames::new(3));

        assert_eq!(render_loop.run(), 3);
        assert_eq!(render_loop.web().frame(), 3);
        assert_eq!(render_loop.surface().clear_count(), 3);
        assert_eq!(render_loop.surface().circle_count(), 150);
        assert!(!render_loop.tick());
    }

    #[test]
    fn one_frame_on_800_by_600() {
        let web = ParticleWeb::new(FieldConfig::default(), 0xDEAD_BEEF);
        let surface = RecordingSurface::new(800.0, 600.0);
        let mut render_loop = RenderLoop::new(web, surface, FixedFrames::new(1));
        assert_eq!(render_loop.web().field().particles().len(), 50);

        render_loop.run();
        let surface = render_loop.surface();
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.circle_count(), 50);
        assert!(surface.lines().all(|(a, b, _, _)| a.distance(&b) < 150.0));
    }

    #[test]
    fn events_apply_before_their_frame() {
        let script = ScriptedFrames::new()
            .frame(vec![HostEvent::PointerMove {
                client: Vec2::new(210.0, 110.0),
                origin: Vec2::new(10.0, 10.0),
            }])
            .idle(1)
            .frame(vec![HostEvent::Resize(Dimensions::new(400.0, 300.0))]);

        let web = ParticleWeb::new(FieldConfig::default(), 77);
        let surface = RecordingSurface::new(800.0, 600.0);
        let mut render_loop = RenderLoop::new(web, surface, script);

        assert!(render_loop.tick());
        assert_eq!(render_loop.web().pointer(), Vec2::new(200.0, 100.0));

        assert!(render_loop.tick());
        assert!(render_loop.tick());
        assert_eq!(render_loop.web().dimensions(), Dimensions::new(400.0, 300.0));
        // resize wiped the recording, leaving only the post-resize frame
        assert_eq!(render_loop.surface().clear_count(), 1);

        assert!(!render_loop.tick());
        assert_eq!(render_loop.web().frame(), 3);
    }
}
