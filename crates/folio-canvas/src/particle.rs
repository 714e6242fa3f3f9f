//! A single point of the web: position, velocity, and the per-frame update rule

use crate::config::FieldConfig;
use crate::surface::DrawingSurface;
use folio_core::{Dimensions, Rgba, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Advance one frame.
    ///
    /// Order matters: pointer attraction, then integration, then the bounce
    /// test against the post-integration position, then friction. The bounce
    /// only flips velocity and leaves the position outside the bounds. A
    /// shallow crossing whose damped return step falls short flips again
    /// while still outside.
    pub fn update(&mut self, pointer: Vec2, bounds: Dimensions, config: &FieldConfig) {
        let to_pointer = pointer - self.position;
        if to_pointer.length() < config.attraction_radius {
            self.velocity += to_pointer * config.attraction_strength;
        }

        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.height {
            self.velocity.y = -self.velocity.y;
        }

        self.velocity = self.velocity * config.friction;
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S, color: Rgba) {
        surface.fill_circle(self.position, self.radius, color);
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    const BOUNDS: Dimensions = Dimensions::new(800.0, 600.0);
    /// Far enough from every test particle that attraction never applies
    const FAR_POINTER: Vec2 = Vec2::new(1.0e6, 1.0e6);

    #[test]
    fn friction_only_decay_is_monotonic() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(400.0, 300.0), Vec2::new(0.9, -0.7), 2.0);
        let mut last = p.speed();
        for _ in 0..500 {
            p.update(FAR_POINTER, BOUNDS, &config);
            let speed = p.speed();
            assert!(speed <= last);
            last = speed;
        }
        assert!(last < 0.01);
    }

    #[test]
    fn integration_then_friction() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.5), 2.0);
        p.update(FAR_POINTER, BOUNDS, &config);
        assert_eq!(p.position, Vec2::new(101.0, 100.5));
        assert!((p.velocity.x - 0.99).abs() < 1e-12);
        assert!((p.velocity.y - 0.495).abs() < 1e-12);
    }

    #[test]
    fn pointer_within_radius_attracts() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 2.0);
        p.update(Vec2::new(200.0, 100.0), BOUNDS, &config);
        // dx = 100 -> dv = 0.2, then friction
        assert!((p.velocity.x - 0.2 * 0.99).abs() < 1e-12);
        assert_eq!(p.velocity.y, 0.0);
        assert!((p.position.x - 100.2).abs() < 1e-12);
    }

    #[test]
    fn pointer_at_radius_does_not_attract() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 2.0);
        p.update(Vec2::new(250.0, 100.0), BOUNDS, &config);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn bounce_flips_once_per_crossing() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(0.5, 300.0), Vec2::new(-1.0, 0.0), 2.0);

        p.update(FAR_POINTER, BOUNDS, &config);
        // crossed below zero: position left as-is, vx flipped and damped
        assert!((p.position.x + 0.5).abs() < 1e-12);
        assert!((p.velocity.x - 0.99).abs() < 1e-12);

        p.update(FAR_POINTER, BOUNDS, &config);
        // back inside, no second flip
        assert!(p.position.x > 0.0);
        assert!(p.velocity.x > 0.0);
    }

    #[test]
    fn shallow_crossing_drifts_and_flips_again() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(0.001, 300.0), Vec2::new(-1.0, 0.0), 2.0);

        p.update(FAR_POINTER, BOUNDS, &config);
        assert!((p.position.x + 0.999).abs() < 1e-12);
        assert!((p.velocity.x - 0.99).abs() < 1e-12);

        // the damped return step is too short to re-enter, so it flips back out
        p.update(FAR_POINTER, BOUNDS, &config);
        assert!((p.position.x + 0.009).abs() < 1e-12);
        assert!((p.velocity.x + 0.99 * 0.99).abs() < 1e-12);
        assert_eq!(p.position.y, 300.0);
    }

    #[test]
    fn bounce_on_far_edges() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(799.5, 599.5), Vec2::new(1.0, 1.0), 2.0);
        p.update(FAR_POINTER, BOUNDS, &config);
        assert!(p.velocity.x < 0.0);
        assert!(p.velocity.y < 0.0);
    }

    #[test]
    fn edge_value_is_not_a_crossing() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(799.0, 300.0), Vec2::new(1.0, 0.0), 2.0);
        p.update(FAR_POINTER, BOUNDS, &config);
        assert_eq!(p.position.x, 800.0);
        assert!(p.velocity.x > 0.0);
    }

    #[test]
    fn draw_emits_one_circle() {
        let p = Particle::new(Vec2::new(5.0, 6.0), Vec2::ZERO, 2.0);
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let color = FieldConfig::default().point_color();
        p.draw(&mut surface, color);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::Circle {
                center: Vec2::new(5.0, 6.0),
                radius: 2.0,
                color,
            }]
        );
    }
}
