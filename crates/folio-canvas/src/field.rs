//! The particle collection: seeding, per-frame stepping, and link rendering

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::rand::ParticleRng;
use crate::surface::DrawingSurface;
use folio_core::{Dimensions, Vec2};

/// A connection between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle (always less than `b`)
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    /// Stroke alpha in `[0, link_alpha_scale]`
    pub alpha: f64,
    pub width: f64,
}

/// Owns the particle set and draws the web between them
pub struct Field {
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl Field {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            particles: Vec::with_capacity(config.point_count),
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Discard all particles and seed a fresh batch inside `dimensions`.
    ///
    /// Positions are uniform in `[0, width) x [0, height)`, velocities uniform
    /// in `[-1, 1)` per axis.
    pub fn initialize(&mut self, dimensions: Dimensions, rng: &mut ParticleRng) {
        self.particles.clear();
        for _ in 0..self.config.point_count {
            let position = Vec2::new(
                rng.range(0.0, dimensions.width),
                rng.range(0.0, dimensions.height),
            );
            let velocity = Vec2::new(rng.range(-1.0, 1.0), rng.range(-1.0, 1.0));
            self.particles
                .push(Particle::new(position, velocity, self.config.point_radius));
        }
        log::debug!(
            "seeded {} particles in {}x{}",
            self.particles.len(),
            dimensions.width,
            dimensions.height
        );
    }

    /// Every unordered pair closer than the connection radius, each pair once
    pub fn links(&self) -> Vec<Link> {
        let radius = self.config.connection_radius;
        let mut links = Vec::new();
        for (i, p) in self.particles.iter().enumerate() {
            for (offset, q) in self.particles[i + 1..].iter().enumerate() {
                let distance = p.position.distance(&q.position);
                if distance < radius {
                    let opacity = 1.0 - distance / radius;
                    links.push(Link {
                        a: i,
                        b: i + 1 + offset,
                        distance,
                        alpha: (opacity * self.config.link_alpha_scale)
                            .max(0.0)
                            .min(self.config.link_alpha_scale),
                        width: opacity * self.config.link_width_scale,
                    });
                }
            }
        }
        links
    }

    pub fn draw_connections<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for link in self.links() {
            surface.stroke_line(
                self.particles[link.a].position,
                self.particles[link.b].position,
                self.config.accent.with_alpha(link.alpha),
                link.width,
            );
        }
    }

    /// One frame: clear, update and draw every particle, then draw links
    pub fn step<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        pointer: Vec2,
        bounds: Dimensions,
    ) {
        surface.clear(bounds.bounds());

        let color = self.config.point_color();
        for particle in &mut self.particles {
            particle.update(pointer, bounds, &self.config);
            particle.draw(surface, color);
        }

        self.draw_connections(surface);
    }
}
