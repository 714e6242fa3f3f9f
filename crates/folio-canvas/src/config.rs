//! Field configuration (parsed from TOML) with the hero-canvas defaults

use folio_core::{Result, Rgba};
use std::path::Path;

/// Upper bound on `point_count`; the connection scan is quadratic.
pub const MAX_POINTS: usize = 500;

/// Tunables for the particle web
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Number of particles seeded on every (re)initialization
    pub point_count: usize,
    /// Particles closer than this are linked
    pub connection_radius: f64,
    /// Particles closer than this to the pointer are pulled toward it
    pub attraction_radius: f64,
    /// Fraction of the particle-to-pointer vector added to velocity per step
    pub attraction_strength: f64,
    /// Per-step velocity multiplier
    pub friction: f64,
    pub point_radius: f64,
    /// Shared color of points and links; alpha is set per use
    pub accent: Rgba,
    pub point_alpha: f64,
    /// Link alpha is `(1 - d/R) * link_alpha_scale`
    pub link_alpha_scale: f64,
    /// Link width is `(1 - d/R) * link_width_scale`
    pub link_width_scale: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            point_count: 50,
            connection_radius: 150.0,
            attraction_radius: 150.0,
            attraction_strength: 0.002,
            friction: 0.99,
            point_radius: 2.0,
            accent: Rgba::new(100, 255, 218, 1.0),
            point_alpha: 0.8,
            link_alpha_scale: 0.5,
            link_width_scale: 2.0,
        }
    }
}

impl FieldConfig {
    /// Parse a FieldConfig from a TOML table. Unknown keys are ignored and
    /// malformed values keep their defaults.
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("point_count") {
            let n = v.as_integer().unwrap_or(config.point_count as i64).max(0) as usize;
            config.point_count = n.min(MAX_POINTS);
        }
        if let Some(v) = table.get("connection_radius") {
            config.connection_radius = toml_f64(v, config.connection_radius).max(0.0);
        }
        if let Some(v) = table.get("attraction_radius") {
            config.attraction_radius = toml_f64(v, config.attraction_radius).max(0.0);
        }
        if let Some(v) = table.get("attraction_strength") {
            config.attraction_strength = toml_f64(v, config.attraction_strength);
        }
        if let Some(v) = table.get("friction") {
            config.friction = toml_f64(v, config.friction).clamp(0.0, 1.0);
        }
        if let Some(v) = table.get("point_radius") {
            config.point_radius = toml_f64(v, config.point_radius).max(0.0);
        }
        if let Some(v) = table.get("accent") {
            config.accent = toml_rgb(v, config.accent);
        }
        if let Some(v) = table.get("point_alpha") {
            config.point_alpha = toml_f64(v, config.point_alpha).clamp(0.0, 1.0);
        }
        if let Some(v) = table.get("link_alpha_scale") {
            config.link_alpha_scale = toml_f64(v, config.link_alpha_scale).clamp(0.0, 1.0);
        }
        if let Some(v) = table.get("link_width_scale") {
            config.link_width_scale = toml_f64(v, config.link_width_scale).max(0.0);
        }

        config
    }

    /// Load a FieldConfig from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table: toml::value::Table = toml::from_str(&content)?;
        Ok(Self::from_toml(&table))
    }

    pub fn point_color(&self) -> Rgba {
        self.accent.with_alpha(self.point_alpha)
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f64(v: &toml::Value, default: f64) -> f64 {
    v.as_float()
        .or_else(|| v.as_integer().map(|i| i as f64))
        .unwrap_or(default)
}

fn toml_rgb(v: &toml::Value, default: Rgba) -> Rgba {
    if let Some(arr) = v.as_array() {
        if arr.len() >= 3 {
            let channel = |i: usize, d: u8| {
                arr[i]
                    .as_integer()
                    .map(|c| c.clamp(0, 255) as u8)
                    .unwrap_or(d)
            };
            return Rgba::new(
                channel(0, default.r),
                channel(1, default.g),
                channel(2, default.b),
                default.a,
            );
        }
    }
    if let Some(s) = v.as_str() {
        let hex = s.trim_start_matches('#');
        if let Ok(n) = u32::from_str_radix(hex, 16) {
            return Rgba::from_hex(n).with_alpha(default.a);
        }
    }
    default
}
