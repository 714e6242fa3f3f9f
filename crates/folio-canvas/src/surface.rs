//! Drawing surface abstraction and a recording implementation

use folio_core::{Dimensions, Rect, Rgba, Vec2};

/// The host-provided 2D surface the engine paints on.
///
/// The engine never creates or destroys a surface. It only resizes it (via the
/// viewport adapter) and issues draw calls against it.
pub trait DrawingSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Match the backing store to new dimensions. Clears existing content.
    fn resize(&mut self, dimensions: Dimensions);

    fn clear(&mut self, region: Rect);

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f64);

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Circle {
        center: Vec2,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f64,
    },
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    dimensions: Dimensions,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            dimensions: Dimensions::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear(_)))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Recorded lines as `(from, to, color, width)`
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba, f64)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => Some((*from, *to, *color, *width)),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.dimensions.width
    }

    fn height(&self) -> f64 {
        self.dimensions.height
    }

    fn resize(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
        self.commands.clear();
    }

    fn clear(&mut self, region: Rect) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.clear(Rect::new(0.0, 0.0, 10.0, 10.0));
        surface.fill_circle(Vec2::new(1.0, 1.0), 2.0, Rgba::TRANSPARENT);
        surface.stroke_line(Vec2::ZERO, Vec2::new(3.0, 4.0), Rgba::TRANSPARENT, 1.0);

        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.circle_count(), 1);
        assert_eq!(surface.lines().count(), 1);
        assert!(matches!(surface.commands()[0], DrawCommand::Clear(_)));
    }

    #[test]
    fn resize_drops_history() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.fill_circle(Vec2::ZERO, 1.0, Rgba::TRANSPARENT);
        surface.resize(Dimensions::new(20.0, 5.0));
        assert!(surface.commands().is_empty());
        assert_eq!(surface.dimensions(), Dimensions::new(20.0, 5.0));
    }
}
