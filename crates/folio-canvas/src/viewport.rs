//! Keeps the drawing surface sized to its container

use crate::surface::DrawingSurface;
use folio_core::Dimensions;

/// Owns the current surface dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    dimensions: Dimensions,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Resize `surface` to the container's content box.
    ///
    /// Canvas backing stores are whole pixels, so fractional layout sizes are
    /// truncated the same way a canvas `width` attribute would truncate them.
    /// The caller must reseed the field afterwards.
    pub fn fit<S: DrawingSurface + ?Sized>(
        &mut self,
        container: Dimensions,
        surface: &mut S,
    ) -> Dimensions {
        let dimensions = Dimensions::new(
            container.width.max(0.0).trunc(),
            container.height.max(0.0).trunc(),
        );
        surface.resize(dimensions);
        self.dimensions = dimensions;
        log::debug!(
            "viewport fitted to {}x{}",
            dimensions.width,
            dimensions.height
        );
        dimensions
    }
}
