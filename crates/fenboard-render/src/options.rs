//! Render options.

/// Which player's viewpoint the rendered board is oriented toward.
///
/// The black viewpoint is a 180-degree rotation of the white one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Perspective {
    #[default]
    White,
    Black,
}

impl std::fmt::Display for Perspective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Perspective::White => write!(f, "white"),
            Perspective::Black => write!(f, "black"),
        }
    }
}

/// Options controlling a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output edge length in pixels; the image is always square.
    ///
    /// Squares are `size / 8` pixels using integer division, so sizes that
    /// are not multiples of 8 leave an unpainted strip along the right and
    /// bottom edges.
    pub size: u32,
    /// Viewpoint orientation.
    pub perspective: Perspective,
}

impl RenderOptions {
    /// Default output edge length in pixels.
    pub const DEFAULT_SIZE: u32 = 400;

    /// Creates options with the given size and the white viewpoint.
    #[must_use]
    pub const fn with_size(size: u32) -> Self {
        Self {
            size,
            perspective: Perspective::White,
        }
    }

    /// Returns a copy of these options with the given perspective.
    #[must_use]
    pub const fn with_perspective(mut self, perspective: Perspective) -> Self {
        self.perspective = perspective;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            perspective: Perspective::White,
        }
    }
}
