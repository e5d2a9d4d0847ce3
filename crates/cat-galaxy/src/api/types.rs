use glam::Vec2;

/// Identifier of an orbiting body. Equals its index in the registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Side effect requested by the scene, forwarded to the host after a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalaxyEvent {
    /// Open `url` in a new browsing context.
    OpenUrl { body: BodyId, url: String },
}

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Map a pixel position (origin top-left, Y down) to normalized device
    /// coordinates in [-1, 1] (Y up).
    pub fn pixel_to_ndc(&self, x: f32, y: f32) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new((x / w) * 2.0 - 1.0, -(y / h) * 2.0 + 1.0)
    }

    /// Inverse of [`Viewport::pixel_to_ndc`].
    pub fn ndc_to_pixel(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.width,
            (-(ndc.y * 0.5) + 0.5) * self.height,
        )
    }
}
