//! Renderer trait: the seam between the headless scene and a drawing backend.
//!
//! The web crate implements it with a Canvas2D context.

use super::camera::CameraUniform;
use super::instance::{SpriteInstance, StarVertex};
use crate::api::types::Viewport;
use crate::components::sprite::Color;
use crate::core::starfield::Starfield;
use crate::systems::render::fog_factor;

/// Point-material settings for the starfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarStyle {
    /// Point size in world units, attenuated with distance.
    pub size: f32,
    pub color: Color,
    pub opacity: f32,
    /// Same exp² density the sprites are fogged with.
    pub fog_density: f32,
}

impl StarStyle {
    pub fn new(stars: &Starfield, fog_density: f32) -> Self {
        Self {
            size: stars.size,
            color: stars.color,
            opacity: stars.opacity,
            fog_density,
        }
    }

    /// Opacity of a star `depth` units in front of the eye.
    pub fn alpha_at(&self, depth: f32) -> f32 {
        self.opacity * (1.0 - fog_factor(self.fog_density, depth))
    }
}

/// Everything a backend needs to draw one frame.
pub struct FrameData<'a> {
    pub camera: CameraUniform,
    /// Sorted back to front.
    pub sprites: &'a [SpriteInstance],
    pub stars: &'a [StarVertex],
    pub star_style: StarStyle,
    /// Opaque backdrop, or `None` to clear to transparent so the page
    /// behind the canvas shows through.
    pub background: Option<Color>,
    /// CSS-pixel size; backends scale by their own pixel ratio.
    pub viewport: Viewport,
}

/// Drawing backend.
///
/// ```ignore
/// impl Renderer for Canvas2dRenderer {
///     fn backend(&self) -> &'static str { "canvas2d" }
///     fn resize(&mut self, width: u32, height: u32) { /* resize backing store */ }
///     fn draw(&mut self, frame: &FrameData) { /* stars, then sprites */ }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier, e.g. "canvas2d".
    fn backend(&self) -> &'static str;

    /// Handle viewport resize, in CSS pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);
}
