use bytemuck::{Pod, Zeroable};

use crate::renderer::camera::CameraUniform;

/// Per-sprite render data for one frame: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// World position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Edge length in world units.
    pub size: f32,
    /// Screen-space rotation in radians.
    pub rotation: f32,
    /// Tint, multiplied with the texture.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    /// Exponential fog amount in [0, 1): 0 = clear, 1 = fully fogged.
    pub fog: f32,
    /// View-space depth (distance in front of the eye).
    pub depth: f32,
    /// Registry index of the body, or -1 for the sun.
    pub body: f32,
}

impl SpriteInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    pub const SUN: f32 = -1.0;

    /// Opacity after fog.
    pub fn visible_alpha(&self) -> f32 {
        self.alpha * (1.0 - self.fog)
    }

    /// Rotation for a Y-down 2D surface, where positive angles turn
    /// clockwise. `rotation` itself is counter-clockwise on screen.
    pub fn screen_rotation(&self) -> f32 {
        -self.rotation
    }
}

/// One background star, in world space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Sprites for the current frame, sorted back to front, plus the camera
/// they were sorted for.
pub struct RenderBuffer {
    pub sprites: Vec<SpriteInstance>,
    pub camera: CameraUniform,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sprites: Vec::with_capacity(capacity),
            camera: CameraUniform::zeroed(),
        }
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn push(&mut self, instance: SpriteInstance) {
        self.sprites.push(instance);
    }

    pub fn sprite_count(&self) -> u32 {
        self.sprites.len() as u32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
