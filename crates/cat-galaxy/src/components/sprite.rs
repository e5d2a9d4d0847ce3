/// Linear RGBA color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build an opaque color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Packed `0xRRGGBB` value (alpha dropped).
    pub fn to_hex(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// CSS `#rrggbb` string.
    pub fn css(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }
}

/// Billboard sprite: a camera-facing textured quad tinted by `tint`.
#[derive(Debug, Clone)]
pub struct SpriteComponent {
    /// Edge length of the quad in world units.
    pub size: f32,
    /// Multiplied with the texture color.
    pub tint: Color,
    /// Rotation of the quad in screen space, radians.
    pub rotation: f32,
    pub opacity: f32,
}

impl SpriteComponent {
    pub fn new(size: f32, tint: Color) -> Self {
        Self {
            size,
            tint,
            rotation: 0.0,
            opacity: 1.0,
        }
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::new(1.0, Color::WHITE)
    }
}
