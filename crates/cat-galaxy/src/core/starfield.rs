use crate::components::sprite::Color;
use crate::core::rng::Rng;
use crate::renderer::instance::StarVertex;

/// Static background point cloud, uniformly scattered in a cube centered
/// on the origin.
#[derive(Debug, Clone)]
pub struct Starfield {
    pub points: Vec<StarVertex>,
    /// Point size in pixels at unit depth scale (attenuated with distance).
    pub size: f32,
    pub color: Color,
    pub opacity: f32,
}

impl Starfield {
    pub fn generate(count: usize, half_extent: f32, rng: &mut Rng) -> Self {
        let points = (0..count)
            .map(|_| StarVertex {
                x: rng.centered(half_extent),
                y: rng.centered(half_extent),
                z: rng.centered(half_extent),
            })
            .collect();
        Self {
            points,
            size: 2.0,
            color: Color::WHITE,
            opacity: 0.6,
        }
    }

    pub fn with_style(mut self, size: f32, opacity: f32) -> Self {
        self.size = size;
        self.opacity = opacity;
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
