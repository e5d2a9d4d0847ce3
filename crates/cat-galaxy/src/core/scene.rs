use glam::Vec3;

use crate::api::galaxy::GalaxyConfig;
use crate::api::types::BodyId;
use crate::components::body::{BodyDesc, OrbitingBody};
use crate::components::sprite::{Color, SpriteComponent};
use crate::core::rng::Rng;
use crate::core::starfield::Starfield;

/// The central sprite. Sits at the origin and slowly spins in place.
#[derive(Debug, Clone)]
pub struct Sun {
    pub sprite: SpriteComponent,
    /// Radians added to the sprite rotation every frame.
    pub spin: f32,
}

impl Sun {
    pub const POSITION: Vec3 = Vec3::ZERO;

    pub fn tick(&mut self) {
        self.sprite.rotation += self.spin;
    }
}

/// Everything that gets drawn: stars, sun and bodies.
/// Small and fixed, so bodies live in a flat Vec indexed by [`BodyId`].
pub struct SceneGraph {
    pub stars: Starfield,
    pub sun: Sun,
    bodies: Vec<OrbitingBody>,
}

impl SceneGraph {
    /// Build the scene. Each body starts at an independent random angle.
    pub fn build(config: &GalaxyConfig, descs: Vec<BodyDesc>, rng: &mut Rng) -> Self {
        let stars = Starfield::generate(config.star_count, config.star_half_extent, rng)
            .with_style(config.star_size, config.star_opacity);

        let sun = Sun {
            sprite: SpriteComponent::new(config.sun_size, Color::from_hex(config.sun_tint)),
            spin: config.sun_spin,
        };

        let bodies = descs
            .into_iter()
            .enumerate()
            .map(|(i, desc)| OrbitingBody::new(BodyId(i as u32), desc, rng.angle()))
            .collect();

        Self { stars, sun, bodies }
    }

    pub fn get(&self, id: BodyId) -> Option<&OrbitingBody> {
        self.bodies.get(id.index())
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut OrbitingBody> {
        self.bodies.iter_mut()
    }

    /// Find a body by its display name.
    pub fn find_by_name(&self, name: &str) -> Option<&OrbitingBody> {
        self.bodies.iter().find(|b| b.desc.name == name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
