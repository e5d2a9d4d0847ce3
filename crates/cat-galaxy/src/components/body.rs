use glam::Vec3;
use url::Url;

use crate::api::error::GalaxyError;
use crate::api::types::BodyId;
use crate::components::sprite::{Color, SpriteComponent};
use crate::core::orbit;

/// Validated description of one orbiting body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDesc {
    pub name: String,
    /// Link opened on click. `None` means the body is not clickable.
    pub url: Option<String>,
    pub color: Color,
    /// Distance from the sun in world units.
    pub orbit_radius: f32,
    /// Radians advanced per frame.
    pub angular_speed: f32,
    /// Sprite edge length in world units.
    pub size: f32,
}

impl BodyDesc {
    pub fn new(
        name: impl Into<String>,
        url: Option<&str>,
        color: Color,
        orbit_radius: f32,
        angular_speed: f32,
        size: f32,
    ) -> Result<Self, GalaxyError> {
        let name = name.into();
        let invalid = |reason| GalaxyError::InvalidBody {
            name: name.clone(),
            reason,
        };

        if name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if !orbit_radius.is_finite() || orbit_radius <= 0.0 {
            return Err(invalid("orbit radius must be positive"));
        }
        if !angular_speed.is_finite() {
            return Err(invalid("angular speed must be finite"));
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(invalid("size must be positive"));
        }
        let url = match url {
            None => None,
            Some(raw) => {
                let parsed = Url::parse(raw).map_err(|_| invalid("url is malformed"))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(invalid("url must be http or https"));
                }
                Some(raw.to_string())
            }
        };

        Ok(Self {
            name,
            url,
            color,
            orbit_radius,
            angular_speed,
            size,
        })
    }
}

/// A body in the live scene: its descriptor plus per-frame orbital state.
#[derive(Debug, Clone)]
pub struct OrbitingBody {
    pub id: BodyId,
    pub desc: BodyDesc,
    /// Accumulated orbital angle in radians. Never wrapped; only read through sin/cos.
    pub angle: f32,
    /// World position, kept in sync with `angle` by [`OrbitingBody::advance`].
    pub position: Vec3,
    pub sprite: SpriteComponent,
}

impl OrbitingBody {
    pub fn new(id: BodyId, desc: BodyDesc, initial_angle: f32) -> Self {
        let sprite = SpriteComponent::new(desc.size, desc.color);
        let position = orbit::circular_position(desc.orbit_radius, initial_angle);
        Self {
            id,
            desc,
            angle: initial_angle,
            position,
            sprite,
        }
    }

    /// Advance one frame along the orbit.
    pub fn advance(&mut self) {
        self.angle += self.desc.angular_speed;
        self.position = orbit::circular_position(self.desc.orbit_radius, self.angle);
    }

    pub fn url(&self) -> Option<&str> {
        self.desc.url.as_deref()
    }
}
