//! The fixed set of bodies orbiting the sun, in label order.
//!
//! Bodies without a link carry `url: None` and ignore clicks.

use crate::api::error::GalaxyError;
use crate::components::body::BodyDesc;
use crate::components::sprite::Color;

/// Raw registry row. Converted to a validated [`BodyDesc`] by [`bodies`].
pub struct RegistryEntry {
    pub name: &'static str,
    pub url: Option<&'static str>,
    pub color: u32,
    pub orbit_radius: f32,
    pub angular_speed: f32,
    pub size: f32,
}

pub const BODY_COUNT: usize = 7;

pub const REGISTRY: [RegistryEntry; BODY_COUNT] = [
    RegistryEntry { name: "Udyat",         url: Some("https://t.me/udyatt_bot"),               color: 0xbc13fe, orbit_radius: 250.0, angular_speed: 0.005,  size: 60.0 },
    RegistryEntry { name: "JLYsearch",     url: Some("https://t.me/JLySearch_bot"),            color: 0x00f3ff, orbit_radius: 350.0, angular_speed: 0.003,  size: 55.0 },
    RegistryEntry { name: "SRT Translate", url: Some("https://t.me/Jly_subtitle_traslate_bot"), color: 0x00ff00, orbit_radius: 450.0, angular_speed: 0.002,  size: 50.0 },
    RegistryEntry { name: "SearchEbook",   url: None,                                          color: 0xffff00, orbit_radius: 530.0, angular_speed: 0.004,  size: 45.0 },
    RegistryEntry { name: "Compresor",     url: None,                                          color: 0xff0000, orbit_radius: 600.0, angular_speed: 0.0025, size: 45.0 },
    RegistryEntry { name: "JLY IA",        url: None,                                          color: 0x00ffff, orbit_radius: 680.0, angular_speed: 0.0015, size: 50.0 },
    RegistryEntry { name: "JLYlecch",      url: None,                                          color: 0xff00ff, orbit_radius: 750.0, angular_speed: 0.001,  size: 55.0 },
];

impl RegistryEntry {
    pub fn to_desc(&self) -> Result<BodyDesc, GalaxyError> {
        BodyDesc::new(
            self.name,
            self.url,
            Color::from_hex(self.color),
            self.orbit_radius,
            self.angular_speed,
            self.size,
        )
    }
}

/// Validated descriptors for every registry row, in order.
pub fn bodies() -> Result<Vec<BodyDesc>, GalaxyError> {
    REGISTRY.iter().map(RegistryEntry::to_desc).collect()
}
