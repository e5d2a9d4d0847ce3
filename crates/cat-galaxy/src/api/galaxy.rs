use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::api::error::GalaxyError;
use crate::api::types::{GalaxyEvent, Viewport};
use crate::components::body::BodyDesc;
use crate::components::label::LabelLayer;
use crate::components::sprite::Color;
use crate::core::registry;
use crate::core::rng::Rng;
use crate::core::scene::SceneGraph;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::RenderBuffer;
use crate::systems::{animation, interaction, labels, render};

/// Tunables for the scene. Every field has a default, so a JSON override
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Resting eye position; parallax offsets are applied around its X/Y.
    pub camera_home: [f32; 3],
    /// Target offset at the viewport edge, per axis.
    pub parallax: [f32; 2],
    /// Fraction of the remaining distance the camera covers per frame.
    pub camera_easing: f32,
    pub sun_size: f32,
    /// Packed `0xRRGGBB`.
    pub sun_tint: u32,
    pub sun_spin: f32,
    pub star_count: usize,
    pub star_half_extent: f32,
    pub star_size: f32,
    pub star_opacity: f32,
    /// Vertical gap between a body and its label, in CSS pixels.
    pub label_offset: f32,
    /// Density of the exponential-squared fog. Zero disables fog.
    pub fog_density: f32,
    /// Viewport before the host reports its real size.
    pub viewport: [f32; 2],
    /// Packed `0xRRGGBB` backdrop. `None` leaves the canvas transparent.
    pub background: Option<u32>,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            fov_y: 60.0,
            near: 1.0,
            far: 2000.0,
            camera_home: [0.0, 200.0, 800.0],
            parallax: [200.0, 100.0],
            camera_easing: 0.05,
            sun_size: 200.0,
            sun_tint: 0xffaa00,
            sun_spin: 0.001,
            star_count: 5000,
            star_half_extent: 1000.0,
            star_size: 2.0,
            star_opacity: 0.6,
            label_offset: 40.0,
            fog_density: 0.0005,
            viewport: [1280.0, 720.0],
            background: None,
        }
    }
}

impl GalaxyConfig {
    /// Parse a (possibly partial) config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, GalaxyError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|source| GalaxyError::Json { what: "config", source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GalaxyError> {
        if !(self.fov_y > 0.0 && self.fov_y < 180.0) {
            return Err(GalaxyError::InvalidConfig("fov_y must be in (0, 180)"));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(GalaxyError::InvalidConfig("need 0 < near < far"));
        }
        if !(self.camera_easing > 0.0 && self.camera_easing <= 1.0) {
            return Err(GalaxyError::InvalidConfig("camera_easing must be in (0, 1]"));
        }
        if !(self.viewport[0] > 0.0 && self.viewport[1] > 0.0) {
            return Err(GalaxyError::InvalidConfig("viewport must be non-empty"));
        }
        if self.fog_density < 0.0 || self.star_half_extent < 0.0 {
            return Err(GalaxyError::InvalidConfig("fog and star extent must be non-negative"));
        }
        Ok(())
    }

    /// Use a measured host size as the initial viewport. An empty
    /// measurement keeps the configured one until the first resize.
    pub fn with_measured_viewport(mut self, width: f32, height: f32) -> Self {
        if width > 0.0 && height > 0.0 {
            self.viewport = [width, height];
        } else {
            log::warn!(
                "host reported a {width}x{height} viewport, starting at {}x{}",
                self.viewport[0],
                self.viewport[1]
            );
        }
        self
    }

    pub fn background(&self) -> Option<Color> {
        self.background.map(Color::from_hex)
    }

    pub fn camera_home(&self) -> Vec3 {
        Vec3::from_array(self.camera_home)
    }
}

/// All mutable scene state, owned in one place and handed to each step.
pub struct GalaxyContext {
    pub config: GalaxyConfig,
    pub scene: SceneGraph,
    pub camera: PerspectiveCamera,
    pub labels: LabelLayer,
    pub viewport: Viewport,
    /// Last pointer position in NDC. Starts at the screen center.
    pub pointer: Vec2,
    pub events: Vec<GalaxyEvent>,
    frame: u64,
}

impl GalaxyContext {
    /// Build the scene from the static registry.
    pub fn new(config: GalaxyConfig, seed: u64) -> Result<Self, GalaxyError> {
        let descs = registry::bodies()?;
        Self::with_bodies(config, descs, seed)
    }

    /// Build the scene from an explicit body list.
    pub fn with_bodies(
        config: GalaxyConfig,
        descs: Vec<BodyDesc>,
        seed: u64,
    ) -> Result<Self, GalaxyError> {
        config.validate()?;
        let mut rng = Rng::new(seed);
        let scene = SceneGraph::build(&config, descs, &mut rng);
        let labels = LabelLayer::for_bodies(scene.bodies());
        let viewport = Viewport::new(config.viewport[0], config.viewport[1]);
        let camera = PerspectiveCamera::new(
            config.camera_home(),
            config.fov_y,
            viewport.aspect(),
            config.near,
            config.far,
        );
        log::info!(
            "galaxy: {} bodies, {} stars, viewport {}x{}",
            scene.len(),
            scene.stars.len(),
            viewport.width,
            viewport.height
        );

        Ok(Self {
            config,
            scene,
            camera,
            labels,
            viewport,
            pointer: Vec2::ZERO,
            events: Vec::new(),
            frame: 0,
        })
    }

    /// One frame: apply queued input in arrival order, then advance the
    /// orbits, spin the sun, place labels and ease the camera.
    pub fn update(&mut self, input: &InputQueue) {
        for event in input.iter() {
            interaction::handle_input(self, event);
        }

        animation::advance_orbits(&mut self.scene);
        self.scene.sun.tick();
        labels::place_labels(
            &mut self.labels,
            &self.scene,
            &self.camera,
            self.viewport,
            self.config.label_offset,
        );
        self.camera.ease_toward_target(self.config.camera_easing);

        self.frame += 1;
    }

    /// Fill `buffer` with what the renderer should draw for the current state.
    pub fn build_render_buffer(&self, buffer: &mut RenderBuffer) {
        render::build_render_buffer(&self.scene, &self.camera, self.config.fog_density, buffer);
    }

    pub fn emit_event(&mut self, event: GalaxyEvent) {
        self.events.push(event);
    }

    /// Hand the events of the last frame to the host.
    pub fn take_events(&mut self) -> Vec<GalaxyEvent> {
        std::mem::take(&mut self.events)
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::input::queue::InputEvent;

    fn quiet_config() -> GalaxyConfig {
        GalaxyConfig {
            star_count: 16,
            ..GalaxyConfig::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(GalaxyConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_overrides_only_named_keys() {
        let config = GalaxyConfig::from_json(r#"{ "star_count": 10, "fov_y": 45 }"#).unwrap();
        assert_eq!(config.star_count, 10);
        assert_eq!(config.fov_y, 45.0);
        assert_eq!(config.camera_easing, 0.05);
    }

    #[test]
    fn bad_json_and_bad_values_are_rejected() {
        assert!(matches!(
            GalaxyConfig::from_json("{ nope"),
            Err(GalaxyError::Json { what: "config", .. })
        ));
        assert!(matches!(
            GalaxyConfig::from_json(r#"{ "near": 10, "far": 5 }"#),
            Err(GalaxyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_measured_viewport_keeps_default() {
        let config = GalaxyConfig::default().with_measured_viewport(0.0, 0.0);
        assert_eq!(config.viewport, [1280.0, 720.0]);
        let ctx = GalaxyContext::new(GalaxyConfig { star_count: 0, ..config }, 1);
        assert!(ctx.is_ok());

        let measured = GalaxyConfig::default().with_measured_viewport(1920.0, 1080.0);
        assert_eq!(measured.viewport, [1920.0, 1080.0]);
        let partial = GalaxyConfig::default().with_measured_viewport(1920.0, 0.0);
        assert_eq!(partial.viewport, [1280.0, 720.0]);
    }

    #[test]
    fn canvas_is_transparent_unless_configured() {
        assert_eq!(GalaxyConfig::default().background(), None);
        let config = GalaxyConfig::from_json(r#"{ "background": 1056816 }"#).unwrap();
        assert_eq!(config.background().map(|c| c.to_hex()), Some(0x102030));
    }

    #[test]
    fn new_builds_registry_scene() {
        let ctx = GalaxyContext::new(quiet_config(), 7).unwrap();
        assert_eq!(ctx.scene.len(), registry::BODY_COUNT);
        assert_eq!(ctx.labels.len(), ctx.scene.len());
        assert_eq!(ctx.camera.position, Vec3::new(0.0, 200.0, 800.0));
        assert_eq!(ctx.frame(), 0);
    }

    #[test]
    fn n_ticks_advance_each_angle_by_n_speeds() {
        let mut ctx = GalaxyContext::new(quiet_config(), 11).unwrap();
        let initial: Vec<f32> = ctx.scene.bodies().iter().map(|b| b.angle).collect();
        let input = InputQueue::new();
        for _ in 0..300 {
            ctx.update(&input);
        }
        for (body, a0) in ctx.scene.bodies().iter().zip(initial) {
            let expected = a0 + 300.0 * body.desc.angular_speed;
            assert!((body.angle - expected).abs() < 1e-3, "{}", body.desc.name);
            assert!((body.position.length() - body.desc.orbit_radius).abs() < 1e-2);
        }
        assert_eq!(ctx.frame(), 300);
    }

    #[test]
    fn camera_closes_in_on_parallax_target() {
        let mut ctx = GalaxyContext::new(quiet_config(), 3).unwrap();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        ctx.update(&input);
        input.drain();

        let mut last = ctx.camera.distance_to_target();
        for _ in 0..90 {
            ctx.update(&input);
            let d = ctx.camera.distance_to_target();
            assert!(d < last || d < 1e-3);
            last = d;
        }
        assert_eq!(ctx.camera.position.z, 800.0);
    }

    #[test]
    fn labels_are_visible_after_first_tick() {
        let mut ctx = GalaxyContext::new(quiet_config(), 5).unwrap();
        ctx.update(&InputQueue::new());
        assert!(ctx.labels.iter().all(|l| l.visible));
    }

    #[test]
    fn take_events_drains() {
        let desc = BodyDesc::new("x", Some("https://example.com"), Color::WHITE, 10.0, 0.0, 5.0)
            .unwrap();
        let mut ctx = GalaxyContext::with_bodies(quiet_config(), vec![desc], 1).unwrap();
        ctx.emit_event(GalaxyEvent::OpenUrl {
            body: BodyId(0),
            url: "https://example.com".into(),
        });
        assert_eq!(ctx.take_events().len(), 1);
        assert!(ctx.take_events().is_empty());
    }

    #[test]
    fn render_buffer_has_sun_and_bodies() {
        let ctx = GalaxyContext::new(quiet_config(), 2).unwrap();
        let mut buffer = RenderBuffer::new();
        ctx.build_render_buffer(&mut buffer);
        assert_eq!(buffer.sprite_count() as usize, registry::BODY_COUNT + 1);
    }
}
