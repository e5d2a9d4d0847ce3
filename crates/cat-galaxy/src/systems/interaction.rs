//! Pointer parallax, viewport resize and click-to-open.

use glam::Vec2;

use crate::api::galaxy::GalaxyContext;
use crate::api::types::{GalaxyEvent, Viewport};
use crate::input::queue::InputEvent;
use crate::systems::raycast;

/// Apply one input event to the context.
pub fn handle_input(ctx: &mut GalaxyContext, event: &InputEvent) {
    match *event {
        InputEvent::PointerMove { x, y } => {
            ctx.pointer = ctx.viewport.pixel_to_ndc(x, y);
            ctx.camera.target = parallax_target(ctx.pointer, ctx.config.camera_home, ctx.config.parallax);
        }
        InputEvent::Resize { width, height } => {
            if width <= 0.0 || height <= 0.0 {
                log::warn!("ignoring resize to {width}x{height}");
                return;
            }
            ctx.viewport = Viewport::new(width, height);
            ctx.camera.resize(width, height);
        }
        InputEvent::Click { x, y } => {
            ctx.pointer = ctx.viewport.pixel_to_ndc(x, y);
            let Some(id) = raycast::pick_body(&ctx.scene, &ctx.camera, ctx.pointer) else {
                return;
            };
            let Some(body) = ctx.scene.get(id) else {
                return;
            };
            log::debug!("click hit {}", body.desc.name);
            if let Some(url) = body.url() {
                let url = url.to_string();
                ctx.emit_event(GalaxyEvent::OpenUrl { body: id, url });
            }
        }
    }
}

/// Camera target for a pointer at `ndc`: the resting eye shifted by the
/// pointer position scaled per axis.
pub fn parallax_target(ndc: Vec2, home: [f32; 3], scale: [f32; 2]) -> Vec2 {
    Vec2::new(home[0] + ndc.x * scale[0], home[1] + ndc.y * scale[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::galaxy::GalaxyConfig;
    use crate::api::types::BodyId;
    use crate::components::body::BodyDesc;
    use crate::components::sprite::Color;
    use crate::input::queue::InputQueue;

    fn context(url: Option<&str>) -> GalaxyContext {
        let config = GalaxyConfig {
            star_count: 0,
            ..GalaxyConfig::default()
        };
        let desc = BodyDesc::new("Udyat", url, Color::from_hex(0xbc13fe), 250.0, 0.005, 60.0)
            .unwrap();
        GalaxyContext::with_bodies(config, vec![desc], 42).unwrap()
    }

    /// Pixel position of body 0 as currently displayed.
    fn body_pixel(ctx: &GalaxyContext) -> Vec2 {
        let ndc = ctx.camera.project(ctx.scene.bodies()[0].position);
        ctx.viewport.ndc_to_pixel(Vec2::new(ndc.x, ndc.y))
    }

    fn click(ctx: &mut GalaxyContext, at: Vec2) {
        let mut input = InputQueue::new();
        input.push(InputEvent::Click { x: at.x, y: at.y });
        ctx.update(&input);
    }

    #[test]
    fn pointer_sets_parallax_target_only() {
        let mut ctx = context(None);
        handle_input(&mut ctx, &InputEvent::PointerMove { x: 1280.0, y: 0.0 });
        assert_eq!(ctx.camera.target, Vec2::new(200.0, 300.0));
        assert_eq!(ctx.camera.position.x, 0.0);

        handle_input(&mut ctx, &InputEvent::PointerMove { x: 640.0, y: 360.0 });
        assert_eq!(ctx.camera.target, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn resize_updates_viewport_and_aspect() {
        let mut ctx = context(None);
        handle_input(&mut ctx, &InputEvent::Resize { width: 600.0, height: 600.0 });
        assert_eq!(ctx.viewport, Viewport::new(600.0, 600.0));
        assert!((ctx.camera.aspect - 1.0).abs() < 1e-6);

        handle_input(&mut ctx, &InputEvent::Resize { width: 0.0, height: 600.0 });
        assert_eq!(ctx.viewport, Viewport::new(600.0, 600.0));
    }

    #[test]
    fn click_on_linked_body_opens_once() {
        let mut ctx = context(Some("https://t.me/udyatt_bot"));
        let at = body_pixel(&ctx);
        click(&mut ctx, at);
        let events = ctx.take_events();
        assert_eq!(
            events,
            vec![GalaxyEvent::OpenUrl {
                body: BodyId(0),
                url: "https://t.me/udyatt_bot".into()
            }]
        );
    }

    #[test]
    fn click_on_empty_space_opens_nothing() {
        let mut ctx = context(Some("https://t.me/udyatt_bot"));
        click(&mut ctx, Vec2::new(0.0, 0.0));
        assert!(ctx.take_events().is_empty());
    }

    #[test]
    fn click_on_unlinked_body_opens_nothing() {
        let mut ctx = context(None);
        let at = body_pixel(&ctx);
        click(&mut ctx, at);
        assert!(ctx.take_events().is_empty());
    }

    #[test]
    fn click_on_sun_opens_nothing() {
        let mut ctx = context(Some("https://t.me/udyatt_bot"));
        // The sun covers the screen center; the lone body orbits outside it.
        let center = ctx.viewport.ndc_to_pixel(Vec2::ZERO);
        click(&mut ctx, center);
        assert!(ctx.take_events().is_empty());
    }

    #[test]
    fn events_apply_in_order_within_a_frame() {
        let mut ctx = context(None);
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        input.push(InputEvent::Resize { width: 2000.0, height: 1000.0 });
        input.push(InputEvent::PointerMove { x: 2000.0, y: 1000.0 });
        ctx.update(&input);
        assert_eq!(ctx.camera.target, Vec2::new(200.0, 100.0));
        assert_eq!(ctx.pointer, Vec2::new(1.0, -1.0));
    }
}
