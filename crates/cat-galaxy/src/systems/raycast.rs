//! Ray picking against camera-facing sprites.

use glam::{Vec2, Vec3};

use crate::api::types::BodyId;
use crate::components::sprite::SpriteComponent;
use crate::core::scene::SceneGraph;
use crate::renderer::camera::{PerspectiveCamera, Ray};

/// Intersect `ray` with a sprite quad centered at `center`.
///
/// The quad faces the camera (spanned by the camera's right/up axes) and
/// is rotated by the sprite's rotation. Returns the distance along the ray.
pub fn intersect_sprite(
    ray: &Ray,
    center: Vec3,
    sprite: &SpriteComponent,
    camera: &PerspectiveCamera,
) -> Option<f32> {
    let normal = camera.forward();
    let denom = ray.direction.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }

    let (right, up) = camera.basis();
    let local = ray.at(t) - center;
    let uv = Vec2::new(local.dot(right), local.dot(up));
    let uv = Vec2::from_angle(-sprite.rotation).rotate(uv);

    let half = sprite.size * 0.5;
    if uv.x.abs() <= half && uv.y.abs() <= half {
        Some(t)
    } else {
        None
    }
}

/// Nearest body under the pointer, if any. The sun and stars are not pickable.
pub fn pick_body(scene: &SceneGraph, camera: &PerspectiveCamera, ndc: Vec2) -> Option<BodyId> {
    let ray = camera.ray_through(ndc);
    scene
        .bodies()
        .iter()
        .filter_map(|body| {
            intersect_sprite(&ray, body.position, &body.sprite, camera).map(|t| (body.id, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::Color;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(Vec3::new(0.0, 200.0, 800.0), 60.0, 16.0 / 9.0, 1.0, 2000.0)
    }

    fn ndc_of(cam: &PerspectiveCamera, p: Vec3) -> Vec2 {
        let n = cam.project(p);
        Vec2::new(n.x, n.y)
    }

    #[test]
    fn ray_through_center_hits() {
        let cam = camera();
        let center = Vec3::new(300.0, 0.0, 0.0);
        let sprite = SpriteComponent::new(50.0, Color::WHITE);
        let ray = cam.ray_through(ndc_of(&cam, center));
        let t = intersect_sprite(&ray, center, &sprite, &cam).unwrap();
        assert!((ray.at(t) - center).length() < 0.5);
    }

    #[test]
    fn ray_beside_sprite_misses() {
        let cam = camera();
        let center = Vec3::new(300.0, 0.0, 0.0);
        let sprite = SpriteComponent::new(50.0, Color::WHITE);
        let (right, _) = cam.basis();
        let aside = center + right * 40.0;
        let ray = cam.ray_through(ndc_of(&cam, aside));
        assert!(intersect_sprite(&ray, center, &sprite, &cam).is_none());
    }

    #[test]
    fn edge_of_quad_is_inside() {
        let cam = camera();
        let center = Vec3::new(0.0, 0.0, 200.0);
        let sprite = SpriteComponent::new(50.0, Color::WHITE);
        let (right, _) = cam.basis();
        let near_edge = center + right * 24.0;
        let ray = cam.ray_through(ndc_of(&cam, near_edge));
        assert!(intersect_sprite(&ray, center, &sprite, &cam).is_some());
    }

    #[test]
    fn sprite_behind_camera_is_ignored() {
        let cam = camera();
        let behind = cam.position - cam.forward() * 50.0;
        let sprite = SpriteComponent::new(500.0, Color::WHITE);
        let ray = cam.ray_through(Vec2::ZERO);
        assert!(intersect_sprite(&ray, behind, &sprite, &cam).is_none());
    }

    #[test]
    fn rotated_sprite_covers_its_diagonal() {
        let cam = camera();
        let center = Vec3::ZERO;
        let mut sprite = SpriteComponent::new(100.0, Color::WHITE);
        let (right, _) = cam.basis();
        // 60 units along the right axis is outside an upright 100-unit quad,
        // inside the same quad rotated by 45°.
        let aside = center + right * 60.0;
        let ray = cam.ray_through(ndc_of(&cam, aside));
        assert!(intersect_sprite(&ray, center, &sprite, &cam).is_none());
        sprite.rotation = std::f32::consts::FRAC_PI_4;
        assert!(intersect_sprite(&ray, center, &sprite, &cam).is_some());
    }
}
