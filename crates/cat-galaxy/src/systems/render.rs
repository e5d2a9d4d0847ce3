use glam::Vec3;

use crate::components::sprite::SpriteComponent;
use crate::core::scene::{SceneGraph, Sun};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::{RenderBuffer, SpriteInstance};

/// Exponential-squared fog amount for a point `depth` units in front of the eye.
pub fn fog_factor(density: f32, depth: f32) -> f32 {
    let d = density * depth.max(0.0);
    (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
}

fn instance(
    position: Vec3,
    sprite: &SpriteComponent,
    body: f32,
    camera: &PerspectiveCamera,
    fog_density: f32,
) -> SpriteInstance {
    let depth = camera.view_depth(position);
    SpriteInstance {
        x: position.x,
        y: position.y,
        z: position.z,
        size: sprite.size,
        rotation: sprite.rotation,
        r: sprite.tint.r,
        g: sprite.tint.g,
        b: sprite.tint.b,
        alpha: sprite.opacity * sprite.tint.a,
        fog: fog_factor(fog_density, depth),
        depth,
        body,
    }
}

/// Build the frame's sprite list: sun and bodies, sorted back to front
/// so a painter's-algorithm renderer draws near sprites last.
pub fn build_render_buffer(
    scene: &SceneGraph,
    camera: &PerspectiveCamera,
    fog_density: f32,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();
    buffer.camera = camera.uniform();

    buffer.push(instance(
        Sun::POSITION,
        &scene.sun.sprite,
        SpriteInstance::SUN,
        camera,
        fog_density,
    ));
    for body in scene.bodies() {
        buffer.push(instance(
            body.position,
            &body.sprite,
            body.id.0 as f32,
            camera,
            fog_density,
        ));
    }

    buffer.sprites.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
