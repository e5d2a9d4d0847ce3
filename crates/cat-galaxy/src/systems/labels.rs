use glam::{Vec2, Vec3};

use crate::api::types::Viewport;
use crate::components::label::LabelLayer;
use crate::core::scene::SceneGraph;
use crate::renderer::camera::PerspectiveCamera;

/// Where a label for a world point should go.
/// `None` when the point is behind the camera or past the far plane.
pub fn label_anchor(
    point: Vec3,
    camera: &PerspectiveCamera,
    viewport: Viewport,
    offset_px: f32,
) -> Option<Vec2> {
    let ndc = camera.project(point);
    if ndc.z >= 1.0 || ndc.z.is_nan() {
        return None;
    }
    let px = viewport.ndc_to_pixel(Vec2::new(ndc.x, ndc.y));
    Some(Vec2::new(px.x, px.y + offset_px))
}

/// Reposition every label under its body. Hidden labels keep their last anchor.
pub fn place_labels(
    labels: &mut LabelLayer,
    scene: &SceneGraph,
    camera: &PerspectiveCamera,
    viewport: Viewport,
    offset_px: f32,
) {
    let bodies = scene.bodies();
    for label in labels.iter_mut() {
        let Some(body) = bodies.get(label.body) else {
            label.visible = false;
            continue;
        };
        match label_anchor(body.position, camera, viewport, offset_px) {
            Some(anchor) => {
                label.screen = anchor;
                label.visible = true;
            }
            None => label.visible = false,
        }
    }
}
