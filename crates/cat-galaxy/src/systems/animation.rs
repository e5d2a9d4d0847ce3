//! Orbit system: moves every body one frame along its circle.

use crate::core::scene::SceneGraph;

/// Advance every body by its angular speed and refresh its position.
///
/// Call this once per frame before placing labels or rendering.
pub fn advance_orbits(scene: &mut SceneGraph) {
    for body in scene.iter_mut() {
        body.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::galaxy::GalaxyConfig;
    use crate::components::body::BodyDesc;
    use crate::components::sprite::Color;
    use crate::core::rng::Rng;

    #[test]
    fn bodies_move_at_their_own_speed() {
        let config = GalaxyConfig {
            star_count: 0,
            ..GalaxyConfig::default()
        };
        let descs = vec![
            BodyDesc::new("slow", None, Color::WHITE, 300.0, 0.001, 10.0).unwrap(),
            BodyDesc::new("fast", None, Color::WHITE, 600.0, 0.01, 10.0).unwrap(),
        ];
        let mut scene = SceneGraph::build(&config, descs, &mut Rng::new(8));
        let before: Vec<f32> = scene.bodies().iter().map(|b| b.angle).collect();

        for _ in 0..10 {
            advance_orbits(&mut scene);
        }

        let after: Vec<f32> = scene.bodies().iter().map(|b| b.angle).collect();
        assert!((after[0] - before[0] - 0.01).abs() < 1e-5);
        assert!((after[1] - before[1] - 0.1).abs() < 1e-5);
        assert!((scene.bodies()[1].position.length() - 600.0).abs() < 1e-2);
    }
}
