use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera that always looks at a fixed point and drifts toward
/// a pointer-driven parallax target.
///
/// Uses GL clip conventions (NDC z in [-1, 1]); a projected point with
/// `z >= 1` lies beyond the far plane or behind the eye.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
    pub up: Vec3,
    /// Parallax target for the eye's X and Y. Z is never eased.
    pub target: Vec2,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// Camera data a renderer needs for one frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub eye: [f32; 3],
    /// `1 / tan(fov_y / 2)`: converts view-space size over depth to NDC height.
    pub focal: f32,
}

/// A half-line in world space. `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl PerspectiveCamera {
    pub fn new(position: Vec3, fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            target: Vec2::new(position.x, position.y),
            fov_y,
            aspect,
            near,
            far,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            view: self.view_matrix().to_cols_array_2d(),
            eye: self.position.to_array(),
            focal: 1.0 / (self.fov_y.to_radians() * 0.5).tan(),
        }
    }

    /// Unit vector from the eye toward `look_at`.
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or_zero()
    }

    /// Camera-space right and up axes expressed in world space.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = self.forward();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }

    /// Project a world point to normalized device coordinates.
    pub fn project(&self, point: Vec3) -> Vec3 {
        self.view_projection().project_point3(point)
    }

    /// Distance of `point` in front of the eye along the view axis.
    /// Negative when the point is behind the camera.
    pub fn view_depth(&self, point: Vec3) -> f32 {
        -self.view_matrix().transform_point3(point).z
    }

    /// Ray from the eye through a point given in NDC.
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let on_frustum = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        Ray {
            origin: self.position,
            direction: (on_frustum - self.position).normalize_or_zero(),
        }
    }

    /// Set the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Move X and Y a fixed fraction of the way toward `target`, then
    /// re-aim at `look_at` (the view matrix is derived on demand).
    pub fn ease_toward_target(&mut self, factor: f32) {
        self.position.x += (self.target.x - self.position.x) * factor;
        self.position.y += (self.target.y - self.position.y) * factor;
    }

    /// Distance between the eye's XY and the parallax target.
    pub fn distance_to_target(&self) -> f32 {
        Vec2::new(self.position.x, self.position.y).distance(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(Vec3::new(0.0, 200.0, 800.0), 60.0, 16.0 / 9.0, 1.0, 2000.0)
    }

    #[test]
    fn look_at_point_projects_to_center() {
        let ndc = camera().project(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn point_behind_eye_has_depth_past_one() {
        let cam = camera();
        let behind = cam.position - cam.forward() * 100.0;
        assert!(cam.project(behind).z >= 1.0);
        assert!(cam.view_depth(behind) < 0.0);
    }

    #[test]
    fn view_depth_of_origin_is_eye_distance() {
        let cam = camera();
        let expected = cam.position.length();
        assert!((cam.view_depth(Vec3::ZERO) - expected).abs() < 1e-2);
    }

    #[test]
    fn center_ray_points_at_look_at() {
        let cam = camera();
        let ray = cam.ray_through(Vec2::ZERO);
        assert!((ray.direction - cam.forward()).length() < 1e-4);
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn ray_passes_through_projected_point() {
        let cam = camera();
        let p = Vec3::new(250.0, 0.0, 100.0);
        let ndc = cam.project(p);
        let ray = cam.ray_through(Vec2::new(ndc.x, ndc.y));
        let t = (p - ray.origin).dot(ray.direction);
        assert!((ray.at(t) - p).length() < 0.5);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = camera();
        cam.resize(1000.0, 500.0);
        assert!((cam.aspect - 2.0).abs() < 1e-6);
        cam.resize(0.0, 500.0);
        assert!((cam.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn easing_converges_monotonically() {
        let mut cam = camera();
        cam.target = Vec2::new(-200.0, 300.0);
        let mut last = cam.distance_to_target();
        for _ in 0..120 {
            cam.ease_toward_target(0.05);
            let d = cam.distance_to_target();
            assert!(d < last, "distance grew: {d} >= {last}");
            last = d;
        }
        assert!(last < 0.01 * 223.6 + 1.0);
        assert_eq!(cam.position.z, 800.0);
    }

    #[test]
    fn easing_moves_five_percent() {
        let mut cam = camera();
        cam.target = Vec2::new(100.0, 200.0);
        cam.ease_toward_target(0.05);
        assert!((cam.position.x - 5.0).abs() < 1e-5);
        assert!((cam.position.y - 200.0).abs() < 1e-5);
    }

    #[test]
    fn basis_is_orthonormal() {
        let (right, up) = camera().basis();
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!(right.dot(up).abs() < 1e-5);
        assert!(up.y > 0.0);
    }
}
