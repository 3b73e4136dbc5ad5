use glam::{Mat4, Vec3};

/// Fixed camera looking at the world origin.
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.5),
            target: Vec3::ZERO,
            fov: 45.0,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect, 0.1, 100.0)
    }
}
