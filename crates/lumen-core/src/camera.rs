use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Quat,
    pub fov_y: f32,
    pub aspect_ratio: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Camera {
    pub fn new_perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov_y,
            aspect_ratio,
            near_plane: near,
            far_plane: far,
        }
    }

    /// Configure the projection from viewport size and a horizontal FOV in
    /// degrees, the way simulator sensors specify it.
    pub fn set_projection(&mut self, width: u32, height: u32, znear: f32, zfar: f32, hfov: f32) {
        let aspect_ratio = width as f32 / height as f32;
        let hfov_rad = hfov.to_radians();
        self.fov_y = 2.0 * ((hfov_rad * 0.5).tan() / aspect_ratio).atan();
        self.aspect_ratio = aspect_ratio;
        self.near_plane = znear;
        self.far_plane = zfar;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near_plane, self.far_plane)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = (target - self.position).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);
        let mat3 = glam::Mat3::from_cols(right, up, -forward);
        self.rotation = Quat::from_mat3(&mat3);
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new_perspective(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 1000.0)
    }
}
