use glam::{Mat4, Vec3};

/// Vertical field of view, in radians.
const FOVY: f32 = std::f32::consts::FRAC_PI_4;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

/// A perspective look-at camera.
///
/// The view matrix captured at construction is kept as the
/// [initial view](Camera::initial_view_matrix); [`Camera::update`] only
/// refreshes the live one.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    aspect_ratio: f32,
    view_matrix: Mat4,
    initial_view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Constructs a new [`Camera`] at `position` looking at `target`.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let view_matrix = Mat4::look_at_rh(position, target, Vec3::Y);
        let mut camera = Self {
            position,
            target,
            up: Vec3::Y,
            aspect_ratio: 1.0,
            view_matrix,
            initial_view_matrix: view_matrix,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Moves the camera. Takes effect on the next [`Camera::update`].
    pub fn look_at(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    /// Sets the width / height ratio used by the projection.
    ///
    /// Call [`Camera::update_projection_matrix`] afterwards.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Recomputes the projection matrix.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh_gl(FOVY, self.aspect_ratio, NEAR, FAR);
    }

    /// Recomputes the live view matrix.
    pub fn update(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.position, self.target, self.up);
    }

    /// Live view matrix.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// View matrix at construction time.
    pub fn initial_view_matrix(&self) -> &Mat4 {
        &self.initial_view_matrix
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }
}
