use glam::{Mat4, Vec3, Vec4};

/// Default yaw in degrees — looking down −Z.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees — level with the horizon.
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse-look sensitivity (degrees per pixel of cursor travel).
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default field of view ("zoom") in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch is clamped inside ±89° so `front` never becomes parallel to the
/// world-up vector (gimbal flip).
const PITCH_LIMIT: f32 = 89.0;
/// Field-of-view clamp range in degrees.
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// Discrete movement direction for keyboard-driven translation.
///
/// Directions are independent: callers issue one `process_keyboard` call
/// per held key each frame, so diagonals are just two additive calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
}

/// Free-fly camera defined by a world position and Euler yaw/pitch angles.
///
/// The orthonormal basis (`front`, `right`, `up`) is derived from
/// yaw/pitch/world-up and recomputed whenever either angle changes; it is
/// never set directly.
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    /// Yaw in degrees. Unconstrained — trig handles any magnitude.
    yaw: f32,
    /// Pitch in degrees, kept inside ±89°.
    pitch: f32,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Mouse-look sensitivity multiplier.
    pub mouse_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    /// Create a camera at `position` with the given world-up direction and
    /// initial yaw/pitch (degrees). The derived basis is computed
    /// immediately.
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: world_up,
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// Current view direction (unit length).
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Current right vector (unit length).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Current up vector (unit length).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field of view in degrees, in [1, 45].
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Build the world-to-camera transform from `position`,
    /// `position + front`, and `up`.
    ///
    /// Precondition: the up vector must not be parallel to the view
    /// direction (the pitch clamp guarantees this for any camera whose
    /// angles were only changed through [`Self::process_mouse_movement`]).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Translate along the basis: `Forward`/`Backward` follow `front`,
    /// `Left`/`Right` follow `right`, scaled by speed and the frame delta.
    pub fn process_keyboard(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a cursor delta: offsets are scaled by sensitivity and added
    /// to yaw/pitch, then the basis is recomputed. Positive `yoffset`
    /// pitches up (callers flip the window-space y delta). Yaw is never
    /// wrapped; pitch is clamped to ±89° unless `constrain_pitch` is off.
    pub fn process_mouse_movement(
        &mut self,
        xoffset: f32,
        yoffset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Apply a scroll-wheel delta to the field of view: scrolling up
    /// (positive `yoffset`) zooms in. Clamped to [1°, 45°]; repeated calls
    /// at either boundary are no-ops.
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.zoom = (self.zoom - yoffset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Recompute `front`/`right`/`up` from yaw/pitch/world-up.
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    /// Camera at the origin, Y-up, facing −Z.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

/// Right-handed look-at assembled from first principles.
///
/// back = normalize(eye − target), right = normalize(up × back),
/// true-up = back × right; the result rotates world space into the
/// camera basis and translates the eye to the origin. Undefined when
/// `up` is parallel to the eye→target direction.
fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let back = (eye - target).normalize();
    let right = up.cross(back).normalize();
    let true_up = back.cross(right);

    Mat4::from_cols(
        Vec4::new(right.x, true_up.x, back.x, 0.0),
        Vec4::new(right.y, true_up.y, back.y, 0.0),
        Vec4::new(right.z, true_up.z, back.z, 0.0),
        Vec4::new(
            -right.dot(eye),
            -true_up.dot(eye),
            -back.dot(eye),
            1.0,
        ),
    )
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera
/// metadata needed by the lighting shaders.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position (shader `viewPos`).
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction (spot-light axis).
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: DEFAULT_ZOOM,
        }
    }

    /// Update all fields from the camera's current state and the given
    /// projection parameters.
    pub fn update_view_proj(
        &mut self,
        camera: &Camera,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) {
        let proj = Mat4::perspective_rh(
            camera.zoom().to_radians(),
            aspect,
            znear,
            zfar,
        );
        self.view_proj = (proj * camera.view_matrix()).to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = aspect;
        self.forward = camera.front().to_array();
        self.fovy = camera.zoom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_unit(v: Vec3) {
        assert!(
            (v.length() - 1.0).abs() < EPS,
            "expected unit length, got {}",
            v.length()
        );
    }

    fn assert_orthogonal(a: Vec3, b: Vec3) {
        assert!(
            a.dot(b).abs() < EPS,
            "expected orthogonal vectors, dot = {}",
            a.dot(b)
        );
    }

    #[test]
    fn basis_is_orthonormal_across_angle_sweep() {
        for yaw_step in -8..=8 {
            for pitch_step in -8..=8 {
                let yaw = yaw_step as f32 * 90.0;
                let pitch = pitch_step as f32 * 11.0;
                let cam =
                    Camera::new(Vec3::ZERO, Vec3::Y, yaw, pitch.clamp(-89.0, 89.0));
                assert_unit(cam.front());
                assert_unit(cam.right());
                assert_unit(cam.up());
                assert_orthogonal(cam.front(), cam.right());
                assert_orthogonal(cam.front(), cam.up());
                assert_orthogonal(cam.right(), cam.up());
            }
        }
    }

    #[test]
    fn default_orientation_faces_negative_z() {
        let cam = Camera::default();
        assert!((cam.front() - Vec3::NEG_Z).length() < EPS);
        assert!((cam.right() - Vec3::X).length() < EPS);
        assert!((cam.up() - Vec3::Y).length() < EPS);
    }

    #[test]
    fn view_matrix_maps_origin_into_camera_space() {
        let cam = Camera::new(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::Y,
            DEFAULT_YAW,
            DEFAULT_PITCH,
        );
        let viewed = cam.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((viewed.x - 0.0).abs() < EPS);
        assert!((viewed.y - 0.0).abs() < EPS);
        assert!((viewed.z - (-3.0)).abs() < EPS);
    }

    #[test]
    fn keyboard_forward_backward_round_trips() {
        let mut cam = Camera::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::Y,
            37.0,
            -12.0,
        );
        let start = cam.position;
        cam.process_keyboard(MoveDirection::Forward, 0.25);
        cam.process_keyboard(MoveDirection::Backward, 0.25);
        assert!((cam.position - start).length() < EPS);
    }

    #[test]
    fn diagonal_movement_is_additive() {
        let mut cam = Camera::default();
        cam.process_keyboard(MoveDirection::Forward, 0.5);
        cam.process_keyboard(MoveDirection::Right, 0.5);

        let reference = Camera::default();
        let velocity = reference.movement_speed * 0.5;
        let expected = reference.position
            + reference.front() * velocity
            + reference.right() * velocity;
        assert!((cam.position - expected).length() < EPS);
    }

    #[test]
    fn constrained_pitch_never_leaves_range() {
        let mut cam = Camera::default();
        for _ in 0..1000 {
            cam.process_mouse_movement(13.0, 57.0, true);
            assert!(cam.pitch() <= 89.0);
        }
        for _ in 0..1000 {
            cam.process_mouse_movement(-4.0, -91.0, true);
            assert!(cam.pitch() >= -89.0);
        }
    }

    #[test]
    fn yaw_is_never_wrapped() {
        let mut cam = Camera::default();
        for _ in 0..100 {
            cam.process_mouse_movement(3600.0, 0.0, true);
        }
        // 100 * 3600 px * 0.1 sensitivity on top of the -90 default.
        assert!((cam.yaw() - (100.0 * 360.0 + DEFAULT_YAW)).abs() < 1e-2);
        assert_unit(cam.front());
    }

    #[test]
    fn zoom_clamps_are_idempotent_at_boundaries() {
        let mut cam = Camera::default();
        for _ in 0..100 {
            cam.process_mouse_scroll(5.0);
            assert!(cam.zoom() >= 1.0);
        }
        assert!((cam.zoom() - 1.0).abs() < EPS);
        cam.process_mouse_scroll(5.0);
        assert!((cam.zoom() - 1.0).abs() < EPS);

        for _ in 0..100 {
            cam.process_mouse_scroll(-5.0);
            assert!(cam.zoom() <= 45.0);
        }
        assert!((cam.zoom() - 45.0).abs() < EPS);
        cam.process_mouse_scroll(-5.0);
        assert!((cam.zoom() - 45.0).abs() < EPS);
    }

    #[test]
    fn mouse_look_keeps_basis_consistent_with_angles() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(450.0, 200.0, true);

        let yaw = cam.yaw().to_radians();
        let pitch = cam.pitch().to_radians();
        let expected = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        assert!((cam.front() - expected).length() < EPS);
    }
}
