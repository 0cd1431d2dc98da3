use glam::{Mat4, Vec3};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::types::CameraUniform;

pub const ROTATE_SPEED: f32 = 0.005;
pub const ZOOM_SPEED: f32 = 0.4;
pub const DAMPING: f32 = 0.85;
pub const MIN_DISTANCE: f32 = 2.0;
pub const MAX_DISTANCE: f32 = 15.0;

const FOV_Y: f32 = 75.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 1000.0;
// Keep the orbit short of the poles so look_at never degenerates.
const MAX_PITCH: f32 = 1.54;

/// Damped orbit camera circling a fixed target.
///
/// Pointer drags feed yaw/pitch velocity, the scroll wheel feeds zoom
/// velocity; `update` integrates and decays them each frame, so motion
/// eases out instead of stopping dead.
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    zoom_velocity: f32,
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
    aspect: f32,
}

impl OrbitCamera {
    /// Camera at the stock viewing spot (0, 5, 7) looking at the origin.
    pub fn new(aspect: f32) -> Self {
        let start = Vec3::new(0.0, 5.0, 7.0);
        let distance = start.length();
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: (start.y / distance).asin(),
            distance,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
            dragging: false,
            last_cursor: None,
            aspect,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let dir = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        self.target + dir * self.distance
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(FOV_Y.to_radians(), self.aspect, Z_NEAR, Z_FAR);
        proj * view
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            position: self.eye().to_array(),
            _pad: 0.0,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state.is_pressed();
            if !self.dragging {
                self.last_cursor = None;
            }
        }
    }

    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        if self.dragging {
            if let Some((last_x, last_y)) = self.last_cursor {
                let dx = (position.x - last_x) as f32;
                let dy = (position.y - last_y) as f32;
                self.yaw_velocity -= dx * ROTATE_SPEED;
                self.pitch_velocity += dy * ROTATE_SPEED;
            }
        }
        self.last_cursor = Some((position.x, position.y));
    }

    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.02,
        };
        self.zoom_velocity -= amount * ZOOM_SPEED;
    }

    /// Integrate velocities and decay them. Called once per frame.
    pub fn update(&mut self) {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity).clamp(-MAX_PITCH, MAX_PITCH);
        self.distance = (self.distance + self.zoom_velocity).clamp(MIN_DISTANCE, MAX_DISTANCE);

        self.yaw_velocity *= DAMPING;
        self.pitch_velocity *= DAMPING;
        self.zoom_velocity *= DAMPING;
    }
}
