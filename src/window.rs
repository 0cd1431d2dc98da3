use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::camera::OrbitCamera;
use crate::renderer::Renderer;

/// Wrapper around winit Window with imperative draw API
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Draw a frame using the provided renderer and camera
    pub fn draw(
        &self,
        renderer: &mut Renderer,
        camera: &OrbitCamera,
        fps: f32,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        renderer.render(camera, &self.inner, fps)
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn inner_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.inner.inner_size()
    }
}
