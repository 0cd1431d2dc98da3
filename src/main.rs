use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use flatbread_viewer::camera::OrbitCamera;
use flatbread_viewer::cli::Cli;
use flatbread_viewer::frame::{FpsCounter, FrameClock};
use flatbread_viewer::renderer::Renderer;
use flatbread_viewer::scene;
use flatbread_viewer::window::Window;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    cli: Cli,
    window: Option<Window>,
    renderer: Option<Renderer>,
    camera: OrbitCamera,
    clock: FrameClock,
    fps_counter: FpsCounter,
    fps: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        let aspect = cli.width.max(1) as f32 / cli.height.max(1) as f32;
        Self {
            cli,
            window: None,
            renderer: None,
            camera: OrbitCamera::new(aspect),
            clock: FrameClock::new(),
            fps_counter: FpsCounter::new(FPS_UPDATE_INTERVAL),
            fps: 0.0,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            WinitWindow::default_attributes()
                .with_title("Flatbread Viewer")
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        // The scene is generated once, before the first frame, and never
        // mutated afterwards.
        let mut rng = Pcg32::seed_from_u64(self.cli.seed);
        let scene = scene::build(&self.cli.disc_params(), self.cli.segments, &mut rng);

        let renderer = match pollster::block_on(Renderer::new(
            window.clone(),
            &scene,
            self.cli.assets.as_deref(),
            !self.cli.no_ui,
        )) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.camera.set_aspect(size.width, size.height);
        self.window = Some(Window::new(window));
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window.inner(), &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.camera.set_aspect(size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.camera.process_mouse_button(button, state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.camera.process_cursor_moved(position);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.camera.process_scroll(delta);
            }
            WindowEvent::RedrawRequested => {
                let frame = self.clock.tick();
                if let Some(fps) = self.fps_counter.tick(frame.delta) {
                    self.fps = fps;
                    log::debug!("FPS: {fps:.1}");
                }

                self.camera.update();

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match window.draw(renderer, &self.camera, self.fps) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.resize(window.inner_size());
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("out of GPU memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("render error: {e}"),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("Flatbread Viewer - drag to orbit, scroll to zoom, Escape to quit");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
