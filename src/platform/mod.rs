//! Native platform layer
//!
//! Owns the winit window and event loop:
//! - Window creation and frame pacing
//! - Translating window events into [`InputState`]
//! - Presenting each recorded frame through [`RenderState`]

use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::display::DrawList;
use crate::frame::{Stopwatch, run_frame};
use crate::input::{Button, InputState, Key};
use crate::renderer::RenderState;
use crate::scene::{Scene, WindowSpec};

/// Fatal start-up and event loop failures
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Window plus the GPU state drawing into it
struct Gpu {
    window: Arc<Window>,
    render: RenderState,
}

struct App {
    scene: Box<dyn Scene>,
    spec: WindowSpec,
    input: InputState,
    clock: Stopwatch,
    frame: DrawList,
    gpu: Option<Gpu>,
    error: Option<PlatformError>,
    frame_period: Duration,
    next_frame: Instant,
}

impl App {
    fn new(scene: Box<dyn Scene>) -> Self {
        let spec = scene.window();
        Self {
            frame_period: Duration::from_secs_f64(1.0 / spec.target_fps.max(1) as f64),
            scene,
            spec,
            input: InputState::new(),
            clock: Stopwatch::new(),
            frame: DrawList::new(),
            gpu: None,
            error: None,
            next_frame: Instant::now(),
        }
    }

    fn scene_size(&self) -> Vec2 {
        Vec2::new(self.spec.width as f32, self.spec.height as f32)
    }

    fn init_gpu(&self, event_loop: &ActiveEventLoop) -> Result<Gpu, PlatformError> {
        let attributes = Window::default_attributes()
            .with_title(self.spec.title.clone())
            .with_inner_size(LogicalSize::new(self.spec.width, self.spec.height));
        let window = Arc::new(event_loop.create_window(attributes)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            self.scene_size(),
        ))?;

        Ok(Gpu { window, render })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.clock.lap();
        run_frame(self.scene.as_mut(), &self.input, &self.clock, &mut self.frame);
        self.frame.end_frame();
        self.input.end_tick();

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        match gpu.render.render(&self.frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = gpu.render.size;
                gpu.render.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_none() {
            match self.init_gpu(event_loop) {
                Ok(gpu) => {
                    log::info!(
                        "Window ready: {}x{} @ {} fps",
                        self.spec.width,
                        self.spec.height,
                        self.spec.target_fps
                    );
                    self.gpu = Some(gpu);
                }
                Err(e) => {
                    log::error!("{}", e);
                    self.error = Some(e);
                    event_loop.exit();
                    return;
                }
            }
        }

        // Time spent suspended must not show up as one huge frame
        self.clock.reset_lap();
        self.next_frame = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        if gpu.window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => gpu.render.resize(size.width, size.height),
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::CursorMoved { position, .. } => {
                let window_size = gpu.window.inner_size();
                let scene_size = Vec2::new(self.spec.width as f32, self.spec.height as f32);
                self.input
                    .move_pointer(window_to_scene(position, window_size, scene_size));
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = map_button(button) {
                    match state {
                        ElementState::Pressed => self.input.press_button(button),
                        ElementState::Released => self.input.release_button(button),
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let Some(key) = map_key(code) else {
                    return;
                };
                match event.state {
                    ElementState::Pressed if key == Key::Escape => event_loop.exit(),
                    ElementState::Pressed => self.input.press_key(key),
                    ElementState::Released => self.input.release_key(key),
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = self.gpu.as_ref() else {
            return;
        };

        let now = Instant::now();
        if now >= self.next_frame {
            gpu.window.request_redraw();
            self.next_frame = (self.next_frame + self.frame_period).max(now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

/// Open a window for `scene` and run it until the window closes
pub fn run(scene: Box<dyn Scene>) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(scene);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => {
            log::info!("Window closed after {} frames", app.frame.frames());
            Ok(())
        }
    }
}

fn map_button(button: MouseButton) -> Option<Button> {
    match button {
        MouseButton::Left => Some(Button::Left),
        MouseButton::Right => Some(Button::Right),
        MouseButton::Middle => Some(Button::Middle),
        _ => None,
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Convert a physical cursor position to scene pixels
fn window_to_scene(position: PhysicalPosition<f64>, window: PhysicalSize<u32>, scene: Vec2) -> Vec2 {
    if window.width == 0 || window.height == 0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (position.x / window.width as f64) as f32 * scene.x,
        (position.y / window.height as f64) as f32 * scene.y,
    )
}
