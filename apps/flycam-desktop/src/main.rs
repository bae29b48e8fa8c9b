use anyhow::{Context, Result, anyhow};
use clap::Parser;
use egui::Context as EguiContext;
use flycam_camera::{CameraController, Viewport};
use flycam_common::{FlycamConfig, FrameTimer};
use flycam_input::{InputEvent, Key, KeyAction};
use flycam_render::RenderFrame;
use flycam_render_wgpu::WgpuRenderer;
use flycam_scene::Scene;
use glam::DVec2;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "flycam-desktop", about = "Fly a camera through a field of textured cubes")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base texture image (overrides config)
    #[arg(long)]
    base_texture: Option<PathBuf>,

    /// Overlay texture image, blended by its alpha (overrides config)
    #[arg(long)]
    overlay_texture: Option<PathBuf>,

    /// Window width in pixels (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels (overrides config)
    #[arg(long)]
    height: Option<u32>,
}

impl Cli {
    fn resolve_config(&self) -> Result<FlycamConfig> {
        let mut config = FlycamConfig::load_or_default(self.config.as_deref())
            .context("failed to load config")?;
        if let Some(path) = &self.base_texture {
            config.render.base_texture = Some(path.clone());
        }
        if let Some(path) = &self.overlay_texture {
            config.render.overlay_texture = Some(path.clone());
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

fn key_action(state: ElementState, repeat: bool) -> KeyAction {
    match (state, repeat) {
        (ElementState::Released, _) => KeyAction::Release,
        (ElementState::Pressed, true) => KeyAction::Repeat,
        (ElementState::Pressed, false) => KeyAction::Press,
    }
}

/// Integrates relative mouse motion into an unbounded cursor position, the
/// way a hidden, grabbed cursor behaves.
#[derive(Debug, Default, Clone, Copy)]
struct VirtualCursor {
    position: DVec2,
}

impl VirtualCursor {
    fn move_by(&mut self, dx: f64, dy: f64) -> DVec2 {
        self.position += DVec2::new(dx, dy);
        self.position
    }
}

/// Application state.
struct AppState {
    controller: CameraController,
    scene: Scene,
    timer: FrameTimer,
    viewport: Viewport,
    cursor: VirtualCursor,
    show_hud: bool,
    fps: f32,
}

impl AppState {
    fn new(config: &FlycamConfig) -> Self {
        Self {
            controller: CameraController::new(&config.camera),
            scene: Scene::from_settings(&config.scene),
            timer: FrameTimer::new(Instant::now()),
            viewport: Viewport::new(config.window.width, config.window.height),
            cursor: VirtualCursor::default(),
            show_hud: true,
            fps: 0.0,
        }
    }

    fn handle_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) {
        if code == KeyCode::F1 && state == ElementState::Pressed && !repeat {
            self.show_hud = !self.show_hud;
            return;
        }
        if let Some(key) = map_key(code) {
            self.controller.push(InputEvent::Key {
                key,
                action: key_action(state, repeat),
            });
        }
    }

    fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        let p = self.cursor.move_by(dx, dy);
        self.controller.push(InputEvent::cursor(p.x, p.y));
    }

    /// Advance camera and scene. Returns the frame to draw, or `None` when the
    /// user asked to quit.
    fn update(&mut self) -> Option<RenderFrame> {
        let timing = self.timer.tick(Instant::now());
        if timing.dt > 0.0 {
            self.fps = 0.9 * self.fps + 0.1 / timing.dt;
        }

        let update = self.controller.update(timing);
        if update.close_requested {
            return None;
        }

        let transforms = self.controller.transforms(self.viewport);
        Some(RenderFrame::new(
            transforms.view,
            transforms.projection,
            self.scene.world_matrices(timing.elapsed),
        ))
    }

    fn draw_ui(&self, ctx: &EguiContext) {
        if !self.show_hud {
            return;
        }

        let camera = self.controller.camera();
        egui::Window::new("Camera")
            .default_pos([12.0, 12.0])
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    camera.position.x, camera.position.y, camera.position.z
                ));
                ui.label(format!("Yaw: {:.1}  Pitch: {:.1}", camera.yaw(), camera.pitch()));
                let f = camera.forward();
                ui.label(format!("Forward: ({:.3}, {:.3}, {:.3})", f.x, f.y, f.z));
                ui.label(format!("FPS: {:.0}", self.fps));
                ui.separator();
                ui.small("WASD: Move | Mouse: Look | F1: Toggle HUD | Esc: Quit");
            });
    }
}

/// What to do when the swapchain image cannot be acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceRecovery {
    /// Surface no longer matches the window; configure it again.
    Reconfigure,
    /// Drop this frame and try again on the next redraw.
    SkipFrame,
}

fn surface_recovery(err: &wgpu::SurfaceError) -> SurfaceRecovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
        _ => SurfaceRecovery::SkipFrame,
    }
}

/// Window and GPU resources, created once the event loop is running.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Gpu {
    fn new(event_loop: &ActiveEventLoop, config: &FlycamConfig, egui_ctx: &EguiContext) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height))
            .with_resizable(config.window.resizable);
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        {
            tracing::warn!("cursor grab unavailable: {e}");
        }
        window.set_cursor_visible(false);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow!("no suitable GPU adapter"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("flycam_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow!("surface reports no formats"))?;

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let renderer = WgpuRenderer::new(
            &device,
            &queue,
            surface_format,
            surface_config.width,
            surface_config.height,
            &config.render,
        )
        .context("create renderer")?;

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config: surface_config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    fn draw(&mut self, frame: &RenderFrame, egui_ctx: &EguiContext, state: &AppState) {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                match surface_recovery(&e) {
                    SurfaceRecovery::Reconfigure => {
                        tracing::debug!("surface {e}, reconfiguring");
                        self.surface.configure(&self.device, &self.config);
                    }
                    SurfaceRecovery::SkipFrame => tracing::error!("surface error: {e}"),
                }
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(&self.device, &self.queue, &view, frame);

        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = egui_ctx.run(raw_input, |ctx| state.draw_ui(ctx));
        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        output.present();
    }
}

struct GpuApp {
    config: FlycamConfig,
    state: AppState,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
    /// Fatal startup error, returned from `main` after the loop exits.
    error: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(config: FlycamConfig) -> Self {
        Self {
            state: AppState::new(&config),
            config,
            gpu: None,
            egui_ctx: EguiContext::default(),
            error: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        match Gpu::new(event_loop, &self.config, &self.egui_ctx) {
            Ok(gpu) => {
                self.state.viewport = Viewport::new(gpu.config.width, gpu.config.height);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("startup failed: {e:#}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
        if response.consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                gpu.resize(new_size.width, new_size.height);
                self.state.viewport = Viewport::new(gpu.config.width, gpu.config.height);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                self.state.handle_key(code, state, repeat);
            }
            WindowEvent::RedrawRequested => {
                let Some(frame) = self.state.update() else {
                    tracing::info!("exit requested");
                    event_loop.exit();
                    return;
                };
                gpu.draw(&frame, &self.egui_ctx, &self.state);
                gpu.window.request_redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state.handle_mouse_motion(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = cli.resolve_config()?;
    tracing::info!("flycam-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
