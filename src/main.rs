use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Theme, Window, WindowId},
};

mod config;
mod error;
mod math;
mod renderer;
mod scene;
mod ui;

use config::Cli;
use error::InitError;
use renderer::GpuState;
use scene::AnimationLoop;
use ui::{OverlayInfo, ThemeWatcher, UiState, apply_theme, draw_stats_overlay};

struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    overlay: Option<Overlay>,

    animation: AnimationLoop,
    theme: ThemeWatcher,
    ui_state: UiState,

    initial_size: PhysicalSize<u32>,
    vsync: bool,
    start: Instant,
    init_error: Option<InitError>,
}

impl App {
    fn new(cli: &Cli) -> Self {
        let now = Instant::now();

        Self {
            window: None,
            gpu: None,
            overlay: None,

            animation: AnimationLoop::new(cli.width, cli.height),
            theme: ThemeWatcher::new(cli.theme),
            ui_state: UiState::new(cli.stats, now),

            initial_size: PhysicalSize::new(cli.width, cli.height),
            vsync: cli.vsync(),
            start: now,
            init_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let window_attrs = Window::default_attributes()
            .with_title("wavemesh")
            .with_inner_size(self.initial_size);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = pollster::block_on(GpuState::new(
            window.clone(),
            self.animation.scene(),
            self.vsync,
        ))?;

        let size = window.inner_size();
        self.animation.resize(size.width, size.height);

        if self.ui_state.show_stats {
            let ctx = egui::Context::default();
            let state = egui_winit::State::new(
                ctx.clone(),
                ctx.viewport_id(),
                &window,
                Some(window.scale_factor() as f32),
                None,
                Some(2048),
            );
            let renderer = egui_wgpu::Renderer::new(&gpu.device, gpu.config.format, None, 1, false);
            self.overlay = Some(Overlay {
                ctx,
                state,
                renderer,
            });
        }

        self.window = Some(window.clone());
        self.gpu = Some(gpu);
        self.update_theme(window.theme());

        self.start = Instant::now();
        window.request_redraw();

        tracing::info!(
            width = size.width,
            height = size.height,
            vsync = self.vsync,
            "animation loop started"
        );
        Ok(())
    }

    fn update_theme(&mut self, system: Option<Theme>) {
        let is_dark = self.theme.is_dark(system);
        self.animation.apply_theme(is_dark);
        if let Some(overlay) = &self.overlay {
            apply_theme(&overlay.ctx, is_dark);
        }
        tracing::debug!(?system, is_dark, "theme applied");
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let elapsed = self.start.elapsed().as_secs_f64();

        let (Some(window), Some(gpu)) = (&self.window, &mut self.gpu) else {
            return;
        };

        let surface = &gpu.surface;
        let acquired = self
            .animation
            .tick_for_frame(elapsed, || surface.get_current_texture());

        let output = match acquired {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.resize(gpu.size);
                window.request_redraw();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("out of GPU memory, shutting down");
                event_loop.exit();
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("timed out acquiring surface texture, skipping frame");
                window.request_redraw();
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let background = self.animation.scene().background;
        let (camera, scene) = self.animation.render_parts();
        gpu.prepare(camera, scene);

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Encoder"),
            });

        gpu.render_scene(&view, &mut encoder, background);

        if let Some(overlay) = &mut self.overlay {
            let info = OverlayInfo {
                fps: self.ui_state.fps,
                is_dark: self.animation.is_dark(),
                pointer: self.animation.pointer(),
                spin: self.animation.scene().mesh.transform.rotation.z,
                surface_size: self.animation.surface_size(),
            };

            let raw_input = overlay.state.take_egui_input(window);
            let full_output = overlay.ctx.run(raw_input, |ctx| {
                draw_stats_overlay(ctx, &info);
            });
            overlay
                .state
                .handle_platform_output(window, full_output.platform_output);

            let paint_jobs = overlay
                .ctx
                .tessellate(full_output.shapes, full_output.pixels_per_point);

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [gpu.config.width, gpu.config.height],
                pixels_per_point: full_output.pixels_per_point,
            };

            for (id, delta) in full_output.textures_delta.set {
                overlay
                    .renderer
                    .update_texture(&gpu.device, &gpu.queue, id, &delta);
            }

            overlay.renderer.update_buffers(
                &gpu.device,
                &gpu.queue,
                &mut encoder,
                &paint_jobs,
                &screen_descriptor,
            );

            {
                let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

                let mut render_pass = render_pass.forget_lifetime();
                overlay
                    .renderer
                    .render(&mut render_pass, &paint_jobs, &screen_descriptor);
            }

            for id in full_output.textures_delta.free {
                overlay.renderer.free_texture(&id);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.ui_state.record_frame(Instant::now());
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            tracing::error!("initialization failed: {e}");
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(overlay), Some(window)) = (&mut self.overlay, &self.window) {
            // The overlay is display-only; the mesh sees every event.
            let _ = overlay.state.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(frames = self.animation.frames(), "window closed");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                }
                self.animation.resize(size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.animation.pointer_moved(
                        position.x,
                        position.y,
                        size.width as f64,
                        size.height as f64,
                    );
                }
            }

            WindowEvent::ThemeChanged(theme) => {
                if self.theme.follows_system() {
                    self.update_theme(Some(theme));
                }
            }

            WindowEvent::RedrawRequested => {
                self.render(event_loop);
            }

            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .init();

    tracing::info!(theme = ?cli.theme, stats = cli.stats, "wavemesh starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(&cli);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.init_error.take() {
        return Err(e.into());
    }
    Ok(())
}
