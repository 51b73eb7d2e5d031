use std::sync::Arc;

use face::gui::{face_control_panel, login_panel, paint_glyphs, LoginForm};
use face::{
    DisplayList, Face, FaceConfig, FaceRenderer, FaceUniforms, LoginController, SurfaceLayout,
    SurfaceRegistry,
};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

const SURFACE_ID: &str = "face";
const SURFACE_SIZE: [f32; 2] = [300.0, 260.0];
const SURFACE_TOP: f32 = 40.0;
const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.95,
    g: 0.96,
    b: 0.97,
    a: 1.0,
};

struct App {
    config: FaceConfig,
    state: Option<AppState>,
}

struct AppState {
    window: Arc<Window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    renderer: FaceRenderer,
    config: FaceConfig,
    host: SurfaceRegistry,
    controller: LoginController,
    form: LoginForm,
    frame: DisplayList,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

/// Face surface centered horizontally near the top of the window (in points).
fn surface_layout(window: &Window) -> SurfaceLayout {
    let size = window.inner_size().to_logical::<f32>(window.scale_factor());
    SurfaceLayout {
        origin: [(size.width - SURFACE_SIZE[0]) / 2.0, SURFACE_TOP],
        size: SURFACE_SIZE,
    }
}

fn build_controller(host: &SurfaceRegistry, config: &FaceConfig) -> face::FaceResult<LoginController> {
    let face = Face::with_config(host, SURFACE_ID, config)?;
    Ok(LoginController::new(face, config.login.clone()))
}

impl AppState {
    fn relayout(&mut self) {
        let layout = surface_layout(&self.window);
        self.host.register(SURFACE_ID, layout);
        self.controller.layout_changed(&self.host);
    }

    fn load_config(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("json", &["json"])
            .pick_file()
        else {
            return;
        };
        let loaded = FaceConfig::load(&path)
            .and_then(|config| Ok((build_controller(&self.host, &config)?, config)));
        match loaded {
            Ok((controller, config)) => {
                log::info!("loaded {}", path.display());
                self.controller = controller;
                self.config = config;
            }
            Err(e) => log::error!("could not load {}: {e}", path.display()),
        }
    }

    fn save_config(&self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("json", &["json"])
            .set_file_name("face.json")
            .save_file()
        else {
            return;
        };
        if let Err(e) = self.config.save(&path) {
            log::error!("could not save {}: {e}", path.display());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Face")
                        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720)),
                )
                .unwrap(),
        );

        let mut host = SurfaceRegistry::new();
        host.register(SURFACE_ID, surface_layout(&window));
        let controller = match build_controller(&host, &self.config) {
            Ok(controller) => controller,
            Err(e) => {
                log::error!("face initialization failed: {e}");
                event_loop.exit();
                return;
            }
        };
        let config = self.config.clone();

        let state = pollster::block_on(async {
            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                ..Default::default()
            });

            let surface = instance.create_surface(window.clone()).unwrap();

            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                })
                .await
                .unwrap();

            let (device, queue) = adapter
                .request_device(
                    &wgpu::DeviceDescriptor {
                        label: Some("face_device"),
                        ..Default::default()
                    },
                    None,
                )
                .await
                .unwrap();

            let size = window.inner_size();
            let caps = surface.get_capabilities(&adapter);
            let format = caps
                .formats
                .iter()
                .copied()
                .find(|f| !f.is_srgb())
                .unwrap_or(caps.formats[0]);

            let surface_config = wgpu::SurfaceConfiguration {
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                format,
                width: size.width.max(1),
                height: size.height.max(1),
                present_mode: wgpu::PresentMode::AutoVsync,
                alpha_mode: caps.alpha_modes[0],
                view_formats: vec![],
                desired_maximum_frame_latency: 2,
            };
            surface.configure(&device, &surface_config);

            let renderer = FaceRenderer::new(&device, format);

            // egui setup
            let egui_ctx = egui::Context::default();
            let egui_state = egui_winit::State::new(
                egui_ctx.clone(),
                egui_ctx.viewport_id(),
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            );
            let egui_renderer = egui_wgpu::Renderer::new(&device, format, None, 1, false);

            AppState {
                window,
                device,
                queue,
                surface,
                surface_config,
                renderer,
                config,
                host,
                controller,
                form: LoginForm::default(),
                frame: DisplayList::new(),
                egui_ctx,
                egui_state,
                egui_renderer,
            }
        });

        self.state = Some(state);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // The face follows the pointer across the whole window, form included.
        match &event {
            WindowEvent::CursorMoved { position, .. } => {
                let pos = position.to_logical::<f32>(state.window.scale_factor());
                state.controller.pointer_moved(pos.x, pos.y);
            }
            WindowEvent::CursorLeft { .. } => state.controller.pointer_left(),
            _ => {}
        }

        // Pass events to egui first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.surface_config.width = new_size.width.max(1);
                state.surface_config.height = new_size.height.max(1);
                state
                    .surface
                    .configure(&state.device, &state.surface_config);
                state.relayout();
                state.window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                state.relayout();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let output = match state.surface.get_current_texture() {
                    Ok(output) => output,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state
                            .surface
                            .configure(&state.device, &state.surface_config);
                        return;
                    }
                    Err(e) => {
                        log::error!("surface error: {e:?}");
                        return;
                    }
                };

                // Render tick: record the frame, then split it between wgpu and egui
                if let Err(e) = state.controller.render(&mut state.frame) {
                    log::error!("face render failed: {e}");
                }

                let layout = surface_layout(&state.window);
                let surface_origin = egui::pos2(layout.origin[0], layout.origin[1]);
                let mut tuning = state.config.tuning;
                let mut style = state.config.style;
                let mut load = false;
                let mut save = false;

                // --- egui frame ---
                let raw_input = state.egui_state.take_egui_input(&state.window);
                let full_output = state.egui_ctx.run(raw_input, |ctx| {
                    let painter = ctx.layer_painter(egui::LayerId::background());
                    paint_glyphs(&painter, &state.frame, surface_origin);

                    if face_control_panel(ctx, &mut tuning, &mut style) {
                        state.controller.face_mut().set_tuning(tuning);
                        state.controller.face_mut().set_style(style);
                    }
                    egui::TopBottomPanel::bottom("config_bar").show(ctx, |ui| {
                        ui.horizontal(|ui| {
                            load = ui.button("Load config…").clicked();
                            save = ui.button("Save config…").clicked();
                        });
                    });
                    login_panel(
                        ctx,
                        &mut state.form,
                        &mut state.controller,
                        SURFACE_TOP + SURFACE_SIZE[1] + 10.0,
                    );
                });
                state.config.tuning = tuning;
                state.config.style = style;

                state
                    .egui_state
                    .handle_platform_output(&state.window, full_output.platform_output);

                let paint_jobs = state
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                // Update egui textures
                for (id, delta) in &full_output.textures_delta.set {
                    state
                        .egui_renderer
                        .update_texture(&state.device, &state.queue, *id, delta);
                }

                let pixels_per_point = state.window.scale_factor() as f32;
                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [state.surface_config.width, state.surface_config.height],
                    pixels_per_point,
                };

                // Silhouette uniforms, in physical pixels
                let viewport = [
                    state.surface_config.width as f32,
                    state.surface_config.height as f32,
                ];
                let uniforms = match state.frame.outline() {
                    Some((origin, outline, outline_style)) => FaceUniforms::from_outline(
                        [
                            (layout.origin[0] + origin[0]) * pixels_per_point,
                            (layout.origin[1] + origin[1]) * pixels_per_point,
                        ],
                        outline,
                        outline_style,
                        pixels_per_point,
                        viewport,
                    ),
                    None => FaceUniforms::default(),
                };
                state.renderer.prepare(&state.queue, &uniforms);

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                let mut encoder =
                    state
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("face_encoder"),
                        });

                // Update egui buffers
                state.egui_renderer.update_buffers(
                    &state.device,
                    &state.queue,
                    &mut encoder,
                    &paint_jobs,
                    &screen_descriptor,
                );

                // Render face + egui overlay in same pass
                {
                    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("face_render_pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(BACKGROUND),
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        timestamp_writes: None,
                        occlusion_query_set: None,
                    });

                    state.renderer.draw(&mut pass);

                    // Draw egui overlay
                    state.egui_renderer.render(
                        &mut pass.forget_lifetime(),
                        &paint_jobs,
                        &screen_descriptor,
                    );
                }

                // Free egui textures
                for id in &full_output.textures_delta.free {
                    state.egui_renderer.free_texture(id);
                }

                state.queue.submit(std::iter::once(encoder.finish()));
                output.present();

                if load {
                    state.load_config();
                }
                if save {
                    state.save_config();
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => FaceConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("falling back to default config: {e}");
            FaceConfig::default()
        }),
        None => FaceConfig::default(),
    };

    let event_loop = EventLoop::new().unwrap();
    let mut app = App {
        config,
        state: None,
    };
    event_loop.run_app(&mut app).unwrap();
}
