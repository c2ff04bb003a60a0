use std::num::NonZeroU32;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Instant;

use log::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use starburst_rays::canvas::Canvas;
use starburst_rays::renderer::{FIRST_FRAME, render_frame};
use starburst_rays::scaler::{ScaleLut, blit_bilinear_stretch, build_scale_lut, window_to_canvas};
use starburst_rays::{Particle, Scene, SketchConfig, SketchError};

struct App {
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
    scene: Scene,
    particle: Particle,

    // Fixed-size canvas, stretched to the window on present
    canvas: Canvas,
    scale_lut: ScaleLut,
    window_size: (usize, usize),

    // Latest cursor position in canvas space
    pointer: Option<(f64, f64)>,

    frame: u64,
    frame_counter: u32,
    last_fps_print: Instant,
}

impl App {
    fn new(config: &SketchConfig) -> Result<Self, SketchError> {
        let scene = Scene::new(config)?;
        let particle = Particle::new(scene.center, config.ray_step_degrees)?;
        let canvas = Canvas::new(config.canvas_width as usize, config.canvas_height as usize);

        Ok(Self {
            window: None,
            surface: None,
            scene,
            particle,
            canvas,
            scale_lut: ScaleLut::default(),
            window_size: (0, 0),
            pointer: None,
            frame: FIRST_FRAME,
            frame_counter: 0,
            last_fps_print: Instant::now(),
        })
    }

    fn rebuild_scale_lut(&mut self, dst_w: usize, dst_h: usize) {
        self.window_size = (dst_w, dst_h);
        if dst_w == 0 || dst_h == 0 {
            return;
        }
        self.scale_lut = build_scale_lut(dst_w, dst_h, self.canvas.width, self.canvas.height);
        debug!(
            "Scaling {}x{} canvas to {}x{} window",
            self.canvas.width, self.canvas.height, dst_w, dst_h
        );
    }

    fn redraw(&mut self, id: WindowId) -> Result<(), softbuffer::SoftBufferError> {
        let window = match &self.window {
            Some(w) if w.id() == id => w.clone(),
            _ => return Ok(()),
        };

        let size = window.inner_size();
        let (dw, dh) = (size.width as usize, size.height as usize);
        if (dw, dh) != self.window_size {
            self.rebuild_scale_lut(dw, dh);
        }
        let (Some(nw), Some(nh)) = (NonZeroU32::new(dw as u32), NonZeroU32::new(dh as u32))
        else {
            return Ok(()); // Minimized window, skip drawing
        };
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        surface.resize(nw, nh)?;

        if let Some((x, y)) = self.pointer {
            self.particle.update(x, y);
        }
        let stats = render_frame(&mut self.canvas, &self.scene, &self.particle, self.frame);
        self.frame += 1;

        let mut buf = surface.buffer_mut()?;
        blit_bilinear_stretch(
            &mut buf,
            dw,
            &self.canvas.pixels,
            self.canvas.width,
            &self.scale_lut,
        );
        buf.present()?;

        self.frame_counter += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_fps_print).as_secs_f32();
        if elapsed >= 1.0 {
            info!(
                "FPS: {:.1} ({} particle hits, {} background hits)",
                self.frame_counter as f32 / elapsed,
                stats.particle_hits,
                stats.background_hits
            );
            self.frame_counter = 0;
            self.last_fps_print = now;
        }

        window.request_redraw();
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Starburst Rays")
            .with_inner_size(PhysicalSize::new(
                self.canvas.width as u32,
                self.canvas.height as u32,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Rc::new(w),
            Err(err) => {
                error!("Failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };
        let surface = softbuffer::Context::new(window.clone())
            .and_then(|context| softbuffer::Surface::new(&context, window.clone()));
        let surface = match surface {
            Ok(s) => s,
            Err(err) => {
                error!("Failed to create softbuffer surface: {err}");
                event_loop.exit();
                return;
            }
        };

        window.set_cursor_visible(false);

        let size = window.inner_size();
        self.rebuild_scale_lut(size.width as usize, size.height as usize);

        self.surface = Some(surface);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested; stopping");
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (ww, wh) = self.window_size;
                self.pointer = Some(window_to_canvas(
                    position.x,
                    position.y,
                    ww,
                    wh,
                    self.canvas.width,
                    self.canvas.height,
                ));
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw(id) {
                    error!("Failed to present frame: {err}");
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(new_size) => {
                // The canvas and scene stay fixed; only the stretch changes
                self.rebuild_scale_lut(new_size.width as usize, new_size.height as usize);
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run() -> Result<(), SketchError> {
    let config = SketchConfig::load();
    match config.to_toml() {
        Ok(text) => debug!("Effective config:\n{text}"),
        Err(err) => warn!("Failed to serialize config: {err}"),
    }
    let mut app = App::new(&config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut app)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
